// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

use std::fmt::Display;

use nautilus_ta_core::math::mean;

use crate::{
    bar::{BarSeries, PriceField},
    indicator::{Indicator, IndicatorValue, into_values},
};

/// The average price over the visible range, from `start_index` to the most recent bar.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleAveragePrice {
    /// The index of the first visible bar.
    pub start_index: usize,
    pub price_field: PriceField,
}

impl Display for VisibleAveragePrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.start_index)
    }
}

impl VisibleAveragePrice {
    /// Creates a new [`VisibleAveragePrice`] instance.
    #[must_use]
    pub fn new(start_index: usize, price_field: Option<PriceField>) -> Self {
        Self {
            start_index,
            price_field: price_field.unwrap_or_default(),
        }
    }

    /// Returns for each bar `i` the mean price over `[start_index, i]`.
    #[must_use]
    pub fn series_raw(&self, prices: &[f64]) -> Vec<Option<f64>> {
        (0..prices.len())
            .map(|i| self.visible_mean(&prices[..=i]))
            .collect()
    }

    /// Returns the mean price over `[start_index, len)`, `None` if `start_index >= len`.
    #[must_use]
    pub fn current_raw(&self, prices: &[f64]) -> Option<f64> {
        self.visible_mean(prices)
    }

    fn visible_mean(&self, prices: &[f64]) -> Option<f64> {
        prices.get(self.start_index..).and_then(mean)
    }
}

impl Indicator for VisibleAveragePrice {
    fn name(&self) -> String {
        stringify!(VisibleAveragePrice).to_string()
    }

    fn warmup(&self) -> usize {
        self.start_index.saturating_add(1)
    }

    fn series(&self, bars: &BarSeries) -> Vec<Option<IndicatorValue>> {
        into_values(self.series_raw(bars.field(self.price_field)))
    }

    fn current(&self, bars: &BarSeries) -> Option<IndicatorValue> {
        self.current_raw(bars.field(self.price_field)).map(Into::into)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::stubs::vap_2;

    #[rstest]
    fn test_name_and_display(vap_2: VisibleAveragePrice) {
        assert_eq!(vap_2.name(), "VisibleAveragePrice");
        assert_eq!(vap_2.to_string(), "VisibleAveragePrice(2)");
        assert_eq!(vap_2.price_field, PriceField::Close);
    }

    #[rstest]
    fn test_current_raw(vap_2: VisibleAveragePrice) {
        assert_eq!(vap_2.current_raw(&[1.0, 2.0, 3.0, 5.0]), Some(4.0));
        assert_eq!(vap_2.current_raw(&[1.0, 2.0, 3.0]), Some(3.0));
    }

    #[rstest]
    #[case(&[1.0, 2.0])]
    #[case(&[])]
    fn test_current_raw_none_when_start_beyond_len(vap_2: VisibleAveragePrice, #[case] prices: &[f64]) {
        assert_eq!(vap_2.current_raw(prices), None);
    }

    #[rstest]
    fn test_series_raw(vap_2: VisibleAveragePrice) {
        let result = vap_2.series_raw(&[1.0, 2.0, 3.0, 5.0, 7.0]);
        assert_eq!(result, vec![None, None, Some(3.0), Some(4.0), Some(5.0)]);
    }

    #[rstest]
    fn test_start_index_zero_is_cumulative_mean() {
        let vap = VisibleAveragePrice::new(0, None);
        let result = vap.series_raw(&[2.0, 4.0, 6.0]);
        assert_eq!(result, vec![Some(2.0), Some(3.0), Some(4.0)]);
        assert_eq!(vap.warmup(), 1);
    }
}
