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

use nautilus_ta_core::correctness::{FAILED, check_positive_usize};

use crate::{
    bar::{BarSeries, PriceField},
    indicator::{Indicator, IndicatorValue, into_values},
};

/// The ratio of up-moves to down-moves among the last `period` bar-to-bar changes.
///
/// Early bars use the changes available so far. With no declines in the window the
/// value is the advance count, or `None` when there are no advances either.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceDeclineRatio {
    pub period: usize,
    pub price_field: PriceField,
}

impl Display for AdvanceDeclineRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.period)
    }
}

impl AdvanceDeclineRatio {
    /// Creates a new [`AdvanceDeclineRatio`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    #[must_use]
    pub fn new(period: usize, price_field: Option<PriceField>) -> Self {
        Self::new_checked(period, price_field).expect(FAILED)
    }

    /// Creates a new [`AdvanceDeclineRatio`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `period` is zero.
    pub fn new_checked(period: usize, price_field: Option<PriceField>) -> anyhow::Result<Self> {
        check_positive_usize(period, "period")?;

        Ok(Self {
            period,
            price_field: price_field.unwrap_or_default(),
        })
    }

    #[must_use]
    pub fn series_raw(&self, prices: &[f64]) -> Vec<Option<f64>> {
        (0..prices.len()).map(|i| self.value_at(prices, i)).collect()
    }

    #[must_use]
    pub fn current_raw(&self, prices: &[f64]) -> Option<f64> {
        self.value_at(prices, prices.len().checked_sub(1)?)
    }

    fn value_at(&self, prices: &[f64], index: usize) -> Option<f64> {
        if index == 0 {
            return None;
        }
        let first = (index + 1).saturating_sub(self.period).max(1);

        let (mut advances, mut declines) = (0_usize, 0_usize);
        for pair in prices[first - 1..=index].windows(2) {
            let change = pair[1] - pair[0];
            if change > 0.0 {
                advances += 1;
            } else if change < 0.0 {
                declines += 1;
            }
        }

        match (advances, declines) {
            (0, 0) => None,
            (a, 0) => Some(a as f64),
            (a, d) => Some(a as f64 / d as f64),
        }
    }
}

impl Indicator for AdvanceDeclineRatio {
    fn name(&self) -> String {
        stringify!(AdvanceDeclineRatio).to_string()
    }

    fn warmup(&self) -> usize {
        2
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
    use crate::stubs::ad_ratio_3;

    #[rstest]
    fn test_name_and_display(ad_ratio_3: AdvanceDeclineRatio) {
        assert_eq!(ad_ratio_3.name(), "AdvanceDeclineRatio");
        assert_eq!(ad_ratio_3.to_string(), "AdvanceDeclineRatio(3)");
    }

    #[rstest]
    fn test_series_raw(ad_ratio_3: AdvanceDeclineRatio) {
        let result = ad_ratio_3.series_raw(&[10.0, 11.0, 10.0, 12.0, 13.0]);
        // window changes: [+1], [+1,-1], [+1,-1,+2], [-1,+2,+1]
        assert_eq!(result, vec![None, Some(1.0), Some(1.0), Some(2.0), Some(2.0)]);
    }

    #[rstest]
    fn test_window_drops_old_changes(ad_ratio_3: AdvanceDeclineRatio) {
        let result = ad_ratio_3.series_raw(&[10.0, 9.0, 10.0, 11.0, 12.0]);
        assert_eq!(result[3], Some(2.0));
        assert_eq!(result[4], Some(3.0));
    }

    #[rstest]
    fn test_flat_prices_are_none(ad_ratio_3: AdvanceDeclineRatio) {
        assert_eq!(ad_ratio_3.series_raw(&[5.0, 5.0, 5.0]), vec![None, None, None]);
    }

    #[rstest]
    fn test_only_declines_is_zero(ad_ratio_3: AdvanceDeclineRatio) {
        assert_eq!(ad_ratio_3.current_raw(&[5.0, 4.0, 3.0]), Some(0.0));
    }
}
