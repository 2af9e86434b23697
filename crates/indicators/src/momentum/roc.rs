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

/// The percentage price change over `period` bars.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateOfChange {
    pub period: usize,
    pub price_field: PriceField,
}

impl Display for RateOfChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.period)
    }
}

impl RateOfChange {
    /// Creates a new [`RateOfChange`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    #[must_use]
    pub fn new(period: usize, price_field: Option<PriceField>) -> Self {
        Self::new_checked(period, price_field).expect(FAILED)
    }

    /// Creates a new [`RateOfChange`] instance with correctness checking.
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
        let base = prices[index.checked_sub(self.period)?];
        if base == 0.0 {
            log::trace!("RateOfChange: zero base price at {}", index - self.period);
            return None;
        }
        Some((prices[index] - base) / base * 100.0)
    }
}

impl Indicator for RateOfChange {
    fn name(&self) -> String {
        stringify!(RateOfChange).to_string()
    }

    fn warmup(&self) -> usize {
        self.period.saturating_add(1)
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
    use crate::stubs::roc_2;

    #[rstest]
    fn test_name_and_display(roc_2: RateOfChange) {
        assert_eq!(roc_2.name(), "RateOfChange");
        assert_eq!(roc_2.to_string(), "RateOfChange(2)");
    }

    #[rstest]
    fn test_series_raw(roc_2: RateOfChange) {
        let result = roc_2.series_raw(&[100.0, 50.0, 110.0, 75.0]);
        assert_eq!(result, vec![None, None, Some(10.0), Some(50.0)]);
    }

    #[rstest]
    fn test_zero_base_is_none(roc_2: RateOfChange) {
        assert_eq!(roc_2.current_raw(&[0.0, 1.0, 2.0]), None);
        assert_eq!(roc_2.series_raw(&[0.0, 1.0, 2.0, 3.0])[3], Some(200.0));
    }

    #[rstest]
    fn test_insufficient_history(roc_2: RateOfChange) {
        assert_eq!(roc_2.current_raw(&[1.0, 2.0]), None);
        assert_eq!(roc_2.current_raw(&[]), None);
    }
}
