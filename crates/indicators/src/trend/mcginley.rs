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

/// An adaptive moving average that speeds up in falling markets and slows down in rising ones.
///
/// The first output is the first price; each later output follows
/// `avg + (p - avg) / (period * (p / avg)^4)`. A step that overflows resets the
/// average to the current price.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct McGinleyDynamic {
    pub period: usize,
    pub price_field: PriceField,
}

impl Display for McGinleyDynamic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.period)
    }
}

impl McGinleyDynamic {
    /// Creates a new [`McGinleyDynamic`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    #[must_use]
    pub fn new(period: Option<usize>, price_field: Option<PriceField>) -> Self {
        Self::new_checked(period, price_field).expect(FAILED)
    }

    /// Creates a new [`McGinleyDynamic`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `period` is zero.
    pub fn new_checked(period: Option<usize>, price_field: Option<PriceField>) -> anyhow::Result<Self> {
        let period = period.unwrap_or(14);
        check_positive_usize(period, "period")?;

        Ok(Self {
            period,
            price_field: price_field.unwrap_or_default(),
        })
    }

    #[must_use]
    pub fn series_raw(&self, prices: &[f64]) -> Vec<Option<f64>> {
        let Some((&first, rest)) = prices.split_first() else {
            return Vec::new();
        };

        std::iter::once(Some(first))
            .chain(rest.iter().scan(first, |avg, &price| {
                *avg = self.step(*avg, price);
                Some(Some(*avg))
            }))
            .collect()
    }

    #[must_use]
    pub fn current_raw(&self, prices: &[f64]) -> Option<f64> {
        let (&first, rest) = prices.split_first()?;
        Some(rest.iter().fold(first, |avg, &price| self.step(avg, price)))
    }

    fn step(&self, avg: f64, price: f64) -> f64 {
        let ratio = if avg == 0.0 {
            1.0
        } else {
            let ratio = price / avg;
            if ratio == 0.0 || !ratio.is_finite() {
                log::trace!("McGinleyDynamic: degenerate ratio {ratio}, using 1.0");
                1.0
            } else {
                ratio
            }
        };
        let next = avg + (price - avg) / (self.period as f64 * ratio.powi(4));
        if next.is_finite() {
            next
        } else {
            log::trace!("McGinleyDynamic: non-finite average from {avg} and {price}, resetting");
            price
        }
    }
}

impl Indicator for McGinleyDynamic {
    fn name(&self) -> String {
        stringify!(McGinleyDynamic).to_string()
    }

    fn warmup(&self) -> usize {
        1
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
    use nautilus_ta_core::approx_eq;
    use rstest::rstest;

    use super::*;
    use crate::stubs::mcginley_10;

    #[rstest]
    fn test_name_and_display(mcginley_10: McGinleyDynamic) {
        assert_eq!(mcginley_10.name(), "McGinleyDynamic");
        assert_eq!(mcginley_10.to_string(), "McGinleyDynamic(10)");
    }

    #[rstest]
    fn test_default_period() {
        assert_eq!(McGinleyDynamic::new(None, None).period, 14);
    }

    #[rstest]
    fn test_new_checked_zero_period() {
        assert!(McGinleyDynamic::new_checked(Some(0), None).is_err());
    }

    #[rstest]
    fn test_first_output_is_first_price(mcginley_10: McGinleyDynamic) {
        assert_eq!(mcginley_10.series_raw(&[42.0]), vec![Some(42.0)]);
        assert_eq!(mcginley_10.current_raw(&[42.0]), Some(42.0));
        assert!(mcginley_10.series_raw(&[]).is_empty());
        assert_eq!(mcginley_10.current_raw(&[]), None);
    }

    #[rstest]
    fn test_series_raw_recurrence(mcginley_10: McGinleyDynamic) {
        let result = mcginley_10.series_raw(&[100.0, 110.0]);
        // 100 + 10 / (10 * 1.1^4)
        let expected = 100.0 + 10.0 / (10.0 * 1.1_f64.powi(4));
        assert!(approx_eq!(f64, result[1].unwrap(), expected, epsilon = 1e-12));
    }

    #[rstest]
    fn test_constant_prices_stay_constant(mcginley_10: McGinleyDynamic) {
        let result = mcginley_10.series_raw(&[5.0; 6]);
        assert!(result.iter().all(|v| *v == Some(5.0)));
    }

    #[rstest]
    fn test_zero_average_uses_unit_ratio(mcginley_10: McGinleyDynamic) {
        let result = mcginley_10.series_raw(&[0.0, 10.0]);
        assert_eq!(result[1], Some(1.0));
    }

    #[rstest]
    fn test_zero_price_uses_unit_ratio(mcginley_10: McGinleyDynamic) {
        let result = mcginley_10.series_raw(&[10.0, 0.0]);
        assert_eq!(result[1], Some(9.0));
    }

    #[rstest]
    fn test_current_matches_series_last(mcginley_10: McGinleyDynamic) {
        let prices = [10.0, 10.5, 9.8, 11.2, 11.0, 10.1];
        let series = mcginley_10.series_raw(&prices);
        assert_eq!(mcginley_10.current_raw(&prices), *series.last().unwrap());
    }

    #[rstest]
    fn test_sharp_drop_stays_finite() {
        let indicator = McGinleyDynamic::new(Some(5), None);
        let prices = [188.28, 1.0, 1.0, 1.0, 1.0, 1.0];
        let series = indicator.series_raw(&prices);

        assert_eq!(series.len(), prices.len());
        assert!(series.iter().all(|v| v.is_some_and(f64::is_finite)));
        assert_eq!(indicator.current_raw(&prices), *series.last().unwrap());
    }
}
