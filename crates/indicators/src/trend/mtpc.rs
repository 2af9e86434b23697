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

use nautilus_ta_core::correctness::FAILED;

use super::performance::{check_horizons, horizon_returns};
use crate::{
    bar::{BarSeries, PriceField},
    indicator::{Indicator, IndicatorValue, Returns, into_values},
};

pub const DEFAULT_MTPC_HORIZONS: [usize; 3] = [1, 5, 21];

/// Multi-time-period charts: the price return over several horizons at once.
///
/// Unlike [`Performance`](super::performance::Performance), a result is produced as soon as
/// the smallest horizon has enough history, even when every qualifying base price is zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiTimePeriodCharts {
    pub horizons: Vec<usize>,
    pub price_field: PriceField,
    min_horizon: usize,
}

impl Display for MultiTimePeriodCharts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.name(), self.horizons)
    }
}

impl MultiTimePeriodCharts {
    /// Creates a new [`MultiTimePeriodCharts`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `horizons` is empty or contains a zero horizon.
    #[must_use]
    pub fn new(horizons: Option<Vec<usize>>, price_field: Option<PriceField>) -> Self {
        Self::new_checked(horizons, price_field).expect(FAILED)
    }

    /// Creates a new [`MultiTimePeriodCharts`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `horizons` is empty or contains a zero horizon.
    pub fn new_checked(
        horizons: Option<Vec<usize>>,
        price_field: Option<PriceField>,
    ) -> anyhow::Result<Self> {
        let horizons = horizons.unwrap_or_else(|| DEFAULT_MTPC_HORIZONS.to_vec());
        check_horizons(&horizons)?;
        let min_horizon = horizons.iter().copied().min().unwrap_or(1);

        Ok(Self {
            horizons,
            price_field: price_field.unwrap_or_default(),
            min_horizon,
        })
    }

    #[must_use]
    pub fn series_raw(&self, prices: &[f64]) -> Vec<Option<Returns>> {
        (0..prices.len())
            .map(|i| self.current_raw(&prices[..=i]))
            .collect()
    }

    #[must_use]
    pub fn current_raw(&self, prices: &[f64]) -> Option<Returns> {
        let last = prices.len().checked_sub(1)?;
        if last < self.min_horizon {
            return None;
        }
        Some(horizon_returns(prices, last, &self.horizons))
    }
}

impl Indicator for MultiTimePeriodCharts {
    fn name(&self) -> String {
        stringify!(MultiTimePeriodCharts).to_string()
    }

    fn warmup(&self) -> usize {
        self.min_horizon.saturating_add(1)
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
    use crate::stubs::mtpc_1_3;

    #[rstest]
    fn test_name_and_display(mtpc_1_3: MultiTimePeriodCharts) {
        assert_eq!(mtpc_1_3.name(), "MultiTimePeriodCharts");
        assert_eq!(mtpc_1_3.to_string(), "MultiTimePeriodCharts([1, 3])");
        assert_eq!(mtpc_1_3.warmup(), 2);
    }

    #[rstest]
    fn test_default_horizons() {
        let mtpc = MultiTimePeriodCharts::new(None, None);
        assert_eq!(mtpc.horizons, vec![1, 5, 21]);
    }

    #[rstest]
    fn test_new_checked_empty_horizons() {
        assert!(MultiTimePeriodCharts::new_checked(Some(vec![]), None).is_err());
    }

    #[rstest]
    fn test_series_raw(mtpc_1_3: MultiTimePeriodCharts) {
        let result = mtpc_1_3.series_raw(&[1.0, 2.0, 4.0, 8.0]);
        assert_eq!(result[0], None);
        assert_eq!(result[1].as_ref().unwrap().get(&1), Some(&1.0));
        assert_eq!(result[1].as_ref().unwrap().get(&3), None);
        let last = result[3].as_ref().unwrap();
        assert_eq!(last[&1], 1.0);
        assert_eq!(last[&3], 7.0);
    }

    #[rstest]
    fn test_zero_bases_give_empty_mapping(mtpc_1_3: MultiTimePeriodCharts) {
        let returns = mtpc_1_3.current_raw(&[0.0, 0.0, 3.0]).unwrap();
        assert!(returns.is_empty());
    }

    #[rstest]
    fn test_current_raw_insufficient(mtpc_1_3: MultiTimePeriodCharts) {
        assert_eq!(mtpc_1_3.current_raw(&[]), None);
        assert_eq!(mtpc_1_3.current_raw(&[5.0]), None);
    }
}
