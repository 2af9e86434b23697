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

use nautilus_ta_core::{
    correctness::{FAILED, check_positive_usize, check_predicate_true},
    math::{log_returns, sample_std},
};

use crate::{
    bar::{BarSeries, PriceField},
    indicator::{Indicator, IndicatorValue, into_values},
};

/// Annualized historical volatility: the sample standard deviation of the last `period`
/// log returns scaled by `sqrt(trading_periods)`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoricalVolatility {
    pub period: usize,
    /// Bars per year used for annualization.
    pub trading_periods: usize,
    pub price_field: PriceField,
}

impl Display for HistoricalVolatility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({},{})", self.name(), self.period, self.trading_periods)
    }
}

impl HistoricalVolatility {
    /// Creates a new [`HistoricalVolatility`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `period < 2` or `trading_periods` is zero.
    #[must_use]
    pub fn new(
        period: usize,
        trading_periods: Option<usize>,
        price_field: Option<PriceField>,
    ) -> Self {
        Self::new_checked(period, trading_periods, price_field).expect(FAILED)
    }

    /// Creates a new [`HistoricalVolatility`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `period < 2` or `trading_periods` is zero.
    pub fn new_checked(
        period: usize,
        trading_periods: Option<usize>,
        price_field: Option<PriceField>,
    ) -> anyhow::Result<Self> {
        check_predicate_true(period >= 2, "`period` must be at least 2")?;
        let trading_periods = trading_periods.unwrap_or(252);
        check_positive_usize(trading_periods, "trading_periods")?;

        Ok(Self {
            period,
            trading_periods,
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
        let start = index.checked_sub(self.period)?;
        let Some(returns) = log_returns(&prices[start..=index]) else {
            log::trace!("HistoricalVolatility: non-positive price in window ending at {index}");
            return None;
        };
        sample_std(&returns).map(|std| std * (self.trading_periods as f64).sqrt())
    }
}

impl Indicator for HistoricalVolatility {
    fn name(&self) -> String {
        stringify!(HistoricalVolatility).to_string()
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
