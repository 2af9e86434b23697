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
    correctness::{FAILED, check_positive_usize},
    math::mean,
};

use crate::{
    bar::{BarSeries, PriceField},
    indicator::{Indicator, IndicatorValue, into_values},
};

/// The detrended price oscillator: price minus a moving average displaced back by
/// `period / 2` bars.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetrendedPriceOscillator {
    pub period: usize,
    pub price_field: PriceField,
}

impl Display for DetrendedPriceOscillator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.period)
    }
}

impl DetrendedPriceOscillator {
    /// Creates a new [`DetrendedPriceOscillator`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    #[must_use]
    pub fn new(period: Option<usize>, price_field: Option<PriceField>) -> Self {
        Self::new_checked(period, price_field).expect(FAILED)
    }

    /// Creates a new [`DetrendedPriceOscillator`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `period` is zero.
    pub fn new_checked(period: Option<usize>, price_field: Option<PriceField>) -> anyhow::Result<Self> {
        let period = period.unwrap_or(20);
        check_positive_usize(period, "period")?;

        Ok(Self {
            period,
            price_field: price_field.unwrap_or_default(),
        })
    }

    #[must_use]
    pub const fn shift(&self) -> usize {
        self.period / 2
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
        if index.saturating_add(1) < self.period.saturating_mul(2) || index >= prices.len() {
            return None;
        }
        let end = index - self.shift();
        let start = end + 1 - self.period;
        let displaced = mean(&prices[start..=end])?;
        Some(prices[index] - displaced)
    }
}

impl Indicator for DetrendedPriceOscillator {
    fn name(&self) -> String {
        stringify!(DetrendedPriceOscillator).to_string()
    }

    fn warmup(&self) -> usize {
        self.period.saturating_mul(2)
    }

    fn series(&self, bars: &BarSeries) -> Vec<Option<IndicatorValue>> {
        into_values(self.series_raw(bars.field(self.price_field)))
    }

    fn current(&self, bars: &BarSeries) -> Option<IndicatorValue> {
        self.current_raw(bars.field(self.price_field)).map(Into::into)
    }
}
