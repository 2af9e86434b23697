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

use nautilus_ta_core::correctness::{FAILED, check_in_range_inclusive_usize};

use crate::{
    bar::BarSeries,
    indicator::{Indicator, IndicatorValue, into_values},
    rolling::{MAX_PERIOD, rolling_sums, trailing_sum},
};

/// The total volume over the trailing `lookback` bars (24 hourly bars by default).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Volume24h {
    pub lookback: usize,
}

impl Display for Volume24h {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.lookback)
    }
}

impl Volume24h {
    /// Creates a new [`Volume24h`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `lookback` is not in the range `1..=MAX_PERIOD`.
    #[must_use]
    pub fn new(lookback: Option<usize>) -> Self {
        Self::new_checked(lookback).expect(FAILED)
    }

    /// Creates a new [`Volume24h`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `lookback` is not in the range `1..=MAX_PERIOD`.
    pub fn new_checked(lookback: Option<usize>) -> anyhow::Result<Self> {
        let lookback = lookback.unwrap_or(24);
        check_in_range_inclusive_usize(lookback, 1, MAX_PERIOD, "lookback")?;
        Ok(Self { lookback })
    }

    #[must_use]
    pub fn series_raw(&self, volume: &[f64]) -> Vec<Option<f64>> {
        rolling_sums(volume, self.lookback)
    }

    #[must_use]
    pub fn current_raw(&self, volume: &[f64]) -> Option<f64> {
        trailing_sum(volume, self.lookback)
    }
}

impl Indicator for Volume24h {
    fn name(&self) -> String {
        stringify!(Volume24h).to_string()
    }

    fn warmup(&self) -> usize {
        self.lookback
    }

    fn series(&self, bars: &BarSeries) -> Vec<Option<IndicatorValue>> {
        into_values(self.series_raw(bars.volume()))
    }

    fn current(&self, bars: &BarSeries) -> Option<IndicatorValue> {
        self.current_raw(bars.volume()).map(Into::into)
    }
}
