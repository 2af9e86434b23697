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
    rolling::{MAX_PERIOD, lengths_match, rolling_means, trailing_sum},
};

/// The average high to low range over `period` bars.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AverageDayRange {
    pub period: usize,
}

impl Display for AverageDayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.period)
    }
}

impl AverageDayRange {
    /// Creates a new [`AverageDayRange`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `period` is not in the range `1..=MAX_PERIOD`.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self::new_checked(period).expect(FAILED)
    }

    /// Creates a new [`AverageDayRange`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `period` is not in the range `1..=MAX_PERIOD`.
    pub fn new_checked(period: usize) -> anyhow::Result<Self> {
        check_in_range_inclusive_usize(period, 1, MAX_PERIOD, "period")?;
        Ok(Self { period })
    }

    #[must_use]
    pub fn series_raw(&self, high: &[f64], low: &[f64]) -> Vec<Option<f64>> {
        if !lengths_match(&self.name(), &[high, low]) {
            return Vec::new();
        }
        rolling_means(&ranges(high, low), self.period)
    }

    #[must_use]
    pub fn current_raw(&self, high: &[f64], low: &[f64]) -> Option<f64> {
        if !lengths_match(&self.name(), &[high, low]) {
            return None;
        }
        let start = high.len().checked_sub(self.period)?;
        let tail = ranges(&high[start..], &low[start..]);
        trailing_sum(&tail, self.period).map(|sum| sum / self.period as f64)
    }
}

fn ranges(high: &[f64], low: &[f64]) -> Vec<f64> {
    high.iter().zip(low).map(|(h, l)| h - l).collect()
}

impl Indicator for AverageDayRange {
    fn name(&self) -> String {
        stringify!(AverageDayRange).to_string()
    }

    fn warmup(&self) -> usize {
        self.period
    }

    fn series(&self, bars: &BarSeries) -> Vec<Option<IndicatorValue>> {
        into_values(self.series_raw(bars.high(), bars.low()))
    }

    fn current(&self, bars: &BarSeries) -> Option<IndicatorValue> {
        self.current_raw(bars.high(), bars.low()).map(Into::into)
    }
}
