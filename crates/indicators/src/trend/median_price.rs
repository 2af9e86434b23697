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

use crate::{
    bar::BarSeries,
    indicator::{Indicator, IndicatorValue, into_values},
    rolling::lengths_match,
};

/// The midpoint of each bar's range, `(high + low) / 2`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MedianPrice;

impl Display for MedianPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl MedianPrice {
    /// Creates a new [`MedianPrice`] instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the median price of every bar; empty if the inputs differ in length.
    #[must_use]
    pub fn series_raw(&self, high: &[f64], low: &[f64]) -> Vec<Option<f64>> {
        if !lengths_match(&self.name(), &[high, low]) {
            return Vec::new();
        }
        high.iter()
            .zip(low)
            .map(|(&h, &l)| Some(f64::midpoint(h, l)))
            .collect()
    }

    /// Returns the median price of the most recent bar.
    #[must_use]
    pub fn current_raw(&self, high: &[f64], low: &[f64]) -> Option<f64> {
        if !lengths_match(&self.name(), &[high, low]) {
            return None;
        }
        Some(f64::midpoint(*high.last()?, *low.last()?))
    }
}

impl Indicator for MedianPrice {
    fn name(&self) -> String {
        stringify!(MedianPrice).to_string()
    }

    fn warmup(&self) -> usize {
        1
    }

    fn series(&self, bars: &BarSeries) -> Vec<Option<IndicatorValue>> {
        into_values(self.series_raw(bars.high(), bars.low()))
    }

    fn current(&self, bars: &BarSeries) -> Option<IndicatorValue> {
        self.current_raw(bars.high(), bars.low()).map(Into::into)
    }
}
