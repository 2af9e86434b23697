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

/// Balance of power: `(close - open) / (high - low)`, zero on a flat bar.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BalanceOfPower;

impl Display for BalanceOfPower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl BalanceOfPower {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn series_raw(&self, open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Vec<Option<f64>> {
        if !lengths_match(&self.name(), &[open, high, low, close]) {
            return Vec::new();
        }
        (0..close.len())
            .map(|i| Some(Self::value(open[i], high[i], low[i], close[i])))
            .collect()
    }

    #[must_use]
    pub fn current_raw(&self, open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Option<f64> {
        if !lengths_match(&self.name(), &[open, high, low, close]) {
            return None;
        }
        let i = close.len().checked_sub(1)?;
        Some(Self::value(open[i], high[i], low[i], close[i]))
    }

    fn value(open: f64, high: f64, low: f64, close: f64) -> f64 {
        let range = high - low;
        if range == 0.0 {
            return 0.0;
        }
        (close - open) / range
    }
}

impl Indicator for BalanceOfPower {
    fn name(&self) -> String {
        stringify!(BalanceOfPower).to_string()
    }

    fn warmup(&self) -> usize {
        1
    }

    fn series(&self, bars: &BarSeries) -> Vec<Option<IndicatorValue>> {
        into_values(self.series_raw(bars.open(), bars.high(), bars.low(), bars.close()))
    }

    fn current(&self, bars: &BarSeries) -> Option<IndicatorValue> {
        self.current_raw(bars.open(), bars.high(), bars.low(), bars.close())
            .map(Into::into)
    }
}
