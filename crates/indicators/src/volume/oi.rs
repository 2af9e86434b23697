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

use super::delta::{difference_at, first_differences};
use crate::{
    bar::BarSeries,
    indicator::{Indicator, IndicatorValue, into_values},
};

/// Open interest per bar, or its bar-to-bar change when `delta` is set.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenInterest {
    /// Surface the change in open interest instead of the level.
    pub delta: bool,
}

impl Display for OpenInterest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.delta)
    }
}

impl OpenInterest {
    #[must_use]
    pub const fn new(delta: bool) -> Self {
        Self { delta }
    }

    #[must_use]
    pub fn series_raw(&self, open_interest: &[f64]) -> Vec<Option<f64>> {
        open_interest.iter().copied().map(Some).collect()
    }

    #[must_use]
    pub fn current_raw(&self, open_interest: &[f64]) -> Option<f64> {
        open_interest.last().copied()
    }

    #[must_use]
    pub fn delta_series_raw(&self, open_interest: &[f64]) -> Vec<Option<f64>> {
        first_differences(open_interest)
    }

    #[must_use]
    pub fn current_delta_raw(&self, open_interest: &[f64]) -> Option<f64> {
        difference_at(open_interest, open_interest.len().checked_sub(1)?)
    }
}

impl Indicator for OpenInterest {
    fn name(&self) -> String {
        stringify!(OpenInterest).to_string()
    }

    fn warmup(&self) -> usize {
        if self.delta { 2 } else { 1 }
    }

    fn series(&self, bars: &BarSeries) -> Vec<Option<IndicatorValue>> {
        let open_interest = bars.open_interest();
        if self.delta {
            into_values(self.delta_series_raw(open_interest))
        } else {
            into_values(self.series_raw(open_interest))
        }
    }

    fn current(&self, bars: &BarSeries) -> Option<IndicatorValue> {
        let open_interest = bars.open_interest();
        let value = if self.delta {
            self.current_delta_raw(open_interest)
        } else {
            self.current_raw(open_interest)
        };
        value.map(Into::into)
    }
}
