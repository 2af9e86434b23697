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

use nautilus_ta_core::correctness::{FAILED, check_f64_positive};

use crate::{
    bar::BarSeries,
    indicator::{Indicator, IndicatorValue, into_values},
    rolling::lengths_match,
};

pub const DEFAULT_VOLUME_DIVISOR: f64 = 100_000_000.0;

/// Ease of movement: the bar-to-bar change in midpoint per unit of volume scaled by range.
///
/// A flat bar or a zero volume yields `0.0` rather than an infinite or undefined value.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EaseOfMovement {
    pub volume_divisor: f64,
}

impl Display for EaseOfMovement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.volume_divisor)
    }
}

impl EaseOfMovement {
    /// Creates a new [`EaseOfMovement`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `volume_divisor` is not positive and finite.
    #[must_use]
    pub fn new(volume_divisor: Option<f64>) -> Self {
        Self::new_checked(volume_divisor).expect(FAILED)
    }

    /// Creates a new [`EaseOfMovement`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `volume_divisor` is not positive and finite.
    pub fn new_checked(volume_divisor: Option<f64>) -> anyhow::Result<Self> {
        let volume_divisor = volume_divisor.unwrap_or(DEFAULT_VOLUME_DIVISOR);
        check_f64_positive(volume_divisor, "volume_divisor")?;
        Ok(Self { volume_divisor })
    }

    #[must_use]
    pub fn series_raw(&self, high: &[f64], low: &[f64], volume: &[f64]) -> Vec<Option<f64>> {
        if !lengths_match(&self.name(), &[high, low, volume]) {
            return Vec::new();
        }
        (0..high.len())
            .map(|i| self.value_at(high, low, volume, i))
            .collect()
    }

    #[must_use]
    pub fn current_raw(&self, high: &[f64], low: &[f64], volume: &[f64]) -> Option<f64> {
        if !lengths_match(&self.name(), &[high, low, volume]) {
            return None;
        }
        self.value_at(high, low, volume, high.len().checked_sub(1)?)
    }

    fn value_at(&self, high: &[f64], low: &[f64], volume: &[f64], index: usize) -> Option<f64> {
        let prev = index.checked_sub(1)?;
        let distance = f64::midpoint(high[index], low[index]) - f64::midpoint(high[prev], low[prev]);

        let range = high[index] - low[index];
        let box_ratio = if range == 0.0 {
            f64::NAN
        } else {
            (volume[index] / self.volume_divisor) / range
        };

        let emv = distance / box_ratio;
        if emv.is_finite() {
            Some(emv)
        } else {
            log::trace!("EaseOfMovement: non-finite value at {index}, using 0.0");
            Some(0.0)
        }
    }
}

impl Indicator for EaseOfMovement {
    fn name(&self) -> String {
        stringify!(EaseOfMovement).to_string()
    }

    fn warmup(&self) -> usize {
        2
    }

    fn series(&self, bars: &BarSeries) -> Vec<Option<IndicatorValue>> {
        into_values(self.series_raw(bars.high(), bars.low(), bars.volume()))
    }

    fn current(&self, bars: &BarSeries) -> Option<IndicatorValue> {
        self.current_raw(bars.high(), bars.low(), bars.volume())
            .map(Into::into)
    }
}
