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

//! Bounded rolling-window accumulators shared by the window based indicators.

use arraydeque::{ArrayDeque, Wrapping};

/// The maximum window length supported by [`RollingSum`].
pub const MAX_PERIOD: usize = 1_024;

/// A fixed-length rolling sum over the most recent `period` values.
///
/// The sum is re-accumulated oldest to newest on every push, so a window sum is
/// bit-identical to [`trailing_sum`] over the same values.
///
/// Used inside a single `series` computation only; indicators never keep one between calls.
#[derive(Debug)]
pub struct RollingSum {
    period: usize,
    inputs: ArrayDeque<f64, MAX_PERIOD, Wrapping>,
}

impl RollingSum {
    /// Creates a new [`RollingSum`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `period` is not in the range `1..=MAX_PERIOD`.
    #[must_use]
    pub fn new(period: usize) -> Self {
        assert!(
            (1..=MAX_PERIOD).contains(&period),
            "RollingSum: period {period} out of range (1..={MAX_PERIOD})"
        );

        Self {
            period,
            inputs: ArrayDeque::new(),
        }
    }

    /// Pushes `value` and returns the window sum once `period` values have been seen.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        if self.inputs.len() == self.period {
            let _ = self.inputs.pop_front();
        }
        let _ = self.inputs.push_back(value);

        if self.is_full() {
            Some(self.inputs.iter().sum())
        } else {
            None
        }
    }

    /// Pushes `value` and returns the window mean once `period` values have been seen.
    pub fn push_mean(&mut self, value: f64) -> Option<f64> {
        self.push(value).map(|sum| sum / self.period as f64)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.inputs.len() == self.period
    }

    #[must_use]
    pub const fn period(&self) -> usize {
        self.period
    }
}

/// Returns the rolling sums of `values` over `period`, aligned with the input.
#[must_use]
pub fn rolling_sums(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut window = RollingSum::new(period);
    values.iter().map(|&v| window.push(v)).collect()
}

/// Returns the rolling means of `values` over `period`, aligned with the input.
#[must_use]
pub fn rolling_means(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut window = RollingSum::new(period);
    values.iter().map(|&v| window.push_mean(v)).collect()
}

/// Returns the sum of the trailing `period` values, or `None` on insufficient data.
#[must_use]
pub fn trailing_sum(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    Some(values[values.len() - period..].iter().sum())
}

/// Returns `true` when every slice in `inputs` has the same length.
///
/// Logs at debug level on a mismatch, naming the indicator.
pub(crate) fn lengths_match(name: &str, inputs: &[&[f64]]) -> bool {
    let Some(first) = inputs.first() else {
        return true;
    };
    let matched = inputs.iter().all(|s| s.len() == first.len());
    if !matched {
        let lens: Vec<usize> = inputs.iter().map(|s| s.len()).collect();
        log::debug!("{name}: input lengths differ {lens:?}, returning empty result");
    }
    matched
}
