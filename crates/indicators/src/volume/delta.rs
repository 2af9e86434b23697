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
};

/// Returns the bar-to-bar differences of `values`, `None` for the first bar.
pub(crate) fn first_differences(values: &[f64]) -> Vec<Option<f64>> {
    (0..values.len()).map(|i| difference_at(values, i)).collect()
}

pub(crate) fn difference_at(values: &[f64], index: usize) -> Option<f64> {
    let prev = values.get(index.checked_sub(1)?)?;
    values.get(index).map(|v| v - prev)
}

/// The change in volume from the previous bar.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VolumeDelta;

impl Display for VolumeDelta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl VolumeDelta {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn series_raw(&self, volume: &[f64]) -> Vec<Option<f64>> {
        first_differences(volume)
    }

    #[must_use]
    pub fn current_raw(&self, volume: &[f64]) -> Option<f64> {
        difference_at(volume, volume.len().checked_sub(1)?)
    }
}

impl Indicator for VolumeDelta {
    fn name(&self) -> String {
        stringify!(VolumeDelta).to_string()
    }

    fn warmup(&self) -> usize {
        2
    }

    fn series(&self, bars: &BarSeries) -> Vec<Option<IndicatorValue>> {
        into_values(self.series_raw(bars.volume()))
    }

    fn current(&self, bars: &BarSeries) -> Option<IndicatorValue> {
        self.current_raw(bars.volume()).map(Into::into)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_series_raw() {
        let delta = VolumeDelta::new();
        assert_eq!(
            delta.series_raw(&[100.0, 150.0, 120.0]),
            vec![None, Some(50.0), Some(-30.0)]
        );
    }

    #[rstest]
    #[case(&[], None)]
    #[case(&[100.0], None)]
    #[case(&[100.0, 150.0, 120.0], Some(-30.0))]
    fn test_current_raw(#[case] volume: &[f64], #[case] expected: Option<f64>) {
        assert_eq!(VolumeDelta::new().current_raw(volume), expected);
    }
}
