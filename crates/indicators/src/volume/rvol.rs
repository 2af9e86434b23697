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

use nautilus_ta_core::correctness::{FAILED, check_positive_usize};

use crate::{
    bar::BarSeries,
    indicator::{Indicator, IndicatorValue, into_values},
};

/// Relative volume at time: bar volume divided by the mean volume of earlier bars in the
/// same slot of a repeating session of `session_length` bars.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelativeVolumeAtTime {
    pub session_length: usize,
}

impl Display for RelativeVolumeAtTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.session_length)
    }
}

impl RelativeVolumeAtTime {
    /// Creates a new [`RelativeVolumeAtTime`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `session_length` is zero.
    #[must_use]
    pub fn new(session_length: usize) -> Self {
        Self::new_checked(session_length).expect(FAILED)
    }

    /// Creates a new [`RelativeVolumeAtTime`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `session_length` is zero.
    pub fn new_checked(session_length: usize) -> anyhow::Result<Self> {
        check_positive_usize(session_length, "session_length")?;
        Ok(Self { session_length })
    }

    #[must_use]
    pub fn series_raw(&self, volume: &[f64]) -> Vec<Option<f64>> {
        let mut slot_sums = vec![0.0; self.session_length];
        let mut slot_counts = vec![0_usize; self.session_length];

        volume
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let slot = i % self.session_length;
                let value = relative(v, slot_sums[slot], slot_counts[slot]);
                slot_sums[slot] += v;
                slot_counts[slot] += 1;
                value
            })
            .collect()
    }

    #[must_use]
    pub fn current_raw(&self, volume: &[f64]) -> Option<f64> {
        let (&last, history) = volume.split_last()?;
        let slot = history.len() % self.session_length;
        let prior = history.get(slot..).unwrap_or_default();

        let (sum, count) = prior
            .iter()
            .step_by(self.session_length)
            .fold((0.0, 0_usize), |(sum, count), &v| (sum + v, count + 1));
        relative(last, sum, count)
    }
}

fn relative(volume: f64, prior_sum: f64, prior_count: usize) -> Option<f64> {
    if prior_count == 0 {
        return None;
    }
    let mean = prior_sum / prior_count as f64;
    if mean == 0.0 {
        return None;
    }
    Some(volume / mean)
}

impl Indicator for RelativeVolumeAtTime {
    fn name(&self) -> String {
        stringify!(RelativeVolumeAtTime).to_string()
    }

    fn warmup(&self) -> usize {
        self.session_length.saturating_add(1)
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
    use crate::stubs::rvol_2;

    #[rstest]
    fn test_name_and_display(rvol_2: RelativeVolumeAtTime) {
        assert_eq!(rvol_2.name(), "RelativeVolumeAtTime");
        assert_eq!(rvol_2.to_string(), "RelativeVolumeAtTime(2)");
    }

    #[rstest]
    fn test_new_checked_zero_session_length() {
        assert!(RelativeVolumeAtTime::new_checked(0).is_err());
    }

    #[rstest]
    fn test_series_raw(rvol_2: RelativeVolumeAtTime) {
        // slot 0: 10, 30, 20 ; slot 1: 100, 50
        let result = rvol_2.series_raw(&[10.0, 100.0, 30.0, 50.0, 20.0]);
        assert_eq!(result, vec![None, None, Some(3.0), Some(0.5), Some(1.0)]);
    }

    #[rstest]
    fn test_zero_slot_mean_is_none(rvol_2: RelativeVolumeAtTime) {
        assert_eq!(rvol_2.current_raw(&[0.0, 5.0, 7.0]), None);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn test_current_matches_series_last(rvol_2: RelativeVolumeAtTime, #[case] len: usize) {
        let volume: Vec<f64> = (1..=len).map(|i| (i * 7 % 5 + 1) as f64).collect();
        let series = rvol_2.series_raw(&volume);
        assert_eq!(rvol_2.current_raw(&volume), series.last().copied().flatten());
    }
}
