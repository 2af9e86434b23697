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

/// Bar volume, either as reported or summed over `period` bars when aggregating.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Volume {
    pub aggregate: bool,
    pub period: usize,
}

impl Display for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({},{})", self.name(), self.aggregate, self.period)
    }
}

impl Volume {
    /// Creates a new [`Volume`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `period` is not in the range `1..=MAX_PERIOD`.
    #[must_use]
    pub fn new(aggregate: Option<bool>, period: Option<usize>) -> Self {
        Self::new_checked(aggregate, period).expect(FAILED)
    }

    /// Creates a new [`Volume`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `period` is not in the range `1..=MAX_PERIOD`.
    pub fn new_checked(aggregate: Option<bool>, period: Option<usize>) -> anyhow::Result<Self> {
        let period = period.unwrap_or(1);
        check_in_range_inclusive_usize(period, 1, MAX_PERIOD, "period")?;

        Ok(Self {
            aggregate: aggregate.unwrap_or(false),
            period,
        })
    }

    #[must_use]
    pub fn series_raw(&self, volume: &[f64]) -> Vec<Option<f64>> {
        if self.aggregate {
            rolling_sums(volume, self.period)
        } else {
            volume.iter().copied().map(Some).collect()
        }
    }

    #[must_use]
    pub fn current_raw(&self, volume: &[f64]) -> Option<f64> {
        if self.aggregate {
            trailing_sum(volume, self.period)
        } else {
            volume.last().copied()
        }
    }
}

impl Indicator for Volume {
    fn name(&self) -> String {
        stringify!(Volume).to_string()
    }

    fn warmup(&self) -> usize {
        if self.aggregate { self.period } else { 1 }
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
    use crate::stubs::volume_passthrough;

    #[rstest]
    fn test_name_and_display(volume_passthrough: Volume) {
        assert_eq!(volume_passthrough.name(), "Volume");
        assert_eq!(volume_passthrough.to_string(), "Volume(false,1)");
    }

    #[rstest]
    fn test_passthrough(volume_passthrough: Volume) {
        assert_eq!(
            volume_passthrough.series_raw(&[5.0, 7.0]),
            vec![Some(5.0), Some(7.0)]
        );
        assert_eq!(volume_passthrough.current_raw(&[5.0, 7.0]), Some(7.0));
        assert_eq!(volume_passthrough.current_raw(&[]), None);
    }

    #[rstest]
    fn test_aggregate() {
        let volume = Volume::new(Some(true), Some(3));
        assert_eq!(volume.warmup(), 3);
        assert_eq!(
            volume.series_raw(&[1.0, 2.0, 3.0, 4.0]),
            vec![None, None, Some(6.0), Some(9.0)]
        );
        assert_eq!(volume.current_raw(&[1.0, 2.0]), None);
    }

    #[rstest]
    fn test_new_checked_invalid_period() {
        assert!(Volume::new_checked(Some(true), Some(0)).is_err());
        assert!(Volume::new_checked(None, Some(MAX_PERIOD + 1)).is_err());
    }
}
