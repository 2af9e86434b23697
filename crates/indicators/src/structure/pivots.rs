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
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

use crate::{
    bar::BarSeries,
    indicator::{Indicator, IndicatorValue, into_values},
    rolling::{MAX_PERIOD, lengths_match},
};

/// The classification of a confirmed swing point.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    strum::Display,
    Hash,
    PartialEq,
    Eq,
    AsRefStr,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PivotKind {
    PivotHigh,
    PivotLow,
}

/// Pivot points high/low: swing highs and lows confirmed by `left` bars before and
/// `right` bars after.
///
/// A bar is only classified once `right` later bars exist, so the latest `right` entries of
/// a series are always `None` and grow into values as more bars arrive.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PivotPointsHighLow {
    pub left: usize,
    pub right: usize,
}

impl Display for PivotPointsHighLow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({},{})", self.name(), self.left, self.right)
    }
}

impl PivotPointsHighLow {
    /// Creates a new [`PivotPointsHighLow`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `left` or `right` exceeds `MAX_PERIOD`.
    #[must_use]
    pub fn new(left: usize, right: usize) -> Self {
        Self::new_checked(left, right).expect(FAILED)
    }

    /// Creates a new [`PivotPointsHighLow`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `left` or `right` exceeds `MAX_PERIOD`.
    pub fn new_checked(left: usize, right: usize) -> anyhow::Result<Self> {
        check_in_range_inclusive_usize(left, 0, MAX_PERIOD, "left")?;
        check_in_range_inclusive_usize(right, 0, MAX_PERIOD, "right")?;
        Ok(Self { left, right })
    }

    #[must_use]
    pub fn series_raw(&self, high: &[f64], low: &[f64]) -> Vec<Option<PivotKind>> {
        if !lengths_match(&self.name(), &[high, low]) {
            return Vec::new();
        }
        (0..high.len()).map(|i| self.classify(high, low, i)).collect()
    }

    /// Returns the classification of the most recent confirmable bar, index `len - 1 - right`.
    #[must_use]
    pub fn current_raw(&self, high: &[f64], low: &[f64]) -> Option<PivotKind> {
        if !lengths_match(&self.name(), &[high, low]) {
            return None;
        }
        let index = high.len().checked_sub(self.right.checked_add(1)?)?;
        self.classify(high, low, index)
    }

    fn classify(&self, high: &[f64], low: &[f64], index: usize) -> Option<PivotKind> {
        let start = index.checked_sub(self.left)?;
        let end = index.checked_add(self.right)?;
        if end >= high.len() {
            return None;
        }

        if high[start..=end].iter().all(|&h| high[index] >= h) {
            Some(PivotKind::PivotHigh)
        } else if low[start..=end].iter().all(|&l| low[index] <= l) {
            Some(PivotKind::PivotLow)
        } else {
            None
        }
    }
}

impl Indicator for PivotPointsHighLow {
    fn name(&self) -> String {
        stringify!(PivotPointsHighLow).to_string()
    }

    fn warmup(&self) -> usize {
        self.left.saturating_add(self.right).saturating_add(1)
    }

    fn is_causal(&self) -> bool {
        false
    }

    fn series(&self, bars: &BarSeries) -> Vec<Option<IndicatorValue>> {
        into_values(self.series_raw(bars.high(), bars.low()))
    }

    fn current(&self, bars: &BarSeries) -> Option<IndicatorValue> {
        self.current_raw(bars.high(), bars.low()).map(Into::into)
    }
}
