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

//! Bar data structures consumed by the indicators.

use std::fmt::Display;

use nautilus_ta_core::{
    UnixNanos,
    correctness::{FAILED, check_equal_usize},
};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// A single OHLCV (plus open interest) observation.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// The open price.
    pub open: f64,
    /// The high price.
    pub high: f64,
    /// The low price.
    pub low: f64,
    /// The close price.
    pub close: f64,
    /// The traded volume.
    pub volume: f64,
    /// The open interest at the close of the bar.
    #[serde(default)]
    pub open_interest: f64,
    /// UNIX timestamp (nanoseconds) when the bar closed.
    pub ts_event: UnixNanos,
}

impl Bar {
    /// Creates a new [`Bar`] instance.
    #[must_use]
    pub const fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        open_interest: f64,
        ts_event: UnixNanos,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            open_interest,
            ts_event,
        }
    }
}

impl Display for Bar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{}",
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
            self.open_interest,
            self.ts_event
        )
    }
}

/// The numeric column of a [`BarSeries`] an indicator reads.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    strum::Display,
    Hash,
    PartialEq,
    Eq,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceField {
    Open,
    High,
    Low,
    #[default]
    Close,
    Volume,
    OpenInterest,
}

/// A column-oriented series of bars, oldest first.
///
/// All columns always have the same length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarSeries {
    open: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
    volume: Vec<f64>,
    open_interest: Vec<f64>,
    ts_event: Vec<UnixNanos>,
}

impl BarSeries {
    /// Creates a new [`BarSeries`] instance.
    ///
    /// # Panics
    ///
    /// Panics if the columns are not all the same length.
    #[must_use]
    pub fn new(
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        volume: Vec<f64>,
        open_interest: Vec<f64>,
        ts_event: Vec<UnixNanos>,
    ) -> Self {
        Self::new_checked(open, high, low, close, volume, open_interest, ts_event).expect(FAILED)
    }

    /// Creates a new [`BarSeries`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if the columns are not all the same length.
    pub fn new_checked(
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        volume: Vec<f64>,
        open_interest: Vec<f64>,
        ts_event: Vec<UnixNanos>,
    ) -> anyhow::Result<Self> {
        let len = close.len();
        check_equal_usize(open.len(), len, "open", "close")?;
        check_equal_usize(high.len(), len, "high", "close")?;
        check_equal_usize(low.len(), len, "low", "close")?;
        check_equal_usize(volume.len(), len, "volume", "close")?;
        check_equal_usize(open_interest.len(), len, "open_interest", "close")?;
        check_equal_usize(ts_event.len(), len, "ts_event", "close")?;

        Ok(Self {
            open,
            high,
            low,
            close,
            volume,
            open_interest,
            ts_event,
        })
    }

    /// Creates a new [`BarSeries`] from row-oriented bars.
    #[must_use]
    pub fn from_bars(bars: &[Bar]) -> Self {
        let mut series = Self::with_capacity(bars.len());
        for bar in bars {
            series.push(*bar);
        }
        series
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            open: Vec::with_capacity(capacity),
            high: Vec::with_capacity(capacity),
            low: Vec::with_capacity(capacity),
            close: Vec::with_capacity(capacity),
            volume: Vec::with_capacity(capacity),
            open_interest: Vec::with_capacity(capacity),
            ts_event: Vec::with_capacity(capacity),
        }
    }

    /// Appends `bar` as the newest bar of the series.
    pub fn push(&mut self, bar: Bar) {
        self.open.push(bar.open);
        self.high.push(bar.high);
        self.low.push(bar.low);
        self.close.push(bar.close);
        self.volume.push(bar.volume);
        self.open_interest.push(bar.open_interest);
        self.ts_event.push(bar.ts_event);
    }

    /// Returns the number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Returns `true` if the series holds no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Returns the bar at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Bar> {
        Some(Bar {
            open: *self.open.get(index)?,
            high: self.high[index],
            low: self.low[index],
            close: self.close[index],
            volume: self.volume[index],
            open_interest: self.open_interest[index],
            ts_event: self.ts_event[index],
        })
    }

    /// Returns the numeric column for `field`.
    #[must_use]
    pub fn field(&self, field: PriceField) -> &[f64] {
        match field {
            PriceField::Open => &self.open,
            PriceField::High => &self.high,
            PriceField::Low => &self.low,
            PriceField::Close => &self.close,
            PriceField::Volume => &self.volume,
            PriceField::OpenInterest => &self.open_interest,
        }
    }

    #[must_use]
    pub fn open(&self) -> &[f64] {
        &self.open
    }

    #[must_use]
    pub fn high(&self) -> &[f64] {
        &self.high
    }

    #[must_use]
    pub fn low(&self) -> &[f64] {
        &self.low
    }

    #[must_use]
    pub fn close(&self) -> &[f64] {
        &self.close
    }

    #[must_use]
    pub fn volume(&self) -> &[f64] {
        &self.volume
    }

    #[must_use]
    pub fn open_interest(&self) -> &[f64] {
        &self.open_interest
    }

    #[must_use]
    pub fn ts_event(&self) -> &[UnixNanos] {
        &self.ts_event
    }
}

impl From<&[Bar]> for BarSeries {
    fn from(bars: &[Bar]) -> Self {
        Self::from_bars(bars)
    }
}

impl FromIterator<Bar> for BarSeries {
    fn from_iter<T: IntoIterator<Item = Bar>>(iter: T) -> Self {
        let mut series = Self::default();
        for bar in iter {
            series.push(bar);
        }
        series
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::stubs::{bar_series, stub_bar};

    #[rstest]
    fn test_from_bars_preserves_columns(bar_series: BarSeries) {
        assert_eq!(bar_series.len(), 6);
        assert!(!bar_series.is_empty());
        assert_eq!(bar_series.close()[0], 100.0);
        assert_eq!(bar_series.high()[5], 106.0);
        assert_eq!(bar_series.ts_event().len(), 6);
    }

    #[rstest]
    fn test_get(bar_series: BarSeries) {
        let bar = bar_series.get(0).unwrap();
        assert_eq!(bar.close, 100.0);
        assert!(bar_series.get(6).is_none());
    }

    #[rstest]
    fn test_field_selects_column(bar_series: BarSeries) {
        assert_eq!(bar_series.field(PriceField::Close), bar_series.close());
        assert_eq!(bar_series.field(PriceField::Volume), bar_series.volume());
        assert_eq!(
            bar_series.field(PriceField::OpenInterest),
            bar_series.open_interest()
        );
    }

    #[rstest]
    fn test_new_checked_rejects_mismatched_columns() {
        let result = BarSeries::new_checked(
            vec![1.0, 2.0],
            vec![1.0, 2.0],
            vec![1.0],
            vec![1.0, 2.0],
            vec![1.0, 2.0],
            vec![0.0, 0.0],
            vec![UnixNanos::default(); 2],
        );
        assert!(result.is_err());
    }

    #[rstest]
    #[should_panic(expected = "Condition failed")]
    fn test_new_panics_on_mismatched_columns() {
        let _ = BarSeries::new(
            vec![1.0],
            vec![1.0],
            vec![1.0],
            vec![1.0],
            vec![1.0],
            vec![0.0],
            vec![],
        );
    }

    #[rstest]
    fn test_from_iterator(stub_bar: Bar) {
        let series: BarSeries = std::iter::repeat_n(stub_bar, 3).collect();
        assert_eq!(series.len(), 3);
        assert_eq!(series.get(2), Some(stub_bar));
    }

    #[rstest]
    fn test_bar_serde_round_trip(stub_bar: Bar) {
        let json = serde_json::to_string(&stub_bar).unwrap();
        let parsed: Bar = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, stub_bar);
    }

    #[rstest]
    fn test_bar_open_interest_defaults_to_zero() {
        let json = r#"{"open":1.0,"high":2.0,"low":0.5,"close":1.5,"volume":10.0,"ts_event":0}"#;
        let bar: Bar = serde_json::from_str(json).unwrap();
        assert_eq!(bar.open_interest, 0.0);
    }

    #[rstest]
    fn test_price_field_parsing() {
        assert_eq!(PriceField::from_str("close").unwrap(), PriceField::Close);
        assert_eq!(
            PriceField::from_str("open_interest").unwrap(),
            PriceField::OpenInterest
        );
        assert_eq!(PriceField::Volume.to_string(), "VOLUME");
        assert_eq!(PriceField::iter().count(), 6);
        assert_eq!(PriceField::default(), PriceField::Close);
    }
}
