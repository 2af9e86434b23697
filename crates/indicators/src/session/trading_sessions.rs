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

use chrono_tz::Tz;
use nautilus_ta_core::{UnixNanos, datetime::hour_of_day};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

use crate::{
    bar::BarSeries,
    indicator::{Indicator, IndicatorValue, into_values},
};

/// The regional trading session a bar falls in.
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
pub enum TradingSession {
    Asia,
    Europe,
    Us,
    AfterHours,
}

impl TradingSession {
    /// Returns the session for an hour of day (0..=23).
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            23 | 0..7 => Self::Asia,
            7..13 => Self::Europe,
            13..20 => Self::Us,
            _ => Self::AfterHours,
        }
    }
}

/// Classifies each bar into a trading session by the hour of its timestamp.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TradingSessions {
    /// The reference time zone the session hours are expressed in.
    pub tz: Tz,
}

impl Default for TradingSessions {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Display for TradingSessions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.tz)
    }
}

impl TradingSessions {
    #[must_use]
    pub fn new(tz: Option<Tz>) -> Self {
        Self {
            tz: tz.unwrap_or(Tz::UTC),
        }
    }

    #[must_use]
    pub fn classify(&self, ts: UnixNanos) -> TradingSession {
        TradingSession::from_hour(hour_of_day(ts, self.tz))
    }

    #[must_use]
    pub fn series_raw(&self, ts_event: &[UnixNanos]) -> Vec<Option<TradingSession>> {
        ts_event.iter().map(|&ts| Some(self.classify(ts))).collect()
    }

    #[must_use]
    pub fn current_raw(&self, ts_event: &[UnixNanos]) -> Option<TradingSession> {
        ts_event.last().map(|&ts| self.classify(ts))
    }
}

impl Indicator for TradingSessions {
    fn name(&self) -> String {
        stringify!(TradingSessions).to_string()
    }

    fn warmup(&self) -> usize {
        1
    }

    fn series(&self, bars: &BarSeries) -> Vec<Option<IndicatorValue>> {
        into_values(self.series_raw(bars.ts_event()))
    }

    fn current(&self, bars: &BarSeries) -> Option<IndicatorValue> {
        self.current_raw(bars.ts_event()).map(Into::into)
    }
}
