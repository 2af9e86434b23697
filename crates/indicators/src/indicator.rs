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

//! A common `Indicator` trait and the value set indicators produce.

use std::fmt::{Debug, Display};

use enum_dispatch::enum_dispatch;
use indexmap::IndexMap;
use serde::Serialize;

use crate::{bar::BarSeries, session::TradingSession, structure::PivotKind};

/// A horizon (in bars) to return fraction mapping.
pub type Returns = IndexMap<usize, f64>;

/// A single indicator output.
///
/// Serializes as a bare number, an object of horizon to return, or a label string.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IndicatorValue {
    Scalar(f64),
    Returns(Returns),
    Pivot(PivotKind),
    Session(TradingSession),
}

impl IndicatorValue {
    /// Returns the scalar value, if this is a scalar.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the horizon mapping, if this is a returns mapping.
    #[must_use]
    pub fn as_returns(&self) -> Option<&Returns> {
        match self {
            Self::Returns(returns) => Some(returns),
            _ => None,
        }
    }

    /// Returns the label of a categorical value, e.g. `"pivot_high"` or `"us"`.
    ///
    /// Returns `None` for scalar and returns values.
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Pivot(kind) => Some(kind.into()),
            Self::Session(session) => Some(session.into()),
            _ => None,
        }
    }
}

impl Display for IndicatorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(value) => write!(f, "{value}"),
            Self::Returns(returns) => {
                let parts: Vec<String> = returns.iter().map(|(h, r)| format!("{h}:{r}")).collect();
                write!(f, "{{{}}}", parts.join(","))
            }
            Self::Pivot(kind) => write!(f, "{kind}"),
            Self::Session(session) => write!(f, "{session}"),
        }
    }
}

impl From<f64> for IndicatorValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Returns> for IndicatorValue {
    fn from(value: Returns) -> Self {
        Self::Returns(value)
    }
}

impl From<PivotKind> for IndicatorValue {
    fn from(value: PivotKind) -> Self {
        Self::Pivot(value)
    }
}

impl From<TradingSession> for IndicatorValue {
    fn from(value: TradingSession) -> Self {
        Self::Session(value)
    }
}

/// Converts a typed series into the polymorphic value set.
pub(crate) fn into_values<T: Into<IndicatorValue>>(series: Vec<Option<T>>) -> Vec<Option<IndicatorValue>> {
    series.into_iter().map(|v| v.map(Into::into)).collect()
}

/// The calling convention shared by every indicator.
///
/// Every call recomputes from the full series supplied; indicators hold only their
/// configuration and no state between calls.
#[enum_dispatch]
pub trait Indicator {
    /// The indicator type name, e.g. `"Momentum"`.
    fn name(&self) -> String;

    /// The number of bars required before the first non-null value.
    fn warmup(&self) -> usize;

    /// Whether `series[i]` depends only on bars `0..=i`.
    fn is_causal(&self) -> bool {
        true
    }

    /// Computes a value for every bar, aligned 1:1 with `bars`.
    fn series(&self, bars: &BarSeries) -> Vec<Option<IndicatorValue>>;

    /// Computes the value for the most recent bar only.
    fn current(&self, bars: &BarSeries) -> Option<IndicatorValue>;
}

impl Debug for dyn Indicator + Send {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Indicator {{ {} }}", self.name())
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
    fn test_scalar_accessors() {
        let value = IndicatorValue::from(1.5);
        assert_eq!(value.as_f64(), Some(1.5));
        assert!(value.as_returns().is_none());
        assert!(value.label().is_none());
        assert_eq!(value.to_string(), "1.5");
    }

    #[rstest]
    fn test_labels() {
        assert_eq!(IndicatorValue::from(PivotKind::PivotHigh).label(), Some("pivot_high"));
        assert_eq!(IndicatorValue::from(TradingSession::AfterHours).label(), Some("after_hours"));
        assert_eq!(IndicatorValue::from(TradingSession::Us).to_string(), "us");
    }

    #[rstest]
    fn test_returns_display() {
        let returns: Returns = [(1, 0.5), (5, -0.25)].into_iter().collect();
        let value = IndicatorValue::from(returns);
        assert_eq!(value.to_string(), "{1:0.5,5:-0.25}");
        assert_eq!(value.as_returns().map(IndexMap::len), Some(2));
    }

    #[rstest]
    fn test_json_serialization() {
        let series = vec![
            None,
            Some(IndicatorValue::from(2.0)),
            Some(IndicatorValue::from(PivotKind::PivotLow)),
            Some(IndicatorValue::from(TradingSession::Europe)),
            Some(IndicatorValue::from([(3, 0.1)].into_iter().collect::<Returns>())),
        ];
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, r#"[null,2.0,"pivot_low","europe",{"3":0.1}]"#);
    }

    #[rstest]
    fn test_into_values() {
        let values = into_values(vec![None, Some(1.0)]);
        assert_eq!(values, vec![None, Some(IndicatorValue::Scalar(1.0))]);
    }
}
