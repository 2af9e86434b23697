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

//! A `UnixNanos` type for working with timestamps in nanoseconds since the UNIX epoch.
//!
//! Bar timestamps are carried as `UnixNanos` so that session classification can convert
//! them to a calendar time in any reference time zone.
//!
//! # Parsing and Serialization
//!
//! * Integer values are interpreted as nanoseconds since the UNIX epoch.
//! * String values may be a numeric string (nanoseconds) or an RFC 3339 timestamp.
//!
//! # Limitations
//!
//! * Negative timestamps are invalid and will result in an error.

use std::{fmt::Display, ops::Deref, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Visitor},
};

/// Represents a timestamp in nanoseconds since the UNIX epoch.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct UnixNanos(u64);

impl UnixNanos {
    /// Creates a new [`UnixNanos`] instance.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Converts the underlying value to a datetime (UTC).
    ///
    /// Values above `i64::MAX` (approximately year 2262) are clamped to the latest
    /// representable datetime.
    #[must_use]
    pub fn to_datetime_utc(&self) -> DateTime<Utc> {
        let nanos = i64::try_from(self.0).unwrap_or(i64::MAX);
        DateTime::from_timestamp_nanos(nanos)
    }
}

impl Deref for UnixNanos {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<u64> for UnixNanos {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<UnixNanos> for u64 {
    fn from(value: UnixNanos) -> Self {
        value.0
    }
}

impl From<DateTime<Utc>> for UnixNanos {
    fn from(value: DateTime<Utc>) -> Self {
        let nanos = value
            .timestamp_nanos_opt()
            .expect("DateTime timestamp out of range for UnixNanos");

        assert!(nanos >= 0, "DateTime timestamp cannot be negative: {nanos}");

        Self::from(nanos as u64)
    }
}

impl From<UnixNanos> for DateTime<Utc> {
    fn from(value: UnixNanos) -> Self {
        value.to_datetime_utc()
    }
}

impl FromStr for UnixNanos {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(nanos) = s.parse::<u64>() {
            return Ok(Self(nanos));
        }

        let datetime = DateTime::parse_from_rfc3339(s)
            .map_err(|e| anyhow::anyhow!("invalid UnixNanos string '{s}': {e}"))?;
        let nanos = datetime
            .timestamp_nanos_opt()
            .ok_or_else(|| anyhow::anyhow!("timestamp out of range: '{s}'"))?;
        anyhow::ensure!(nanos >= 0, "timestamp cannot be negative: '{s}'");
        Ok(Self(nanos as u64))
    }
}

impl Display for UnixNanos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for UnixNanos {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UnixNanosVisitor;

        impl Visitor<'_> for UnixNanosVisitor {
            type Value = UnixNanos;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("an integer, a string integer, or an RFC 3339 timestamp")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(UnixNanos(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value < 0 {
                    return Err(E::custom("Unix timestamp cannot be negative"));
                }
                Ok(UnixNanos(value as u64))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(UnixNanosVisitor)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Timelike};
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_new() {
        let nanos = UnixNanos::new(123);
        assert_eq!(*nanos, 123);
        assert_eq!(u64::from(nanos), 123);
    }

    #[rstest]
    fn test_default() {
        assert_eq!(*UnixNanos::default(), 0);
    }

    #[rstest]
    fn test_to_datetime_utc() {
        let nanos = UnixNanos::new(1_704_074_400_000_000_000); // 2024-01-01T02:00:00Z
        let datetime = nanos.to_datetime_utc();
        assert_eq!(datetime.hour(), 2);
    }

    #[rstest]
    fn test_to_datetime_utc_clamps_past_i64_max() {
        let clamped = UnixNanos::new(u64::MAX).to_datetime_utc();
        assert_eq!(clamped, DateTime::from_timestamp_nanos(i64::MAX));
        assert_eq!(clamped, UnixNanos::new(i64::MAX as u64).to_datetime_utc());
    }

    #[rstest]
    fn test_from_datetime_round_trip() {
        let datetime = Utc.with_ymd_and_hms(2024, 3, 15, 15, 30, 0).unwrap();
        let nanos = UnixNanos::from(datetime);
        assert_eq!(DateTime::<Utc>::from(nanos), datetime);
    }

    #[rstest]
    #[case("0", 0)]
    #[case("1704074400000000000", 1_704_074_400_000_000_000)]
    #[case("2024-01-01T02:00:00Z", 1_704_074_400_000_000_000)]
    #[case("2024-01-01T03:00:00+01:00", 1_704_074_400_000_000_000)]
    fn test_from_str(#[case] input: &str, #[case] expected: u64) {
        let nanos: UnixNanos = input.parse().unwrap();
        assert_eq!(*nanos, expected);
    }

    #[rstest]
    #[case("")]
    #[case("not-a-timestamp")]
    #[case("1969-12-31T23:59:59Z")]
    fn test_from_str_invalid(#[case] input: &str) {
        assert!(input.parse::<UnixNanos>().is_err());
    }

    #[rstest]
    fn test_serde_json() {
        let nanos = UnixNanos::new(42);
        let json = serde_json::to_string(&nanos).unwrap();
        assert_eq!(json, "42");

        let from_int: UnixNanos = serde_json::from_str("42").unwrap();
        let from_str: UnixNanos = serde_json::from_str("\"1970-01-01T00:00:00.000000042Z\"").unwrap();
        assert_eq!(from_int, nanos);
        assert_eq!(from_str, nanos);
        assert!(serde_json::from_str::<UnixNanos>("-1").is_err());
    }

    #[rstest]
    fn test_display() {
        assert_eq!(UnixNanos::new(7).to_string(), "7");
    }
}
