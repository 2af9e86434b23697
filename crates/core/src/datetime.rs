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

//! Common data and time functions.

use chrono::Timelike;
use chrono_tz::Tz;

use crate::UnixNanos;

/// Number of nanoseconds in one second.
pub const NANOSECONDS_IN_SECOND: u64 = 1_000_000_000;

/// Number of seconds in one hour.
pub const SECONDS_IN_HOUR: u64 = 3_600;

/// Returns the hour of day (0..=23) of `unix_nanos` observed in the time zone `tz`.
///
/// Timestamps past `i64::MAX` nanoseconds are clamped to that instant.
#[inline]
#[must_use]
pub fn hour_of_day(unix_nanos: UnixNanos, tz: Tz) -> u32 {
    unix_nanos.to_datetime_utc().with_timezone(&tz).hour()
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    // 2024-01-01T00:00:00Z
    const MIDNIGHT_NS: u64 = 1_704_067_200_000_000_000;

    #[rstest]
    #[case(0, Tz::UTC, 0)]
    #[case(2, Tz::UTC, 2)]
    #[case(15, Tz::UTC, 15)]
    #[case(23, Tz::UTC, 23)]
    #[case(2, Tz::Asia__Tokyo, 11)]
    #[case(15, Tz::America__New_York, 10)]
    fn test_hour_of_day(#[case] utc_hour: u64, #[case] tz: Tz, #[case] expected: u32) {
        let ts = UnixNanos::new(MIDNIGHT_NS + utc_hour * SECONDS_IN_HOUR * NANOSECONDS_IN_SECOND);
        assert_eq!(hour_of_day(ts, tz), expected);
    }

    #[rstest]
    fn test_hour_of_day_past_i64_max() {
        // i64::MAX ns is 2262-04-11T23:47:16Z
        assert_eq!(hour_of_day(UnixNanos::new(u64::MAX), Tz::UTC), 23);
        assert_eq!(hour_of_day(UnixNanos::new(u64::MAX), Tz::Asia__Tokyo), 8);
    }
}
