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

//! Type stubs to facilitate testing.

use nautilus_ta_core::{
    UnixNanos,
    datetime::{NANOSECONDS_IN_SECOND, SECONDS_IN_HOUR},
};
use rstest::*;

use crate::{
    bar::{Bar, BarSeries},
    momentum::{
        ad_ratio::AdvanceDeclineRatio, bop::BalanceOfPower, mom::Momentum, roc::RateOfChange,
    },
    statistics::correlation::CorrelationCoefficient,
    structure::pivots::PivotPointsHighLow,
    trend::{
        dpo::DetrendedPriceOscillator, mcginley::McGinleyDynamic, mtpc::MultiTimePeriodCharts,
        performance::Performance, vap::VisibleAveragePrice,
    },
    volatility::{adr::AverageDayRange, eom::EaseOfMovement, hv::HistoricalVolatility},
    volume::{rvol::RelativeVolumeAtTime, vol::Volume},
};

// 2024-01-01T00:00:00Z
const TS_START_SECS: u64 = 1_704_067_200;

////////////////////////////////////////////////////////////////////////////////
// Common
////////////////////////////////////////////////////////////////////////////////
#[fixture]
pub fn stub_bar() -> Bar {
    Bar::new(
        1.0,
        2.0,
        0.5,
        1.5,
        10.0,
        250.0,
        UnixNanos::new(TS_START_SECS * NANOSECONDS_IN_SECOND),
    )
}

/// Six hourly bars trending up by 1.0 per bar from a 100.0 close.
#[fixture]
pub fn bar_series() -> BarSeries {
    let volume = [1_000.0, 1_500.0, 1_200.0, 1_800.0, 900.0, 1_300.0];
    let open_interest = [5_000.0, 5_100.0, 5_050.0, 5_200.0, 5_150.0, 5_300.0];

    (0..6_u32)
        .map(|i| {
            let step = f64::from(i);
            let ts = (TS_START_SECS + u64::from(i) * SECONDS_IN_HOUR) * NANOSECONDS_IN_SECOND;
            Bar::new(
                99.5 + step,
                101.0 + step,
                99.0 + step,
                100.0 + step,
                volume[i as usize],
                open_interest[i as usize],
                UnixNanos::new(ts),
            )
        })
        .collect()
}

////////////////////////////////////////////////////////////////////////////////
// Trend
////////////////////////////////////////////////////////////////////////////////
#[fixture]
pub fn vap_2() -> VisibleAveragePrice {
    VisibleAveragePrice::new(2, None)
}

#[fixture]
pub fn performance_1_2() -> Performance {
    Performance::new(Some(vec![1, 2]), None)
}

#[fixture]
pub fn mtpc_1_3() -> MultiTimePeriodCharts {
    MultiTimePeriodCharts::new(Some(vec![1, 3]), None)
}

#[fixture]
pub fn mcginley_10() -> McGinleyDynamic {
    McGinleyDynamic::new(Some(10), None)
}

#[fixture]
pub fn dpo_4() -> DetrendedPriceOscillator {
    DetrendedPriceOscillator::new(Some(4), None)
}

////////////////////////////////////////////////////////////////////////////////
// Momentum
////////////////////////////////////////////////////////////////////////////////
#[fixture]
pub fn mom_1() -> Momentum {
    Momentum::new(1, None)
}

#[fixture]
pub fn roc_2() -> RateOfChange {
    RateOfChange::new(2, None)
}

#[fixture]
pub fn bop() -> BalanceOfPower {
    BalanceOfPower::new()
}

#[fixture]
pub fn ad_ratio_3() -> AdvanceDeclineRatio {
    AdvanceDeclineRatio::new(3, None)
}

////////////////////////////////////////////////////////////////////////////////
// Volatility
////////////////////////////////////////////////////////////////////////////////
#[fixture]
pub fn adr_3() -> AverageDayRange {
    AverageDayRange::new(3)
}

#[fixture]
pub fn hv_2() -> HistoricalVolatility {
    HistoricalVolatility::new(2, None, None)
}

#[fixture]
pub fn eom_unit() -> EaseOfMovement {
    EaseOfMovement::new(Some(1.0))
}

////////////////////////////////////////////////////////////////////////////////
// Volume
////////////////////////////////////////////////////////////////////////////////
#[fixture]
pub fn volume_passthrough() -> Volume {
    Volume::new(None, None)
}

#[fixture]
pub fn rvol_2() -> RelativeVolumeAtTime {
    RelativeVolumeAtTime::new(2)
}

////////////////////////////////////////////////////////////////////////////////
// Statistics and structure
////////////////////////////////////////////////////////////////////////////////
#[fixture]
pub fn correlation_3() -> CorrelationCoefficient {
    CorrelationCoefficient::new(3, None, None)
}

#[fixture]
pub fn pivots_1_1() -> PivotPointsHighLow {
    PivotPointsHighLow::new(1, 1)
}
