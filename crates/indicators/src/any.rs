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

use enum_dispatch::enum_dispatch;

use crate::{
    bar::BarSeries,
    indicator::{Indicator, IndicatorValue},
    momentum::{
        ad_ratio::AdvanceDeclineRatio, bop::BalanceOfPower, mom::Momentum, roc::RateOfChange,
    },
    session::trading_sessions::TradingSessions,
    statistics::correlation::CorrelationCoefficient,
    structure::pivots::PivotPointsHighLow,
    trend::{
        dpo::DetrendedPriceOscillator, mcginley::McGinleyDynamic, median_price::MedianPrice,
        mtpc::MultiTimePeriodCharts, performance::Performance, vap::VisibleAveragePrice,
    },
    volatility::{adr::AverageDayRange, eom::EaseOfMovement, hv::HistoricalVolatility},
    volume::{
        delta::VolumeDelta, oi::OpenInterest, rvol::RelativeVolumeAtTime, vol::Volume,
        volume_24h::Volume24h,
    },
};

/// Any indicator, dispatching [`Indicator`] calls to the wrapped type.
#[derive(Clone, Debug, PartialEq)]
#[enum_dispatch(Indicator)]
pub enum IndicatorAny {
    MedianPrice(MedianPrice),
    VisibleAveragePrice(VisibleAveragePrice),
    Performance(Performance),
    MultiTimePeriodCharts(MultiTimePeriodCharts),
    McGinleyDynamic(McGinleyDynamic),
    DetrendedPriceOscillator(DetrendedPriceOscillator),
    Momentum(Momentum),
    RateOfChange(RateOfChange),
    BalanceOfPower(BalanceOfPower),
    AdvanceDeclineRatio(AdvanceDeclineRatio),
    AverageDayRange(AverageDayRange),
    HistoricalVolatility(HistoricalVolatility),
    EaseOfMovement(EaseOfMovement),
    Volume24h(Volume24h),
    Volume(Volume),
    VolumeDelta(VolumeDelta),
    OpenInterest(OpenInterest),
    RelativeVolumeAtTime(RelativeVolumeAtTime),
    CorrelationCoefficient(CorrelationCoefficient),
    PivotPointsHighLow(PivotPointsHighLow),
    TradingSessions(TradingSessions),
}

impl Display for IndicatorAny {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MedianPrice(indicator) => indicator.fmt(f),
            Self::VisibleAveragePrice(indicator) => indicator.fmt(f),
            Self::Performance(indicator) => indicator.fmt(f),
            Self::MultiTimePeriodCharts(indicator) => indicator.fmt(f),
            Self::McGinleyDynamic(indicator) => indicator.fmt(f),
            Self::DetrendedPriceOscillator(indicator) => indicator.fmt(f),
            Self::Momentum(indicator) => indicator.fmt(f),
            Self::RateOfChange(indicator) => indicator.fmt(f),
            Self::BalanceOfPower(indicator) => indicator.fmt(f),
            Self::AdvanceDeclineRatio(indicator) => indicator.fmt(f),
            Self::AverageDayRange(indicator) => indicator.fmt(f),
            Self::HistoricalVolatility(indicator) => indicator.fmt(f),
            Self::EaseOfMovement(indicator) => indicator.fmt(f),
            Self::Volume24h(indicator) => indicator.fmt(f),
            Self::Volume(indicator) => indicator.fmt(f),
            Self::VolumeDelta(indicator) => indicator.fmt(f),
            Self::OpenInterest(indicator) => indicator.fmt(f),
            Self::RelativeVolumeAtTime(indicator) => indicator.fmt(f),
            Self::CorrelationCoefficient(indicator) => indicator.fmt(f),
            Self::PivotPointsHighLow(indicator) => indicator.fmt(f),
            Self::TradingSessions(indicator) => indicator.fmt(f),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::stubs::bar_series;

    #[rstest]
    fn test_dispatch_matches_concrete_type(bar_series: BarSeries) {
        let concrete = Momentum::new(2, None);
        let any = IndicatorAny::from(concrete);

        assert_eq!(any.name(), concrete.name());
        assert_eq!(any.warmup(), 3);
        assert_eq!(any.to_string(), "Momentum(2)");
        assert_eq!(any.series(&bar_series), concrete.series(&bar_series));
        assert_eq!(any.current(&bar_series), concrete.current(&bar_series));
    }

    #[rstest]
    fn test_heterogeneous_collection(bar_series: BarSeries) {
        let indicators: Vec<IndicatorAny> = vec![
            MedianPrice::new().into(),
            VolumeDelta::new().into(),
            PivotPointsHighLow::new(1, 1).into(),
            TradingSessions::default().into(),
        ];

        for indicator in &indicators {
            assert_eq!(indicator.series(&bar_series).len(), bar_series.len());
        }
        assert!(!indicators[2].is_causal());
        assert!(matches!(
            indicators[3].current(&bar_series),
            Some(IndicatorValue::Session(_))
        ));
    }
}
