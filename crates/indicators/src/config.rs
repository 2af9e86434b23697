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

//! Declarative indicator configuration.
//!
//! An [`IndicatorConfig`] is a serde-tagged description of one indicator and its
//! parameters, which [`IndicatorConfig::build`] validates into an [`IndicatorAny`].
//!
//! ```json
//! { "type": "momentum", "period": 10, "price_field": "CLOSE" }
//! ```

use chrono_tz::Tz;
use nautilus_ta_core::correctness::FAILED;
use serde::{Deserialize, Serialize};

use crate::{
    any::IndicatorAny,
    bar::PriceField,
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
    volatility::{
        adr::AverageDayRange,
        eom::{DEFAULT_VOLUME_DIVISOR, EaseOfMovement},
        hv::HistoricalVolatility,
    },
    volume::{
        delta::VolumeDelta, oi::OpenInterest, rvol::RelativeVolumeAtTime, vol::Volume,
        volume_24h::Volume24h,
    },
};

/// Configuration for a single indicator, tagged by `"type"`.
///
/// Omitted optional parameters take each indicator's documented default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IndicatorConfig {
    MedianPrice,
    VisibleAveragePrice {
        #[serde(default)]
        start_index: usize,
        #[serde(default)]
        price_field: Option<PriceField>,
    },
    Performance {
        #[serde(default)]
        horizons: Option<Vec<usize>>,
        #[serde(default)]
        price_field: Option<PriceField>,
    },
    MultiTimePeriodCharts {
        #[serde(default)]
        horizons: Option<Vec<usize>>,
        #[serde(default)]
        price_field: Option<PriceField>,
    },
    #[serde(rename = "mcginley_dynamic")]
    McGinleyDynamic {
        #[serde(default)]
        period: Option<usize>,
        #[serde(default)]
        price_field: Option<PriceField>,
    },
    DetrendedPriceOscillator {
        #[serde(default)]
        period: Option<usize>,
        #[serde(default)]
        price_field: Option<PriceField>,
    },
    Momentum {
        period: usize,
        #[serde(default)]
        price_field: Option<PriceField>,
    },
    RateOfChange {
        period: usize,
        #[serde(default)]
        price_field: Option<PriceField>,
    },
    BalanceOfPower,
    AdvanceDeclineRatio {
        period: usize,
        #[serde(default)]
        price_field: Option<PriceField>,
    },
    AverageDayRange {
        period: usize,
    },
    HistoricalVolatility {
        period: usize,
        #[serde(default)]
        trading_periods: Option<usize>,
        #[serde(default)]
        price_field: Option<PriceField>,
    },
    EaseOfMovement {
        #[serde(default = "default_volume_divisor")]
        volume_divisor: f64,
    },
    #[serde(rename = "volume_24h")]
    Volume24h {
        #[serde(default)]
        lookback: Option<usize>,
    },
    Volume {
        #[serde(default)]
        aggregate: bool,
        #[serde(default = "default_volume_period")]
        period: usize,
    },
    VolumeDelta,
    OpenInterest {
        #[serde(default)]
        delta: bool,
    },
    RelativeVolumeAtTime {
        session_length: usize,
    },
    CorrelationCoefficient {
        period: usize,
        #[serde(default)]
        x: Option<PriceField>,
        #[serde(default)]
        y: Option<PriceField>,
    },
    PivotPointsHighLow {
        left: usize,
        right: usize,
    },
    TradingSessions {
        #[serde(default = "default_tz")]
        tz: Tz,
    },
}

const fn default_volume_divisor() -> f64 {
    DEFAULT_VOLUME_DIVISOR
}

const fn default_volume_period() -> usize {
    1
}

const fn default_tz() -> Tz {
    Tz::UTC
}

impl IndicatorConfig {
    /// Parses a config from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is malformed or names an unknown indicator type.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).map_err(|e| anyhow::anyhow!("{FAILED}: invalid indicator config: {e}"))
    }

    /// Validates the parameters and builds the configured indicator.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter fails the indicator's correctness checks.
    pub fn build(&self) -> anyhow::Result<IndicatorAny> {
        let indicator = self
            .try_build()
            .map_err(|e| anyhow::anyhow!("{FAILED}: {e}"))?;
        log::debug!("Built indicator {indicator}");
        Ok(indicator)
    }

    fn try_build(&self) -> anyhow::Result<IndicatorAny> {
        let indicator: IndicatorAny = match self {
            Self::MedianPrice => MedianPrice::new().into(),
            Self::VisibleAveragePrice {
                start_index,
                price_field,
            } => VisibleAveragePrice::new(*start_index, *price_field).into(),
            Self::Performance {
                horizons,
                price_field,
            } => Performance::new_checked(horizons.clone(), *price_field)?.into(),
            Self::MultiTimePeriodCharts {
                horizons,
                price_field,
            } => MultiTimePeriodCharts::new_checked(horizons.clone(), *price_field)?.into(),
            Self::McGinleyDynamic {
                period,
                price_field,
            } => McGinleyDynamic::new_checked(*period, *price_field)?.into(),
            Self::DetrendedPriceOscillator {
                period,
                price_field,
            } => DetrendedPriceOscillator::new_checked(*period, *price_field)?.into(),
            Self::Momentum {
                period,
                price_field,
            } => Momentum::new_checked(*period, *price_field)?.into(),
            Self::RateOfChange {
                period,
                price_field,
            } => RateOfChange::new_checked(*period, *price_field)?.into(),
            Self::BalanceOfPower => BalanceOfPower::new().into(),
            Self::AdvanceDeclineRatio {
                period,
                price_field,
            } => AdvanceDeclineRatio::new_checked(*period, *price_field)?.into(),
            Self::AverageDayRange { period } => AverageDayRange::new_checked(*period)?.into(),
            Self::HistoricalVolatility {
                period,
                trading_periods,
                price_field,
            } => HistoricalVolatility::new_checked(*period, *trading_periods, *price_field)?.into(),
            Self::EaseOfMovement { volume_divisor } => {
                EaseOfMovement::new_checked(Some(*volume_divisor))?.into()
            }
            Self::Volume24h { lookback } => Volume24h::new_checked(*lookback)?.into(),
            Self::Volume { aggregate, period } => {
                Volume::new_checked(Some(*aggregate), Some(*period))?.into()
            }
            Self::VolumeDelta => VolumeDelta::new().into(),
            Self::OpenInterest { delta } => OpenInterest::new(*delta).into(),
            Self::RelativeVolumeAtTime { session_length } => {
                RelativeVolumeAtTime::new_checked(*session_length)?.into()
            }
            Self::CorrelationCoefficient { period, x, y } => {
                CorrelationCoefficient::new_checked(*period, *x, *y)?.into()
            }
            Self::PivotPointsHighLow { left, right } => {
                PivotPointsHighLow::new_checked(*left, *right)?.into()
            }
            Self::TradingSessions { tz } => TradingSessions::new(Some(*tz)).into(),
        };
        Ok(indicator)
    }
}
