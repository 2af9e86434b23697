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

//! Technical analysis indicators over batches of bars for [NautilusTrader](http://nautilustrader.io).
//!
//! The *indicators* crate computes indicator values from a full [`BarSeries`](bar::BarSeries)
//! in one call. Every indicator is a small immutable configuration value; computing it is a
//! pure function of the bars supplied, and the same bars always produce the same values.
//!
//! - **Trend and price**: median price, visible average price, performance, multi-time-period
//!   charts, McGinley dynamic and the detrended price oscillator.
//! - **Momentum**: momentum, rate of change, balance of power and the advance/decline ratio.
//! - **Volatility**: average day range, historical volatility and ease of movement.
//! - **Volume**: 24h volume, volume, volume delta, open interest and relative volume at time.
//! - **Statistics**: rolling correlation coefficient.
//! - **Structure and sessions**: pivot points high/low and trading session classification.
//!
//! Each indicator exposes typed `series_raw`/`current_raw` methods over raw slices, and the
//! [`Indicator`](indicator::Indicator) trait over a [`BarSeries`](bar::BarSeries). The
//! [`IndicatorAny`](any::IndicatorAny) enum dispatches the trait over every indicator, and is
//! built from a serde-tagged [`IndicatorConfig`](config::IndicatorConfig).
//!
//! Missing history is `None`, never an error. Only invalid parameters are rejected, at
//! construction time.
//!
//! # Platform
//!
//! [NautilusTrader](http://nautilustrader.io) is an open-source, high-performance, production-grade
//! algorithmic trading platform, providing quantitative traders with the ability to backtest
//! portfolios of automated trading strategies on historical data with an event-driven engine,
//! and also deploy those same strategies live, with no code changes.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod indicator;

pub mod any;
pub mod bar;
pub mod config;
pub mod momentum;
pub mod rolling;
pub mod session;
pub mod statistics;
pub mod structure;
pub mod trend;
pub mod volatility;
pub mod volume;

#[cfg(test)]
mod stubs;
