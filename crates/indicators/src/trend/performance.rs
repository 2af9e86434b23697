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

use nautilus_ta_core::correctness::{FAILED, check_positive_usize, check_predicate_true};

use crate::{
    bar::{BarSeries, PriceField},
    indicator::{Indicator, IndicatorValue, Returns, into_values},
};

/// The default performance horizons: one week, one, three and six months, and one year
/// of daily bars.
pub const DEFAULT_HORIZONS: [usize; 5] = [5, 21, 63, 126, 252];

/// Returns the fractional return at `index` for every horizon with enough history.
///
/// A horizon is omitted when `index < horizon` or its base price is zero.
pub(crate) fn horizon_returns(prices: &[f64], index: usize, horizons: &[usize]) -> Returns {
    let mut returns = Returns::with_capacity(horizons.len());
    let Some(&price) = prices.get(index) else {
        return returns;
    };

    for &horizon in horizons {
        if index < horizon {
            continue;
        }
        let base = prices[index - horizon];
        if base == 0.0 {
            log::trace!("Performance: zero base price at {} for horizon {horizon}", index - horizon);
            continue;
        }
        returns.insert(horizon, price / base - 1.0);
    }
    returns
}

pub(crate) fn check_horizons(horizons: &[usize]) -> anyhow::Result<()> {
    check_predicate_true(!horizons.is_empty(), "`horizons` must not be empty")?;
    for &horizon in horizons {
        check_positive_usize(horizon, "horizon")?;
    }
    Ok(())
}

/// The fractional price change over several lookback horizons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Performance {
    /// The lookback horizons (bars).
    pub horizons: Vec<usize>,
    pub price_field: PriceField,
}

impl Display for Performance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.name(), self.horizons)
    }
}

impl Performance {
    /// Creates a new [`Performance`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `horizons` is empty or contains a zero horizon.
    #[must_use]
    pub fn new(horizons: Option<Vec<usize>>, price_field: Option<PriceField>) -> Self {
        Self::new_checked(horizons, price_field).expect(FAILED)
    }

    /// Creates a new [`Performance`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `horizons` is empty or contains a zero horizon.
    pub fn new_checked(
        horizons: Option<Vec<usize>>,
        price_field: Option<PriceField>,
    ) -> anyhow::Result<Self> {
        let horizons = horizons.unwrap_or_else(|| DEFAULT_HORIZONS.to_vec());
        check_horizons(&horizons)?;

        Ok(Self {
            horizons,
            price_field: price_field.unwrap_or_default(),
        })
    }

    /// Returns the horizon returns for each bar; `None` where no horizon qualifies.
    #[must_use]
    pub fn series_raw(&self, prices: &[f64]) -> Vec<Option<Returns>> {
        (0..prices.len()).map(|i| self.value_at(prices, i)).collect()
    }

    /// Returns the horizon returns for the most recent bar.
    #[must_use]
    pub fn current_raw(&self, prices: &[f64]) -> Option<Returns> {
        self.value_at(prices, prices.len().checked_sub(1)?)
    }

    fn value_at(&self, prices: &[f64], index: usize) -> Option<Returns> {
        let returns = horizon_returns(prices, index, &self.horizons);
        (!returns.is_empty()).then_some(returns)
    }
}

impl Indicator for Performance {
    fn name(&self) -> String {
        stringify!(Performance).to_string()
    }

    fn warmup(&self) -> usize {
        self.horizons.iter().min().map_or(1, |h| h.saturating_add(1))
    }

    fn series(&self, bars: &BarSeries) -> Vec<Option<IndicatorValue>> {
        into_values(self.series_raw(bars.field(self.price_field)))
    }

    fn current(&self, bars: &BarSeries) -> Option<IndicatorValue> {
        self.current_raw(bars.field(self.price_field)).map(Into::into)
    }
}
