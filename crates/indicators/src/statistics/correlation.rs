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

use nautilus_ta_core::{
    correctness::{FAILED, check_predicate_true},
    math::pearson_correlation,
};

use crate::{
    bar::{BarSeries, PriceField},
    indicator::{Indicator, IndicatorValue, into_values},
    rolling::lengths_match,
};

/// The rolling Pearson correlation between two bar fields (close and volume by default).
///
/// A window in which either input is constant has no defined correlation and yields `None`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CorrelationCoefficient {
    pub period: usize,
    pub x: PriceField,
    pub y: PriceField,
}

impl Display for CorrelationCoefficient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({},{},{})", self.name(), self.period, self.x, self.y)
    }
}

impl CorrelationCoefficient {
    /// Creates a new [`CorrelationCoefficient`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `period < 2`.
    #[must_use]
    pub fn new(period: usize, x: Option<PriceField>, y: Option<PriceField>) -> Self {
        Self::new_checked(period, x, y).expect(FAILED)
    }

    /// Creates a new [`CorrelationCoefficient`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `period < 2`.
    pub fn new_checked(
        period: usize,
        x: Option<PriceField>,
        y: Option<PriceField>,
    ) -> anyhow::Result<Self> {
        check_predicate_true(period >= 2, "`period` must be at least 2")?;

        Ok(Self {
            period,
            x: x.unwrap_or(PriceField::Close),
            y: y.unwrap_or(PriceField::Volume),
        })
    }

    #[must_use]
    pub fn series_raw(&self, xs: &[f64], ys: &[f64]) -> Vec<Option<f64>> {
        if !lengths_match(&self.name(), &[xs, ys]) {
            return Vec::new();
        }
        (0..xs.len()).map(|i| self.value_at(xs, ys, i)).collect()
    }

    #[must_use]
    pub fn current_raw(&self, xs: &[f64], ys: &[f64]) -> Option<f64> {
        if !lengths_match(&self.name(), &[xs, ys]) {
            return None;
        }
        self.value_at(xs, ys, xs.len().checked_sub(1)?)
    }

    fn value_at(&self, xs: &[f64], ys: &[f64], index: usize) -> Option<f64> {
        let start = (index + 1).checked_sub(self.period)?;
        let r = pearson_correlation(&xs[start..=index], &ys[start..=index]);
        if r.is_nan() {
            log::trace!("CorrelationCoefficient: undefined correlation in window ending at {index}");
            return None;
        }
        Some(r)
    }
}

impl Indicator for CorrelationCoefficient {
    fn name(&self) -> String {
        stringify!(CorrelationCoefficient).to_string()
    }

    fn warmup(&self) -> usize {
        self.period
    }

    fn series(&self, bars: &BarSeries) -> Vec<Option<IndicatorValue>> {
        into_values(self.series_raw(bars.field(self.x), bars.field(self.y)))
    }

    fn current(&self, bars: &BarSeries) -> Option<IndicatorValue> {
        self.current_raw(bars.field(self.x), bars.field(self.y))
            .map(Into::into)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use nautilus_ta_core::approx_eq;
    use rstest::rstest;

    use super::*;
    use crate::stubs::correlation_3;

    #[rstest]
    fn test_name_and_display(correlation_3: CorrelationCoefficient) {
        assert_eq!(correlation_3.name(), "CorrelationCoefficient");
        assert_eq!(correlation_3.to_string(), "CorrelationCoefficient(3,CLOSE,VOLUME)");
    }

    #[rstest]
    fn test_new_checked_period_too_small() {
        assert!(CorrelationCoefficient::new_checked(1, None, None).is_err());
    }

    #[rstest]
    #[case(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0], 1.0)]
    #[case(&[1.0, 2.0, 3.0], &[6.0, 4.0, 2.0], -1.0)]
    fn test_perfect_correlation(
        correlation_3: CorrelationCoefficient,
        #[case] xs: &[f64],
        #[case] ys: &[f64],
        #[case] expected: f64,
    ) {
        let r = correlation_3.current_raw(xs, ys).unwrap();
        assert!(approx_eq!(f64, r, expected, epsilon = 1e-12));
    }

    #[rstest]
    fn test_constant_window_is_none(correlation_3: CorrelationCoefficient) {
        assert_eq!(correlation_3.current_raw(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]), None);
    }

    #[rstest]
    fn test_series_raw_warmup(correlation_3: CorrelationCoefficient) {
        let result = correlation_3.series_raw(&[1.0, 2.0, 3.0, 4.0], &[1.0, 3.0, 2.0, 5.0]);
        assert_eq!(result.len(), 4);
        assert_eq!(result[..2], [None, None]);
        assert!(result[2].is_some() && result[3].is_some());
    }

    #[rstest]
    fn test_mismatched_lengths(correlation_3: CorrelationCoefficient) {
        assert!(correlation_3.series_raw(&[1.0, 2.0, 3.0], &[1.0]).is_empty());
        assert_eq!(correlation_3.current_raw(&[1.0, 2.0, 3.0], &[1.0]), None);
    }
}
