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

//! Mathematical functions shared by the indicators.
//!
//! These operate on plain slices so that every indicator can apply them to an arbitrary
//! trailing window without allocating.

/// Macro for approximate floating-point equality comparison.
///
/// This macro compares two floating-point values with a specified epsilon tolerance,
/// providing a safe alternative to exact equality checks which can fail due to
/// floating-point precision issues.
///
/// # Usage
///
/// ```rust
/// use nautilus_ta_core::approx_eq;
///
/// let a = 0.1 + 0.2;
/// let b = 0.3;
/// assert!(approx_eq!(f64, a, b, epsilon = 1e-10));
/// ```
#[macro_export]
macro_rules! approx_eq {
    ($type:ty, $left:expr, $right:expr, epsilon = $epsilon:expr) => {{
        let left_val: $type = $left;
        let right_val: $type = $right;
        (left_val - right_val).abs() < $epsilon
    }};
}

/// Returns the arithmetic mean of `values`, or `None` when `values` is empty.
#[inline]
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Returns the sample (Bessel corrected, `n - 1`) standard deviation of `values`.
///
/// Returns `None` when fewer than two values are supplied.
#[must_use]
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let mean = mean(values)?;
    let var_acc: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    Some((var_acc / (values.len() - 1) as f64).sqrt())
}

/// Returns the natural log return `ln(current / previous)`.
///
/// Returns `None` when either price is not strictly positive, where the logarithm is undefined.
#[inline]
#[must_use]
pub fn log_return(previous: f64, current: f64) -> Option<f64> {
    if previous > 0.0 && current > 0.0 {
        Some((current / previous).ln())
    } else {
        None
    }
}

/// Returns the log returns between consecutive `prices` (one fewer element than the input).
///
/// Returns `None` if any price is not strictly positive.
#[must_use]
pub fn log_returns(prices: &[f64]) -> Option<Vec<f64>> {
    prices
        .windows(2)
        .map(|pair| log_return(pair[0], pair[1]))
        .collect()
}

/// Returns the Pearson correlation coefficient of `xs` and `ys`.
///
/// The result is `f64::NAN` when the slices are empty, differ in length, or either
/// slice has zero variance; callers test it with `is_nan`.
#[must_use]
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() {
        return f64::NAN;
    }

    let (Some(mean_x), Some(mean_y)) = (mean(xs), mean(ys)) else {
        return f64::NAN;
    };

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    // 0.0 / 0.0 yields NaN for a constant window
    cov / (var_x * var_y).sqrt()
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&[], None)]
    #[case(&[4.0], Some(4.0))]
    #[case(&[1.0, 2.0, 3.0], Some(2.0))]
    fn test_mean(#[case] values: &[f64], #[case] expected: Option<f64>) {
        assert_eq!(mean(values), expected);
    }

    #[rstest]
    fn test_sample_std() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let expected = (32.0_f64 / 7.0).sqrt();
        assert!(approx_eq!(f64, sample_std(&values).unwrap(), expected, epsilon = 1e-12));
        assert_eq!(sample_std(&[1.0]), None);
        assert_eq!(sample_std(&[3.0, 3.0]), Some(0.0));
    }

    #[rstest]
    #[case(100.0, 110.0, Some((1.1_f64).ln()))]
    #[case(0.0, 110.0, None)]
    #[case(100.0, -1.0, None)]
    fn test_log_return(#[case] previous: f64, #[case] current: f64, #[case] expected: Option<f64>) {
        assert_eq!(log_return(previous, current), expected);
    }

    #[rstest]
    fn test_log_returns() {
        let returns = log_returns(&[1.0, std::f64::consts::E, 1.0]).unwrap();
        assert_eq!(returns.len(), 2);
        assert!(approx_eq!(f64, returns[0], 1.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, returns[1], -1.0, epsilon = 1e-12));
        assert_eq!(log_returns(&[1.0, 0.0, 2.0]), None);
        assert_eq!(log_returns(&[1.0]), Some(vec![]));
    }

    #[rstest]
    fn test_pearson_perfect_positive_and_negative() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let up = [2.0, 4.0, 6.0, 8.0];
        let down = [8.0, 6.0, 4.0, 2.0];
        assert!(approx_eq!(f64, pearson_correlation(&xs, &up), 1.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, pearson_correlation(&xs, &down), -1.0, epsilon = 1e-12));
    }

    #[rstest]
    fn test_pearson_undefined_is_nan() {
        assert!(pearson_correlation(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_nan());
        assert!(pearson_correlation(&[], &[]).is_nan());
        assert!(pearson_correlation(&[1.0, 2.0], &[1.0]).is_nan());
    }

    proptest! {
        #[test]
        fn prop_pearson_is_bounded(
            pairs in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 2..64)
        ) {
            let (xs, ys): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
            let r = pearson_correlation(&xs, &ys);
            prop_assert!(r.is_nan() || (-1.0 - 1e-9..=1.0 + 1e-9).contains(&r));
        }
    }
}
