//! Ordinary least-squares line fit.

use super::RegressionModel;
use crate::types::samples::ensure_finite;
use crate::types::{DegenerateKind, EstimationError, SampleSet};
use num_traits::Float;
use serde::Serialize;

/// Result of a simple linear regression `y = slope·x + intercept`.
///
/// # Example
///
/// ```
/// use growth_core::math::regression::{LinearFit, RegressionModel};
///
/// let fit = LinearFit::fit(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.5]).unwrap();
/// assert!(fit.slope() > 1.0);
/// assert!(fit.r_squared() > 0.9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit<T: Float> {
    slope: T,
    intercept: T,
    r_squared: T,
}

impl<T: Float> LinearFit<T> {
    /// Fit a least-squares line through the samples.
    ///
    /// ```text
    /// slope     = Σ(x_i - x̄)(y_i - ȳ) / Σ(x_i - x̄)²
    /// intercept = ȳ - slope·x̄
    /// ```
    ///
    /// x-values need not be distinct, but they may not all be equal.
    ///
    /// # Errors
    ///
    /// * `EstimationError::DegenerateInput` - Fewer than 2 points or zero x-variance
    /// * `EstimationError::InvalidInput` - Mismatched lengths, non-finite values,
    ///   or sums that overflow
    pub fn fit(xs: &[T], ys: &[T]) -> Result<Self, EstimationError> {
        let samples = SampleSet::new(xs, ys, 2)?;
        let (xs, ys) = (samples.xs(), samples.ys());

        if xs.iter().all(|&x| x == xs[0]) {
            return Err(EstimationError::DegenerateInput(DegenerateKind::ZeroVariance));
        }

        let n = count::<T>(xs.len());
        let x_mean = ensure_finite(xs.iter().fold(T::zero(), |acc, &x| acc + x) / n, "mean of x")?;
        let y_mean = ensure_finite(ys.iter().fold(T::zero(), |acc, &y| acc + y) / n, "mean of y")?;

        let (numerator, denominator) = xs.iter().zip(ys.iter()).fold(
            (T::zero(), T::zero()),
            |(sxy, sxx), (&x, &y)| {
                let dx = x - x_mean;
                (sxy + dx * (y - y_mean), sxx + dx * dx)
            },
        );

        if denominator == T::zero() {
            return Err(EstimationError::DegenerateInput(DegenerateKind::ZeroVariance));
        }
        let numerator = ensure_finite(numerator, "covariance of x and y")?;
        let denominator = ensure_finite(denominator, "variance of x")?;

        let slope = ensure_finite(numerator / denominator, "slope")?;
        let intercept = ensure_finite(y_mean - slope * x_mean, "intercept")?;

        let (ss_res, ss_tot) = xs.iter().zip(ys.iter()).fold(
            (T::zero(), T::zero()),
            |(res, tot), (&x, &y)| {
                let r = y - (slope * x + intercept);
                let t = y - y_mean;
                (res + r * r, tot + t * t)
            },
        );
        let r_squared = if ss_tot == T::zero() {
            T::one()
        } else {
            ensure_finite(T::one() - ss_res / ss_tot, "r²")?
        };

        Ok(Self {
            slope,
            intercept,
            r_squared,
        })
    }

    /// Fitted slope `m`.
    #[inline]
    pub fn slope(&self) -> T {
        self.slope
    }

    /// Fitted intercept `b`.
    #[inline]
    pub fn intercept(&self) -> T {
        self.intercept
    }

    /// Owned prediction function `x -> m·x + b`.
    pub fn predictor(&self) -> impl Fn(T) -> T {
        let (slope, intercept) = (self.slope, self.intercept);
        move |x| slope * x + intercept
    }
}

impl<T: Float> RegressionModel<T> for LinearFit<T> {
    #[inline]
    fn params(&self) -> (T, T) {
        (self.slope, self.intercept)
    }

    #[inline]
    fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    #[inline]
    fn r_squared(&self) -> T {
        self.r_squared
    }
}

/// Fit `y = m·x + b` by least squares.
pub fn linear_regression<T: Float>(
    x_points: &[T],
    y_points: &[T],
) -> Result<LinearFit<T>, EstimationError> {
    LinearFit::fit(x_points, y_points)
}

/// Sample count as `T`. Counts of in-memory slices are always representable.
#[inline]
fn count<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::infinity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_collinear_points() {
        let fit = linear_regression(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 5.0, 7.0]).unwrap();
        assert_relative_eq!(fit.slope(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.predict(10.0), 21.0, epsilon = 1e-12);
        assert_relative_eq!(fit.r_squared(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_predictor_outlives_fit() {
        let predict = {
            let fit = linear_regression(&[0.0, 2.0], &[0.0, 1.0]).unwrap();
            fit.predictor()
        };
        assert_relative_eq!(predict(4.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_noisy_points() {
        // Hand-computed: x̄ = 1.5, ȳ = 2.5, Sxy = 6, Sxx = 5
        let fit = linear_regression(&[0.0, 1.0, 2.0, 3.0], &[1.0, 2.0, 2.0, 5.0]).unwrap();
        assert_relative_eq!(fit.slope(), 1.2, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept(), 0.7, epsilon = 1e-12);
        assert!(fit.r_squared() > 0.0 && fit.r_squared() < 1.0);
    }

    #[test]
    fn test_repeated_x_allowed() {
        let fit = linear_regression(&[1.0, 1.0, 3.0, 3.0], &[1.0, 3.0, 5.0, 7.0]).unwrap();
        assert_relative_eq!(fit.slope(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_y_has_unit_r_squared() {
        let fit = linear_regression(&[0.0, 1.0, 2.0], &[4.0, 4.0, 4.0]).unwrap();
        assert_eq!(fit.slope(), 0.0);
        assert_eq!(fit.r_squared(), 1.0);
    }

    #[test]
    fn test_identical_x_rejected() {
        let err = linear_regression(&[0.1, 0.1, 0.1], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            EstimationError::DegenerateInput(DegenerateKind::ZeroVariance)
        );
    }

    #[test]
    fn test_single_point_rejected() {
        let err = linear_regression(&[1.0], &[1.0]).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_predict_many() {
        let fit = linear_regression(&[0.0, 1.0], &[1.0, 3.0]).unwrap();
        let ys = fit.predict_many(&[0.0, 0.5, 2.0]);
        assert_eq!(ys.len(), 3);
        assert_relative_eq!(ys[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(ys[2], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_serialises_to_json() {
        let fit = linear_regression(&[0.0, 1.0], &[1.0, 3.0]).unwrap();
        let json = serde_json::to_string(&fit).unwrap();
        assert!(json.contains("\"slope\":2.0"));
    }

    #[test]
    fn test_overflowing_sums_rejected() {
        // Each x is finite but their sum is not
        let err = linear_regression(&[1.5e308, 1.7e308], &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            EstimationError::InvalidInput("numeric overflow: mean of x is not finite".to_string())
        );
    }

    #[test]
    fn test_overflowing_variance_rejected() {
        // Mean is zero but the squared deviations overflow
        let err = linear_regression(&[-1e200, 1e200], &[0.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            EstimationError::InvalidInput("numeric overflow: variance of x is not finite".to_string())
        );
    }
}
