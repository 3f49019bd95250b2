//! Exponential growth fit by log-linearisation.

use super::{LinearFit, RegressionModel};
use crate::types::samples::to_f64;
use crate::types::{EstimationError, SampleSet};
use num_traits::Float;
use serde::Serialize;

/// Result of fitting `y = a·e^(b·x)`.
///
/// The model is fitted as the line `ln(y) = ln(a) + b·x`, so
/// [`RegressionModel::params`] returns `(b, ln(a))` and
/// [`RegressionModel::r_squared`] is measured in log space.
///
/// # Example
///
/// ```
/// use growth_core::math::regression::{ExponentialFit, RegressionModel};
///
/// let xs = [0.0_f64, 1.0, 2.0, 3.0];
/// let ys: Vec<f64> = xs.iter().map(|&x: &f64| 2.0 * (0.5 * x).exp()).collect();
///
/// let fit = ExponentialFit::fit(&xs, &ys).unwrap();
/// assert!((fit.rate() - 0.5).abs() < 1e-10);
/// assert!((fit.amplitude() - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExponentialFit<T: Float> {
    log_fit: LinearFit<T>,
}

impl<T: Float> ExponentialFit<T> {
    /// Fit an exponential curve through strictly positive samples.
    ///
    /// # Errors
    ///
    /// * `EstimationError::InvalidDomain` - Some `y_i <= 0`; reported before any logarithm is taken
    /// * `EstimationError::DegenerateInput` - Fewer than 2 points or zero x-variance
    /// * `EstimationError::InvalidInput` - Mismatched lengths or non-finite values
    pub fn fit(xs: &[T], ys: &[T]) -> Result<Self, EstimationError> {
        let samples = SampleSet::new(xs, ys, 2)?;

        if let Some((index, &y)) = samples
            .ys()
            .iter()
            .enumerate()
            .find(|&(_, &y)| y <= T::zero())
        {
            return Err(EstimationError::InvalidDomain {
                index,
                y: to_f64(y),
            });
        }

        let log_ys: Vec<T> = samples.ys().iter().map(|&y| y.ln()).collect();
        let log_fit = LinearFit::fit(samples.xs(), &log_ys)?;

        Ok(Self { log_fit })
    }

    /// Growth rate `b`.
    #[inline]
    pub fn rate(&self) -> T {
        self.log_fit.slope()
    }

    /// Scale `a = e^intercept`, the fitted value at `x = 0`.
    #[inline]
    pub fn amplitude(&self) -> T {
        self.log_fit.intercept().exp()
    }

    /// The underlying line fitted to `(x, ln y)`.
    #[inline]
    pub fn log_linear(&self) -> &LinearFit<T> {
        &self.log_fit
    }

    /// Owned prediction function `x -> exp(intercept + slope·x)`.
    pub fn predictor(&self) -> impl Fn(T) -> T {
        let (slope, intercept) = self.log_fit.params();
        move |x| (intercept + slope * x).exp()
    }
}

impl<T: Float> RegressionModel<T> for ExponentialFit<T> {
    #[inline]
    fn params(&self) -> (T, T) {
        self.log_fit.params()
    }

    #[inline]
    fn predict(&self, x: T) -> T {
        self.log_fit.predict(x).exp()
    }

    #[inline]
    fn r_squared(&self) -> T {
        self.log_fit.r_squared()
    }
}

/// Fit `y = a·e^(b·x)` by linear regression of `ln(y)` on `x`.
pub fn exponential_regression<T: Float>(
    x_points: &[T],
    y_points: &[T],
) -> Result<ExponentialFit<T>, EstimationError> {
    ExponentialFit::fit(x_points, y_points)
}
