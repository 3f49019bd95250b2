//! Least-squares regression for growth estimation.
//!
//! Unlike the interpolators, regressors do not pass through the samples;
//! they fit a two-parameter model and return it as a reusable predictor.
//!
//! ## Available Models
//!
//! - [`LinearFit`]: `y = slope·x + intercept` by ordinary least squares
//! - [`ExponentialFit`]: `y = a·e^(b·x)` by least squares on `ln(y)`
//!
//! Both implement [`RegressionModel`].
//!
//! ## Example
//!
//! ```
//! use growth_core::math::regression::{linear_regression, RegressionModel};
//!
//! let fit = linear_regression(&[0.0_f64, 1.0, 2.0, 3.0], &[1.0, 3.0, 5.0, 7.0]).unwrap();
//! let (slope, intercept) = fit.params();
//! assert!((slope - 2.0).abs() < 1e-12);
//! assert!((intercept - 1.0).abs() < 1e-12);
//!
//! let predict = fit.predictor();
//! assert!((predict(10.0) - 21.0).abs() < 1e-12);
//! ```

mod exponential;
mod linear;

pub use exponential::{exponential_regression, ExponentialFit};
pub use linear::{linear_regression, LinearFit};

use num_traits::Float;

/// A fitted two-parameter regression model.
pub trait RegressionModel<T: Float> {
    /// `(slope, intercept)` of the fitted line (in log space for exponential fits).
    fn params(&self) -> (T, T);

    /// Predicted y at `x`.
    fn predict(&self, x: T) -> T;

    /// Coefficient of determination of the underlying linear fit.
    fn r_squared(&self) -> T;

    /// Predict every query in order.
    fn predict_many(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }
}
