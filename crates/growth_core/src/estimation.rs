//! Method selection and curve sampling.
//!
//! The five estimators share one input shape, so a caller can pick one by
//! name and hand it the same `(xs, ys, query)` triple. [`Method`] is that
//! dispatch point. It never chooses a method on its own.
//!
//! # Example
//!
//! ```
//! use growth_core::estimation::{sample_curve, Method};
//!
//! let xs = [0.0, 1.0, 2.0, 3.0];
//! let ys = [1.0, 3.0, 7.0, 13.0];
//!
//! let method: Method = "spline".parse().unwrap();
//! let y = method.estimate(&xs, &ys, 1.5).unwrap();
//! assert!(y > 3.0 && y < 7.0);
//!
//! let curve = sample_curve(Method::Newton, &xs, &ys, 7).unwrap();
//! assert_eq!(curve.len(), 7);
//! assert_eq!(curve[0], (0.0, 1.0));
//! ```

use std::fmt;
use std::str::FromStr;

use num_traits::Float;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::math::interpolators::{
    CubicSplineInterpolator, Interpolator, LagrangeInterpolator, NewtonInterpolator,
};
use crate::math::regression::{ExponentialFit, LinearFit, RegressionModel};
use crate::types::samples::{check_query, ensure_finite, min_max};
use crate::types::{EstimationError, SampleSet};

/// Error returned when a method name is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown method: {0}. Supported: lagrange, newton, cubic-spline, linear, exponential")]
pub struct ParseMethodError(pub String);

/// An estimation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Lagrange polynomial interpolation
    Lagrange,
    /// Newton divided-difference interpolation
    Newton,
    /// Natural cubic spline interpolation
    #[serde(alias = "spline")]
    CubicSpline,
    /// Ordinary least-squares line
    #[serde(rename = "linear", alias = "linear-regression")]
    LinearRegression,
    /// Log-linearised exponential fit
    #[serde(rename = "exponential", alias = "exponential-regression")]
    ExponentialRegression,
}

impl Method {
    /// Every method, in presentation order.
    pub const ALL: [Method; 5] = [
        Method::Lagrange,
        Method::Newton,
        Method::CubicSpline,
        Method::LinearRegression,
        Method::ExponentialRegression,
    ];

    /// Canonical short name, accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Method::Lagrange => "lagrange",
            Method::Newton => "newton",
            Method::CubicSpline => "cubic-spline",
            Method::LinearRegression => "linear",
            Method::ExponentialRegression => "exponential",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Method::Lagrange => "Lagrange interpolation",
            Method::Newton => "Newton interpolation",
            Method::CubicSpline => "Cubic spline interpolation",
            Method::LinearRegression => "Linear regression",
            Method::ExponentialRegression => "Exponential regression",
        }
    }

    /// Returns true if the method passes exactly through every sample.
    pub fn is_interpolating(&self) -> bool {
        matches!(
            self,
            Method::Lagrange | Method::Newton | Method::CubicSpline
        )
    }

    /// Estimate `y` at `x` with this method.
    pub fn estimate<T: Float>(
        &self,
        xs: &[T],
        ys: &[T],
        x: T,
    ) -> Result<T, EstimationError> {
        check_query(x)?;
        debug!(method = self.name(), samples = xs.len(), "estimating single point");
        let mut values = self.evaluate(xs, ys, &[x])?;
        values
            .pop()
            .ok_or_else(|| EstimationError::InvalidInput("no estimate produced".to_string()))
    }

    /// Estimate `y` at every query, preserving order.
    ///
    /// The interpolator or regression model is built once and reused for
    /// every query.
    pub fn estimate_many<T: Float>(
        &self,
        xs: &[T],
        ys: &[T],
        queries: &[T],
    ) -> Result<Vec<T>, EstimationError> {
        for &q in queries {
            check_query(q)?;
        }
        debug!(
            method = self.name(),
            samples = xs.len(),
            queries = queries.len(),
            "estimating batch"
        );
        self.evaluate(xs, ys, queries)
    }

    fn evaluate<T: Float>(
        &self,
        xs: &[T],
        ys: &[T],
        queries: &[T],
    ) -> Result<Vec<T>, EstimationError> {
        match self {
            Method::Lagrange => LagrangeInterpolator::new(xs, ys)?.interpolate_many(queries),
            Method::Newton => NewtonInterpolator::new(xs, ys)?.interpolate_many(queries),
            Method::CubicSpline => CubicSplineInterpolator::new(xs, ys)?.interpolate_many(queries),
            Method::LinearRegression => {
                finite_predictions(LinearFit::fit(xs, ys)?, queries, "linear prediction")
            }
            Method::ExponentialRegression => finite_predictions(
                ExponentialFit::fit(xs, ys)?,
                queries,
                "exponential prediction",
            ),
        }
    }
}

fn finite_predictions<T: Float, M: RegressionModel<T>>(
    model: M,
    queries: &[T],
    what: &str,
) -> Result<Vec<T>, EstimationError> {
    queries
        .iter()
        .map(|&q| ensure_finite(model.predict(q), what))
        .collect()
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lagrange" => Ok(Method::Lagrange),
            "newton" => Ok(Method::Newton),
            "cubic-spline" | "spline" | "splines" => Ok(Method::CubicSpline),
            "linear" | "linear-regression" => Ok(Method::LinearRegression),
            "exponential" | "exponential-regression" => Ok(Method::ExponentialRegression),
            _ => Err(ParseMethodError(s.to_string())),
        }
    }
}

/// Returns true if `x` lies outside `[min(xs), max(xs)]`.
///
/// An empty `xs` has no range, so every query counts as extrapolation.
pub fn is_extrapolation<T: Float>(xs: &[T], x: T) -> bool {
    let (lo, hi) = min_max(xs);
    x < lo || x > hi
}

/// `steps` evenly spaced values from `start` to `end`, both inclusive.
///
/// Returns an empty vector for `steps == 0` and `[start]` for `steps == 1`.
pub fn linspace<T: Float>(start: T, end: T, steps: usize) -> Vec<T> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = steps - 1;
            let span = end - start;
            let mut grid: Vec<T> = (0..last)
                .map(|i| {
                    let t = T::from(i).unwrap_or_else(T::zero) / T::from(last).unwrap_or_else(T::one);
                    start + span * t
                })
                .collect();
            grid.push(end);
            grid
        }
    }
}

/// Sample `method` over `steps` evenly spaced points spanning the sample range.
///
/// # Errors
///
/// Any validation error of the chosen method.
pub fn sample_curve<T: Float>(
    method: Method,
    xs: &[T],
    ys: &[T],
    steps: usize,
) -> Result<Vec<(T, T)>, EstimationError> {
    let (lo, hi) = SampleSet::new(xs, ys, 2)?.x_range();
    sample_curve_between(method, xs, ys, lo, hi, steps)
}

/// Sample `method` over `steps` evenly spaced points in `[start, end]`.
pub fn sample_curve_between<T: Float>(
    method: Method,
    xs: &[T],
    ys: &[T],
    start: T,
    end: T,
    steps: usize,
) -> Result<Vec<(T, T)>, EstimationError> {
    let grid = linspace(start, end, steps);
    let values = method.estimate_many(xs, ys, &grid)?;
    Ok(grid.into_iter().zip(values).collect())
}
