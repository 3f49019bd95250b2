//! Error types for structured error handling.
//!
//! This module provides:
//! - `EstimationError`: Errors from interpolation, regression, and the spline system solve
//! - `DegenerateKind`: The specific reason a sample set was rejected as degenerate

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason a sample set cannot support the requested estimate.
///
/// # Examples
/// ```
/// use growth_core::types::DegenerateKind;
///
/// let kind = DegenerateKind::TooFewPoints { got: 1, need: 2 };
/// assert_eq!(format!("{}", kind), "got 1 points, need at least 2");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DegenerateKind {
    /// Not enough sample points for the method.
    #[error("got {got} points, need at least {need}")]
    TooFewPoints {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Two samples share the same x-coordinate.
    #[error("x-coordinates at indices {first} and {second} coincide (x = {x})")]
    CoincidentX {
        /// Index of the first occurrence
        first: usize,
        /// Index of the repeated occurrence
        second: usize,
        /// The shared x-coordinate
        x: f64,
    },

    /// All x-coordinates are identical, so the regression slope is undefined.
    #[error("x-coordinates have zero variance")]
    ZeroVariance,
}

/// Estimation errors.
///
/// Every estimator validates its own preconditions and fails with one of
/// these variants instead of producing NaN or infinity.
///
/// # Variants
/// - `DegenerateInput`: Too few points, coincident x-values, or zero x-variance
/// - `NonMonotonicInput`: x-values not strictly increasing where required
/// - `InvalidDomain`: Non-positive y-value fed to a log-linearised fit
/// - `InvalidInput`: Mismatched lengths or non-finite values
/// - `SingularSystem`: Zero pivot while solving the spline system
///
/// # Examples
/// ```
/// use growth_core::types::EstimationError;
///
/// let err = EstimationError::NonMonotonicInput { index: 2 };
/// assert!(format!("{}", err).contains("index 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EstimationError {
    /// The sample set cannot determine the requested estimate.
    #[error("Degenerate input: {0}")]
    DegenerateInput(DegenerateKind),

    /// x-values are not strictly increasing.
    #[error("x-values are not strictly increasing at index {index}")]
    NonMonotonicInput {
        /// Index of the first x-value that is not greater than its predecessor
        index: usize,
    },

    /// A y-value lies outside the domain of the transform (e.g. `ln(y)` with `y <= 0`).
    #[error("y-value {y} at index {index} is outside the valid domain (must be > 0)")]
    InvalidDomain {
        /// Index of the offending sample
        index: usize,
        /// The offending y-value
        y: f64,
    },

    /// Invalid input data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The linear system has a zero pivot.
    #[error("Singular system: zero pivot at row {row}")]
    SingularSystem {
        /// Row where elimination broke down
        row: usize,
    },
}

impl EstimationError {
    /// Shorthand for `DegenerateInput(TooFewPoints { .. })`.
    pub fn too_few_points(got: usize, need: usize) -> Self {
        Self::DegenerateInput(DegenerateKind::TooFewPoints { got, need })
    }

    /// Returns true for any `DegenerateInput` variant.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateInput(_))
    }
}
