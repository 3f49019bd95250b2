//! # growth_core: Interpolation and Regression Engine for Growth Estimation
//!
//! ## Core Layer Role
//!
//! growth_core estimates an observed quantity (plant height) at an arbitrary
//! time from a handful of irregularly spaced measurements. It provides:
//! - Lagrange and Newton polynomial interpolation (`math::interpolators`)
//! - Natural cubic spline interpolation (`math::interpolators`)
//! - Linear and exponential least-squares regression (`math::regression`)
//! - A tridiagonal solver for the spline system (`math::solvers`)
//! - Method dispatch and curve sampling (`estimation`)
//! - Error types: `EstimationError`, `DegenerateKind` (`types::error`)
//!
//! ## Pure Computation
//!
//! Every routine is synchronous and free of I/O and shared state. Inputs are
//! borrowed slices that are never reordered or modified; invalid inputs fail
//! fast with a structured [`EstimationError`] rather than yielding NaN.
//!
//! ## Usage Examples
//!
//! ```rust
//! use growth_core::{cubic_spline, exponential_regression, lagrange, linear_regression, newton};
//! use growth_core::math::regression::RegressionModel;
//!
//! let days = [0.0_f64, 1.0, 2.0, 3.0, 4.0];
//! let height = [1.0, 3.0, 7.0, 13.0, 21.0];
//!
//! let a = lagrange(&days, &height, 2.5).unwrap();
//! let b = newton(&days, &height, 2.5).unwrap();
//! let c = cubic_spline(&days, &height, 2.5).unwrap();
//! assert!((a - b).abs() < 1e-10);
//! assert!((a - c).abs() < 0.1);
//!
//! let line = linear_regression(&days, &height).unwrap();
//! let (slope, intercept) = line.params();
//! assert!((line.predict(2.5) - (slope * 2.5 + intercept)).abs() < 1e-12);
//!
//! let growth = exponential_regression(&days, &height).unwrap();
//! assert!(growth.predict(2.5) > 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): Dual-number evaluation of the interpolators for derivative verification

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod estimation;
pub mod math;
pub mod types;

pub use estimation::Method;
pub use math::interpolators::{cubic_spline, cubic_spline_many, lagrange, newton, Interpolator};
pub use math::regression::{exponential_regression, linear_regression, RegressionModel};
pub use types::EstimationError;
