//! Numerical methods.
//!
//! - `interpolators`: Lagrange, Newton, and natural cubic spline interpolation
//! - `regression`: Linear and log-linearised exponential least squares
//! - `solvers`: Tridiagonal linear system solver

pub mod interpolators;
pub mod regression;
pub mod solvers;
