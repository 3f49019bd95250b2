//! Core value and error types.
//!
//! This module provides:
//! - `samples`: Validated read-only views over `(x, y)` sample sets
//! - `dual`: Dual number type integration with num-dual for derivative checks (when `num-dual-mode` feature is enabled)
//! - `error`: Structured error types for estimation operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`SampleSet`] from `samples`
//! - [`EstimationError`], [`DegenerateKind`] from `error`

#[cfg(feature = "num-dual-mode")]
pub mod dual;
pub mod error;
pub mod samples;

// Re-export commonly used types at module level
pub use error::{DegenerateKind, EstimationError};
pub use samples::SampleSet;
