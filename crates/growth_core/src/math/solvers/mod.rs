//! Linear system solvers for numerical computation.
//!
//! ## Available Solvers
//!
//! - [`TridiagonalSystem`]: O(n) Thomas algorithm for tridiagonal systems,
//!   used by the natural cubic spline to recover its second-derivative terms
//!
//! ## Example
//!
//! ```
//! use growth_core::math::solvers::TridiagonalSystem;
//!
//! // | 2 1 0 | |x0|   |3|
//! // | 1 2 1 | |x1| = |4|
//! // | 0 1 2 | |x2|   |3|
//! let system = TridiagonalSystem::new(
//!     vec![0.0_f64, 1.0, 1.0],
//!     vec![2.0, 2.0, 2.0],
//!     vec![1.0, 1.0, 0.0],
//! )
//! .unwrap();
//!
//! let x = system.solve(&[3.0, 4.0, 3.0]).unwrap();
//! assert!((x[0] - 1.0).abs() < 1e-12);
//! assert!((x[1] - 1.0).abs() < 1e-12);
//! assert!((x[2] - 1.0).abs() < 1e-12);
//! ```

mod tridiagonal;

// Re-export public types at module level
pub use tridiagonal::TridiagonalSystem;
