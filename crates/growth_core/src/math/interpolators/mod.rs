//! Interpolation methods for growth estimation.
//!
//! This module provides the three interpolating estimators. All of them pass
//! exactly through every sample and are generic over `T: Float` type
//! parameters.
//!
//! ## Available Interpolators
//!
//! - [`LagrangeInterpolator`]: Global polynomial, Lagrange basis form
//! - [`NewtonInterpolator`]: Global polynomial, divided-difference form
//! - [`CubicSplineInterpolator`]: Natural cubic spline with C² continuity
//!
//! ## Core Trait
//!
//! All interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, EstimationError>`: Compute interpolated value
//! - `interpolate_many(xs: &[T])`: Order-preserving batch evaluation
//! - `domain() -> (T, T)`: Sample range; queries outside it are extrapolated
//!
//! ## AD Compatibility
//!
//! All interpolators are generic over `T: num_traits::Float` and run on `f64`
//! and `f32`. `num_dual::Dual64` does not implement `Float`, so with the
//! `num-dual-mode` feature each `f64` interpolator also provides
//! `interpolate_dual`, which evaluates the same polynomial in dual arithmetic
//! and returns `dy/dx` in the `eps` part.
//!
//! ## Example
//!
//! ```
//! use growth_core::math::interpolators::{
//!     CubicSplineInterpolator, Interpolator, LagrangeInterpolator, NewtonInterpolator,
//! };
//!
//! let xs: [f64; 5] = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let ys = [1.0, 3.0, 7.0, 13.0, 21.0];
//!
//! let lagrange = LagrangeInterpolator::new(&xs, &ys).unwrap();
//! let newton = NewtonInterpolator::new(&xs, &ys).unwrap();
//! let spline = CubicSplineInterpolator::new(&xs, &ys).unwrap();
//!
//! let a = lagrange.interpolate(2.5).unwrap();
//! let b = newton.interpolate(2.5).unwrap();
//! let c = spline.interpolate(2.5).unwrap();
//! assert!((a - b).abs() < 1e-10);
//! assert!((a - c).abs() < 0.1);
//! ```

mod cubic_spline;
mod lagrange;
mod newton;
mod traits;

// Re-export public types at module level
pub use cubic_spline::{cubic_spline, cubic_spline_many, CubicSplineInterpolator, SplineSegment};
pub use lagrange::{lagrange, LagrangeInterpolator};
pub use newton::{newton, DividedDifferenceTable, NewtonInterpolator};
pub use traits::Interpolator;
