//! Dual number type integration for derivative verification.
//!
//! `Dual64` does not implement `num_traits::Float`, so it cannot flow through
//! the generic estimators. Instead each `f64` interpolator offers an
//! `interpolate_dual` method that evaluates the same polynomial with dual
//! arithmetic. Seeding the query with `eps = 1` yields the value and its exact
//! first derivative with respect to `x` in a single pass.
//!
//! ## Usage
//!
//! ```
//! use growth_core::types::dual::DualNumber;
//! use growth_core::math::interpolators::CubicSplineInterpolator;
//!
//! let xs = [0.0_f64, 1.0, 2.0, 3.0];
//! let ys = [1.0_f64, 3.0, 7.0, 13.0];
//! let spline = CubicSplineInterpolator::new(&xs, &ys).unwrap();
//!
//! // Seed dx/dx = 1 to obtain dy/dx in `eps`
//! let y = spline.interpolate_dual(DualNumber::new(1.5, 1.0)).unwrap();
//! assert!((y.eps - spline.derivative(1.5).unwrap()).abs() < 1e-12);
//!
//! let product = DualNumber::new(2.0, 1.0) * DualNumber::new(3.0, 0.0);
//! assert_eq!((product.re, product.eps), (6.0, 3.0));
//! ```

use crate::types::EstimationError;

/// Type alias for num-dual's Dual64 (f64-based dual numbers).
///
/// - `re`: Real part (function value)
/// - `eps`: Dual part (derivative)
pub type DualNumber = num_dual::Dual64;

/// Lift a plain coefficient into a constant dual number.
#[inline]
pub(crate) fn constant(value: f64) -> DualNumber {
    DualNumber::new(value, 0.0)
}

/// Both parts of `value` must be finite.
pub(crate) fn ensure_finite_dual(
    value: DualNumber,
    what: &str,
) -> Result<DualNumber, EstimationError> {
    if value.re.is_finite() && value.eps.is_finite() {
        Ok(value)
    } else {
        Err(EstimationError::InvalidInput(format!(
            "numeric overflow: {} is not finite",
            what
        )))
    }
}
