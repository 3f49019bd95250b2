//! Integration tests for dual-number derivatives through the public API.
//!
//! `num_dual::Dual64` does not implement `num_traits::Float`, so the generic
//! estimators run on `f64` and expose `interpolate_dual` for the derivative.

#![cfg(feature = "num-dual-mode")]

use approx::assert_relative_eq;
use growth_core::math::interpolators::{
    CubicSplineInterpolator, LagrangeInterpolator, NewtonInterpolator,
};
use growth_core::math::regression::{exponential_regression, RegressionModel};
use growth_core::types::dual::DualNumber;

const DAYS: [f64; 5] = [0.0, 1.0, 2.0, 3.0, 4.0];
const HEIGHT: [f64; 5] = [1.0, 3.0, 7.0, 13.0, 21.0];

/// DualNumber alias is accessible and carries value and derivative.
#[test]
fn test_dual_number_type_accessible() {
    let dual = DualNumber::new(3.0, 1.0);
    assert_eq!(dual.re, 3.0);
    assert_eq!(dual.eps, 1.0);
}

/// Basic arithmetic propagates derivatives.
#[test]
fn test_dual_number_arithmetic() {
    let a = DualNumber::new(2.0, 1.0);
    let b = DualNumber::new(3.0, 0.0);

    let prod = a * b;
    assert_relative_eq!(prod.re, 6.0, epsilon = 1e-10);
    assert_relative_eq!(prod.eps, 3.0, epsilon = 1e-10);

    // d(a/b)/da = 1/b
    let quot = a / b;
    assert_relative_eq!(quot.re, 2.0 / 3.0, epsilon = 1e-10);
    assert_relative_eq!(quot.eps, 1.0 / 3.0, epsilon = 1e-10);
}

/// Growth rate of the scenario data at day 2.5 (`d/dx (x²+x+1) = 2x+1`).
#[test]
fn test_polynomial_growth_rate() {
    let query = DualNumber::new(2.5, 1.0);

    let lagrange = LagrangeInterpolator::new(&DAYS, &HEIGHT).unwrap();
    let newton = NewtonInterpolator::new(&DAYS, &HEIGHT).unwrap();

    let a = lagrange.interpolate_dual(query).unwrap();
    let b = newton.interpolate_dual(query).unwrap();

    assert_relative_eq!(a.re, 9.75, epsilon = 1e-10);
    assert_relative_eq!(a.eps, 6.0, epsilon = 1e-10);
    assert_relative_eq!(b.re, 9.75, epsilon = 1e-10);
    assert_relative_eq!(b.eps, 6.0, epsilon = 1e-10);
}

/// Spline derivative from duals matches the segment's analytic derivative.
#[test]
fn test_spline_growth_rate() {
    let spline = CubicSplineInterpolator::new(&DAYS, &HEIGHT).unwrap();

    let y = spline.interpolate_dual(DualNumber::new(2.5, 1.0)).unwrap();
    assert_relative_eq!(y.re, 545.0 / 56.0, epsilon = 1e-12);
    assert_relative_eq!(y.eps, spline.derivative(2.5).unwrap(), epsilon = 1e-12);
}

/// Growth rate of a fitted exponential, `d/dx a·e^(bx) = b·a·e^(bx)`.
#[test]
fn test_exponential_fit_growth_rate() {
    use num_dual::DualNum;

    let fit = exponential_regression(&DAYS, &HEIGHT).unwrap();
    let (rate, log_amplitude) = fit.params();

    let x = DualNumber::new(2.5, 1.0);
    let y = (DualNumber::from(log_amplitude) + DualNumber::from(rate) * x).exp();

    assert_relative_eq!(y.re, fit.predict(2.5), epsilon = 1e-10);
    assert_relative_eq!(y.eps, rate * fit.predict(2.5), epsilon = 1e-10);
}

/// Overflow is reported for dual evaluation as well.
#[test]
fn test_dual_overflow_reported() {
    let newton = NewtonInterpolator::new(&DAYS, &HEIGHT).unwrap();
    let err = newton.interpolate_dual(DualNumber::new(1e200, 1.0)).unwrap_err();
    assert_eq!(
        err,
        growth_core::EstimationError::InvalidInput(
            "numeric overflow: Newton estimate is not finite".to_string()
        )
    );
}
