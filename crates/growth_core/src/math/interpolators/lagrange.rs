//! Lagrange polynomial interpolation.

use super::Interpolator;
use crate::types::samples::{check_query, ensure_finite, min_max};
use crate::types::{EstimationError, SampleSet};
use num_traits::Float;

#[cfg(feature = "num-dual-mode")]
use crate::types::dual::{constant, ensure_finite_dual, DualNumber};

/// Global polynomial interpolator in Lagrange form.
///
/// Evaluates the unique polynomial of degree `n - 1` through `n` samples by
/// summing `y_i * L_i(x)`, where
///
/// ```text
/// L_i(x) = Π_{j≠i} (x - x_j) / (x_i - x_j)
/// ```
///
/// Each query costs O(n²); nothing is reused between queries.
///
/// # Construction
///
/// Requires at least 2 samples with pairwise-distinct x-coordinates. The
/// samples are kept in caller order; no sorting is performed.
///
/// # Example
///
/// ```
/// use growth_core::math::interpolators::{Interpolator, LagrangeInterpolator};
///
/// // y = x² + x + 1
/// let interp = LagrangeInterpolator::new(&[0.0_f64, 1.0, 2.0], &[1.0, 3.0, 7.0]).unwrap();
/// let y = interp.interpolate(1.5).unwrap();
/// assert!((y - 4.75).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LagrangeInterpolator<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: Float> LagrangeInterpolator<T> {
    /// Construct an interpolator from x and y data points.
    ///
    /// # Errors
    ///
    /// * `EstimationError::DegenerateInput` - Fewer than 2 points or coincident x-values
    /// * `EstimationError::InvalidInput` - Mismatched lengths or non-finite values
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, EstimationError> {
        let samples = SampleSet::new(xs, ys, 2)?.require_distinct()?;
        Ok(Self {
            xs: samples.xs().to_vec(),
            ys: samples.ys().to_vec(),
        })
    }

    /// Evaluate the `i`-th Lagrange basis polynomial at `x`.
    #[inline]
    fn basis(&self, i: usize, x: T) -> T {
        let xi = self.xs[i];
        self.xs
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold(T::one(), |acc, (_, &xj)| acc * (x - xj) / (xi - xj))
    }

    /// Returns a reference to the x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl<T: Float> Interpolator<T> for LagrangeInterpolator<T> {
    fn interpolate(&self, x: T) -> Result<T, EstimationError> {
        check_query(x)?;
        let value = self
            .ys
            .iter()
            .enumerate()
            .fold(T::zero(), |acc, (i, &yi)| acc + yi * self.basis(i, x));
        ensure_finite(value, "Lagrange estimate")
    }

    fn domain(&self) -> (T, T) {
        min_max(&self.xs)
    }
}

#[cfg(feature = "num-dual-mode")]
impl LagrangeInterpolator<f64> {
    /// Evaluate at a dual-number query.
    ///
    /// With `x.eps = 1` the result's `eps` is `dp/dx` at `x.re`.
    pub fn interpolate_dual(&self, x: DualNumber) -> Result<DualNumber, EstimationError> {
        check_query(x.re)?;
        let mut value = constant(0.0);
        for (i, (&xi, &yi)) in self.xs.iter().zip(self.ys.iter()).enumerate() {
            let mut term = constant(yi);
            for (j, &xj) in self.xs.iter().enumerate() {
                if j != i {
                    term = term * (x - constant(xj)) / constant(xi - xj);
                }
            }
            value = value + term;
        }
        ensure_finite_dual(value, "Lagrange estimate")
    }
}

/// Estimate `y` at `x` by Lagrange interpolation through all samples.
///
/// # Example
///
/// ```
/// let y: f64 = growth_core::lagrange(&[0.0, 1.0, 2.0, 3.0, 4.0], &[1.0, 3.0, 7.0, 13.0, 21.0], 2.5).unwrap();
/// assert!((y - 9.75).abs() < 1e-12);
/// ```
pub fn lagrange<T: Float>(x_points: &[T], y_points: &[T], x: T) -> Result<T, EstimationError> {
    LagrangeInterpolator::new(x_points, y_points)?.interpolate(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DegenerateKind;
    use approx::assert_relative_eq;

    #[test]
    fn test_passes_through_samples() {
        let xs = [0.0, 1.5, 4.0, 7.0, 8.5];
        let ys = [2.0, -1.0, 3.5, 0.25, 10.0];
        let interp = LagrangeInterpolator::new(&xs, &ys).unwrap();

        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(interp.interpolate(*x).unwrap(), *y, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_two_points_is_linear() {
        let y = lagrange(&[1.0, 3.0], &[2.0, 6.0], 2.0).unwrap();
        assert_relative_eq!(y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reproduces_cubic() {
        // y = x³ - 2x
        let f = |x: f64| x * x * x - 2.0 * x;
        let xs = [-1.0, 0.5, 2.0, 3.0];
        let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();

        for q in [-0.75, 1.25, 2.6] {
            assert_relative_eq!(lagrange(&xs, &ys, q).unwrap(), f(q), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_unsorted_samples() {
        let sorted = lagrange(&[0.0, 1.0, 2.0], &[1.0, 3.0, 7.0], 0.5).unwrap();
        let shuffled = lagrange(&[2.0, 0.0, 1.0], &[7.0, 1.0, 3.0], 0.5).unwrap();
        assert_relative_eq!(sorted, shuffled, epsilon = 1e-12);
    }

    #[test]
    fn test_extrapolation_is_evaluated() {
        // y = x² + x + 1 at x = 10
        let interp = LagrangeInterpolator::new(&[0.0, 1.0, 2.0], &[1.0, 3.0, 7.0]).unwrap();
        assert!(interp.is_extrapolating(10.0));
        assert_relative_eq!(interp.interpolate(10.0).unwrap(), 111.0, epsilon = 1e-9);
    }

    #[test]
    fn test_single_point_rejected() {
        let err = lagrange(&[1.0], &[2.0], 0.5).unwrap_err();
        assert_eq!(
            err,
            EstimationError::DegenerateInput(DegenerateKind::TooFewPoints { got: 1, need: 2 })
        );
    }

    #[test]
    fn test_coincident_x_rejected() {
        let err = lagrange(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0], 0.5).unwrap_err();
        assert!(matches!(
            err,
            EstimationError::DegenerateInput(DegenerateKind::CoincidentX {
                first: 1,
                second: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_nan_query_rejected() {
        let err = lagrange(&[0.0, 1.0], &[0.0, 1.0], f64::NAN).unwrap_err();
        assert!(matches!(err, EstimationError::InvalidInput(_)));
    }

    #[test]
    fn test_subnormal_spacing_reports_overflow() {
        // Distinct but 5e-324 apart: the basis overflows
        let err = lagrange(&[0.0, 5e-324, 1.0], &[0.0, 1.0, 0.0], 0.5).unwrap_err();
        match err {
            EstimationError::InvalidInput(msg) => assert!(msg.contains("numeric overflow")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_domain_unsorted() {
        let interp = LagrangeInterpolator::new(&[2.0, -1.0, 5.0], &[0.0; 3]).unwrap();
        assert_eq!(interp.domain(), (-1.0, 5.0));
        assert_eq!(interp.len(), 3);
    }
}
