//! Newton divided-difference interpolation.

use super::Interpolator;
use crate::types::samples::{check_query, ensure_finite, min_max};
use crate::types::{EstimationError, SampleSet};
use num_traits::Float;

#[cfg(feature = "num-dual-mode")]
use crate::types::dual::{constant, ensure_finite_dual, DualNumber};

/// Triangular table of divided differences.
///
/// Entry `(row, order)` holds `f[x_row, ..., x_{row+order}]`:
///
/// ```text
/// f[row][0]     = y_row
/// f[row][order] = (f[row+1][order-1] - f[row][order-1]) / (x_{row+order} - x_row)
/// ```
///
/// Row `i` holds `n - i` entries. The first row carries the Newton-form
/// coefficients.
///
/// # Example
///
/// ```
/// use growth_core::math::interpolators::DividedDifferenceTable;
///
/// let table = DividedDifferenceTable::new(&[0.0, 1.0, 2.0], &[1.0, 3.0, 7.0]).unwrap();
/// assert_eq!(table.coefficients(), &[1.0, 2.0, 1.0]);
/// assert_eq!(table.get(1, 1), Some(4.0));
/// assert_eq!(table.get(2, 1), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DividedDifferenceTable<T: Float> {
    rows: Vec<Vec<T>>,
}

impl<T: Float> DividedDifferenceTable<T> {
    /// Build the table from a sample set.
    ///
    /// # Errors
    ///
    /// * `EstimationError::DegenerateInput` - Fewer than 2 points or coincident x-values
    /// * `EstimationError::InvalidInput` - Mismatched lengths, non-finite values,
    ///   or a divided difference that overflows
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, EstimationError> {
        let samples = SampleSet::new(xs, ys, 2)?.require_distinct()?;
        Self::build(samples.xs(), samples.ys())
    }

    /// Fill the table column by column. Inputs are already validated.
    fn build(xs: &[T], ys: &[T]) -> Result<Self, EstimationError> {
        let n = xs.len();
        let mut rows: Vec<Vec<T>> = (0..n)
            .map(|i| {
                let mut row = Vec::with_capacity(n - i);
                row.push(ys[i]);
                row
            })
            .collect();

        for order in 1..n {
            for i in 0..n - order {
                let value =
                    (rows[i + 1][order - 1] - rows[i][order - 1]) / (xs[i + order] - xs[i]);
                rows[i].push(ensure_finite(value, "divided difference")?);
            }
        }

        Ok(Self { rows })
    }

    /// Entry at `(row, order)`, or `None` outside the triangle.
    #[inline]
    pub fn get(&self, row: usize, order: usize) -> Option<T> {
        self.rows.get(row).and_then(|r| r.get(order)).copied()
    }

    /// Newton-form coefficients `f[0][0], f[0][1], ..., f[0][n-1]`.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.rows[0]
    }

    /// Number of samples the table was built from.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table is empty (never true for a built table).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Global polynomial interpolator in Newton form.
///
/// Produces the same polynomial as [`super::LagrangeInterpolator`] through a
/// divided-difference table, evaluated by accumulating
///
/// ```text
/// p(x) = f[0][0] + Σ_i f[0][i] · Π_{k<i} (x - x_k)
/// ```
///
/// # Example
///
/// ```
/// use growth_core::math::interpolators::{Interpolator, NewtonInterpolator};
///
/// let interp = NewtonInterpolator::new(&[0.0_f64, 1.0, 2.0], &[1.0, 3.0, 7.0]).unwrap();
/// let y = interp.interpolate(1.5).unwrap();
/// assert!((y - 4.75).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonInterpolator<T: Float> {
    xs: Vec<T>,
    table: DividedDifferenceTable<T>,
}

impl<T: Float> NewtonInterpolator<T> {
    /// Construct an interpolator from x and y data points.
    ///
    /// # Errors
    ///
    /// * `EstimationError::DegenerateInput` - Fewer than 2 points or coincident x-values
    /// * `EstimationError::InvalidInput` - Mismatched lengths or non-finite values
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, EstimationError> {
        let table = DividedDifferenceTable::new(xs, ys)?;
        Ok(Self {
            xs: xs.to_vec(),
            table,
        })
    }

    /// The divided-difference table backing this interpolator.
    #[inline]
    pub fn table(&self) -> &DividedDifferenceTable<T> {
        &self.table
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

impl<T: Float> Interpolator<T> for NewtonInterpolator<T> {
    fn interpolate(&self, x: T) -> Result<T, EstimationError> {
        check_query(x)?;
        let coeffs = self.table.coefficients();

        let mut result = coeffs[0];
        let mut product = T::one();
        for i in 1..coeffs.len() {
            product = product * (x - self.xs[i - 1]);
            result = result + coeffs[i] * product;
        }

        ensure_finite(result, "Newton estimate")
    }

    fn domain(&self) -> (T, T) {
        min_max(&self.xs)
    }
}

#[cfg(feature = "num-dual-mode")]
impl NewtonInterpolator<f64> {
    /// Evaluate the Newton form at a dual-number query.
    ///
    /// With `x.eps = 1` the result's `eps` is `dp/dx` at `x.re`.
    pub fn interpolate_dual(&self, x: DualNumber) -> Result<DualNumber, EstimationError> {
        check_query(x.re)?;
        let coeffs = self.table.coefficients();

        let mut result = constant(coeffs[0]);
        let mut product = constant(1.0);
        for i in 1..coeffs.len() {
            product = product * (x - constant(self.xs[i - 1]));
            result = result + constant(coeffs[i]) * product;
        }

        ensure_finite_dual(result, "Newton estimate")
    }
}

/// Estimate `y` at `x` by Newton divided-difference interpolation.
///
/// The table is rebuilt on every call.
pub fn newton<T: Float>(x_points: &[T], y_points: &[T], x: T) -> Result<T, EstimationError> {
    NewtonInterpolator::new(x_points, y_points)?.interpolate(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DegenerateKind;
    use approx::assert_relative_eq;

    #[test]
    fn test_table_layout() {
        // y = x² + x + 1
        let table =
            DividedDifferenceTable::new(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 7.0, 13.0]).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.coefficients(), &[1.0, 2.0, 1.0, 0.0]);

        // First-order differences
        assert_eq!(table.get(0, 1), Some(2.0));
        assert_eq!(table.get(1, 1), Some(4.0));
        assert_eq!(table.get(2, 1), Some(6.0));
        // Second-order differences are constant for a quadratic
        assert_eq!(table.get(0, 2), Some(1.0));
        assert_eq!(table.get(1, 2), Some(1.0));
        // Outside the triangle
        assert_eq!(table.get(3, 1), None);
        assert_eq!(table.get(4, 0), None);
    }

    #[test]
    fn test_passes_through_samples() {
        let xs = [0.0, 1.5, 4.0, 7.0, 8.5];
        let ys = [2.0, -1.0, 3.5, 0.25, 10.0];
        let interp = NewtonInterpolator::new(&xs, &ys).unwrap();

        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(interp.interpolate(*x).unwrap(), *y, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_irregular_spacing() {
        // y = 2x³ - x + 4
        let f = |x: f64| 2.0 * x * x * x - x + 4.0;
        let xs = [0.0, 0.3, 1.7, 2.0, 5.5];
        let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();

        assert_relative_eq!(newton(&xs, &ys, 3.1).unwrap(), f(3.1), epsilon = 1e-9);
    }

    #[test]
    fn test_single_point_rejected() {
        let err = newton(&[1.0], &[2.0], 0.5).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_coincident_x_rejected_before_division() {
        let err = DividedDifferenceTable::new(&[0.0, 2.0, 0.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            EstimationError::DegenerateInput(DegenerateKind::CoincidentX {
                first: 0,
                second: 2,
                x: 0.0,
            })
        );
    }

    #[test]
    fn test_mismatched_lengths() {
        let err = newton(&[0.0, 1.0, 2.0], &[0.0, 1.0], 0.5).unwrap_err();
        assert!(matches!(err, EstimationError::InvalidInput(_)));
    }

    #[test]
    fn test_with_f32() {
        let y = newton(&[0.0_f32, 1.0, 2.0], &[1.0, 3.0, 7.0], 1.5).unwrap();
        assert!((y - 4.75).abs() < 1e-5);
    }

    #[test]
    fn test_subnormal_spacing_reports_overflow() {
        let err = newton(&[0.0, 5e-324, 1.0], &[0.0, 1.0, 0.0], 0.5).unwrap_err();
        match err {
            EstimationError::InvalidInput(msg) => {
                assert_eq!(msg, "numeric overflow: divided difference is not finite")
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
