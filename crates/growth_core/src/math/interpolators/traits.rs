//! Shared interface for one-dimensional interpolators.

use crate::types::EstimationError;
use num_traits::Float;

/// One-dimensional interpolation over a fixed sample set.
///
/// Implementors validate their sample set at construction, so `interpolate`
/// only fails for a non-finite query. Queries outside [`Interpolator::domain`]
/// are extrapolated, never rejected.
pub trait Interpolator<T: Float> {
    /// Estimate the value at `x`.
    fn interpolate(&self, x: T) -> Result<T, EstimationError>;

    /// Smallest and largest sample x-coordinate.
    fn domain(&self) -> (T, T);

    /// Estimate every query in order.
    ///
    /// Each element is resolved independently; the output has the same
    /// length and order as `xs`.
    fn interpolate_many(&self, xs: &[T]) -> Result<Vec<T>, EstimationError> {
        xs.iter().map(|&x| self.interpolate(x)).collect()
    }

    /// Returns true if `x` lies outside the sample range.
    fn is_extrapolating(&self, x: T) -> bool {
        let (lo, hi) = self.domain();
        x < lo || x > hi
    }
}
