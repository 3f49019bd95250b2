//! Validated read-only views over sample point sets.

use super::{DegenerateKind, EstimationError};
use num_traits::Float;

/// A borrowed `(x, y)` sample set that has passed shape validation.
///
/// Construction checks that `xs` and `ys` have the same length, that there
/// are at least `need` points, and that every value is finite. Method-specific
/// requirements (distinct or strictly increasing x) are checked on demand with
/// [`SampleSet::require_distinct`] and [`SampleSet::require_strictly_increasing`].
///
/// The view never reorders or copies the caller's data.
///
/// # Example
///
/// ```
/// use growth_core::types::{EstimationError, SampleSet};
///
/// let samples = SampleSet::new(&[0.0, 1.0, 2.0], &[1.0, 3.0, 7.0], 2).unwrap();
/// assert_eq!(samples.len(), 3);
///
/// let err = SampleSet::new(&[0.0], &[1.0], 2).unwrap_err();
/// assert!(err.is_degenerate());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SampleSet<'a, T: Float> {
    xs: &'a [T],
    ys: &'a [T],
}

impl<'a, T: Float> SampleSet<'a, T> {
    /// Validate shape and finiteness of a sample set.
    ///
    /// # Errors
    ///
    /// * `EstimationError::InvalidInput` - Mismatched lengths or a non-finite value
    /// * `EstimationError::DegenerateInput` - Fewer than `need` points
    pub fn new(xs: &'a [T], ys: &'a [T], need: usize) -> Result<Self, EstimationError> {
        if xs.len() != ys.len() {
            return Err(EstimationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.len() < need {
            return Err(EstimationError::too_few_points(xs.len(), need));
        }

        for (i, (x, y)) in xs.iter().zip(ys.iter()).enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(EstimationError::InvalidInput(format!(
                    "non-finite sample at index {}: ({}, {})",
                    i,
                    to_f64(*x),
                    to_f64(*y)
                )));
            }
        }

        Ok(Self { xs, ys })
    }

    /// Reject sets where any two x-coordinates coincide.
    ///
    /// Reports the first coincident pair in index order.
    pub fn require_distinct(self) -> Result<Self, EstimationError> {
        for (i, &xi) in self.xs.iter().enumerate() {
            if let Some(offset) = self.xs[i + 1..].iter().position(|&xj| xj == xi) {
                return Err(EstimationError::DegenerateInput(
                    DegenerateKind::CoincidentX {
                        first: i,
                        second: i + 1 + offset,
                        x: to_f64(xi),
                    },
                ));
            }
        }
        Ok(self)
    }

    /// Reject sets whose x-coordinates are not strictly increasing.
    pub fn require_strictly_increasing(self) -> Result<Self, EstimationError> {
        match self.xs.windows(2).position(|w| w[1] <= w[0]) {
            Some(i) => Err(EstimationError::NonMonotonicInput { index: i + 1 }),
            None => Ok(self),
        }
    }

    /// Sample x-coordinates, in caller order.
    #[inline]
    pub fn xs(&self) -> &'a [T] {
        self.xs
    }

    /// Sample y-values, in caller order.
    #[inline]
    pub fn ys(&self) -> &'a [T] {
        self.ys
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the set holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Smallest and largest x-coordinate.
    pub fn x_range(&self) -> (T, T) {
        min_max(self.xs)
    }
}

/// Smallest and largest value, or `(inf, -inf)` for an empty slice.
#[inline]
pub(crate) fn min_max<T: Float>(values: &[T]) -> (T, T) {
    values
        .iter()
        .fold((T::infinity(), T::neg_infinity()), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Reject an intermediate or final value that overflowed to inf or NaN.
///
/// Finite samples can still overflow, e.g. when a sum exceeds `T::max_value()`
/// or a width is subnormal.
#[inline]
pub(crate) fn ensure_finite<T: Float>(value: T, what: &str) -> Result<T, EstimationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EstimationError::InvalidInput(format!(
            "numeric overflow: {} is not finite",
            what
        )))
    }
}

/// Reject NaN and infinite query points.
#[inline]
pub(crate) fn check_query<T: Float>(x: T) -> Result<(), EstimationError> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(EstimationError::InvalidInput(format!(
            "query point must be finite, got {}",
            to_f64(x)
        )))
    }
}

/// Lossy conversion used only for error reporting.
#[inline]
pub(crate) fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let samples = SampleSet::new(&[0.0, 1.0], &[2.0, 3.0], 2).unwrap();
        assert_eq!(samples.len(), 2);
        assert!(!samples.is_empty());
        assert_eq!(samples.xs(), &[0.0, 1.0]);
        assert_eq!(samples.ys(), &[2.0, 3.0]);
    }

    #[test]
    fn test_new_mismatched_lengths() {
        let result = SampleSet::new(&[0.0, 1.0, 2.0], &[0.0, 1.0], 2);
        match result.unwrap_err() {
            EstimationError::InvalidInput(msg) => assert!(msg.contains("same length")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_new_too_few_points() {
        let result = SampleSet::new(&[1.0], &[2.0], 2);
        assert_eq!(
            result.unwrap_err(),
            EstimationError::DegenerateInput(DegenerateKind::TooFewPoints { got: 1, need: 2 })
        );
    }

    #[test]
    fn test_new_empty() {
        let xs: [f64; 0] = [];
        let result = SampleSet::new(&xs, &xs, 2);
        assert!(result.unwrap_err().is_degenerate());
    }

    #[test]
    fn test_new_rejects_nan() {
        let result = SampleSet::new(&[0.0, f64::NAN], &[1.0, 2.0], 2);
        match result.unwrap_err() {
            EstimationError::InvalidInput(msg) => assert!(msg.contains("index 1")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_infinite_y() {
        let result = SampleSet::new(&[0.0, 1.0], &[f64::INFINITY, 2.0], 2);
        assert!(matches!(result, Err(EstimationError::InvalidInput(_))));
    }

    #[test]
    fn test_require_distinct_reports_first_pair() {
        let samples = SampleSet::new(&[0.0, 2.0, 1.0, 2.0, 0.0], &[0.0; 5], 2).unwrap();
        assert_eq!(
            samples.require_distinct().unwrap_err(),
            EstimationError::DegenerateInput(DegenerateKind::CoincidentX {
                first: 0,
                second: 4,
                x: 0.0,
            })
        );
    }

    #[test]
    fn test_require_distinct_accepts_unsorted() {
        let samples = SampleSet::new(&[3.0, 1.0, 2.0], &[0.0; 3], 2).unwrap();
        assert!(samples.require_distinct().is_ok());
    }

    #[test]
    fn test_require_strictly_increasing() {
        let samples = SampleSet::new(&[0.0, 2.0, 1.0, 3.0], &[0.0; 4], 2).unwrap();
        assert_eq!(
            samples.require_strictly_increasing().unwrap_err(),
            EstimationError::NonMonotonicInput { index: 2 }
        );
    }

    #[test]
    fn test_require_strictly_increasing_rejects_plateau() {
        let samples = SampleSet::new(&[0.0, 1.0, 1.0], &[0.0; 3], 2).unwrap();
        assert_eq!(
            samples.require_strictly_increasing().unwrap_err(),
            EstimationError::NonMonotonicInput { index: 2 }
        );
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite(2.5_f64, "slope"), Ok(2.5));
        match ensure_finite(f64::INFINITY, "slope").unwrap_err() {
            EstimationError::InvalidInput(msg) => {
                assert_eq!(msg, "numeric overflow: slope is not finite")
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
        assert!(ensure_finite(f64::NAN, "value").is_err());
    }

    #[test]
    fn test_min_max_empty() {
        let empty: [f64; 0] = [];
        assert_eq!(min_max(&empty), (f64::INFINITY, f64::NEG_INFINITY));
        assert_eq!(min_max(&[1.0, -2.0]), (-2.0, 1.0));
    }

    #[test]
    fn test_x_range_unsorted() {
        let samples = SampleSet::new(&[3.0, -1.0, 2.0], &[0.0; 3], 2).unwrap();
        assert_eq!(samples.x_range(), (-1.0, 3.0));
    }
}
