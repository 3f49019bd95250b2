//! Natural cubic spline interpolation.

use super::Interpolator;
use crate::math::solvers::TridiagonalSystem;
use crate::types::samples::{check_query, ensure_finite};
use crate::types::{EstimationError, SampleSet};
use num_traits::Float;

#[cfg(feature = "num-dual-mode")]
use crate::types::dual::{constant, ensure_finite_dual, DualNumber};

/// Polynomial coefficients for one cubic spline segment.
///
/// Represents `y = a + b*(x-x0) + c*(x-x0)² + d*(x-x0)³` on `[x0, x0 + h]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineSegment<T: Float> {
    /// Left knot of the segment
    pub x0: T,
    /// Segment width `h`
    pub h: T,
    /// Constant term (y value at segment start)
    pub a: T,
    /// Linear coefficient
    pub b: T,
    /// Quadratic coefficient
    pub c: T,
    /// Cubic coefficient
    pub d: T,
}

impl<T: Float> SplineSegment<T> {
    /// Value of the segment's cubic at `x`.
    #[inline]
    pub fn value(&self, x: T) -> T {
        let dx = x - self.x0;
        // Horner form of a + b*dx + c*dx² + d*dx³
        self.a + dx * (self.b + dx * (self.c + dx * self.d))
    }

    /// First derivative of the segment's cubic at `x`.
    #[inline]
    pub fn derivative(&self, x: T) -> T {
        let dx = x - self.x0;
        let two = T::one() + T::one();
        let three = two + T::one();
        self.b + dx * (two * self.c + three * self.d * dx)
    }

    /// Second derivative of the segment's cubic at `x`.
    #[inline]
    pub fn second_derivative(&self, x: T) -> T {
        let dx = x - self.x0;
        let two = T::one() + T::one();
        let six = two * (two + T::one());
        two * self.c + six * self.d * dx
    }
}

#[cfg(feature = "num-dual-mode")]
impl SplineSegment<f64> {
    /// Value of the segment's cubic at a dual-number `x`.
    #[inline]
    pub fn value_dual(&self, x: DualNumber) -> DualNumber {
        let dx = x - constant(self.x0);
        constant(self.a) + dx * (constant(self.b) + dx * (constant(self.c) + dx * constant(self.d)))
    }
}

/// Natural cubic spline interpolator with C² continuity.
///
/// Solves the `n×n` tridiagonal system
///
/// ```text
/// row 0:      c'_0 = 0
/// row i:      h_{i-1} c'_{i-1} + 2(h_{i-1} + h_i) c'_i + h_i c'_{i+1}
///               = 3[(y_{i+1} - y_i)/h_i - (y_i - y_{i-1})/h_{i-1}]
/// row n-1:    c'_{n-1} = 0
/// ```
///
/// with the Thomas algorithm, then stores one [`SplineSegment`] per interval.
/// The second derivative is zero at both end knots.
///
/// # Construction
///
/// Requires at least 2 points with strictly increasing x-coordinates. Unlike
/// curve-building interpolators, input is never sorted: unsorted x is an error.
/// Two points produce a straight line.
///
/// # Extrapolation
///
/// Queries left of the first knot use the first segment; queries at or right
/// of the last knot use the last segment. Both are extended, not rejected.
///
/// # Example
///
/// ```
/// use growth_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 4.0, 9.0];
///
/// let interp = CubicSplineInterpolator::new(&xs, &ys).unwrap();
/// let y = interp.interpolate(1.5).unwrap();
/// assert!(y > 1.0 && y < 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator<T: Float> {
    /// Knot x-coordinates
    xs: Vec<T>,
    /// Polynomial coefficients for each segment
    segments: Vec<SplineSegment<T>>,
}

impl<T: Float> CubicSplineInterpolator<T> {
    /// Construct a natural cubic spline from x and y data points.
    ///
    /// # Arguments
    ///
    /// * `xs` - Strictly increasing x-coordinates
    /// * `ys` - Corresponding y-values
    ///
    /// # Returns
    ///
    /// * `Ok(CubicSplineInterpolator)` - Successfully constructed interpolator
    /// * `Err(EstimationError::DegenerateInput)` - Fewer than 2 data points
    /// * `Err(EstimationError::NonMonotonicInput)` - x not strictly increasing
    /// * `Err(EstimationError::InvalidInput)` - Mismatched lengths or non-finite values
    ///
    /// # Example
    ///
    /// ```
    /// use growth_core::math::interpolators::CubicSplineInterpolator;
    /// use growth_core::types::EstimationError;
    ///
    /// let result = CubicSplineInterpolator::new(&[0.0, 2.0, 1.0, 3.0], &[0.0, 1.0, 2.0, 3.0]);
    /// assert_eq!(result.unwrap_err(), EstimationError::NonMonotonicInput { index: 2 });
    /// ```
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, EstimationError> {
        let samples = SampleSet::new(xs, ys, 2)?.require_strictly_increasing()?;
        let segments = Self::compute_segments(samples.xs(), samples.ys())?;

        Ok(Self {
            xs: xs.to_vec(),
            segments,
        })
    }

    /// Assemble and solve the spline system, then derive per-segment coefficients.
    fn compute_segments(xs: &[T], ys: &[T]) -> Result<Vec<SplineSegment<T>>, EstimationError> {
        let n = xs.len();
        let two = T::one() + T::one();
        let three = two + T::one();

        // Interval widths h[i] = x[i+1] - x[i]
        let h: Vec<T> = xs.windows(2).map(|w| w[1] - w[0]).collect();

        // Natural boundary rows are identity rows with zero rhs
        let mut sub = vec![T::zero(); n];
        let mut diag = vec![T::one(); n];
        let mut sup = vec![T::zero(); n];
        let mut rhs = vec![T::zero(); n];

        for i in 1..n - 1 {
            sub[i] = h[i - 1];
            diag[i] = two * (h[i - 1] + h[i]);
            sup[i] = h[i];
            rhs[i] = three * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
        }

        let c_prime = TridiagonalSystem::new(sub, diag, sup)?.solve(&rhs)?;

        (0..n - 1)
            .map(|i| {
                let b = (ys[i + 1] - ys[i]) / h[i]
                    - h[i] * (two * c_prime[i] + c_prime[i + 1]) / three;
                let d = (c_prime[i + 1] - c_prime[i]) / (three * h[i]);
                Ok(SplineSegment {
                    x0: xs[i],
                    h: h[i],
                    a: ys[i],
                    b: ensure_finite(b, "spline slope coefficient")?,
                    c: ensure_finite(c_prime[i], "spline curvature coefficient")?,
                    d: ensure_finite(d, "spline cubic coefficient")?,
                })
            })
            .collect()
    }

    /// Index of the segment used for `x`.
    ///
    /// Returns the largest `i` with `xs[i] <= x`, clamped to `[0, n-2]`.
    /// At an interior knot this is the segment starting there.
    #[inline]
    pub fn segment_index(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);
        if pos == 0 {
            0
        } else if pos >= self.xs.len() {
            self.xs.len() - 2
        } else {
            pos - 1
        }
    }

    /// Per-interval polynomial coefficients, left to right.
    #[inline]
    pub fn segments(&self) -> &[SplineSegment<T>] {
        &self.segments
    }

    /// First derivative of the spline at `x`.
    pub fn derivative(&self, x: T) -> Result<T, EstimationError> {
        check_query(x)?;
        Ok(self.segments[self.segment_index(x)].derivative(x))
    }

    /// Second derivative of the spline at `x`.
    pub fn second_derivative(&self, x: T) -> Result<T, EstimationError> {
        check_query(x)?;
        Ok(self.segments[self.segment_index(x)].second_derivative(x))
    }

    /// Returns a reference to the knot x-coordinates.
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

impl<T: Float> Interpolator<T> for CubicSplineInterpolator<T> {
    /// Interpolate value at point `x` using the cubic spline.
    ///
    /// Uses binary search (O(log n)) to find the segment, then evaluates
    /// its cubic.
    fn interpolate(&self, x: T) -> Result<T, EstimationError> {
        check_query(x)?;
        ensure_finite(self.segments[self.segment_index(x)].value(x), "spline estimate")
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}

#[cfg(feature = "num-dual-mode")]
impl CubicSplineInterpolator<f64> {
    /// Evaluate at a dual-number query, using the segment selected by `x.re`.
    ///
    /// With `x.eps = 1` the result's `eps` equals [`Self::derivative`].
    pub fn interpolate_dual(&self, x: DualNumber) -> Result<DualNumber, EstimationError> {
        check_query(x.re)?;
        let segment = &self.segments[self.segment_index(x.re)];
        ensure_finite_dual(segment.value_dual(x), "spline estimate")
    }
}

/// Evaluate the natural cubic spline through the samples at `x`.
///
/// The coefficient set is computed on every call; build a
/// [`CubicSplineInterpolator`] to reuse it.
pub fn cubic_spline<T: Float>(x_points: &[T], y_points: &[T], x: T) -> Result<T, EstimationError> {
    CubicSplineInterpolator::new(x_points, y_points)?.interpolate(x)
}

/// Evaluate the natural cubic spline at every query, preserving order.
///
/// # Example
///
/// ```
/// let ys: Vec<f64> = growth_core::cubic_spline_many(&[0.0, 1.0, 2.0], &[0.0, 2.0, 4.0], &[0.5, 1.5, 3.0]).unwrap();
/// assert_eq!(ys.len(), 3);
/// assert!((ys[2] - 6.0).abs() < 1e-12);
/// ```
pub fn cubic_spline_many<T: Float>(
    x_points: &[T],
    y_points: &[T],
    queries: &[T],
) -> Result<Vec<T>, EstimationError> {
    CubicSplineInterpolator::new(x_points, y_points)?.interpolate_many(queries)
}
