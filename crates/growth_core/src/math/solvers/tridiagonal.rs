//! Thomas algorithm for tridiagonal linear systems.

use crate::types::EstimationError;
use num_traits::Float;

/// A square tridiagonal matrix stored as three diagonals.
///
/// Row `i` reads `sub[i] * x[i-1] + diag[i] * x[i] + sup[i] * x[i+1]`.
/// `sub[0]` and `sup[n-1]` lie outside the matrix and are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalSystem<T: Float> {
    sub: Vec<T>,
    diag: Vec<T>,
    sup: Vec<T>,
}

impl<T: Float> TridiagonalSystem<T> {
    /// Build a system from its three diagonals.
    ///
    /// # Errors
    ///
    /// * `EstimationError::InvalidInput` - Diagonals of different lengths
    /// * `EstimationError::DegenerateInput` - Empty system
    pub fn new(sub: Vec<T>, diag: Vec<T>, sup: Vec<T>) -> Result<Self, EstimationError> {
        if sub.len() != diag.len() || sup.len() != diag.len() {
            return Err(EstimationError::InvalidInput(format!(
                "diagonals must have same length: got {}, {} and {}",
                sub.len(),
                diag.len(),
                sup.len()
            )));
        }
        if diag.is_empty() {
            return Err(EstimationError::too_few_points(0, 1));
        }
        Ok(Self { sub, diag, sup })
    }

    /// Dimension of the system.
    #[inline]
    pub fn len(&self) -> usize {
        self.diag.len()
    }

    /// Returns true for a 0x0 system (never true for a constructed system).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diag.is_empty()
    }

    /// Solve `A x = rhs` by forward elimination and back substitution.
    ///
    /// No pivoting is performed; the spline systems this is used for are
    /// strictly diagonally dominant.
    ///
    /// # Errors
    ///
    /// * `EstimationError::InvalidInput` - `rhs` length differs from the system size
    /// * `EstimationError::SingularSystem` - A pivot vanished during elimination
    pub fn solve(&self, rhs: &[T]) -> Result<Vec<T>, EstimationError> {
        let n = self.len();
        if rhs.len() != n {
            return Err(EstimationError::InvalidInput(format!(
                "rhs length {} does not match system size {}",
                rhs.len(),
                n
            )));
        }

        let mut c_star: Vec<T> = Vec::with_capacity(n);
        let mut d_star: Vec<T> = Vec::with_capacity(n);

        // Forward elimination
        for i in 0..n {
            let (denom, d_prev) = if i == 0 {
                (self.diag[0], T::zero())
            } else {
                (
                    self.diag[i] - self.sub[i] * c_star[i - 1],
                    self.sub[i] * d_star[i - 1],
                )
            };
            if denom == T::zero() || !denom.is_finite() {
                return Err(EstimationError::SingularSystem { row: i });
            }
            c_star.push(self.sup[i] / denom);
            d_star.push((rhs[i] - d_prev) / denom);
        }

        // Back substitution
        let mut x = d_star;
        for i in (0..n - 1).rev() {
            x[i] = x[i] - c_star[i] * x[i + 1];
        }

        Ok(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_system() {
        let system =
            TridiagonalSystem::new(vec![0.0; 3], vec![1.0; 3], vec![0.0; 3]).unwrap();
        let x = system.solve(&[4.0, -2.0, 7.5]).unwrap();
        assert_eq!(x, vec![4.0, -2.0, 7.5]);
    }

    #[test]
    fn test_single_row() {
        let system = TridiagonalSystem::new(vec![0.0], vec![4.0], vec![0.0]).unwrap();
        let x = system.solve(&[2.0]).unwrap();
        assert_relative_eq!(x[0], 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_known_solution() {
        // Solution x = [1, -1, 2, 0.5]
        let sub = vec![0.0, 1.0, 2.0, 1.0];
        let diag = vec![4.0, 5.0, 6.0, 3.0];
        let sup = vec![1.0, 2.0, 1.0, 0.0];
        let expected = [1.0, -1.0, 2.0, 0.5];
        let rhs: Vec<f64> = (0..4)
            .map(|i| {
                let left = if i > 0 { sub[i] * expected[i - 1] } else { 0.0 };
                let right = if i < 3 { sup[i] * expected[i + 1] } else { 0.0 };
                left + diag[i] * expected[i] + right
            })
            .collect();

        let system = TridiagonalSystem::new(sub, diag, sup).unwrap();
        let x = system.solve(&rhs).unwrap();
        for (got, want) in x.iter().zip(expected.iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_mismatched_diagonals() {
        let result = TridiagonalSystem::new(vec![0.0; 2], vec![1.0; 3], vec![0.0; 3]);
        assert!(matches!(result, Err(EstimationError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_system() {
        let result = TridiagonalSystem::<f64>::new(vec![], vec![], vec![]);
        assert!(result.unwrap_err().is_degenerate());
    }

    #[test]
    fn test_rhs_length_mismatch() {
        let system =
            TridiagonalSystem::new(vec![0.0; 2], vec![1.0; 2], vec![0.0; 2]).unwrap();
        assert!(matches!(
            system.solve(&[1.0]),
            Err(EstimationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_pivot() {
        let system =
            TridiagonalSystem::new(vec![0.0, 1.0], vec![1.0, 1.0], vec![1.0, 0.0]).unwrap();
        assert_eq!(
            system.solve(&[1.0, 1.0]).unwrap_err(),
            EstimationError::SingularSystem { row: 1 }
        );
    }
}
