//! Splitting a matrix into quadrants and assembling quadrants back.

use crate::element::Element;
use crate::error::{check_same_dimension, MatmulError};
use crate::matrix_types::Matrix;

/// The four equally sized blocks of a square matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadrants<T> {
    pub q11: Matrix<T>,
    pub q12: Matrix<T>,
    pub q21: Matrix<T>,
    pub q22: Matrix<T>,
}

impl<T: Element> Quadrants<T> {
    /// Side length of each quadrant.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.q11.dimension()
    }

    /// Assemble back into one matrix. See [`combine`].
    pub fn combine(&self) -> Result<Matrix<T>, MatmulError> {
        combine(&self.q11, &self.q12, &self.q21, &self.q22)
    }
}

/// Split an n x n matrix into four independent (n/2) x (n/2) copies.
///
/// Fails with `InvalidDimension` when n is odd (a 1x1 matrix cannot be split).
pub fn partition<T: Element>(m: &Matrix<T>) -> Result<Quadrants<T>, MatmulError> {
    let [q11, q12, q21, q22] = m.view().quadrants()?.map(|q| q.to_matrix());
    Ok(Quadrants { q11, q12, q21, q22 })
}

/// Place four k x k quadrants into a fresh 2k x 2k matrix.
///
/// Fails with `DimensionMismatch` when the quadrants differ in size.
pub fn combine<T: Element>(
    c11: &Matrix<T>,
    c12: &Matrix<T>,
    c21: &Matrix<T>,
    c22: &Matrix<T>,
) -> Result<Matrix<T>, MatmulError> {
    let k = c11.dimension();
    for other in [c12, c21, c22] {
        check_same_dimension(k, other.dimension())?;
    }
    Ok(assemble(c11, c12, c21, c22))
}

/// Unchecked [`combine`] for the multipliers, whose quadrants always agree.
pub(crate) fn assemble<T: Element>(
    c11: &Matrix<T>,
    c12: &Matrix<T>,
    c21: &Matrix<T>,
    c22: &Matrix<T>,
) -> Matrix<T> {
    let k = c11.dimension();
    let n = 2 * k;
    let mut data = Vec::with_capacity(n * n);
    for (left, right) in [(c11, c12), (c21, c22)] {
        for i in 0..k {
            data.extend_from_slice(left.row(i));
            data.extend_from_slice(right.row(i));
        }
    }
    Matrix::from_parts(n, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: usize) -> Matrix<i64> {
        Matrix::from_fn(n, |i, j| (i * n + j) as i64).unwrap()
    }

    #[test]
    fn partition_offsets() {
        let m = sample(4);
        let q = partition(&m).unwrap();
        assert_eq!(q.dimension(), 2);
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(q.q11[(i, j)], m[(i, j)]);
                assert_eq!(q.q12[(i, j)], m[(i, j + 2)]);
                assert_eq!(q.q21[(i, j)], m[(i + 2, j)]);
                assert_eq!(q.q22[(i, j)], m[(i + 2, j + 2)]);
            }
        }
    }

    #[test]
    fn partition_then_combine_is_identity() {
        for n in [2, 4, 6, 8] {
            let m = sample(n);
            let q = partition(&m).unwrap();
            assert_eq!(q.combine().unwrap(), m, "n={n}");
        }
    }

    #[test]
    fn partition_rejects_odd() {
        assert!(matches!(
            partition(&sample(3)),
            Err(MatmulError::InvalidDimension { dimension: 3, .. })
        ));
        assert!(matches!(
            partition(&sample(1)),
            Err(MatmulError::InvalidDimension { dimension: 1, .. })
        ));
    }

    #[test]
    fn quadrants_are_deep_copies() {
        let m = sample(4);
        let q = partition(&m).unwrap();

        // Rebuild q11 with a changed cell; parent and siblings are untouched.
        let mut rows = q.q11.to_rows();
        rows[0][0] = -1;
        let changed = Matrix::from_rows(rows).unwrap();
        assert_eq!(m[(0, 0)], 0);
        assert_eq!(q.q11[(0, 0)], 0);

        let rebuilt = combine(&changed, &q.q12, &q.q21, &q.q22).unwrap();
        assert_eq!(rebuilt[(0, 0)], -1);
        assert_eq!(m[(0, 0)], 0);
    }

    #[test]
    fn combine_places_blocks() {
        let ones = Matrix::filled(1, 1i64);
        let twos = Matrix::filled(1, 2);
        let threes = Matrix::filled(1, 3);
        let fours = Matrix::filled(1, 4);
        let c = combine(&ones, &twos, &threes, &fours).unwrap();
        assert_eq!(c.to_rows(), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn combine_rejects_mismatched_quadrants() {
        let a = Matrix::<i64>::zeros(2).unwrap();
        let b = Matrix::<i64>::zeros(1).unwrap();
        assert_eq!(
            combine(&a, &a, &b, &a),
            Err(MatmulError::DimensionMismatch { left: 2, right: 1 })
        );
    }
}
