//! Zero padding for dimensions that are not a power of two.
//!
//! The recursive cores only accept powers of two. Callers that need other
//! sizes pad explicitly here, multiply, and truncate the product back.

use tracing::trace;

use crate::element::Element;
use crate::error::{check_same_dimension, MatmulError};
use crate::matrix_types::Matrix;
use crate::strategy::Multiplier;

/// Smallest power of two that is `>= n`. `next_power_of_two(0)` is 1.
#[must_use]
pub fn next_power_of_two(n: usize) -> usize {
    n.next_power_of_two()
}

/// Embed `m` in the top-left corner of a `size x size` zero matrix.
pub fn pad_to<T: Element>(m: &Matrix<T>, size: usize) -> Result<Matrix<T>, MatmulError> {
    let n = m.dimension();
    if size < n {
        return Err(MatmulError::invalid(size, "padded size is smaller than the matrix"));
    }
    if size == n {
        return Ok(m.clone());
    }
    let mut data = Vec::with_capacity(size * size);
    for i in 0..size {
        if i < n {
            data.extend_from_slice(m.row(i));
            data.resize(data.len() + size - n, T::zero());
        } else {
            data.resize(data.len() + size, T::zero());
        }
    }
    Ok(Matrix::from_parts(size, data))
}

/// Keep the top-left `size x size` block of `m`.
pub fn truncate<T: Element>(m: &Matrix<T>, size: usize) -> Result<Matrix<T>, MatmulError> {
    if size == 0 || size > m.dimension() {
        return Err(MatmulError::invalid(size, "truncated size is out of range"));
    }
    let mut data = Vec::with_capacity(size * size);
    for i in 0..size {
        data.extend_from_slice(&m.row(i)[..size]);
    }
    Ok(Matrix::from_parts(size, data))
}

/// Multiply matrices of any shared dimension with a power-of-two strategy.
///
/// Operands are zero-padded to the next power of two, multiplied, and the
/// product is truncated to the original size. Already-aligned operands go
/// straight to the multiplier.
///
/// # Example
/// ```
/// use strassen_core::{padding::multiply_padded, Matrix, StrassenMultiplier};
///
/// let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
/// let c = multiply_padded(&StrassenMultiplier::new(), &a, &a).unwrap();
/// assert_eq!(c.row(0), &[30, 36, 42]);
/// ```
pub fn multiply_padded<T: Element>(
    multiplier: &dyn Multiplier<T>,
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<Matrix<T>, MatmulError> {
    let n = check_same_dimension(a.dimension(), b.dimension())?;
    let padded = next_power_of_two(n);
    if padded == n {
        return multiplier.multiply(a, b);
    }

    trace!(
        algorithm = multiplier.name(),
        dimension = n,
        padded,
        "padding operands"
    );
    let product = multiplier.multiply(&pad_to(a, padded)?, &pad_to(b, padded)?)?;
    truncate(&product, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive::NaiveMultiplier;
    use crate::recursive::RecursiveMultiplier;
    use crate::strassen::StrassenMultiplier;

    fn sample(n: usize) -> Matrix<i64> {
        Matrix::from_fn(n, |i, j| (i * n + j) as i64 - 4).unwrap()
    }

    #[test]
    fn next_power() {
        assert_eq!(next_power_of_two(1), 1);
        assert_eq!(next_power_of_two(3), 4);
        assert_eq!(next_power_of_two(8), 8);
        assert_eq!(next_power_of_two(9), 16);
    }

    #[test]
    fn pad_then_truncate() {
        let m = sample(3);
        let padded = pad_to(&m, 4).unwrap();
        assert_eq!(padded.dimension(), 4);
        assert_eq!(padded.row(0), &[-4, -3, -2, 0]);
        assert_eq!(padded.row(3), &[0, 0, 0, 0]);
        assert_eq!(truncate(&padded, 3).unwrap(), m);
    }

    #[test]
    fn pad_same_size_is_copy() {
        let m = sample(4);
        assert_eq!(pad_to(&m, 4).unwrap(), m);
    }

    #[test]
    fn pad_and_truncate_bounds() {
        let m = sample(4);
        assert!(pad_to(&m, 3).is_err());
        assert!(truncate(&m, 0).is_err());
        assert!(truncate(&m, 5).is_err());
    }

    #[test]
    fn padded_matches_naive() {
        for n in [1, 3, 5, 6, 7, 12] {
            let a = sample(n);
            let b = Matrix::from_fn(n, |i, j| (j as i64) * 3 - (i as i64)).unwrap();
            let expected = NaiveMultiplier.multiply(&a, &b).unwrap();
            assert_eq!(
                multiply_padded(&StrassenMultiplier::new(), &a, &b).unwrap(),
                expected,
                "strassen n={n}"
            );
            assert_eq!(
                multiply_padded(&RecursiveMultiplier::new(), &a, &b).unwrap(),
                expected,
                "recursive n={n}"
            );
        }
    }

    #[test]
    fn padded_mismatch() {
        let err = multiply_padded(&StrassenMultiplier::new(), &sample(3), &sample(2)).unwrap_err();
        assert_eq!(err, MatmulError::DimensionMismatch { left: 3, right: 2 });
    }
}
