//! Triple-loop O(n^3) multiplication, the correctness oracle for the
//! divide-and-conquer strategies.

use tracing::debug;

use crate::element::Element;
use crate::error::{check_same_dimension, MatmulError};
use crate::matrix_types::Matrix;
use crate::strategy::Multiplier;

/// Naive multiplier: `C[i,j] = sum_k A[i,k] * B[k,j]`.
///
/// Works for any dimension, power of two or not.
pub struct NaiveMultiplier;

impl NaiveMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NaiveMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Multiplier<T> for NaiveMultiplier {
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatmulError> {
        let n = check_same_dimension(a.dimension(), b.dimension())?;
        debug!(algorithm = "Naive", dimension = n, "multiplying");

        Ok(Matrix::generate(n, |i, j| {
            let row = a.row(i);
            (0..n).fold(T::zero(), |acc, k| acc.ring_add(row[k].ring_mul(b[(k, j)])))
        }))
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}
