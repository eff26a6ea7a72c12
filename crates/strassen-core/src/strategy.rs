//! Multiplication strategy trait and the shared fork-join helper.
//!
//! `Multiplier` is the narrow interface every algorithm implements.
//! The divide-and-conquer strategies hand their independent sub-products to
//! `fork_join`, which runs them on rayon above the parallel threshold.

use rayon::prelude::*;

use crate::element::Element;
use crate::error::{check_power_of_two, check_same_dimension, MatmulError};
use crate::matrix_types::Matrix;
use crate::view::MatrixView;

/// Narrow interface for square matrix multiplication.
pub trait Multiplier<T: Element>: Send + Sync {
    /// Multiply two n x n matrices into a freshly allocated n x n result.
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatmulError>;

    /// Get the name of this multiplication strategy.
    fn name(&self) -> &'static str;
}

/// A pair of operands for one recursive product.
pub(crate) type Operands<'a, T> = (MatrixView<'a, T>, MatrixView<'a, T>);

/// Validate operands for a divide-and-conquer multiplier.
///
/// Mismatch is reported before the power-of-two check, so a 3x3 by 2x2
/// call fails the same way on every strategy.
pub(crate) fn check_recursive_operands<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<usize, MatmulError> {
    let n = check_same_dimension(a.dimension(), b.dimension())?;
    check_power_of_two(n)?;
    Ok(n)
}

/// Evaluate `product` over every pair, in parallel when `parallel` is set.
///
/// Results keep the order of `pairs`.
pub(crate) fn fork_join<T, F>(parallel: bool, pairs: &[Operands<'_, T>], product: F) -> Vec<Matrix<T>>
where
    T: Element,
    F: Fn(MatrixView<'_, T>, MatrixView<'_, T>) -> Matrix<T> + Sync,
{
    if parallel {
        pairs.par_iter().map(|&(x, y)| product(x, y)).collect()
    } else {
        pairs.iter().map(|&(x, y)| product(x, y)).collect()
    }
}
