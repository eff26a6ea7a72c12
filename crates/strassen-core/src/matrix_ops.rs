//! Elementwise matrix addition and subtraction.

use crate::element::Element;
use crate::error::{check_same_dimension, MatmulError};
use crate::matrix_types::Matrix;
use crate::view::MatrixView;

/// `Z[i,j] = X[i,j] + Y[i,j]`.
///
/// # Example
/// ```
/// use strassen_core::{matrix_ops::add, Matrix};
///
/// let x = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let y = Matrix::from_rows(vec![vec![10, 20], vec![30, 40]]).unwrap();
/// assert_eq!(add(&x, &y).unwrap().to_rows(), vec![vec![11, 22], vec![33, 44]]);
/// ```
pub fn add<T: Element>(x: &Matrix<T>, y: &Matrix<T>) -> Result<Matrix<T>, MatmulError> {
    check_same_dimension(x.dimension(), y.dimension())?;
    Ok(add_views(x.view(), y.view()))
}

/// `Z[i,j] = X[i,j] - Y[i,j]`.
pub fn subtract<T: Element>(x: &Matrix<T>, y: &Matrix<T>) -> Result<Matrix<T>, MatmulError> {
    check_same_dimension(x.dimension(), y.dimension())?;
    Ok(sub_views(x.view(), y.view()))
}

/// Unchecked view addition; both views share a dimension.
pub(crate) fn add_views<T: Element>(x: MatrixView<'_, T>, y: MatrixView<'_, T>) -> Matrix<T> {
    zip_with(x, y, T::ring_add)
}

/// Unchecked view subtraction; both views share a dimension.
pub(crate) fn sub_views<T: Element>(x: MatrixView<'_, T>, y: MatrixView<'_, T>) -> Matrix<T> {
    zip_with(x, y, T::ring_sub)
}

fn zip_with<T: Element>(
    x: MatrixView<'_, T>,
    y: MatrixView<'_, T>,
    f: impl Fn(T, T) -> T,
) -> Matrix<T> {
    debug_assert_eq!(x.dimension(), y.dimension());
    let n = x.dimension();
    let mut data = Vec::with_capacity(n * n);
    for i in 0..n {
        data.extend(x.row(i).iter().zip(y.row(i)).map(|(&a, &b)| f(a, b)));
    }
    Matrix::from_parts(n, data)
}
