//! Square matrix type used by every multiplier.

use std::fmt;
use std::ops::Index;

use num_traits::Float;

use crate::element::Element;
use crate::error::MatmulError;
use crate::view::MatrixView;

/// Dense n x n matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    dim: usize,
    data: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Create the n x n zero matrix.
    pub fn zeros(n: usize) -> Result<Self, MatmulError> {
        check_non_zero(n)?;
        Ok(Self::filled(n, T::zero()))
    }

    /// Create the n x n identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatmulError> {
        Self::from_fn(n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Build a matrix by evaluating `f(row, col)` for every cell.
    pub fn from_fn(n: usize, f: impl FnMut(usize, usize) -> T) -> Result<Self, MatmulError> {
        check_non_zero(n)?;
        Ok(Self::generate(n, f))
    }

    /// Wrap a row-major buffer of exactly `n * n` elements.
    pub fn from_vec(n: usize, data: Vec<T>) -> Result<Self, MatmulError> {
        check_non_zero(n)?;
        if n.checked_mul(n) != Some(data.len()) {
            return Err(MatmulError::invalid(n, "buffer length is not n * n"));
        }
        Ok(Self { dim: n, data })
    }

    /// Build a matrix from nested rows. Every row must be as long as the
    /// number of rows.
    ///
    /// # Example
    /// ```
    /// use strassen_core::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(m.dimension(), 2);
    /// assert_eq!(m[(1, 0)], 3);
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatmulError> {
        let n = rows.len();
        check_non_zero(n)?;
        if rows.iter().any(|row| row.len() != n) {
            return Err(MatmulError::invalid(n, "rows do not form a square matrix"));
        }
        Ok(Self {
            dim: n,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Side length of the matrix.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        (row < self.dim && col < self.dim).then(|| self.data[row * self.dim + col])
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds, like indexing. Use [`get`](Self::get)
    /// for a checked lookup.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        assert!(
            row < self.dim,
            "row {row} out of bounds for {0}x{0} matrix",
            self.dim
        );
        let start = row * self.dim;
        &self.data[start..start + self.dim]
    }

    /// Row-major backing buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copy out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.chunks(self.dim).map(<[T]>::to_vec).collect()
    }

    /// Borrow the whole matrix as a strided view.
    #[must_use]
    pub fn view(&self) -> MatrixView<'_, T> {
        MatrixView::new(&self.data, self.dim)
    }

    /// Check if this is the identity matrix.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.data.iter().enumerate().all(|(idx, &v)| {
            let expected = if idx / self.dim == idx % self.dim {
                T::one()
            } else {
                T::zero()
            };
            v == expected
        })
    }

    /// Check if every element is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|v| v.is_zero())
    }

    /// A 1x1 matrix holding `value`.
    pub(crate) fn scalar(value: T) -> Self {
        Self {
            dim: 1,
            data: vec![value],
        }
    }

    pub(crate) fn filled(n: usize, value: T) -> Self {
        Self {
            dim: n,
            data: vec![value; n * n],
        }
    }

    pub(crate) fn generate(n: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            data.extend((0..n).map(|j| f(i, j)));
        }
        Self { dim: n, data }
    }

    /// Caller guarantees `data.len() == n * n`.
    pub(crate) fn from_parts(n: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), n * n);
        Self { dim: n, data }
    }
}

impl<T: Element + Float> Matrix<T> {
    /// Elementwise comparison within an absolute tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        self.dim == other.dim
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| (a - b).abs() <= epsilon)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.dim && col < self.dim,
            "index ({row}, {col}) out of bounds for {0}x{0} matrix",
            self.dim
        );
        &self.data[row * self.dim + col]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks(self.dim).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

fn check_non_zero(n: usize) -> Result<(), MatmulError> {
    if n == 0 {
        Err(MatmulError::invalid(0, "matrix must have at least one row"))
    } else {
        Ok(())
    }
}
