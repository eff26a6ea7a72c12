//! Borrowed strided windows into a matrix buffer.
//!
//! The divide-and-conquer multipliers split their operands by narrowing a
//! view instead of copying, so partitioning inside the recursion is O(1).
//! Views are read-only; only the base case and the final assembly write
//! fresh storage.

use crate::element::Element;
use crate::error::MatmulError;
use crate::matrix_types::Matrix;

/// Read-only n x n window at `(row, col)` inside a row-major buffer whose
/// rows are `stride` elements long.
pub struct MatrixView<'a, T> {
    data: &'a [T],
    stride: usize,
    row: usize,
    col: usize,
    dim: usize,
}

impl<T> Clone for MatrixView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MatrixView<'_, T> {}

impl<'a, T: Element> MatrixView<'a, T> {
    /// View over a whole `dim x dim` buffer.
    pub(crate) fn new(data: &'a [T], dim: usize) -> Self {
        debug_assert_eq!(data.len(), dim * dim);
        Self {
            data,
            stride: dim,
            row: 0,
            col: 0,
            dim,
        }
    }

    /// Side length of the window.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Element at `(i, j)` relative to the window origin.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> T {
        debug_assert!(i < self.dim && j < self.dim);
        self.data[(self.row + i) * self.stride + self.col + j]
    }

    /// Row `i` of the window as a contiguous slice.
    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> &'a [T] {
        let start = (self.row + i) * self.stride + self.col;
        &self.data[start..start + self.dim]
    }

    /// Split into `[q11, q12, q21, q22]` without copying.
    ///
    /// Fails with `InvalidDimension` when the dimension is odd, since the
    /// middle row and column would belong to no quadrant.
    pub fn quadrants(&self) -> Result<[Self; 4], MatmulError> {
        if self.dim % 2 != 0 {
            return Err(MatmulError::invalid(
                self.dim,
                "quadrants require an even dimension",
            ));
        }
        Ok(self.split())
    }

    /// Unchecked [`quadrants`](Self::quadrants) for the multipliers, whose
    /// views are powers of two above the base case.
    pub(crate) fn split(&self) -> [Self; 4] {
        debug_assert!(self.dim % 2 == 0, "cannot split odd dimension {}", self.dim);
        let half = self.dim / 2;
        let at = |dr: usize, dc: usize| Self {
            data: self.data,
            stride: self.stride,
            row: self.row + dr,
            col: self.col + dc,
            dim: half,
        };
        [at(0, 0), at(0, half), at(half, 0), at(half, half)]
    }

    /// Deep-copy the window into an owned matrix.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix<T> {
        let mut data = Vec::with_capacity(self.dim * self.dim);
        for i in 0..self.dim {
            data.extend_from_slice(self.row(i));
        }
        Matrix::from_parts(self.dim, data)
    }
}
