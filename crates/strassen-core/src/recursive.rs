//! Block-recursive multiplication with eight sub-products per level.
//!
//! ```text
//! C11 = A11*B11 + A12*B21    C12 = A11*B12 + A12*B22
//! C21 = A21*B11 + A22*B21    C22 = A21*B12 + A22*B22
//! ```
//!
//! Same O(n^3) work as the naive loop; it is the stepping stone to
//! Strassen's seven-product scheme.

use tracing::debug;

use crate::element::Element;
use crate::error::MatmulError;
use crate::matrix_ops::add_views;
use crate::matrix_types::Matrix;
use crate::options::Options;
use crate::partition::assemble;
use crate::strategy::{check_recursive_operands, fork_join, Multiplier};
use crate::view::MatrixView;

/// Eight-product block multiplier. Requires a power-of-two dimension.
pub struct RecursiveMultiplier {
    options: Options,
}

impl RecursiveMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self {
            options: options.normalize(),
        }
    }

    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    fn multiply_views<T: Element>(&self, a: MatrixView<'_, T>, b: MatrixView<'_, T>) -> Matrix<T> {
        let n = a.dimension();
        if n == 1 {
            return Matrix::scalar(a.get(0, 0).ring_mul(b.get(0, 0)));
        }

        let [a11, a12, a21, a22] = a.split();
        let [b11, b12, b21, b22] = b.split();
        let pairs = [
            (a11, b11),
            (a12, b21),
            (a11, b12),
            (a12, b22),
            (a21, b11),
            (a22, b21),
            (a21, b12),
            (a22, b22),
        ];
        let p = fork_join(self.options.forks_at(n), &pairs, |x, y| {
            self.multiply_views(x, y)
        });

        let c11 = add_views(p[0].view(), p[1].view());
        let c12 = add_views(p[2].view(), p[3].view());
        let c21 = add_views(p[4].view(), p[5].view());
        let c22 = add_views(p[6].view(), p[7].view());
        assemble(&c11, &c12, &c21, &c22)
    }
}

impl Default for RecursiveMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Multiplier<T> for RecursiveMultiplier {
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatmulError> {
        let n = check_recursive_operands(a, b)?;
        debug!(algorithm = "Recursive", dimension = n, "multiplying");
        Ok(self.multiply_views(a.view(), b.view()))
    }

    fn name(&self) -> &'static str {
        "Recursive"
    }
}
