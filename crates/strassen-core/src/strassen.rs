//! Strassen's seven-product multiplication, O(n^log2(7)).
//!
//! Each level forms ten auxiliary sums and differences of the operand
//! quadrants, seven recursive products, and four output quadrants:
//!
//! ```text
//! S1 = B12 - B22   S2 = A11 + A12   S3 = A21 + A22   S4 = B21 - B11
//! S5 = A11 + A22   S6 = B11 + B22   S7 = A12 - A22   S8 = B21 + B22
//! S9 = A11 - A21   S10 = B11 + B12
//!
//! P1 = A11 * S1    P2 = S2 * B22    P3 = S3 * B11    P4 = A22 * S4
//! P5 = S5 * S6     P6 = S7 * S8     P7 = S9 * S10
//!
//! C11 = P5 + P4 - P2 + P6          C12 = P1 + P2
//! C21 = P3 + P4                    C22 = P5 + P1 - P3 - P7
//! ```
//!
//! That is 7 products and 18 additions or subtractions per level.

use tracing::debug;

use crate::element::Element;
use crate::error::MatmulError;
use crate::matrix_ops::{add_views, sub_views};
use crate::matrix_types::Matrix;
use crate::options::Options;
use crate::partition::assemble;
use crate::strategy::{check_recursive_operands, fork_join, Multiplier};
use crate::view::MatrixView;

/// Seven-product Strassen multiplier. Requires a power-of-two dimension.
///
/// # Example
/// ```
/// use strassen_core::{Matrix, Multiplier, StrassenMultiplier};
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// let c = StrassenMultiplier::new().multiply(&a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
/// ```
pub struct StrassenMultiplier {
    options: Options,
}

impl StrassenMultiplier {
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

        let s1 = sub_views(b12, b22);
        let s2 = add_views(a11, a12);
        let s3 = add_views(a21, a22);
        let s4 = sub_views(b21, b11);
        let s5 = add_views(a11, a22);
        let s6 = add_views(b11, b22);
        let s7 = sub_views(a12, a22);
        let s8 = add_views(b21, b22);
        let s9 = sub_views(a11, a21);
        let s10 = add_views(b11, b12);

        let pairs = [
            (a11, s1.view()),
            (s2.view(), b22),
            (s3.view(), b11),
            (a22, s4.view()),
            (s5.view(), s6.view()),
            (s7.view(), s8.view()),
            (s9.view(), s10.view()),
        ];
        let p = fork_join(self.options.forks_at(n), &pairs, |x, y| {
            self.multiply_views(x, y)
        });
        let (p1, p2, p3, p4, p5, p6, p7) = (
            p[0].view(),
            p[1].view(),
            p[2].view(),
            p[3].view(),
            p[4].view(),
            p[5].view(),
            p[6].view(),
        );

        let c11 = add_views(sub_views(add_views(p5, p4).view(), p2).view(), p6);
        let c12 = add_views(p1, p2);
        let c21 = add_views(p3, p4);
        let c22 = sub_views(sub_views(add_views(p5, p1).view(), p3).view(), p7);
        assemble(&c11, &c12, &c21, &c22)
    }
}

impl Default for StrassenMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Multiplier<T> for StrassenMultiplier {
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatmulError> {
        let n = check_recursive_operands(a, b)?;
        debug!(algorithm = "Strassen", dimension = n, "multiplying");
        Ok(self.multiply_views(a.view(), b.view()))
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}
