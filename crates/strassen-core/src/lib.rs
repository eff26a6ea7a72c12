//! # strassen-core
//!
//! Core library for strassen-rs: square matrix multiplication with a naive
//! triple loop, an eight-product block recursion, and Strassen's
//! seven-product recursion. The two recursive strategies share strided
//! quadrant views and fork their sub-products onto rayon for large inputs.

pub mod constants;
pub mod element;
pub mod error;
pub mod matrix_ops;
pub mod matrix_types;
pub mod naive;
pub mod options;
pub mod padding;
pub mod partition;
pub mod recursive;
pub mod registry;
pub mod strassen;
pub mod strategy;
pub mod view;

// Re-exports
pub use constants::{DEFAULT_PARALLEL_THRESHOLD, MULTIPLIER_NAMES};
pub use element::Element;
pub use error::MatmulError;
pub use matrix_types::Matrix;
pub use naive::NaiveMultiplier;
pub use options::Options;
pub use partition::{combine, partition, Quadrants};
pub use recursive::RecursiveMultiplier;
pub use registry::{DefaultFactory, MultiplierFactory};
pub use strassen::StrassenMultiplier;
pub use strategy::Multiplier;
pub use view::MatrixView;

/// Multiply two power-of-two square matrices with Strassen's method.
///
/// This is a convenience function for simple use cases. To pick an
/// algorithm or tune the parallel threshold, use a [`Multiplier`] directly.
///
/// # Example
/// ```
/// use strassen_core::Matrix;
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// let c = strassen_core::multiply(&a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
/// ```
pub fn multiply<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatmulError> {
    StrassenMultiplier::new().multiply(a, b)
}
