//! Orchestration interfaces.

use std::time::Duration;

use strassen_core::{MatmulError, Matrix};

/// Result of a single multiplication.
#[derive(Debug, Clone)]
pub struct MultiplicationResult<T> {
    /// Algorithm name.
    pub algorithm: String,
    /// The computed product or a structured error.
    pub outcome: Result<Matrix<T>, MatmulError>,
    /// Computation duration.
    pub duration: Duration,
}

impl<T> MultiplicationResult<T> {
    /// The product, if the multiplication succeeded.
    #[must_use]
    pub fn value(&self) -> Option<&Matrix<T>> {
        self.outcome.as_ref().ok()
    }

    /// The error, if the multiplication failed.
    #[must_use]
    pub fn error(&self) -> Option<&MatmulError> {
        self.outcome.as_ref().err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplication_result_accessors() {
        let ok = MultiplicationResult {
            algorithm: "Strassen".into(),
            outcome: Matrix::from_rows(vec![vec![19, 22], vec![43, 50]]),
            duration: Duration::from_millis(1),
        };
        assert_eq!(ok.algorithm, "Strassen");
        assert_eq!(ok.value().unwrap()[(1, 1)], 50);
        assert!(ok.error().is_none());

        let failed = MultiplicationResult::<i64> {
            algorithm: "Recursive".into(),
            outcome: Err(MatmulError::Mismatch),
            duration: Duration::ZERO,
        };
        assert!(failed.value().is_none());
        assert_eq!(failed.error(), Some(&MatmulError::Mismatch));
    }
}
