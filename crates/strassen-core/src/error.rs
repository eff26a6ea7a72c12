//! Error type shared by every multiplier and helper in the engine.

/// Error type for matrix operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatmulError {
    /// Two operands do not share the same dimension.
    #[error("dimension mismatch: {left}x{left} vs {right}x{right}")]
    DimensionMismatch { left: usize, right: usize },

    /// The dimension is unusable for the requested operation.
    #[error("invalid dimension {dimension}: {reason}")]
    InvalidDimension {
        dimension: usize,
        reason: &'static str,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Results from different algorithms don't match.
    #[error("result mismatch between algorithms")]
    Mismatch,
}

impl MatmulError {
    pub(crate) fn invalid(dimension: usize, reason: &'static str) -> Self {
        Self::InvalidDimension { dimension, reason }
    }
}

/// Fail with `DimensionMismatch` unless both sides share a dimension.
pub(crate) fn check_same_dimension(left: usize, right: usize) -> Result<usize, MatmulError> {
    if left == right {
        Ok(left)
    } else {
        Err(MatmulError::DimensionMismatch { left, right })
    }
}

/// Fail with `InvalidDimension` unless `n` is a non-zero power of two.
pub(crate) fn check_power_of_two(n: usize) -> Result<(), MatmulError> {
    if n.is_power_of_two() {
        Ok(())
    } else {
        Err(MatmulError::invalid(n, "dimension must be a power of two"))
    }
}
