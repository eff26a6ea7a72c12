//! Multiplier options and configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PARALLEL_THRESHOLD;
use crate::error::MatmulError;

/// Options for the divide-and-conquer multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Dimension at or above which sub-products run on the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Options {
    /// Options that never fork.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.parallel_threshold == 0 {
            self.parallel_threshold = DEFAULT_PARALLEL_THRESHOLD;
        }
        self
    }

    /// Parse options from JSON. Missing fields take their defaults.
    ///
    /// # Example
    /// ```
    /// use strassen_core::Options;
    ///
    /// let opts = Options::from_json(r#"{ "parallel_threshold": 32 }"#).unwrap();
    /// assert_eq!(opts.parallel_threshold, 32);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, MatmulError> {
        serde_json::from_str::<Self>(json)
            .map(Self::normalize)
            .map_err(|e| MatmulError::Config(format!("invalid options: {e}")))
    }

    /// Whether a level of dimension `n` should fork its sub-products.
    #[must_use]
    pub fn forks_at(&self, n: usize) -> bool {
        n >= self.parallel_threshold
    }
}
