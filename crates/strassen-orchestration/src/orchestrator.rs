//! Core orchestration: parallel execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, warn};

use strassen_core::{Element, MatmulError, Matrix, Multiplier};

use crate::interfaces::MultiplicationResult;

/// Multiply `a` by `b` with every given multiplier.
///
/// A single multiplier runs on the calling thread; several run
/// concurrently on the rayon pool. Results keep the input order.
pub fn execute_multiplications<T: Element>(
    multipliers: &[Arc<dyn Multiplier<T>>],
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Vec<MultiplicationResult<T>> {
    debug!(
        count = multipliers.len(),
        dimension = a.dimension(),
        "executing multiplications"
    );

    if multipliers.len() == 1 {
        return vec![run_one(multipliers[0].as_ref(), a, b)];
    }

    multipliers
        .par_iter()
        .map(|multiplier| run_one(multiplier.as_ref(), a, b))
        .collect()
}

fn run_one<T: Element>(
    multiplier: &dyn Multiplier<T>,
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> MultiplicationResult<T> {
    let start = Instant::now();
    let outcome = multiplier.multiply(a, b);
    MultiplicationResult {
        algorithm: multiplier.name().to_string(),
        outcome,
        duration: start.elapsed(),
    }
}

/// Analyze comparison results for mismatches.
///
/// Failed results are ignored; every successful product must equal the
/// first one.
pub fn analyze_comparison_results<T: Element>(
    results: &[MultiplicationResult<T>],
) -> Result<(), MatmulError> {
    let mut valid = results
        .iter()
        .filter_map(|r| r.value().map(|v| (r.algorithm.as_str(), v)));

    let Some((reference_algo, reference)) = valid.next() else {
        return Err(MatmulError::Calculation("no valid results".into()));
    };

    for (algorithm, value) in valid {
        if value != reference {
            warn!(reference = reference_algo, algorithm, "product mismatch");
            return Err(MatmulError::Mismatch);
        }
    }

    Ok(())
}
