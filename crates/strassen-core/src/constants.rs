//! Default thresholds and registry names.

/// Default dimension at or above which sub-products are forked onto the
/// rayon pool. Below it the recursion runs sequentially.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 128;

/// Registry name of the triple-loop multiplier.
pub const NAIVE: &str = "naive";

/// Registry name of the eight-product block multiplier.
pub const RECURSIVE: &str = "recursive";

/// Registry name of the seven-product Strassen multiplier.
pub const STRASSEN: &str = "strassen";

/// Every multiplier name known to the default registry, oracle first.
pub const MULTIPLIER_NAMES: [&str; 3] = [NAIVE, RECURSIVE, STRASSEN];
