/// Tolerance used when checking that weights sum to 1.0.
pub const WEIGHT_SUM_EPSILON: f64 = 1e-9;

/// Upper bound of every factor score.
pub const MAX_FACTOR_SCORE: f64 = 100.0;

/// Algorithm used when a caller does not name one.
pub const DEFAULT_ALGORITHM_VERSION: &str = "v7.5";
