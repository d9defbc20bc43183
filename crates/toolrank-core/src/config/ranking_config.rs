use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::DEFAULT_ALGORITHM_VERSION;

/// Ranking pass configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Decimal places kept on the overall score.
    pub score_precision: u32,
    /// Score tools on the rayon pool. Sorting is always sequential.
    pub parallel: bool,
    /// Entries in the injected factor-score cache. 0 disables it.
    pub cache_capacity: u64,
    /// Algorithm version used when the caller names none.
    pub default_algorithm: String,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            score_precision: defaults::DEFAULT_SCORE_PRECISION,
            parallel: defaults::DEFAULT_PARALLEL_SCORING,
            cache_capacity: defaults::DEFAULT_CACHE_CAPACITY,
            default_algorithm: DEFAULT_ALGORITHM_VERSION.to_string(),
        }
    }
}
