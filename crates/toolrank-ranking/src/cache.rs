//! Optional factor-score memoisation, injected into the engine by reference.
//!
//! Keys are blake3 digests of everything a factor score depends on, so a hit
//! returns exactly what a fresh calculation would.

use moka::sync::Cache;
use serde::Serialize;
use toolrank_core::config::RankingConfig;
use toolrank_core::models::{FactorScores, ScoringContext, ToolMetrics};

#[derive(Serialize)]
struct KeyParts<'a> {
    algorithm: &'a str,
    metrics: &'a ToolMetrics,
    context: &'a ScoringContext,
}

/// Bounded in-memory factor-score cache.
pub struct ScoreCache {
    cache: Cache<String, FactorScores>,
}

impl ScoreCache {
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    /// A cache sized by `cache_capacity`, or `None` when it is 0.
    pub fn from_config(config: &RankingConfig) -> Option<Self> {
        (config.cache_capacity > 0).then(|| Self::new(config.cache_capacity))
    }

    /// Digest of `{algorithm, metrics, context}`; `None` if unserialisable.
    pub fn key(algorithm: &str, metrics: &ToolMetrics, context: &ScoringContext) -> Option<String> {
        let parts = KeyParts {
            algorithm,
            metrics,
            context,
        };
        let bytes = serde_json::to_vec(&parts).ok()?;
        Some(blake3::hash(&bytes).to_hex().to_string())
    }

    pub fn get(&self, key: &str) -> Option<FactorScores> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, scores: FactorScores) {
        self.cache.insert(key, scores);
    }

    /// Cached scores for `key`, computing and storing them on a miss.
    pub fn get_or_compute(&self, key: String, compute: impl FnOnce() -> FactorScores) -> FactorScores {
        self.cache.get_with(key, compute)
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
