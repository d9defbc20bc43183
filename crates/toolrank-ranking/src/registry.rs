//! Append-only registry of published algorithm bundles.

use std::sync::{Arc, RwLock};

use chrono::{TimeZone, Utc};
use toolrank_core::errors::{ConfigError, RankResult};
use toolrank_core::models::{AlgorithmVersion, FormulaVariant, WeightConfiguration};
use toolrank_core::traits::IAlgorithmStore;
use tracing::info;

/// Published versions in publication order. Versions are never replaced or
/// removed, so any past ranking can be recomputed with the exact bundle
/// that produced it.
#[derive(Debug, Default)]
pub struct AlgorithmRegistry {
    versions: RwLock<Vec<Arc<AlgorithmVersion>>>,
}

impl AlgorithmRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in `v7.0` and `v7.5` bundles.
    pub fn with_builtins() -> Self {
        Self {
            versions: RwLock::new(vec![Arc::new(v7_0()), Arc::new(v7_5())]),
        }
    }

    /// Validate and publish `version`. Ids are single-use.
    pub fn publish(&self, version: AlgorithmVersion) -> RankResult<Arc<AlgorithmVersion>> {
        version.validate()?;
        let mut versions = self.versions.write().unwrap_or_else(|e| e.into_inner());
        if versions.iter().any(|v| v.id == version.id) {
            return Err(ConfigError::DuplicateVersion {
                version: version.id,
            }
            .into());
        }
        info!(version = %version.id, formula = ?version.formula, "algorithm version published");
        let version = Arc::new(version);
        versions.push(Arc::clone(&version));
        Ok(version)
    }

    /// The most recently published version, if any.
    pub fn latest(&self) -> Option<Arc<AlgorithmVersion>> {
        self.versions
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }
}

impl IAlgorithmStore for AlgorithmRegistry {
    fn get(&self, version: &str) -> RankResult<Arc<AlgorithmVersion>> {
        self.versions
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|v| v.id == version)
            .cloned()
            .ok_or_else(|| {
                ConfigError::UnknownVersion {
                    version: version.to_string(),
                }
                .into()
            })
    }

    fn versions(&self) -> Vec<String> {
        self.versions
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|v| v.id.clone())
            .collect()
    }
}

/// "Smart Defaults & Proxy Metrics".
pub fn v7_0() -> AlgorithmVersion {
    AlgorithmVersion {
        id: "v7.0".to_string(),
        name: "Smart Defaults & Proxy Metrics".to_string(),
        weights: WeightConfiguration {
            agentic_capability: 0.25,
            innovation: 0.125,
            technical_performance: 0.125,
            developer_adoption: 0.125,
            market_traction: 0.125,
            business_sentiment: 0.15,
            development_velocity: 0.05,
            platform_resilience: 0.05,
        },
        formula: FormulaVariant::SmartDefaults,
        published_at: Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).single(),
        supersedes: None,
    }
}

/// "Data-Driven Confidence Scoring".
pub fn v7_5() -> AlgorithmVersion {
    AlgorithmVersion {
        id: "v7.5".to_string(),
        name: "Data-Driven Confidence Scoring".to_string(),
        weights: WeightConfiguration {
            agentic_capability: 0.12,
            innovation: 0.08,
            technical_performance: 0.18,
            developer_adoption: 0.18,
            market_traction: 0.10,
            business_sentiment: 0.12,
            development_velocity: 0.12,
            platform_resilience: 0.10,
        },
        formula: FormulaVariant::DataConfidence,
        published_at: Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).single(),
        supersedes: Some("v7.0".to_string()),
    }
}
