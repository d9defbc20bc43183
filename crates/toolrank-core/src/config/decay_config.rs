use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// News decay and impact-adjustment configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Age (days) at which the decay factor reaches exactly 0.5.
    pub horizon_days: f64,
    /// Curve exponent applied to `age / horizon`.
    pub exponent: f64,
    /// Multiplier applied to company announcements / PR.
    pub pr_discount: f64,
    /// Credibility used when no table entry matches the source.
    pub default_credibility: f64,
    /// Source-name → credibility entries merged over the built-in table.
    pub credibility: BTreeMap<String, f64>,
    /// Lowercase source-name fragments marking a source as PR.
    pub pr_source_markers: Vec<String>,
    /// Article type tags classified as PR.
    pub pr_article_types: Vec<String>,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            horizon_days: defaults::DEFAULT_DECAY_HORIZON_DAYS,
            exponent: defaults::DEFAULT_DECAY_EXPONENT,
            pr_discount: defaults::DEFAULT_PR_DISCOUNT,
            default_credibility: defaults::DEFAULT_SOURCE_CREDIBILITY,
            credibility: BTreeMap::new(),
            pr_source_markers: defaults::DEFAULT_PR_SOURCE_MARKERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            pr_article_types: defaults::DEFAULT_PR_ARTICLE_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
