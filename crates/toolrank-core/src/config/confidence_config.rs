use serde::{Deserialize, Serialize};

use super::defaults;

/// Confidence multiplier configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Multiplier for a record with no expected fields present. Must be > 0.
    pub floor: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            floor: defaults::DEFAULT_CONFIDENCE_FLOOR,
        }
    }
}
