use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::Tier;

/// One position band: every position `<= max_position` not claimed by an
/// earlier band belongs to `tier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBand {
    pub tier: Tier,
    pub max_position: u32,
}

/// Position → tier bands. Externally overridable; nothing in the engine
/// hard-codes band boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierConfig {
    /// Ordered bands, strictly increasing `max_position`.
    pub bands: Vec<TierBand>,
    /// Tier for positions beyond the last band.
    pub fallback: Tier,
}

impl TierConfig {
    /// Tier for a 1-based position.
    pub fn tier_for(&self, position: u32) -> Tier {
        self.bands
            .iter()
            .find(|band| position <= band.max_position)
            .map(|band| band.tier)
            .unwrap_or(self.fallback)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bands.is_empty() {
            return Err(ConfigError::InvalidTierBands {
                reason: "at least one band is required".to_string(),
            });
        }
        let mut previous = 0;
        for band in &self.bands {
            if band.max_position <= previous {
                return Err(ConfigError::InvalidTierBands {
                    reason: format!(
                        "band {:?} max_position {} must exceed {}",
                        band.tier, band.max_position, previous
                    ),
                });
            }
            previous = band.max_position;
        }
        Ok(())
    }
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            bands: vec![
                TierBand {
                    tier: Tier::S,
                    max_position: defaults::DEFAULT_TIER_S_MAX,
                },
                TierBand {
                    tier: Tier::A,
                    max_position: defaults::DEFAULT_TIER_A_MAX,
                },
                TierBand {
                    tier: Tier::B,
                    max_position: defaults::DEFAULT_TIER_B_MAX,
                },
                TierBand {
                    tier: Tier::C,
                    max_position: defaults::DEFAULT_TIER_C_MAX,
                },
            ],
            fallback: Tier::D,
        }
    }
}
