//! Top-level engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    ConfidenceConfig, DecayConfig, NewsConfig, ObservabilityConfig, RankingConfig, TierConfig,
};
use crate::errors::ConfigError;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Aggregates all sub-configs. Every section is optional in TOML and falls
/// back to compiled defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub tiers: TierConfig,
    pub decay: DecayConfig,
    pub confidence: ConfidenceConfig,
    pub ranking: RankingConfig,
    pub news: NewsConfig,
    pub observability: ObservabilityConfig,
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Self::parse(toml_str, "<string>")
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(toml_str: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every numeric range the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tiers.validate()?;

        let decay = &self.decay;
        positive("decay.horizon_days", decay.horizon_days)?;
        positive("decay.exponent", decay.exponent)?;
        unit_interval("decay.pr_discount", decay.pr_discount, false)?;
        unit_interval("decay.default_credibility", decay.default_credibility, false)?;
        for (source, value) in &decay.credibility {
            unit_interval(&format!("decay.credibility.{source}"), *value, true)?;
        }

        unit_interval("confidence.floor", self.confidence.floor, false)?;

        if self.ranking.score_precision > 9 {
            return Err(ConfigError::InvalidValue {
                field: "ranking.score_precision".to_string(),
                reason: format!("{} exceeds 9 decimal places", self.ranking.score_precision),
            });
        }
        if self.ranking.default_algorithm.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "ranking.default_algorithm".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        for (term, tool_id) in &self.news.terms {
            if term.trim().is_empty() || tool_id.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("news.terms.{term}"),
                    reason: "terms and tool ids must not be empty".to_string(),
                });
            }
        }

        let level = self.observability.log_level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                reason: format!(
                    "{:?} is not one of {}",
                    self.observability.log_level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }
        Ok(())
    }
}

fn positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("{value} must be a positive finite number"),
        })
    }
}

/// `(0, 1]`, or `[0, 1]` when `allow_zero`.
fn unit_interval(field: &str, value: f64, allow_zero: bool) -> Result<(), ConfigError> {
    let lower_ok = if allow_zero { value >= 0.0 } else { value > 0.0 };
    if value.is_finite() && lower_ok && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("{value} is outside the unit interval"),
        })
    }
}
