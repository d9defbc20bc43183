use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::factor::Factor;
use crate::constants::WEIGHT_SUM_EPSILON;
use crate::errors::ConfigError;

/// Per-factor weights. Must be non-negative and sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightConfiguration {
    pub agentic_capability: f64,
    pub innovation: f64,
    pub technical_performance: f64,
    pub developer_adoption: f64,
    pub market_traction: f64,
    pub business_sentiment: f64,
    pub development_velocity: f64,
    pub platform_resilience: f64,
}

impl WeightConfiguration {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::AgenticCapability => self.agentic_capability,
            Factor::Innovation => self.innovation,
            Factor::TechnicalPerformance => self.technical_performance,
            Factor::DeveloperAdoption => self.developer_adoption,
            Factor::MarketTraction => self.market_traction,
            Factor::BusinessSentiment => self.business_sentiment,
            Factor::DevelopmentVelocity => self.development_velocity,
            Factor::PlatformResilience => self.platform_resilience,
        }
    }

    pub fn sum(&self) -> f64 {
        Factor::ALL.into_iter().map(|f| self.get(f)).sum()
    }

    /// Check every weight is finite and non-negative, and the total is 1.0.
    pub fn validate(&self, version: &str) -> Result<(), ConfigError> {
        for factor in Factor::ALL {
            let weight = self.get(factor);
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    version: version.to_string(),
                    factor: factor.to_string(),
                    weight,
                });
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(ConfigError::WeightSumMismatch {
                version: version.to_string(),
                sum,
            });
        }
        Ok(())
    }
}

/// Which family of factor formulas a version scores with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FormulaVariant {
    /// Neutral baselines raised by present signals; no confidence penalty.
    SmartDefaults,
    /// Tiered signal scoring with a data-completeness confidence multiplier.
    DataConfidence,
}

impl FormulaVariant {
    pub fn applies_confidence(self) -> bool {
        matches!(self, Self::DataConfidence)
    }
}

/// A published, immutable algorithm bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AlgorithmVersion {
    pub id: String,
    pub name: String,
    pub weights: WeightConfiguration,
    pub formula: FormulaVariant,
    pub published_at: Option<DateTime<Utc>>,
    pub supersedes: Option<String>,
}

impl AlgorithmVersion {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "algorithm.id".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        self.weights.validate(&self.id)
    }
}
