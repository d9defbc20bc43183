use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::MAX_FACTOR_SCORE;

/// The eight scoring dimensions shared by every algorithm version.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    AgenticCapability,
    Innovation,
    TechnicalPerformance,
    DeveloperAdoption,
    MarketTraction,
    BusinessSentiment,
    DevelopmentVelocity,
    PlatformResilience,
}

impl Factor {
    /// All factors in canonical order.
    pub const ALL: [Factor; 8] = [
        Factor::AgenticCapability,
        Factor::Innovation,
        Factor::TechnicalPerformance,
        Factor::DeveloperAdoption,
        Factor::MarketTraction,
        Factor::BusinessSentiment,
        Factor::DevelopmentVelocity,
        Factor::PlatformResilience,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Factor::AgenticCapability => "agentic_capability",
            Factor::Innovation => "innovation",
            Factor::TechnicalPerformance => "technical_performance",
            Factor::DeveloperAdoption => "developer_adoption",
            Factor::MarketTraction => "market_traction",
            Factor::BusinessSentiment => "business_sentiment",
            Factor::DevelopmentVelocity => "development_velocity",
            Factor::PlatformResilience => "platform_resilience",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Factor::AgenticCapability => "Agentic Capability",
            Factor::Innovation => "Innovation",
            Factor::TechnicalPerformance => "Technical Performance",
            Factor::DeveloperAdoption => "Developer Adoption",
            Factor::MarketTraction => "Market Traction",
            Factor::BusinessSentiment => "Business Sentiment",
            Factor::DevelopmentVelocity => "Development Velocity",
            Factor::PlatformResilience => "Platform Resilience",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Factor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Factor::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown factor: {s}"))
    }
}

/// One 0–100 score per factor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FactorScores {
    pub agentic_capability: f64,
    pub innovation: f64,
    pub technical_performance: f64,
    pub developer_adoption: f64,
    pub market_traction: f64,
    pub business_sentiment: f64,
    pub development_velocity: f64,
    pub platform_resilience: f64,
}

impl FactorScores {
    /// Build by evaluating `f` once per factor in canonical order.
    pub fn from_fn(mut f: impl FnMut(Factor) -> f64) -> Self {
        Self {
            agentic_capability: f(Factor::AgenticCapability),
            innovation: f(Factor::Innovation),
            technical_performance: f(Factor::TechnicalPerformance),
            developer_adoption: f(Factor::DeveloperAdoption),
            market_traction: f(Factor::MarketTraction),
            business_sentiment: f(Factor::BusinessSentiment),
            development_velocity: f(Factor::DevelopmentVelocity),
            platform_resilience: f(Factor::PlatformResilience),
        }
    }

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

    /// Iterate `(factor, score)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Clamp every score into `[0, 100]`. NaN becomes 0.
    pub fn clamped(&self) -> Self {
        Self::from_fn(|f| clamp_score(self.get(f)))
    }

    /// True when every score lies in `[0, 100]`.
    pub fn is_bounded(&self) -> bool {
        self.iter()
            .all(|(_, v)| (0.0..=MAX_FACTOR_SCORE).contains(&v))
    }
}

/// Clamp a raw factor score into `[0, 100]`.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, MAX_FACTOR_SCORE)
    }
}
