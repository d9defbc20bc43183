use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers as lenient;

/// Lifecycle state reported for a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStatus {
    Active,
    Beta,
    Acquired,
    Deprecated,
    #[default]
    #[serde(other)]
    Unknown,
}

impl LifecycleStatus {
    /// Active and beta tools are considered actively developed.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active | Self::Beta)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingModel {
    Free,
    Freemium,
    Subscription,
    Paid,
    Enterprise,
    #[serde(other)]
    Other,
}

/// SWE-bench results, percent solved.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SweBench {
    #[serde(deserialize_with = "lenient::number")]
    pub verified: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub lite: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub full: Option<f64>,
}

impl SweBench {
    /// Best available result: verified, then full, then lite.
    pub fn best(&self) -> Option<f64> {
        self.verified.or(self.full).or(self.lite)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CapabilitySignals {
    #[serde(deserialize_with = "lenient::or_default")]
    pub swe_bench: SweBench,
    #[serde(deserialize_with = "lenient::count")]
    pub context_window: Option<u64>,
    #[serde(deserialize_with = "lenient::flag")]
    pub multi_file_support: Option<bool>,
    #[serde(deserialize_with = "lenient::flag")]
    pub mcp_support: Option<bool>,
    #[serde(deserialize_with = "lenient::count")]
    pub language_count: Option<u64>,
    #[serde(deserialize_with = "lenient::strings")]
    pub llm_providers: Vec<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub ide_integration: Option<bool>,
    #[serde(deserialize_with = "lenient::flag")]
    pub mixture_of_experts: Option<bool>,
    #[serde(deserialize_with = "lenient::flag")]
    pub speculative_decoding: Option<bool>,
    #[serde(deserialize_with = "lenient::flag")]
    pub fast_indexing: Option<bool>,
    /// Enabled subprocess/automation capabilities (terminal, browser, ...).
    #[serde(deserialize_with = "lenient::strings")]
    pub subprocess_capabilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdoptionSignals {
    #[serde(deserialize_with = "lenient::count")]
    pub users: Option<u64>,
    #[serde(deserialize_with = "lenient::count")]
    pub github_stars: Option<u64>,
    #[serde(deserialize_with = "lenient::count")]
    pub ide_installs: Option<u64>,
    #[serde(deserialize_with = "lenient::count")]
    pub npm_monthly_downloads: Option<u64>,
    #[serde(deserialize_with = "lenient::count")]
    pub pypi_monthly_downloads: Option<u64>,
    #[serde(deserialize_with = "lenient::count")]
    pub news_mentions: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommercialSignals {
    #[serde(deserialize_with = "lenient::number")]
    pub annual_recurring_revenue: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub monthly_recurring_revenue: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub valuation: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub funding: Option<f64>,
    #[serde(deserialize_with = "lenient::count")]
    pub employees: Option<u64>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub pricing_model: Option<PricingModel>,
    #[serde(deserialize_with = "lenient::number")]
    pub base_price: Option<f64>,
    #[serde(deserialize_with = "lenient::flag")]
    pub enterprise_pricing: Option<bool>,
    #[serde(deserialize_with = "lenient::flag")]
    pub free_tier: Option<bool>,
}

impl CommercialSignals {
    /// Annual revenue: ARR when reported, otherwise MRR × 12, otherwise 0.
    pub fn annual_revenue(&self) -> f64 {
        self.annual_recurring_revenue
            .filter(|v| *v > 0.0)
            .or_else(|| self.monthly_recurring_revenue.map(|m| m * 12.0))
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VelocitySignals {
    #[serde(deserialize_with = "lenient::number")]
    pub releases_per_year: Option<f64>,
    #[serde(deserialize_with = "lenient::count")]
    pub contributors: Option<u64>,
}

/// Raw metric record for one tool, effective at `recorded_at`.
///
/// Every field is optional in the wire form. Malformed values deserialize to
/// absent and fall back to the consuming factor's default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolMetrics {
    #[serde(deserialize_with = "lenient::text")]
    pub tool_id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub slug: String,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub status: LifecycleStatus,
    #[serde(deserialize_with = "lenient::datetime")]
    pub recorded_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::date")]
    pub launch_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub features: Vec<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub recent_updates: Vec<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub open_source: Option<bool>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub capability: CapabilitySignals,
    #[serde(deserialize_with = "lenient::or_default")]
    pub adoption: AdoptionSignals,
    #[serde(deserialize_with = "lenient::or_default")]
    pub commercial: CommercialSignals,
    #[serde(deserialize_with = "lenient::or_default")]
    pub velocity: VelocitySignals,
}

impl ToolMetrics {
    pub fn new(tool_id: impl Into<String>, name: impl Into<String>) -> Self {
        let tool_id = tool_id.into();
        Self {
            slug: tool_id.clone(),
            tool_id,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn provider_count(&self) -> usize {
        self.capability.llm_providers.len()
    }

    /// Display name, falling back to the tool id.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.tool_id
        } else {
            &self.name
        }
    }
}
