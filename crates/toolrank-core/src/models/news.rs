use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::serde_helpers as lenient;

/// Editorial importance of a news item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Critical,
    High,
    Medium,
    Low,
}

impl Importance {
    /// Importance on the 1–10 scale used to derive a base impact.
    pub fn points(self) -> f64 {
        match self {
            Self::Critical => 10.0,
            Self::High => 8.0,
            Self::Medium => 5.0,
            Self::Low => 3.0,
        }
    }
}

/// A news item that may reference one or more tools.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsArticle {
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub summary: String,
    #[serde(deserialize_with = "lenient::datetime")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::text")]
    pub source_name: String,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub source_type: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub article_type: Option<String>,
    /// Explicit press-release flag; takes precedence over inference.
    #[serde(deserialize_with = "lenient::flag")]
    pub is_company_announcement: Option<bool>,
    #[serde(deserialize_with = "lenient::number")]
    pub source_credibility: Option<f64>,
    /// Tools already linked to this article.
    #[serde(deserialize_with = "lenient::strings")]
    pub tool_ids: Vec<String>,
    /// Free-text tool mentions still to be resolved to tool ids.
    #[serde(deserialize_with = "lenient::strings")]
    pub tool_mentions: Vec<String>,
    #[serde(deserialize_with = "lenient::signed")]
    pub base_impact: Option<f64>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub importance: Option<Importance>,
    /// Signed sentiment in `[-1, 1]`.
    #[serde(deserialize_with = "lenient::signed")]
    pub sentiment: Option<f64>,
}

/// Aggregated news impact for one tool in one period.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewsImpactSummary {
    pub article_count: u32,
    pub total_impact: f64,
    pub positive_impact: f64,
    pub negative_impact: f64,
}

impl NewsImpactSummary {
    pub fn record(&mut self, impact: f64) {
        self.article_count += 1;
        self.total_impact += impact;
        if impact >= 0.0 {
            self.positive_impact += impact;
        } else {
            self.negative_impact += impact;
        }
    }
}
