use chrono::{DateTime, Utc};

use crate::errors::RankResult;
use crate::models::{NewsArticle, ToolMetrics};

/// Source of tool metric records.
pub trait IMetricsProvider: Send + Sync {
    /// The full metrics universe as it stood at `cutoff`: one record per tool.
    fn metrics_as_of(&self, cutoff: DateTime<Utc>) -> RankResult<Vec<ToolMetrics>>;
}

/// Source of news articles.
pub trait INewsProvider: Send + Sync {
    /// Every article published at or before `cutoff`.
    fn news_as_of(&self, cutoff: DateTime<Utc>) -> RankResult<Vec<NewsArticle>>;
}
