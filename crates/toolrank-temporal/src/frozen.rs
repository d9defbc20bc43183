//! As-of reconstruction over a fixed set of dated records.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use toolrank_core::errors::RankResult;
use toolrank_core::models::{NewsArticle, ToolMetrics};
use toolrank_core::traits::{IMetricsProvider, INewsProvider};
use tracing::debug;

/// An immutable universe of metric records and news articles.
///
/// Every query is a pure function of the stored records and the cutoff, so
/// recomputing a period from the same snapshot reproduces it exactly.
#[derive(Debug, Clone, Default)]
pub struct FrozenSnapshot {
    metrics: Vec<ToolMetrics>,
    news: Vec<NewsArticle>,
}

impl FrozenSnapshot {
    pub fn new(metrics: Vec<ToolMetrics>, news: Vec<NewsArticle>) -> Self {
        Self { metrics, news }
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty() && self.news.is_empty()
    }

    /// Per tool, the latest record effective at `cutoff`.
    ///
    /// Undated records are always effective but lose to any dated one. Tools
    /// launched after the cutoff are dropped. Output is sorted by tool id.
    pub fn metrics_at(&self, cutoff: DateTime<Utc>) -> Vec<ToolMetrics> {
        let cutoff_date = cutoff.date_naive();
        let mut latest: HashMap<&str, &ToolMetrics> = HashMap::new();
        for record in &self.metrics {
            if record.recorded_at.is_some_and(|at| at > cutoff) {
                continue;
            }
            if record.launch_date.is_some_and(|launch| launch > cutoff_date) {
                continue;
            }
            latest
                .entry(record.tool_id.as_str())
                .and_modify(|kept| {
                    if record.recorded_at >= kept.recorded_at {
                        *kept = record;
                    }
                })
                .or_insert(record);
        }

        let mut effective: Vec<ToolMetrics> = latest.into_values().cloned().collect();
        effective.sort_by(|a, b| a.tool_id.cmp(&b.tool_id));
        debug!(
            cutoff = %cutoff,
            records = self.metrics.len(),
            tools = effective.len(),
            "metrics reconstructed as of cutoff"
        );
        effective
    }

    /// Articles published at or before `cutoff`; undated articles always count.
    pub fn news_at(&self, cutoff: DateTime<Utc>) -> Vec<NewsArticle> {
        self.news
            .iter()
            .filter(|a| a.published_at.map_or(true, |p| p <= cutoff))
            .cloned()
            .collect()
    }
}

impl IMetricsProvider for FrozenSnapshot {
    fn metrics_as_of(&self, cutoff: DateTime<Utc>) -> RankResult<Vec<ToolMetrics>> {
        Ok(self.metrics_at(cutoff))
    }
}

impl INewsProvider for FrozenSnapshot {
    fn news_as_of(&self, cutoff: DateTime<Utc>) -> RankResult<Vec<NewsArticle>> {
        Ok(self.news_at(cutoff))
    }
}
