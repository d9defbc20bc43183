use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use toolrank_core::models::{NewsArticle, NewsImpactSummary};
use toolrank_core::traits::IDecayModel;
use tracing::{debug, warn};

use crate::resolve::ResolverChain;

/// Importance points assumed when an article carries neither an explicit
/// impact nor an importance.
const DEFAULT_IMPORTANCE_POINTS: f64 = 3.0;

/// Impact before adjustment: the explicit value, else importance / 10 ×
/// sentiment (sentiment defaults to +1).
pub fn base_impact(article: &NewsArticle) -> f64 {
    if let Some(explicit) = article.base_impact {
        return explicit;
    }
    let importance = article
        .importance
        .map(|i| i.points())
        .unwrap_or(DEFAULT_IMPORTANCE_POINTS);
    let sentiment = article.sentiment.unwrap_or(1.0).clamp(-1.0, 1.0);
    importance / 10.0 * sentiment
}

/// Folds articles into per-tool impact summaries at a reference instant.
pub struct NewsAggregator<'a> {
    model: &'a dyn IDecayModel,
    resolver: Option<&'a ResolverChain>,
}

impl<'a> NewsAggregator<'a> {
    pub fn new(model: &'a dyn IDecayModel) -> Self {
        Self {
            model,
            resolver: None,
        }
    }

    /// Attribute articles without explicit tool ids via `resolver`.
    pub fn with_resolver(mut self, resolver: &'a ResolverChain) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Tools an article is about: explicit ids, else resolved mentions and title.
    pub fn attribute(&self, article: &NewsArticle) -> BTreeSet<String> {
        if !article.tool_ids.is_empty() {
            return article.tool_ids.iter().cloned().collect();
        }
        let Some(resolver) = self.resolver else {
            return BTreeSet::new();
        };
        article
            .tool_mentions
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(article.title.as_str()))
            .filter_map(|text| resolver.resolve(text))
            .collect()
    }

    /// Per-tool summaries keyed by tool id. Articles published after
    /// `reference` are ignored.
    pub fn aggregate(
        &self,
        articles: &[NewsArticle],
        reference: DateTime<Utc>,
    ) -> BTreeMap<String, NewsImpactSummary> {
        let mut summaries: BTreeMap<String, NewsImpactSummary> = BTreeMap::new();
        let mut skipped_future = 0usize;

        for article in articles {
            if article.published_at.is_some_and(|p| p > reference) {
                skipped_future += 1;
                continue;
            }
            let tools = self.attribute(article);
            if tools.is_empty() {
                warn!(article_id = %article.id, title = %article.title, "news article not attributed to any tool");
                continue;
            }
            let impact = self
                .model
                .adjusted_impact(article, base_impact(article), reference);
            if !impact.is_finite() {
                warn!(article_id = %article.id, "non-finite news impact, skipping");
                continue;
            }
            for tool_id in tools {
                summaries.entry(tool_id).or_default().record(impact);
            }
        }

        debug!(
            articles = articles.len(),
            tools = summaries.len(),
            skipped_future,
            "news aggregated"
        );
        summaries
    }
}
