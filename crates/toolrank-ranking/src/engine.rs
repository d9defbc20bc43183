//! RankingEngine: the single scoring and ranking pipeline.
//!
//! 1. Deduplicate metric records per tool
//! 2. Aggregate decayed news impact at the period's end
//! 3. Score each tool (optionally on the rayon pool, optionally cached)
//! 4. Sort by score descending, then tiebreakers, then tool id
//! 5. Assign dense positions, tiers, movement and change analysis

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use rayon::prelude::*;
use toolrank_core::config::EngineConfig;
use toolrank_core::errors::RankResult;
use toolrank_core::models::{
    AlgorithmVersion, FactorScores, NewsArticle, NewsImpactSummary, Period, Ranking,
    ScoringContext, ToolMetrics,
};
use toolrank_core::traits::{IAlgorithmStore, IFactorCalculator};
use toolrank_news::{NewsAggregator, NewsDecayModel, ResolverChain};
use toolrank_scoring::{calculator_for, ConfidenceMultiplier, Tiebreakers};
use tracing::{debug, info, warn};

use crate::analysis::{analyze, ChangeInput};
use crate::cache::ScoreCache;
use crate::movement::{movement, PreviousPositions};

/// One tool's score before positions are assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTool {
    pub tool_id: String,
    pub tool_slug: String,
    pub tool_name: String,
    pub factor_scores: FactorScores,
    pub base_score: f64,
    pub data_completeness: f64,
    pub confidence: f64,
    pub score: f64,
    pub contributions: FactorScores,
    pub news: NewsImpactSummary,
    pub tiebreakers: Tiebreakers,
}

/// Ranks tools for a period under one published algorithm bundle.
///
/// The engine holds no mutable state; the optional cache is injected by
/// reference and never changes results.
pub struct RankingEngine<'a> {
    algorithm: Arc<AlgorithmVersion>,
    config: &'a EngineConfig,
    calculator: &'static dyn IFactorCalculator,
    confidence: ConfidenceMultiplier,
    decay: NewsDecayModel,
    cache: Option<&'a ScoreCache>,
    resolver: Option<&'a ResolverChain>,
}

impl<'a> RankingEngine<'a> {
    /// Engine for `version`. Unknown versions and invalid configuration are
    /// hard errors; no other version is substituted.
    pub fn new(
        store: &dyn IAlgorithmStore,
        version: &str,
        config: &'a EngineConfig,
    ) -> RankResult<Self> {
        config.validate()?;
        let algorithm = store.get(version)?;
        algorithm.validate()?;
        Ok(Self {
            calculator: calculator_for(algorithm.formula),
            confidence: ConfidenceMultiplier::from_config(&config.confidence),
            decay: NewsDecayModel::from_config(&config.decay),
            algorithm,
            config,
            cache: None,
            resolver: None,
        })
    }

    /// Engine for the configured default version.
    pub fn with_default_version(
        store: &dyn IAlgorithmStore,
        config: &'a EngineConfig,
    ) -> RankResult<Self> {
        Self::new(store, &config.ranking.default_algorithm, config)
    }

    pub fn with_cache(mut self, cache: &'a ScoreCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Attribute untagged news with `resolver` instead of a chain built from
    /// the tools being ranked.
    pub fn with_resolver(mut self, resolver: &'a ResolverChain) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn algorithm(&self) -> &AlgorithmVersion {
        &self.algorithm
    }

    /// Score one tool in `ctx`.
    pub fn score_tool(&self, metrics: &ToolMetrics, ctx: &ScoringContext) -> ScoredTool {
        let factor_scores = self.factor_scores(metrics, ctx);
        let weights = &self.algorithm.weights;

        let base_score: f64 = factor_scores
            .iter()
            .map(|(factor, score)| weights.get(factor) * score)
            .sum();
        let data_completeness = self.confidence.completeness(metrics);
        let confidence = if self.algorithm.formula.applies_confidence() {
            self.confidence.multiplier_for(data_completeness)
        } else {
            1.0
        };
        let contributions =
            FactorScores::from_fn(|factor| weights.get(factor) * factor_scores.get(factor) * confidence);
        let precision = self.config.ranking.score_precision;

        ScoredTool {
            tool_id: metrics.tool_id.clone(),
            tool_slug: metrics.slug.clone(),
            tool_name: metrics.display_name().to_string(),
            factor_scores,
            base_score: round_to(base_score, precision),
            data_completeness,
            confidence,
            score: round_to(base_score * confidence, precision),
            contributions,
            news: ctx.news,
            tiebreakers: Tiebreakers::for_metrics(metrics),
        }
    }

    /// Rank every tool in `metrics` for `period`.
    ///
    /// `previous` is the preceding period's ranking set; tools absent from
    /// it are new entries.
    pub fn rank(
        &self,
        period: Period,
        metrics: &[ToolMetrics],
        news: &[NewsArticle],
        previous: Option<&[Ranking]>,
    ) -> Vec<Ranking> {
        info!(
            period = %period,
            algorithm = %self.algorithm.id,
            records = metrics.len(),
            articles = news.len(),
            "ranking pass started"
        );

        // Step 1: one record per tool.
        let tools = dedupe(metrics);

        // Step 2: news impact as of the end of the period.
        let reference = period.end_instant();
        let fallback_resolver;
        let resolver = match self.resolver {
            Some(r) => r,
            None => {
                let terms = self
                    .config
                    .news
                    .terms
                    .iter()
                    .map(|(term, tool_id)| (term.as_str(), tool_id.as_str()));
                fallback_resolver = ResolverChain::standard(&tools, terms);
                &fallback_resolver
            }
        };
        let impacts = NewsAggregator::new(&self.decay)
            .with_resolver(resolver)
            .aggregate(news, reference);

        // Step 3: score.
        let reference_date = period.reference_date();
        let score_one = |m: &ToolMetrics| {
            let ctx = ScoringContext::new(reference_date)
                .with_news(impacts.get(&m.tool_id).copied().unwrap_or_default());
            self.score_tool(m, &ctx)
        };
        let mut scored: Vec<ScoredTool> = if self.config.ranking.parallel {
            tools.par_iter().map(score_one).collect()
        } else {
            tools.iter().map(score_one).collect()
        };
        debug!(
            period = %period,
            tools = scored.len(),
            news_tools = impacts.len(),
            "tools scored"
        );

        // Step 4: deterministic order.
        scored.sort_by(compare_scored);
        debug!(
            period = %period,
            leader = scored.first().map(|t| t.tool_id.as_str()).unwrap_or_default(),
            "tools sorted"
        );

        // Step 5: positions, tiers, movement.
        let previous = PreviousPositions::new(previous.unwrap_or_default());
        let rankings: Vec<Ranking> = scored
            .into_iter()
            .enumerate()
            .map(|(index, tool)| self.assemble(period, index, tool, &previous))
            .collect();

        info!(
            period = %period,
            algorithm = %self.algorithm.id,
            tools = rankings.len(),
            had_previous = !previous.is_empty(),
            "ranking computed"
        );
        rankings
    }

    fn factor_scores(&self, metrics: &ToolMetrics, ctx: &ScoringContext) -> FactorScores {
        let compute = || self.calculator.calculate(metrics, ctx);
        match self.cache {
            Some(cache) => match ScoreCache::key(&self.algorithm.id, metrics, ctx) {
                Some(key) => cache.get_or_compute(key, compute),
                None => compute(),
            },
            None => compute(),
        }
    }

    fn assemble(
        &self,
        period: Period,
        index: usize,
        tool: ScoredTool,
        previous: &PreviousPositions<'_>,
    ) -> Ranking {
        let position = u32::try_from(index + 1).unwrap_or(u32::MAX);
        let prior = previous.get(&tool.tool_id);
        let movement = movement(prior.map(|r| r.position), position);
        let change = analyze(
            &self.algorithm.weights,
            ChangeInput {
                tool_name: &tool.tool_name,
                position,
                score: tool.score,
                factor_scores: &tool.factor_scores,
                movement: &movement,
                previous: prior.map(|r| (r.score, &r.factor_scores)),
            },
        );
        Ranking {
            period,
            algorithm_version: self.algorithm.id.clone(),
            tool_id: tool.tool_id,
            tool_slug: tool.tool_slug,
            tool_name: tool.tool_name,
            position,
            score: tool.score,
            base_score: tool.base_score,
            confidence: tool.confidence,
            data_completeness: tool.data_completeness,
            factor_scores: tool.factor_scores,
            contributions: tool.contributions,
            tier: self.config.tiers.tier_for(position),
            movement,
            change,
            news: tool.news,
        }
    }
}

/// Score descending, then feature count, description quality, pricing
/// tier and name, then tool id ascending.
fn compare_scored(a: &ScoredTool, b: &ScoredTool) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.tiebreakers.rank_order(&b.tiebreakers))
        .then_with(|| a.tool_id.cmp(&b.tool_id))
}

/// Keep one record per tool: the latest `recorded_at`, undated records
/// losing to dated ones. Output is in first-seen order.
///
/// Records without a tool id are keyed by slug and take the slug as their
/// id. Records with neither are kept as distinct tools.
fn dedupe(metrics: &[ToolMetrics]) -> Vec<ToolMetrics> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut kept: Vec<&ToolMetrics> = Vec::with_capacity(metrics.len());
    for record in metrics {
        let key = dedupe_key(record);
        if key.is_empty() {
            warn!(name = %record.name, "metrics record has no tool id or slug, kept as its own tool");
            kept.push(record);
            continue;
        }
        match index.get(key) {
            Some(&slot) => {
                warn!(tool_id = %key, "duplicate metrics record, keeping the latest");
                if record.recorded_at >= kept[slot].recorded_at {
                    kept[slot] = record;
                }
            }
            None => {
                index.insert(key, kept.len());
                kept.push(record);
            }
        }
    }
    kept.into_iter()
        .map(|record| {
            let mut record = record.clone();
            if record.tool_id.trim().is_empty() && !record.slug.trim().is_empty() {
                record.tool_id = record.slug.trim().to_string();
            }
            record
        })
        .collect()
}

fn dedupe_key(record: &ToolMetrics) -> &str {
    match record.tool_id.trim() {
        "" => record.slug.trim(),
        id => id,
    }
}

fn round_to(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}
