//! HistoricalRankingCalculator: past rankings from as-of data.
//!
//! A historical pass restricts metrics and news to what was effective at the
//! end of the period, recomputes the preceding period the same way for
//! movement, and hands both to the unchanged ranking pipeline. Output depends
//! only on the providers' frozen data, the period and the algorithm version.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use toolrank_core::config::EngineConfig;
use toolrank_core::errors::RankResult;
use toolrank_core::models::{Period, Ranking, RankingVersion, Tier};
use toolrank_core::traits::{IAlgorithmStore, IMetricsProvider, INewsProvider, IRankingHistory};
use toolrank_ranking::{build_snapshot, RankingEngine, ScoreCache};
use tracing::{debug, info};
use ts_rs::TS;

/// Result of a single-period recomputation.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoricalOutcome {
    Computed(Vec<Ranking>),
    /// No metric records were effective at the end of the period.
    NoData,
}

impl HistoricalOutcome {
    pub fn rankings(&self) -> Option<&[Ranking]> {
        match self {
            HistoricalOutcome::Computed(r) => Some(r),
            HistoricalOutcome::NoData => None,
        }
    }

    pub fn into_rankings(self) -> Option<Vec<Ranking>> {
        match self {
            HistoricalOutcome::Computed(r) => Some(r),
            HistoricalOutcome::NoData => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, HistoricalOutcome::NoData)
    }
}

/// One tool's standing in one period. Absent fields mean the tool was not
/// ranked then.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrajectoryPoint {
    #[ts(type = "string")]
    pub period: Period,
    pub position: Option<u32>,
    pub score: Option<f64>,
    pub tier: Option<Tier>,
}

impl TrajectoryPoint {
    fn from_outcome(period: Period, outcome: &HistoricalOutcome, tool_id: &str) -> Self {
        let ranking = outcome
            .rankings()
            .and_then(|rs| rs.iter().find(|r| r.tool_id == tool_id));
        Self {
            period,
            position: ranking.map(|r| r.position),
            score: ranking.map(|r| r.score),
            tier: ranking.map(|r| r.tier),
        }
    }
}

/// A tool's points across the compared periods, in period order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToolComparison {
    pub tool_id: String,
    pub points: Vec<TrajectoryPoint>,
}

pub struct HistoricalRankingCalculator<'a> {
    metrics: &'a dyn IMetricsProvider,
    news: &'a dyn INewsProvider,
    algorithms: &'a dyn IAlgorithmStore,
    config: &'a EngineConfig,
    cache: Option<&'a ScoreCache>,
}

impl<'a> HistoricalRankingCalculator<'a> {
    pub fn new(
        metrics: &'a dyn IMetricsProvider,
        news: &'a dyn INewsProvider,
        algorithms: &'a dyn IAlgorithmStore,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            metrics,
            news,
            algorithms,
            config,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: &'a ScoreCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Recompute `period` under `version`.
    ///
    /// An unknown version fails before any data is read. A period with no
    /// effective metric records yields [`HistoricalOutcome::NoData`].
    pub fn compute(&self, period: Period, version: &str) -> RankResult<HistoricalOutcome> {
        let engine = self.engine(version)?;
        self.compute_with(&engine, period)
    }

    /// A tool's position and score across `periods`.
    pub fn trajectory(
        &self,
        tool_id: &str,
        periods: &[Period],
        version: &str,
    ) -> RankResult<Vec<TrajectoryPoint>> {
        let engine = self.engine(version)?;
        periods
            .iter()
            .map(|&period| {
                let outcome = self.compute_with(&engine, period)?;
                Ok(TrajectoryPoint::from_outcome(period, &outcome, tool_id))
            })
            .collect()
    }

    /// Side-by-side trajectories of `tool_ids` across `periods`. Each period
    /// is computed once.
    pub fn compare(
        &self,
        periods: &[Period],
        tool_ids: &[&str],
        version: &str,
    ) -> RankResult<Vec<ToolComparison>> {
        let engine = self.engine(version)?;
        let outcomes = periods
            .iter()
            .map(|&period| Ok((period, self.compute_with(&engine, period)?)))
            .collect::<RankResult<Vec<_>>>()?;

        Ok(tool_ids
            .iter()
            .map(|&tool_id| ToolComparison {
                tool_id: tool_id.to_string(),
                points: outcomes
                    .iter()
                    .map(|(period, outcome)| TrajectoryPoint::from_outcome(*period, outcome, tool_id))
                    .collect(),
            })
            .collect())
    }

    /// Recompute `period` and append the result to `history`, superseding
    /// the period's current snapshot. `None` when there was nothing to rank.
    pub fn snapshot(
        &self,
        period: Period,
        version: &str,
        history: &dyn IRankingHistory,
        created_at: DateTime<Utc>,
    ) -> RankResult<Option<RankingVersion>> {
        let engine = self.engine(version)?;
        let Some(rankings) = self.compute_with(&engine, period)?.into_rankings() else {
            return Ok(None);
        };
        let supersedes = history.current(period)?.map(|s| s.id);
        let snapshot = build_snapshot(period, engine.algorithm(), rankings, supersedes, created_at)?;
        history.append(snapshot.clone())?;
        Ok(Some(snapshot))
    }

    fn engine(&self, version: &str) -> RankResult<RankingEngine<'a>> {
        let engine = RankingEngine::new(self.algorithms, version, self.config)?;
        Ok(match self.cache {
            Some(cache) => engine.with_cache(cache),
            None => engine,
        })
    }

    fn compute_with(&self, engine: &RankingEngine<'_>, period: Period) -> RankResult<HistoricalOutcome> {
        let cutoff = period.end_instant();
        let metrics = self.metrics.metrics_as_of(cutoff)?;
        if metrics.is_empty() {
            info!(period = %period, cutoff = %cutoff, "no metrics effective for period");
            return Ok(HistoricalOutcome::NoData);
        }
        let news = self.news.news_as_of(cutoff)?;

        // Step 1: previous period from the same frozen data.
        let previous_period = period.previous();
        let previous_cutoff = previous_period.end_instant();
        let previous_metrics = self.metrics.metrics_as_of(previous_cutoff)?;
        let previous = if previous_metrics.is_empty() {
            None
        } else {
            let previous_news = self.news.news_as_of(previous_cutoff)?;
            Some(engine.rank(previous_period, &previous_metrics, &previous_news, None))
        };

        // Step 2: the requested period.
        let rankings = engine.rank(period, &metrics, &news, previous.as_deref());
        debug!(
            period = %period,
            algorithm = %engine.algorithm().id,
            tools = rankings.len(),
            articles = news.len(),
            "historical ranking computed"
        );
        Ok(HistoricalOutcome::Computed(rankings))
    }
}
