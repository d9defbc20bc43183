use std::sync::Arc;

use crate::errors::RankResult;
use crate::models::{AlgorithmVersion, Period, Ranking, RankingVersion};

/// Published algorithm bundles, keyed by version id.
pub trait IAlgorithmStore: Send + Sync {
    /// Look up a published version. Unknown ids are a configuration error.
    fn get(&self, version: &str) -> RankResult<Arc<AlgorithmVersion>>;

    /// Published version ids in publication order.
    fn versions(&self) -> Vec<String>;
}

/// Append-only store of ranking snapshots with a per-period current pointer.
pub trait IRankingHistory: Send + Sync {
    /// Append a snapshot and make it current for its period.
    fn append(&self, snapshot: RankingVersion) -> RankResult<()>;

    fn get(&self, id: &str) -> RankResult<Option<RankingVersion>>;

    /// The current snapshot for `period`, if any.
    fn current(&self, period: Period) -> RankResult<Option<RankingVersion>>;

    /// Every snapshot for `period`, oldest first.
    fn history(&self, period: Period) -> RankResult<Vec<RankingVersion>>;

    /// Point `period` back at an earlier snapshot without recomputation.
    fn rollback(&self, period: Period, snapshot_id: &str) -> RankResult<RankingVersion>;

    /// Rankings of the period immediately preceding `period`.
    fn previous_rankings(&self, period: Period) -> RankResult<Option<Vec<Ranking>>> {
        Ok(self.current(period.previous())?.map(|s| s.rankings))
    }
}
