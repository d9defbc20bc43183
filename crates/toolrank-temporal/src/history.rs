//! In-memory ranking history: append-only snapshots, movable current pointer.

use std::collections::HashMap;
use std::sync::RwLock;

use toolrank_core::errors::{RankResult, StoreError};
use toolrank_core::models::{Period, RankingVersion};
use toolrank_core::traits::IRankingHistory;
use tracing::info;

#[derive(Debug, Default)]
struct HistoryState {
    snapshots: Vec<RankingVersion>,
    current: HashMap<Period, usize>,
}

/// Snapshots are never modified or removed. Appending makes the new snapshot
/// current for its period; rollback only moves the pointer.
#[derive(Debug, Default)]
pub struct InMemoryRankingHistory {
    state: RwLock<HistoryState>,
}

impl InMemoryRankingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .snapshots
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IRankingHistory for InMemoryRankingHistory {
    fn append(&self, snapshot: RankingVersion) -> RankResult<()> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        if state.snapshots.iter().any(|s| s.id == snapshot.id) {
            return Err(StoreError::DuplicateSnapshot { id: snapshot.id }.into());
        }
        info!(
            snapshot_id = %snapshot.id,
            period = %snapshot.period,
            algorithm = %snapshot.algorithm_version,
            tools = snapshot.rankings.len(),
            "ranking snapshot appended"
        );
        let index = state.snapshots.len();
        state.current.insert(snapshot.period, index);
        state.snapshots.push(snapshot);
        Ok(())
    }

    fn get(&self, id: &str) -> RankResult<Option<RankingVersion>> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        Ok(state.snapshots.iter().find(|s| s.id == id).cloned())
    }

    fn current(&self, period: Period) -> RankResult<Option<RankingVersion>> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        Ok(state
            .current
            .get(&period)
            .and_then(|&i| state.snapshots.get(i))
            .cloned())
    }

    fn history(&self, period: Period) -> RankResult<Vec<RankingVersion>> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        Ok(state
            .snapshots
            .iter()
            .filter(|s| s.period == period)
            .cloned()
            .collect())
    }

    fn rollback(&self, period: Period, snapshot_id: &str) -> RankResult<RankingVersion> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        let index = state
            .snapshots
            .iter()
            .position(|s| s.id == snapshot_id)
            .ok_or_else(|| StoreError::SnapshotNotFound {
                id: snapshot_id.to_string(),
            })?;
        let target = &state.snapshots[index];
        if target.period != period {
            return Err(StoreError::PeriodMismatch {
                id: snapshot_id.to_string(),
                expected: period.to_string(),
                actual: target.period.to_string(),
            }
            .into());
        }
        let target = target.clone();
        state.current.insert(period, index);
        info!(period = %period, snapshot_id, "ranking rolled back");
        Ok(target)
    }
}
