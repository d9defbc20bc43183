use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::period::Period;
use super::ranking::Ranking;

/// A persisted ranking snapshot for one period.
///
/// Snapshots are append-only; a recomputation produces a new version whose
/// `supersedes` points at the one it replaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankingVersion {
    pub id: String,
    #[ts(type = "string")]
    pub period: Period,
    pub algorithm_version: String,
    pub created_at: DateTime<Utc>,
    pub supersedes: Option<String>,
    /// blake3 hex digest of the canonical JSON of `rankings`.
    pub content_hash: String,
    pub rankings: Vec<Ranking>,
}

impl RankingVersion {
    pub fn position_of(&self, tool_id: &str) -> Option<u32> {
        self.ranking_for(tool_id).map(|r| r.position)
    }

    pub fn ranking_for(&self, tool_id: &str) -> Option<&Ranking> {
        self.rankings.iter().find(|r| r.tool_id == tool_id)
    }
}
