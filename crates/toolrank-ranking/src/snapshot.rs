//! Snapshot payloads for append-only ranking storage.

use chrono::{DateTime, Utc};
use toolrank_core::errors::{RankResult, StoreError};
use toolrank_core::models::{AlgorithmVersion, Period, Ranking, RankingVersion};
use tracing::debug;
use uuid::Uuid;

/// blake3 hex digest of the canonical JSON of `rankings`.
pub fn content_hash(rankings: &[Ranking]) -> RankResult<String> {
    let bytes = serde_json::to_vec(rankings).map_err(|e| StoreError::Serialization {
        reason: e.to_string(),
    })?;
    Ok(blake3::hash(&bytes).to_hex().to_string())
}

/// Wrap a computed ranking set in a new snapshot.
pub fn build_snapshot(
    period: Period,
    algorithm: &AlgorithmVersion,
    rankings: Vec<Ranking>,
    supersedes: Option<String>,
    created_at: DateTime<Utc>,
) -> RankResult<RankingVersion> {
    let content_hash = content_hash(&rankings)?;
    let snapshot = RankingVersion {
        id: Uuid::new_v4().to_string(),
        period,
        algorithm_version: algorithm.id.clone(),
        created_at,
        supersedes,
        content_hash,
        rankings,
    };
    debug!(
        snapshot_id = %snapshot.id,
        period = %period,
        tools = snapshot.rankings.len(),
        hash = %snapshot.content_hash,
        "ranking snapshot built"
    );
    Ok(snapshot)
}
