/// Ranking-history store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("ranking snapshot {id} not found")]
    SnapshotNotFound { id: String },

    #[error("ranking snapshot {id} belongs to period {actual}, not {expected}")]
    PeriodMismatch {
        id: String,
        expected: String,
        actual: String,
    },

    #[error("ranking snapshot {id} already exists")]
    DuplicateSnapshot { id: String },

    #[error("failed to serialize ranking snapshot: {reason}")]
    Serialization { reason: String },
}
