use super::{ConfigError, StoreError};

/// Top-level engine error. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RankError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("invalid period identifier: {input}")]
    InvalidPeriod { input: String },
}

impl RankError {
    /// True when the error is a configuration-integrity violation.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Convenience alias used throughout the workspace.
pub type RankResult<T> = Result<T, RankError>;
