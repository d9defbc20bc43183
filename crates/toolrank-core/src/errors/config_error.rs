/// Configuration-integrity errors. Any of these aborts a ranking pass
/// before a single Ranking record is produced.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown algorithm version: {version}")]
    UnknownVersion { version: String },

    #[error("algorithm version {version} weights sum to {sum:.12}, expected 1.0")]
    WeightSumMismatch { version: String, sum: f64 },

    #[error("algorithm version {version} has invalid weight {weight} for factor {factor}")]
    InvalidWeight {
        version: String,
        factor: String,
        weight: f64,
    },

    #[error("algorithm version {version} is already published")]
    DuplicateVersion { version: String },

    #[error("invalid tier bands: {reason}")]
    InvalidTierBands { reason: String },

    #[error("invalid {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },
}
