//! Error handling for the ranking engine.
//! One error enum per subsystem, `thiserror` only, aggregated into [`RankError`].
//!
//! Data-quality problems in metric or news records are never errors; they are
//! absorbed by per-field defaults. Only configuration-integrity and storage
//! violations surface here.

pub mod config_error;
pub mod rank_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use rank_error::{RankError, RankResult};
pub use store_error::StoreError;
