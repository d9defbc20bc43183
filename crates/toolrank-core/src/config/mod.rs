//! Configuration system. TOML-based, every section defaulted.

pub mod confidence_config;
pub mod decay_config;
pub mod defaults;
pub mod engine_config;
pub mod news_config;
pub mod observability_config;
pub mod ranking_config;
pub mod tier_config;

pub use confidence_config::ConfidenceConfig;
pub use decay_config::DecayConfig;
pub use engine_config::EngineConfig;
pub use news_config::NewsConfig;
pub use observability_config::ObservabilityConfig;
pub use ranking_config::RankingConfig;
pub use tier_config::{TierBand, TierConfig};
