//! # toolrank-core
//!
//! Foundation crate for the tool ranking score engine.
//! Defines all models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{RankError, RankResult};
pub use models::{
    AlgorithmVersion, Factor, FactorScores, FormulaVariant, NewsArticle, Period, Ranking,
    RankingVersion, Tier, ToolMetrics, WeightConfiguration,
};
