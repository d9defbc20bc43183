//! # toolrank-ranking
//!
//! One engine, parameterised by a published algorithm bundle:
//!
//! ```text
//! score(tool) = confidence(tool) × Σ_f weight[f] × factor_score(tool, f)
//! ```
//!
//! Scoring is per tool and may run on the rayon pool. Sorting, dense
//! position assignment, tiers and movement run in one sequential step.

pub mod analysis;
pub mod cache;
pub mod engine;
pub mod movement;
pub mod registry;
pub mod snapshot;

pub use cache::ScoreCache;
pub use engine::{RankingEngine, ScoredTool};
pub use registry::AlgorithmRegistry;
pub use snapshot::{build_snapshot, content_hash};
