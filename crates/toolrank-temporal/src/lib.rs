//! # toolrank-temporal
//!
//! Rankings as they would have existed at any past period: as-of
//! reconstruction of the metric and news universe, recomputation through the
//! unchanged ranking pipeline, trajectory and comparison queries, and an
//! append-only snapshot history with rollback.

pub mod calculator;
pub mod frozen;
pub mod history;

pub use calculator::{HistoricalOutcome, HistoricalRankingCalculator, ToolComparison, TrajectoryPoint};
pub use frozen::FrozenSnapshot;
pub use history::InMemoryRankingHistory;
