use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::factor::{Factor, FactorScores};
use super::news::NewsImpactSummary;
use super::period::Period;

/// Display tier derived from position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Tier {
    S,
    A,
    B,
    C,
    D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MovementDirection {
    Up,
    Down,
    Same,
    New,
}

/// Position change against the previous period's ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Movement {
    pub previous_position: Option<u32>,
    /// `previous − current`; positive means the tool moved up.
    pub change: Option<i64>,
    pub direction: MovementDirection,
}

impl Movement {
    pub fn new_entry() -> Self {
        Self {
            previous_position: None,
            change: None,
            direction: MovementDirection::New,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ChangeCategory {
    MajorRise,
    Rise,
    Stable,
    Decline,
    MajorDecline,
    NewEntry,
}

/// Why a tool moved: category plus the factor whose score changed most.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChangeAnalysis {
    pub category: ChangeCategory,
    pub score_change: Option<f64>,
    pub primary_factor: Option<Factor>,
    /// Signed change of the primary factor's score.
    pub primary_factor_change: Option<f64>,
    pub narrative: String,
}

/// Output record: one tool's standing in one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Ranking {
    #[ts(type = "string")]
    pub period: Period,
    pub algorithm_version: String,
    pub tool_id: String,
    pub tool_slug: String,
    pub tool_name: String,
    /// Dense 1-based position.
    pub position: u32,
    pub score: f64,
    /// Weighted sum before the confidence multiplier.
    pub base_score: f64,
    pub confidence: f64,
    pub data_completeness: f64,
    pub factor_scores: FactorScores,
    /// Per-factor share of `score`: weight × factor score × confidence.
    pub contributions: FactorScores,
    pub tier: Tier,
    pub movement: Movement,
    pub change: ChangeAnalysis,
    pub news: NewsImpactSummary,
}
