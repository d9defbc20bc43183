use crate::models::{FactorScores, FormulaVariant, ScoringContext, ToolMetrics};

/// Computes the eight factor scores for one tool. Pure and deterministic.
pub trait IFactorCalculator: Send + Sync {
    fn variant(&self) -> FormulaVariant;

    /// Every returned score lies in `[0, 100]`.
    fn calculate(&self, metrics: &ToolMetrics, ctx: &ScoringContext) -> FactorScores;
}
