//! Tiered factor formulas for the `DataConfidence` variant.
//! One module per factor, each exposing `calculate`.

pub mod adoption;
pub mod agentic;
pub mod innovation;
pub mod resilience;
pub mod sentiment;
pub mod technical;
pub mod traction;
pub mod velocity;

use toolrank_core::models::{FactorScores, ScoringContext, ToolMetrics};

/// All eight factor scores, unclamped.
pub fn compute(metrics: &ToolMetrics, ctx: &ScoringContext) -> FactorScores {
    FactorScores {
        agentic_capability: agentic::calculate(metrics),
        innovation: innovation::calculate(metrics, ctx.reference_date),
        technical_performance: technical::calculate(metrics),
        developer_adoption: adoption::calculate(metrics),
        market_traction: traction::calculate(metrics),
        business_sentiment: sentiment::calculate(metrics, &ctx.news),
        development_velocity: velocity::calculate(metrics),
        platform_resilience: resilience::calculate(metrics),
    }
}
