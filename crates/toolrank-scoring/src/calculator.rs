use toolrank_core::models::{FactorScores, FormulaVariant, ScoringContext, ToolMetrics};
use toolrank_core::traits::IFactorCalculator;
use tracing::warn;

use crate::{factors, smart_defaults};

/// Tiered signal formulas.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataConfidenceCalculator;

/// Neutral-baseline formulas.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartDefaultsCalculator;

impl IFactorCalculator for DataConfidenceCalculator {
    fn variant(&self) -> FormulaVariant {
        FormulaVariant::DataConfidence
    }

    fn calculate(&self, metrics: &ToolMetrics, ctx: &ScoringContext) -> FactorScores {
        bounded(metrics, factors::compute(metrics, ctx))
    }
}

impl IFactorCalculator for SmartDefaultsCalculator {
    fn variant(&self) -> FormulaVariant {
        FormulaVariant::SmartDefaults
    }

    fn calculate(&self, metrics: &ToolMetrics, ctx: &ScoringContext) -> FactorScores {
        bounded(metrics, smart_defaults::compute(metrics, ctx))
    }
}

static DATA_CONFIDENCE: DataConfidenceCalculator = DataConfidenceCalculator;
static SMART_DEFAULTS: SmartDefaultsCalculator = SmartDefaultsCalculator;

/// The calculator implementing `variant`.
pub fn calculator_for(variant: FormulaVariant) -> &'static dyn IFactorCalculator {
    match variant {
        FormulaVariant::DataConfidence => &DATA_CONFIDENCE,
        FormulaVariant::SmartDefaults => &SMART_DEFAULTS,
    }
}

fn bounded(metrics: &ToolMetrics, raw: FactorScores) -> FactorScores {
    if !raw.is_bounded() {
        warn!(tool_id = %metrics.tool_id, ?raw, "factor score out of range, clamping");
    }
    raw.clamped()
}
