use chrono::NaiveDate;
use toolrank_core::models::ToolMetrics;

use crate::signals::{flag, keyword_matches, launch_maturity_bonus};

const BASE: f64 = 30.0;

const INNOVATION_KEYWORDS: &[&str] = &[
    "specification-driven",
    "autonomous",
    "agent",
    "mcp",
    "scaffolding",
    "multi-modal",
    "reasoning",
    "planning",
    "orchestration",
    "background agent",
    "speculative",
];

/// Innovation: feature breadth, innovation keywords, protocol support,
/// inference techniques and launch maturity at `reference`.
pub fn calculate(metrics: &ToolMetrics, reference: NaiveDate) -> f64 {
    let capability = &metrics.capability;

    let features = metrics.features.len();
    let mut score = if features > 0 {
        (BASE + features as f64 * 3.0).min(85.0)
    } else {
        BASE
    };

    score += keyword_matches(metrics, INNOVATION_KEYWORDS) as f64 * 8.0;

    // Protocol support counts once, whether flagged or described.
    if flag(capability.mcp_support) && keyword_matches(metrics, &["mcp"]) == 0 {
        score += 8.0;
    }
    if flag(capability.mixture_of_experts) {
        score += 5.0;
    }
    if flag(capability.speculative_decoding) {
        score += 5.0;
    }
    if flag(capability.fast_indexing) {
        score += 3.0;
    }

    score += launch_maturity_bonus(metrics.launch_date, reference);

    score.min(100.0)
}
