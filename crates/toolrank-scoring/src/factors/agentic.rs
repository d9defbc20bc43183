use toolrank_core::models::ToolMetrics;

use crate::signals::{flag, keyword_matches};

const BASE: f64 = 50.0;

const CATEGORY_BONUS: &[(&str, f64)] = &[
    ("autonomous-agent", 20.0),
    ("code-editor", 15.0),
    ("proprietary-ide", 15.0),
    ("ide-assistant", 10.0),
    ("devops-assistant", 10.0),
    ("open-source-framework", 5.0),
    ("app-builder", 3.0),
];

const CAPABILITY_KEYWORDS: &[&str] = &[
    "autonomous",
    "agent",
    "multi-file",
    "planning",
    "reasoning",
    "orchestration",
    "workflow",
    "debugging",
    "refactoring",
    "testing",
    "deployment",
    "monitoring",
];

/// Agentic capability.
///
/// SWE-bench replaces the base when present: verified against a 70% ceiling,
/// otherwise lite/full against 30% scaled to 80. Category, multi-file
/// editing, subprocess capabilities and description keywords add on top.
pub fn calculate(metrics: &ToolMetrics) -> f64 {
    let capability = &metrics.capability;
    let bench = &capability.swe_bench;

    let mut score = match (
        bench.verified.filter(|v| *v > 0.0),
        bench.lite.or(bench.full).filter(|v| *v > 0.0),
    ) {
        (Some(verified), _) => (verified / 70.0 * 100.0).min(100.0),
        (None, Some(partial)) => (partial / 30.0 * 80.0).min(100.0),
        (None, None) => BASE,
    };

    score += CATEGORY_BONUS
        .iter()
        .find(|(category, _)| *category == metrics.category)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0.0);

    if flag(capability.multi_file_support) {
        score += 10.0;
    }
    score += capability.subprocess_capabilities.len() as f64 * 2.0;

    let keyword_points = (keyword_matches(metrics, CAPABILITY_KEYWORDS) as f64 * 3.0).min(30.0);
    score += keyword_points * 0.3;

    score.min(100.0)
}
