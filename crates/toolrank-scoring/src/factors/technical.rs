use toolrank_core::models::ToolMetrics;

use crate::signals::{count, flag};

/// Score with no context-window data.
const NEUTRAL: f64 = 50.0;

/// Technical performance: context window, language breadth, provider breadth.
pub fn calculate(metrics: &ToolMetrics) -> f64 {
    let capability = &metrics.capability;

    let window = count(capability.context_window);
    let mut score = if window >= 1_000_000.0 {
        95.0
    } else if window >= 500_000.0 {
        90.0
    } else if window >= 200_000.0 {
        85.0
    } else if window >= 100_000.0 {
        70.0
    } else if window > 0.0 {
        50.0 + window / 100_000.0 * 20.0
    } else {
        NEUTRAL
    };

    let languages = count(capability.language_count);
    score += if languages >= 20.0 {
        15.0
    } else if languages >= 10.0 {
        10.0
    } else {
        languages * 0.8
    };

    let providers = metrics.provider_count() as f64;
    score += if providers >= 10.0 {
        15.0
    } else if providers >= 5.0 {
        10.0
    } else if providers >= 3.0 {
        7.0
    } else {
        providers * 2.0
    };

    // Ships its own IDE or an editor fork.
    if flag(capability.ide_integration) {
        score += 5.0;
    }

    score.min(100.0)
}
