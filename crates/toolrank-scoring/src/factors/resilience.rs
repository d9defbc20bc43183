use toolrank_core::models::{LifecycleStatus, ToolMetrics};

use crate::signals::{company_backing, has_free_tier, is_open_source};

/// Platform resilience.
///
/// Lifecycle status sets the base (an acquired or deprecated tool is at
/// risk regardless of its other signals); vendor independence, openness
/// and backing add to it.
pub fn calculate(metrics: &ToolMetrics) -> f64 {
    let mut score = match metrics.status {
        LifecycleStatus::Active => 50.0,
        LifecycleStatus::Beta | LifecycleStatus::Unknown => 45.0,
        LifecycleStatus::Acquired => 30.0,
        LifecycleStatus::Deprecated => 10.0,
    };

    score += match metrics.provider_count() {
        0 => 0.0,
        1 => 5.0,
        2 => 15.0,
        3 | 4 => 25.0,
        _ => 35.0,
    };

    if is_open_source(metrics) {
        score += 20.0;
    }
    if has_free_tier(metrics) {
        score += 10.0;
    }
    score += company_backing(metrics) * 0.2;

    score.min(100.0)
}
