use toolrank_core::models::{LifecycleStatus, ToolMetrics};

use crate::signals::{amount, count};

const RELEASE_CEILING: f64 = 50.0;
const CONTRIBUTOR_CEILING: f64 = 200.0;

/// Development velocity: lifecycle, release cadence and contributors (each
/// normalised against a ceiling), feature richness, recent updates.
pub fn calculate(metrics: &ToolMetrics) -> f64 {
    let velocity = &metrics.velocity;

    let mut score = match metrics.status {
        LifecycleStatus::Active => 60.0,
        LifecycleStatus::Beta => 55.0,
        _ => 50.0,
    };

    score += (amount(velocity.releases_per_year) / RELEASE_CEILING).min(1.0) * 20.0;
    score += (count(velocity.contributors) / CONTRIBUTOR_CEILING).min(1.0) * 10.0;

    score += match metrics.features.len() {
        n if n >= 15 => 25.0,
        n if n >= 10 => 20.0,
        n if n >= 5 => 10.0,
        _ => 0.0,
    };
    score += metrics.recent_updates.len() as f64 * 2.0;

    score.min(100.0)
}
