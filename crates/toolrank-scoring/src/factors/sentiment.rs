use toolrank_core::models::{NewsImpactSummary, ToolMetrics};

use crate::signals::{category_is, count, tiered, HOT_CATEGORIES};

/// Score with no coverage signal at all.
const NEUTRAL: f64 = 50.0;

const MENTION_LEVELS: &[(f64, f64)] = &[(15.0, 80.0), (10.0, 75.0), (5.0, 70.0), (1.0, 65.0)];

/// Business sentiment: coverage volume, decayed news impact, category heat,
/// and growth.
pub fn calculate(metrics: &ToolMetrics, news: &NewsImpactSummary) -> f64 {
    let mentions = count(metrics.adoption.news_mentions);
    let mut score = match tiered(mentions, MENTION_LEVELS) {
        level if level > 0.0 => level,
        _ => NEUTRAL,
    };

    if news.total_impact.is_finite() {
        score = (score + news.total_impact * 10.0).clamp(0.0, 100.0);
    }

    if category_is(metrics, HOT_CATEGORIES) {
        score += 10.0;
    }

    let growing = metrics.commercial.annual_revenue() >= 100e6
        || count(metrics.adoption.users) >= 500e3;
    if growing {
        score += 10.0;
    }

    score.min(100.0)
}
