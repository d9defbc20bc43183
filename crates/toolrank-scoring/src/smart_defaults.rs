//! `SmartDefaults` formulas: every factor starts from a neutral baseline and
//! present signals raise (or, for pricing, set) it. No tier table starts at
//! zero, so sparse records land mid-field.

use toolrank_core::models::{
    FactorScores, LifecycleStatus, NewsImpactSummary, PricingModel, ScoringContext, ToolMetrics,
};

use crate::signals::{
    amount, category_is, count, flag, has_free_tier, is_open_source, keyword_matches, tiered,
    HOT_CATEGORIES,
};

const CATEGORY_BONUS: &[(&str, f64)] = &[
    ("autonomous-agent", 20.0),
    ("code-editor", 15.0),
    ("proprietary-ide", 15.0),
    ("ide-assistant", 10.0),
    ("devops-assistant", 10.0),
    ("open-source-framework", 5.0),
];

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
];

pub fn compute(metrics: &ToolMetrics, ctx: &ScoringContext) -> FactorScores {
    FactorScores {
        agentic_capability: agentic(metrics),
        innovation: innovation(metrics),
        technical_performance: technical(metrics),
        developer_adoption: adoption(metrics),
        market_traction: traction(metrics),
        business_sentiment: sentiment(metrics, &ctx.news),
        development_velocity: velocity(metrics),
        platform_resilience: resilience(metrics),
    }
}

fn agentic(metrics: &ToolMetrics) -> f64 {
    let bench = &metrics.capability.swe_bench;
    let mut score = match (
        bench.verified.filter(|v| *v > 0.0),
        bench.lite.or(bench.full).filter(|v| *v > 0.0),
    ) {
        (Some(verified), _) => (verified / 70.0 * 100.0).min(100.0),
        (None, Some(partial)) => (partial / 30.0 * 80.0).min(100.0),
        (None, None) => 50.0,
    };
    score += CATEGORY_BONUS
        .iter()
        .find(|(category, _)| *category == metrics.category)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0.0);
    if flag(metrics.capability.multi_file_support) {
        score += 10.0;
    }
    score.min(100.0)
}

fn innovation(metrics: &ToolMetrics) -> f64 {
    let features = metrics.features.len();
    let base = if features > 0 {
        (30.0 + features as f64 * 5.0).min(80.0)
    } else {
        30.0
    };
    (base + keyword_matches(metrics, INNOVATION_KEYWORDS) as f64 * 10.0).min(100.0)
}

fn technical(metrics: &ToolMetrics) -> f64 {
    let window = count(metrics.capability.context_window);
    let mut score = if window >= 200_000.0 {
        90.0
    } else if window >= 100_000.0 {
        70.0
    } else if window > 0.0 {
        50.0 + window / 100_000.0 * 20.0
    } else {
        50.0
    };

    let languages = count(metrics.capability.language_count);
    score += if languages >= 10.0 { 10.0 } else { languages };

    let providers = metrics.provider_count() as f64;
    score += if providers >= 3.0 { 10.0 } else { providers * 3.0 };

    score.min(100.0)
}

fn adoption(metrics: &ToolMetrics) -> f64 {
    let adoption = &metrics.adoption;
    let mentions = tiered(
        count(adoption.news_mentions),
        &[(15.0, 90.0), (10.0, 80.0), (5.0, 70.0), (2.0, 60.0), (1.0, 50.0)],
    );
    let base = if mentions > 0.0 { mentions } else { 30.0 };

    let stars = tiered(
        count(adoption.github_stars),
        &[(50e3, 20.0), (10e3, 15.0), (1e3, 10.0)],
    );
    let users = tiered(
        count(adoption.users),
        &[(1e6, 20.0), (100e3, 15.0), (10e3, 10.0)],
    );
    (base + stars + users).min(100.0)
}

fn traction(metrics: &ToolMetrics) -> f64 {
    let commercial = &metrics.commercial;
    let price = amount(commercial.base_price);

    let mut score: f64 = match commercial.pricing_model {
        Some(PricingModel::Subscription | PricingModel::Paid) if price >= 20.0 => 70.0,
        Some(PricingModel::Freemium) => 60.0,
        Some(PricingModel::Subscription | PricingModel::Paid) => 50.0,
        Some(PricingModel::Free) => 40.0,
        _ => 30.0,
    };

    let revenue = commercial.annual_revenue();
    if revenue >= 400e6 {
        score = 100.0;
    } else {
        score = score.max(tiered(revenue, &[(100e6, 90.0), (10e6, 80.0), (1e6, 70.0)]));
    }

    if amount(commercial.valuation) >= 1e9 || amount(commercial.funding) >= 100e6 {
        score += 10.0;
    }
    score.min(100.0)
}

fn sentiment(metrics: &ToolMetrics, news: &NewsImpactSummary) -> f64 {
    let level = tiered(
        count(metrics.adoption.news_mentions),
        &[(10.0, 75.0), (5.0, 70.0), (1.0, 65.0)],
    );
    let mut score = if level > 0.0 { level } else { 50.0 };
    if news.total_impact.is_finite() {
        score = (score + news.total_impact * 10.0).clamp(0.0, 100.0);
    }
    if category_is(metrics, HOT_CATEGORIES) {
        score += 10.0;
    }
    score.min(100.0)
}

fn velocity(metrics: &ToolMetrics) -> f64 {
    let base: f64 = if metrics.status.is_active() { 60.0 } else { 50.0 };
    let features = match metrics.features.len() {
        n if n >= 10 => 20.0,
        n if n >= 5 => 10.0,
        _ => 0.0,
    };
    (base + features).min(100.0)
}

fn resilience(metrics: &ToolMetrics) -> f64 {
    let mut score: f64 = match metrics.provider_count() {
        0 => 50.0,
        1 => 60.0,
        2 => 70.0,
        _ => 80.0,
    };
    match metrics.status {
        LifecycleStatus::Acquired => score -= 20.0,
        LifecycleStatus::Deprecated => score -= 40.0,
        _ => {}
    }
    if is_open_source(metrics) {
        score += 20.0;
    }
    if has_free_tier(metrics) {
        score += 10.0;
    }
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx() -> ScoringContext {
        ScoringContext::new(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap())
    }

    #[test]
    fn empty_record_lands_on_baselines() {
        let scores = compute(&ToolMetrics::default(), &ctx());
        assert_eq!(scores.agentic_capability, 50.0);
        assert_eq!(scores.innovation, 30.0);
        assert_eq!(scores.technical_performance, 50.0);
        assert_eq!(scores.developer_adoption, 30.0);
        assert_eq!(scores.market_traction, 30.0);
        assert_eq!(scores.business_sentiment, 50.0);
        assert_eq!(scores.development_velocity, 50.0);
        assert_eq!(scores.platform_resilience, 50.0);
    }

    #[test]
    fn top_revenue_pins_traction() {
        let mut metrics = ToolMetrics::default();
        metrics.commercial.annual_recurring_revenue = Some(450e6);
        metrics.commercial.pricing_model = Some(PricingModel::Free);
        assert_eq!(traction(&metrics), 100.0);
    }

    #[test]
    fn lifecycle_lowers_resilience() {
        let mut metrics = ToolMetrics::default();
        metrics.status = LifecycleStatus::Active;
        let active = resilience(&metrics);
        metrics.status = LifecycleStatus::Acquired;
        assert!(resilience(&metrics) < active);
    }
}
