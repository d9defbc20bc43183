//! Shared helpers for reading optional signals and applying tier tables.

use chrono::{Datelike, NaiveDate};
use toolrank_core::models::{PricingModel, ToolMetrics};

/// Points of the first tier whose threshold `value` meets.
///
/// Tiers are `(threshold, points)` ordered by descending threshold; the top
/// entry is the signal's ceiling. Values below every threshold score 0.
pub fn tiered(value: f64, tiers: &[(f64, f64)]) -> f64 {
    tiers
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(_, points)| *points)
        .unwrap_or(0.0)
}

pub fn count(value: Option<u64>) -> f64 {
    value.unwrap_or(0) as f64
}

pub fn amount(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

pub fn flag(value: Option<bool>) -> bool {
    value.unwrap_or(false)
}

/// Number of `keywords` that occur in the lowercased description.
pub fn keyword_matches(metrics: &ToolMetrics, keywords: &[&str]) -> usize {
    let text = metrics.description.to_lowercase();
    keywords.iter().filter(|kw| text.contains(*kw)).count()
}

pub fn category_is(metrics: &ToolMetrics, categories: &[&str]) -> bool {
    categories.contains(&metrics.category.as_str())
}

/// Categories that attract a sentiment premium.
pub const HOT_CATEGORIES: &[&str] = &["autonomous-agent", "code-editor"];

pub fn is_open_source(metrics: &ToolMetrics) -> bool {
    flag(metrics.open_source) || metrics.category == "open-source-framework"
}

/// Free tier flag, or a pricing model that implies one.
pub fn has_free_tier(metrics: &ToolMetrics) -> bool {
    flag(metrics.commercial.free_tier)
        || matches!(
            metrics.commercial.pricing_model,
            Some(PricingModel::Free | PricingModel::Freemium)
        )
}

pub const MAJOR_COMPANIES: &[&str] = &[
    "Google",
    "Microsoft",
    "Meta",
    "Amazon",
    "GitHub",
    "Anthropic",
    "OpenAI",
];

/// Company backing on a 0–40 scale: parent company, funding, valuation, headcount.
pub fn company_backing(metrics: &ToolMetrics) -> f64 {
    let commercial = &metrics.commercial;
    let mut score = 0.0;

    if let Some(company) = &metrics.company {
        if MAJOR_COMPANIES.iter().any(|c| company.contains(c)) {
            score += 20.0;
        }
    }
    score += tiered(
        amount(commercial.funding),
        &[(100e6, 15.0), (10e6, 10.0), (1e6, 5.0)],
    );
    score += tiered(amount(commercial.valuation), &[(1e9, 15.0), (100e6, 10.0)]);
    score += tiered(
        count(commercial.employees),
        &[(100.0, 10.0), (50.0, 7.0), (20.0, 5.0), (10.0, 3.0)],
    );

    score.min(40.0)
}

/// Bonus for a tool's age at `reference`: 1–3 years 10, 4–5 years 5,
/// under a year 3, older 0. Unknown launch dates earn nothing.
pub fn launch_maturity_bonus(launch: Option<NaiveDate>, reference: NaiveDate) -> f64 {
    let Some(launch) = launch else {
        return 0.0;
    };
    match reference.year() - launch.year() {
        age if age < 1 => 3.0,
        1..=3 => 10.0,
        4..=5 => 5.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiered_picks_first_met_threshold() {
        let tiers = [(100.0, 30.0), (10.0, 20.0), (1.0, 10.0)];
        assert_eq!(tiered(500.0, &tiers), 30.0);
        assert_eq!(tiered(100.0, &tiers), 30.0);
        assert_eq!(tiered(99.9, &tiers), 20.0);
        assert_eq!(tiered(1.0, &tiers), 10.0);
        assert_eq!(tiered(0.5, &tiers), 0.0);
    }

    #[test]
    fn company_backing_is_capped() {
        let mut metrics = ToolMetrics::new("copilot", "GitHub Copilot");
        metrics.company = Some("GitHub (Microsoft)".into());
        metrics.commercial.funding = Some(1e9);
        metrics.commercial.valuation = Some(1e10);
        metrics.commercial.employees = Some(5000);
        assert_eq!(company_backing(&metrics), 40.0);
        assert_eq!(company_backing(&ToolMetrics::default()), 0.0);
    }

    #[test]
    fn maturity_bonus_uses_reference_year() {
        let reference = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let launched = |y| NaiveDate::from_ymd_opt(y, 3, 1);
        assert_eq!(launch_maturity_bonus(launched(2025), reference), 3.0);
        assert_eq!(launch_maturity_bonus(launched(2023), reference), 10.0);
        assert_eq!(launch_maturity_bonus(launched(2020), reference), 5.0);
        assert_eq!(launch_maturity_bonus(launched(2012), reference), 0.0);
        assert_eq!(launch_maturity_bonus(None, reference), 0.0);
    }
}
