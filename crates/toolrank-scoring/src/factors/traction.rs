use toolrank_core::models::{PricingModel, ToolMetrics};

use crate::signals::{amount, company_backing, count, flag, tiered};

const REVENUE_TIERS: &[(f64, f64)] = &[
    (400e6, 50.0),
    (100e6, 45.0),
    (50e6, 40.0),
    (10e6, 35.0),
    (1e6, 25.0),
    (100e3, 15.0),
];

const VALUATION_TIERS: &[(f64, f64)] = &[(5e9, 20.0), (1e9, 15.0), (100e6, 10.0)];
const FUNDING_TIERS: &[(f64, f64)] = &[(100e6, 8.0), (10e6, 5.0)];
const STAR_TIERS: &[(f64, f64)] = &[(50e3, 10.0), (20e3, 7.0), (10e3, 5.0), (5e3, 3.0)];

/// Market traction.
///
/// Recurring revenue is the primary signal. Only when revenue is zero or
/// unknown does the pricing heuristic apply, so unknown-revenue tools with a
/// real business model are not scored as if they had none.
pub fn calculate(metrics: &ToolMetrics) -> f64 {
    let commercial = &metrics.commercial;

    let revenue = commercial.annual_revenue();
    let mut score = if revenue > 0.0 {
        tiered(revenue, REVENUE_TIERS)
    } else {
        pricing_fallback(metrics)
    };

    let valuation = tiered(amount(commercial.valuation), VALUATION_TIERS);
    score += if valuation > 0.0 {
        valuation
    } else {
        tiered(amount(commercial.funding), FUNDING_TIERS)
    };

    score += tiered(count(metrics.adoption.github_stars), STAR_TIERS);
    score += company_backing(metrics) * 0.2;

    score.min(100.0)
}

/// Pricing-model proxy for tools with no revenue data.
pub fn pricing_fallback(metrics: &ToolMetrics) -> f64 {
    let commercial = &metrics.commercial;
    let price = amount(commercial.base_price);
    let model = commercial.pricing_model;

    if flag(commercial.enterprise_pricing) || model == Some(PricingModel::Enterprise) {
        return 20.0;
    }
    match model {
        Some(PricingModel::Subscription | PricingModel::Paid) if price >= 50.0 => 15.0,
        Some(PricingModel::Subscription | PricingModel::Paid) if price >= 20.0 => 12.0,
        Some(PricingModel::Freemium) if price > 0.0 => 10.0,
        Some(PricingModel::Subscription | PricingModel::Paid) => 8.0,
        Some(PricingModel::Freemium) => 5.0,
        _ => 0.0,
    }
}
