//! Secondary ordering keys for tools whose rounded scores are equal.
//!
//! Compared in order: feature count, description quality, pricing tier
//! (higher first), then the lowercased name (alphabetical).

use std::cmp::Ordering;

use toolrank_core::models::{PricingModel, ToolMetrics};

use crate::signals::{amount, flag, keyword_matches, tiered};

const DESCRIPTION_LENGTH: &[(f64, f64)] = &[(1000.0, 20.0), (500.0, 15.0), (250.0, 10.0), (100.0, 5.0)];

const QUALITY_KEYWORDS: &[&str] = &[
    "autonomous",
    "enterprise",
    "scalable",
    "production",
    "integration",
    "architecture",
    "performance",
    "security",
    "workflow",
    "collaboration",
];

const PRICE_POINTS: &[(f64, f64)] = &[(100.0, 20.0), (50.0, 15.0), (20.0, 10.0), (10.0, 5.0)];

/// Tiebreak key for one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tiebreakers {
    /// 5 per listed feature, capped at 100.
    pub feature_count: u32,
    /// Description length tier plus 2 per quality keyword, capped at 50.
    pub description_quality: u32,
    /// Pricing model, price point, free and enterprise tiers, capped at 50.
    pub pricing_tier: u32,
    pub name: String,
}

impl Tiebreakers {
    pub fn for_metrics(metrics: &ToolMetrics) -> Self {
        Self {
            feature_count: feature_count(metrics),
            description_quality: description_quality(metrics),
            pricing_tier: pricing_tier(metrics),
            name: metrics.display_name().to_lowercase(),
        }
    }

    /// `Less` when `self` should rank ahead of `other`.
    pub fn rank_order(&self, other: &Self) -> Ordering {
        other
            .feature_count
            .cmp(&self.feature_count)
            .then_with(|| other.description_quality.cmp(&self.description_quality))
            .then_with(|| other.pricing_tier.cmp(&self.pricing_tier))
            .then_with(|| self.name.cmp(&other.name))
    }
}

fn feature_count(metrics: &ToolMetrics) -> u32 {
    let n = u32::try_from(metrics.features.len()).unwrap_or(u32::MAX);
    n.saturating_mul(5).min(100)
}

fn description_quality(metrics: &ToolMetrics) -> u32 {
    let length = metrics.description.chars().count() as f64;
    let base = tiered(length, DESCRIPTION_LENGTH).max(1.0);
    let keywords = keyword_matches(metrics, QUALITY_KEYWORDS) as f64 * 2.0;
    (base + keywords).min(50.0) as u32
}

fn pricing_tier(metrics: &ToolMetrics) -> u32 {
    let commercial = &metrics.commercial;
    let price = amount(commercial.base_price);
    let mut score = match commercial.pricing_model {
        Some(PricingModel::Enterprise) => 15.0,
        Some(PricingModel::Subscription | PricingModel::Freemium) => 10.0,
        Some(PricingModel::Paid) => 8.0,
        Some(PricingModel::Free) => 5.0,
        Some(PricingModel::Other) | None => 0.0,
    };
    score += tiered(price, PRICE_POINTS);
    if flag(commercial.free_tier) && price > 0.0 {
        score += 5.0;
    }
    if flag(commercial.enterprise_pricing) {
        score += 10.0;
    }
    score.min(50.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_outrank_description_and_pricing() {
        let mut featured = ToolMetrics::new("b", "Beta");
        featured.features = vec!["one".into(), "two".into()];
        let mut priced = ToolMetrics::new("a", "Alpha");
        priced.description = "enterprise workflow security ".repeat(40);
        priced.commercial.pricing_model = Some(PricingModel::Enterprise);

        let featured = Tiebreakers::for_metrics(&featured);
        let priced = Tiebreakers::for_metrics(&priced);
        assert_eq!(featured.feature_count, 10);
        assert_eq!(featured.rank_order(&priced), Ordering::Less);
    }

    #[test]
    fn description_quality_tiers() {
        let mut m = ToolMetrics::new("t", "T");
        assert_eq!(description_quality(&m), 1);
        m.description = "x".repeat(260);
        assert_eq!(description_quality(&m), 10);
        m.description.push_str(" autonomous production workflow");
        assert_eq!(description_quality(&m), 16);
    }

    #[test]
    fn pricing_tier_caps_at_fifty() {
        let mut m = ToolMetrics::new("t", "T");
        m.commercial.pricing_model = Some(PricingModel::Enterprise);
        m.commercial.base_price = Some(200.0);
        m.commercial.free_tier = Some(true);
        m.commercial.enterprise_pricing = Some(true);
        assert_eq!(pricing_tier(&m), 50);

        m.commercial = Default::default();
        m.commercial.pricing_model = Some(PricingModel::Subscription);
        m.commercial.base_price = Some(20.0);
        assert_eq!(pricing_tier(&m), 20);
    }

    #[test]
    fn name_is_the_last_key() {
        let a = Tiebreakers::for_metrics(&ToolMetrics::new("z", "aider"));
        let b = Tiebreakers::for_metrics(&ToolMetrics::new("a", "Zed"));
        assert_eq!(a.rank_order(&b), Ordering::Less);
        assert_eq!(a.rank_order(&a), Ordering::Equal);
    }
}
