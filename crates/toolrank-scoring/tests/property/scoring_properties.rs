use proptest::prelude::*;
use test_fixtures::date;
use toolrank_core::models::{
    FormulaVariant, LifecycleStatus, NewsImpactSummary, PricingModel, ScoringContext, ToolMetrics,
};
use toolrank_scoring::{calculator_for, ConfidenceMultiplier};

fn status() -> impl Strategy<Value = LifecycleStatus> {
    prop_oneof![
        Just(LifecycleStatus::Active),
        Just(LifecycleStatus::Beta),
        Just(LifecycleStatus::Acquired),
        Just(LifecycleStatus::Deprecated),
        Just(LifecycleStatus::Unknown),
    ]
}

fn pricing() -> impl Strategy<Value = Option<PricingModel>> {
    prop_oneof![
        Just(None),
        Just(Some(PricingModel::Free)),
        Just(Some(PricingModel::Freemium)),
        Just(Some(PricingModel::Subscription)),
        Just(Some(PricingModel::Paid)),
        Just(Some(PricingModel::Enterprise)),
    ]
}

prop_compose! {
    fn arb_metrics()(
        status in status(),
        pricing in pricing(),
        revenue in proptest::option::of(0.0f64..2e9),
        price in proptest::option::of(0.0f64..500.0),
        stars in proptest::option::of(0u64..500_000),
        installs in proptest::option::of(0u64..100_000_000),
        users in proptest::option::of(0u64..10_000_000),
        verified in proptest::option::of(0.0f64..100.0),
        window in proptest::option::of(0u64..2_000_000),
        providers in 0usize..15,
        features in 0usize..40,
        updates in 0usize..60,
        releases in proptest::option::of(0.0f64..400.0),
    ) -> ToolMetrics {
        let mut m = ToolMetrics::new("prop", "Prop");
        m.status = status;
        m.commercial.pricing_model = pricing;
        m.commercial.annual_recurring_revenue = revenue;
        m.commercial.base_price = price;
        m.adoption.github_stars = stars;
        m.adoption.ide_installs = installs;
        m.adoption.users = users;
        m.capability.swe_bench.verified = verified;
        m.capability.context_window = window;
        m.capability.llm_providers = (0..providers).map(|i| format!("p{i}")).collect();
        m.features = (0..features).map(|i| format!("f{i}")).collect();
        m.recent_updates = (0..updates).map(|i| format!("u{i}")).collect();
        m.velocity.releases_per_year = releases;
        m
    }
}

proptest! {
    #[test]
    fn factor_scores_are_bounded(m in arb_metrics(), impact in -50.0f64..50.0) {
        let news = NewsImpactSummary { article_count: 1, total_impact: impact, ..Default::default() };
        let ctx = ScoringContext::new(date(2025, 6, 30)).with_news(news);
        for variant in [FormulaVariant::DataConfidence, FormulaVariant::SmartDefaults] {
            let scores = calculator_for(variant).calculate(&m, &ctx);
            prop_assert!(scores.is_bounded(), "{variant:?} produced {scores:?}");
        }
    }

    #[test]
    fn confidence_stays_within_floor_and_one(m in arb_metrics()) {
        let confidence = ConfidenceMultiplier::default();
        let multiplier = confidence.multiplier(&m);
        prop_assert!((0.7..=1.0).contains(&multiplier));
        prop_assert!((0.0..=100.0).contains(&confidence.completeness(&m)));
    }

    #[test]
    fn more_revenue_never_lowers_traction(m in arb_metrics(), extra in 0.0f64..1e9) {
        let base = m.commercial.annual_revenue();
        prop_assume!(base > 0.0);
        let mut richer = m.clone();
        richer.commercial.annual_recurring_revenue = Some(base + extra);
        prop_assert!(
            toolrank_scoring::factors::traction::calculate(&richer)
                >= toolrank_scoring::factors::traction::calculate(&m)
        );
    }
}
