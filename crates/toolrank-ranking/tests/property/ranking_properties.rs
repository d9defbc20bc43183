use std::collections::BTreeSet;

use proptest::prelude::*;
use test_fixtures::empty_metrics;
use toolrank_core::config::EngineConfig;
use toolrank_core::models::{MovementDirection, Period, ToolMetrics};
use toolrank_ranking::{AlgorithmRegistry, RankingEngine};

prop_compose! {
    fn arb_tool(id: usize)(
        stars in proptest::option::of(0u64..200_000),
        users in proptest::option::of(0u64..5_000_000),
        revenue in proptest::option::of(0.0f64..1e9),
        releases in proptest::option::of(0.0f64..100.0),
    ) -> ToolMetrics {
        let mut m = empty_metrics(&format!("tool-{id:03}"));
        m.adoption.github_stars = stars;
        m.adoption.users = users;
        m.commercial.annual_recurring_revenue = revenue;
        m.velocity.releases_per_year = releases;
        m
    }
}

fn arb_universe() -> impl Strategy<Value = Vec<ToolMetrics>> {
    (0usize..25).prop_flat_map(|n| (0..n).map(arb_tool).collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn positions_are_a_permutation(metrics in arb_universe()) {
        let registry = AlgorithmRegistry::with_builtins();
        let config = EngineConfig::default();
        let engine = RankingEngine::new(&registry, "v7.5", &config).unwrap();
        let rankings = engine.rank(Period::month(2025, 6).unwrap(), &metrics, &[], None);

        let positions: BTreeSet<u32> = rankings.iter().map(|r| r.position).collect();
        let expected: BTreeSet<u32> = (1..=metrics.len() as u32).collect();
        prop_assert_eq!(positions, expected);
        for pair in rankings.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].tool_id < pair[1].tool_id);
            }
        }
    }

    #[test]
    fn movement_matches_previous_positions(
        before in arb_universe(),
        after in arb_universe(),
    ) {
        let registry = AlgorithmRegistry::with_builtins();
        let config = EngineConfig::default();
        let engine = RankingEngine::new(&registry, "v7.5", &config).unwrap();
        let previous = engine.rank(Period::month(2025, 5).unwrap(), &before, &[], None);
        let current = engine.rank(Period::month(2025, 6).unwrap(), &after, &[], Some(&previous));

        for r in &current {
            match previous.iter().find(|p| p.tool_id == r.tool_id) {
                Some(p) => {
                    prop_assert_eq!(r.movement.previous_position, Some(p.position));
                    prop_assert_eq!(r.movement.change, Some(p.position as i64 - r.position as i64));
                }
                None => {
                    prop_assert_eq!(r.movement.direction, MovementDirection::New);
                    prop_assert!(r.movement.change.is_none());
                }
            }
        }
    }

    #[test]
    fn scores_are_positive_and_bounded(metrics in arb_universe()) {
        let registry = AlgorithmRegistry::with_builtins();
        let config = EngineConfig::default();
        for version in ["v7.0", "v7.5"] {
            let engine = RankingEngine::new(&registry, version, &config).unwrap();
            for r in engine.rank(Period::month(2025, 6).unwrap(), &metrics, &[], None) {
                prop_assert!(r.score > 0.0 && r.score <= 100.0);
                prop_assert!(r.factor_scores.is_bounded());
            }
        }
    }
}
