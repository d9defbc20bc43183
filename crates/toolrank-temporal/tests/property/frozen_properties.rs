use std::collections::BTreeSet;

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use test_fixtures::{empty_metrics, recorded};
use toolrank_core::models::ToolMetrics;
use toolrank_temporal::FrozenSnapshot;

prop_compose! {
    fn arb_record()(tool in 0u8..6, day in proptest::option::of(0i64..365)) -> ToolMetrics {
        let m = empty_metrics(&format!("tool-{tool}"));
        match day {
            Some(d) => recorded(m, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::days(d)),
            None => m,
        }
    }
}

proptest! {
    #[test]
    fn one_effective_record_per_tool(
        records in proptest::collection::vec(arb_record(), 0..40),
        cutoff_day in 0i64..365,
    ) {
        let cutoff = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::days(cutoff_day);
        let snapshot = FrozenSnapshot::new(records.clone(), vec![]);
        let effective = snapshot.metrics_at(cutoff);

        let ids: BTreeSet<&str> = effective.iter().map(|m| m.tool_id.as_str()).collect();
        prop_assert_eq!(ids.len(), effective.len());
        for m in &effective {
            prop_assert!(m.recorded_at.map_or(true, |at| at <= cutoff));
            let newest = records
                .iter()
                .filter(|r| r.tool_id == m.tool_id)
                .filter_map(|r| r.recorded_at)
                .filter(|&at| at <= cutoff)
                .max();
            prop_assert_eq!(m.recorded_at, newest);
        }
    }
}
