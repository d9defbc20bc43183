use test_fixtures::{date, empty_metrics, instant, load_metrics_history, load_news, recorded};
use toolrank_core::models::Period;
use toolrank_core::traits::{IMetricsProvider, INewsProvider};
use toolrank_temporal::FrozenSnapshot;

fn fixture_snapshot() -> FrozenSnapshot {
    FrozenSnapshot::new(load_metrics_history(), load_news())
}

fn ids(period: Period) -> Vec<String> {
    fixture_snapshot()
        .metrics_at(period.end_instant())
        .into_iter()
        .map(|m| m.tool_id)
        .collect()
}

#[test]
fn keeps_latest_effective_record_per_tool() {
    let snapshot = fixture_snapshot();
    let april = snapshot.metrics_at(Period::month(2025, 4).unwrap().end_instant());
    let cursor = april.iter().find(|m| m.tool_id == "cursor").unwrap();
    assert_eq!(cursor.recorded_at.map(|at| at.date_naive()), Some(date(2025, 4, 15)));

    let june = snapshot.metrics_at(Period::month(2025, 6).unwrap().end_instant());
    let cursor = june.iter().find(|m| m.tool_id == "cursor").unwrap();
    assert_eq!(cursor.recorded_at.map(|at| at.date_naive()), Some(date(2025, 6, 10)));
}

#[test]
fn universe_grows_with_the_cutoff() {
    assert_eq!(ids(Period::month(2025, 2).unwrap()), vec!["aider"]);
    assert_eq!(ids(Period::month(2025, 4).unwrap()), vec!["aider", "copilot", "cursor"]);
    assert_eq!(
        ids(Period::month(2025, 5).unwrap()),
        vec!["aider", "copilot", "cursor", "jules"]
    );
}

#[test]
fn day_periods_cut_off_at_the_end_of_the_day() {
    assert!(!ids(Period::day(2025, 5, 24).unwrap()).contains(&"jules".to_string()));
    assert!(ids(Period::day(2025, 5, 25).unwrap()).contains(&"jules".to_string()));
}

#[test]
fn tools_launched_after_cutoff_are_dropped() {
    let mut unlaunched = empty_metrics("future");
    unlaunched.launch_date = Some(date(2025, 9, 1));
    let snapshot = FrozenSnapshot::new(vec![unlaunched, empty_metrics("present")], vec![]);

    let august = snapshot.metrics_at(Period::month(2025, 8).unwrap().end_instant());
    assert_eq!(august.len(), 1);
    assert_eq!(august[0].tool_id, "present");
    let september = snapshot.metrics_at(Period::month(2025, 9).unwrap().end_instant());
    assert_eq!(september.len(), 2);
}

#[test]
fn dated_records_win_over_undated_ones() {
    let mut undated = empty_metrics("t");
    undated.adoption.users = Some(1);
    let mut dated = recorded(empty_metrics("t"), instant(2025, 3, 1));
    dated.adoption.users = Some(2);
    let snapshot = FrozenSnapshot::new(vec![dated, undated], vec![]);

    let before = snapshot.metrics_at(instant(2025, 2, 1));
    assert_eq!(before[0].adoption.users, Some(1));
    let after = snapshot.metrics_at(instant(2025, 4, 1));
    assert_eq!(after[0].adoption.users, Some(2));
}

#[test]
fn news_after_cutoff_is_dropped_and_undated_news_kept() {
    let snapshot = fixture_snapshot();
    let june: Vec<String> = snapshot
        .news_as_of(Period::month(2025, 6).unwrap().end_instant())
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert!(june.contains(&"n-001".to_string()));
    assert!(june.contains(&"n-005".to_string()));
    assert!(!june.contains(&"n-004".to_string()));

    let july = snapshot
        .news_as_of(Period::month(2025, 7).unwrap().end_instant())
        .unwrap();
    assert_eq!(july.len(), 5);
}

#[test]
fn provider_trait_matches_inherent_query() {
    let snapshot = fixture_snapshot();
    let cutoff = Period::month(2025, 5).unwrap().end_instant();
    assert_eq!(snapshot.metrics_as_of(cutoff).unwrap(), snapshot.metrics_at(cutoff));
    assert!(FrozenSnapshot::default().is_empty());
    assert!(!snapshot.is_empty());
}
