use test_fixtures::{empty_metrics, full_metrics, instant};
use toolrank_core::config::EngineConfig;
use toolrank_core::errors::{RankError, StoreError};
use toolrank_core::models::{Period, RankingVersion};
use toolrank_core::traits::IRankingHistory;
use toolrank_ranking::{build_snapshot, AlgorithmRegistry, RankingEngine};
use toolrank_temporal::InMemoryRankingHistory;

fn snapshot_for(period: Period, leader_full: bool, supersedes: Option<String>) -> RankingVersion {
    let registry = AlgorithmRegistry::with_builtins();
    let config = EngineConfig::default();
    let engine = RankingEngine::new(&registry, "v7.5", &config).unwrap();
    let metrics = if leader_full {
        vec![full_metrics("a"), empty_metrics("b")]
    } else {
        vec![empty_metrics("a"), full_metrics("b")]
    };
    let rankings = engine.rank(period, &metrics, &[], None);
    build_snapshot(period, engine.algorithm(), rankings, supersedes, instant(2025, 7, 1)).unwrap()
}

fn june() -> Period {
    Period::month(2025, 6).unwrap()
}

#[test]
fn append_makes_snapshot_current() {
    let history = InMemoryRankingHistory::new();
    assert!(history.is_empty());
    assert!(history.current(june()).unwrap().is_none());

    let first = snapshot_for(june(), true, None);
    history.append(first.clone()).unwrap();
    assert_eq!(history.current(june()).unwrap(), Some(first.clone()));

    let second = snapshot_for(june(), false, Some(first.id.clone()));
    history.append(second.clone()).unwrap();
    assert_eq!(history.current(june()).unwrap().unwrap().id, second.id);
    assert_eq!(history.len(), 2);

    let ids: Vec<String> = history.history(june()).unwrap().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id.clone(), second.id.clone()]);
    assert_eq!(history.get(&first.id).unwrap(), Some(first));
}

#[test]
fn rollback_moves_pointer_without_losing_snapshots() {
    let history = InMemoryRankingHistory::new();
    let first = snapshot_for(june(), true, None);
    let second = snapshot_for(june(), false, Some(first.id.clone()));
    history.append(first.clone()).unwrap();
    history.append(second.clone()).unwrap();

    let restored = history.rollback(june(), &first.id).unwrap();
    assert_eq!(restored, first);
    assert_eq!(history.current(june()).unwrap(), Some(first.clone()));
    assert_eq!(history.current(june()).unwrap().unwrap().position_of("a"), Some(1));
    assert_eq!(history.len(), 2);
    assert_eq!(history.get(&second.id).unwrap(), Some(second));
}

#[test]
fn rollback_to_another_period_is_rejected() {
    let history = InMemoryRankingHistory::new();
    let may = Period::month(2025, 5).unwrap();
    let may_snapshot = snapshot_for(may, true, None);
    let june_snapshot = snapshot_for(june(), true, None);
    history.append(may_snapshot.clone()).unwrap();
    history.append(june_snapshot.clone()).unwrap();

    let err = history.rollback(june(), &may_snapshot.id).unwrap_err();
    assert!(matches!(
        err,
        RankError::Store(StoreError::PeriodMismatch { .. })
    ));
    assert_eq!(history.current(june()).unwrap(), Some(june_snapshot));
}

#[test]
fn rollback_to_unknown_snapshot_fails() {
    let history = InMemoryRankingHistory::new();
    let err = history.rollback(june(), "missing").unwrap_err();
    assert!(matches!(
        err,
        RankError::Store(StoreError::SnapshotNotFound { .. })
    ));
}

#[test]
fn duplicate_snapshot_ids_are_rejected() {
    let history = InMemoryRankingHistory::new();
    let snapshot = snapshot_for(june(), true, None);
    history.append(snapshot.clone()).unwrap();
    let err = history.append(snapshot).unwrap_err();
    assert!(matches!(
        err,
        RankError::Store(StoreError::DuplicateSnapshot { .. })
    ));
    assert_eq!(history.len(), 1);
}

#[test]
fn previous_rankings_reads_the_preceding_period() {
    let history = InMemoryRankingHistory::new();
    let may = Period::month(2025, 5).unwrap();
    let may_snapshot = snapshot_for(may, true, None);
    history.append(may_snapshot.clone()).unwrap();

    assert_eq!(history.previous_rankings(june()).unwrap(), Some(may_snapshot.rankings));
    assert!(history.previous_rankings(may).unwrap().is_none());
}
