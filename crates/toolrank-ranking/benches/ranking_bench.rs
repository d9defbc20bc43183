use criterion::{criterion_group, criterion_main, Criterion};
use test_fixtures::{article, empty_metrics, full_metrics, instant};
use toolrank_core::config::EngineConfig;
use toolrank_core::models::{NewsArticle, Period, ToolMetrics};
use toolrank_ranking::{AlgorithmRegistry, RankingEngine, ScoreCache};

fn universe(n: usize) -> (Vec<ToolMetrics>, Vec<NewsArticle>) {
    let metrics = (0..n)
        .map(|i| {
            let id = format!("tool-{i:04}");
            let mut m = if i % 3 == 0 { empty_metrics(&id) } else { full_metrics(&id) };
            m.adoption.github_stars = Some((i as u64 * 137) % 90_000);
            m
        })
        .collect();
    let news = (0..n * 2)
        .map(|i| article(&format!("n-{i}"), &format!("tool-{:04}", i % n), instant(2025, 6, 1 + (i % 28) as u32)))
        .collect();
    (metrics, news)
}

fn bench_rank_pass(c: &mut Criterion) {
    let registry = AlgorithmRegistry::with_builtins();
    let config = EngineConfig::default();
    let engine = RankingEngine::new(&registry, "v7.5", &config).unwrap();
    let period = Period::month(2025, 6).unwrap();
    let (metrics, news) = universe(200);

    c.bench_function("rank_200_tools", |b| {
        b.iter(|| engine.rank(period, &metrics, &news, None))
    });

    let previous = engine.rank(period.previous(), &metrics, &news, None);
    c.bench_function("rank_200_tools_with_movement", |b| {
        b.iter(|| engine.rank(period, &metrics, &news, Some(&previous)))
    });
}

fn bench_cached_pass(c: &mut Criterion) {
    let registry = AlgorithmRegistry::with_builtins();
    let config = EngineConfig::default();
    let cache = ScoreCache::new(1_000);
    let engine = RankingEngine::new(&registry, "v7.5", &config)
        .unwrap()
        .with_cache(&cache);
    let period = Period::month(2025, 6).unwrap();
    let (metrics, news) = universe(200);
    engine.rank(period, &metrics, &news, None);

    c.bench_function("rank_200_tools_warm_cache", |b| {
        b.iter(|| engine.rank(period, &metrics, &news, None))
    });
}

criterion_group!(benches, bench_rank_pass, bench_cached_pass);
criterion_main!(benches);
