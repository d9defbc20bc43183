//! Test fixtures for the ranking engine: JSON fixture loading, record
//! builders, and tracing setup shared by every crate's tests and benches.

use std::path::PathBuf;
use std::sync::Once;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::de::DeserializeOwned;
use toolrank_core::config::ObservabilityConfig;
use toolrank_core::models::{
    Importance, LifecycleStatus, NewsArticle, PricingModel, SweBench, ToolMetrics,
};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("metrics").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Dated metric records for a small tool universe across several months.
pub fn load_metrics_history() -> Vec<ToolMetrics> {
    load_fixture("metrics/tool_history.json")
}

/// News articles covering the same universe.
pub fn load_news() -> Vec<NewsArticle> {
    load_fixture("news/articles.json")
}

static TRACING: Once = Once::new();

/// Install a test subscriber with the default observability config.
/// Safe to call repeatedly.
pub fn init_test_tracing() {
    init_tracing(&ObservabilityConfig::default());
}

/// Install a test subscriber at `config.log_level`; `RUST_LOG` overrides it.
/// Only the first call in a process takes effect.
pub fn init_tracing(config: &ObservabilityConfig) {
    let directive = config.filter_directive();
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directive)),
            )
            .with_test_writer()
            .try_init();
    });
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub fn instant(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid fixture instant")
}

/// A record with identifiers only; every signal absent.
pub fn empty_metrics(tool_id: &str) -> ToolMetrics {
    ToolMetrics::new(tool_id, tool_id)
}

/// A record with every signal at or beyond its scoring ceiling.
pub fn full_metrics(tool_id: &str) -> ToolMetrics {
    let mut m = ToolMetrics::new(tool_id, tool_id);
    m.category = "autonomous-agent".into();
    m.status = LifecycleStatus::Active;
    m.launch_date = Some(date(2023, 3, 1));
    m.company = Some("Anthropic".into());
    m.description = "An autonomous agent for multi-file refactoring, planning, reasoning, \
        orchestration, debugging, testing, deployment and monitoring workflows with MCP support \
        and speculative decoding."
        .into();
    m.features = (0..20).map(|i| format!("feature-{i}")).collect();
    m.recent_updates = (0..5).map(|i| format!("update-{i}")).collect();
    m.open_source = Some(true);

    let c = &mut m.capability;
    c.swe_bench = SweBench {
        verified: Some(75.0),
        lite: None,
        full: None,
    };
    c.context_window = Some(1_000_000);
    c.multi_file_support = Some(true);
    c.mcp_support = Some(true);
    c.language_count = Some(40);
    c.llm_providers = (0..10).map(|i| format!("provider-{i}")).collect();
    c.ide_integration = Some(true);
    c.mixture_of_experts = Some(true);
    c.speculative_decoding = Some(true);
    c.fast_indexing = Some(true);
    c.subprocess_capabilities = vec!["terminal".into(), "browser".into()];

    let a = &mut m.adoption;
    a.users = Some(2_000_000);
    a.github_stars = Some(80_000);
    a.ide_installs = Some(60_000_000);
    a.npm_monthly_downloads = Some(2_000_000);
    a.pypi_monthly_downloads = Some(2_000_000);
    a.news_mentions = Some(30);

    let b = &mut m.commercial;
    b.annual_recurring_revenue = Some(500e6);
    b.valuation = Some(10e9);
    b.funding = Some(1e9);
    b.employees = Some(1_000);
    b.pricing_model = Some(PricingModel::Subscription);
    b.base_price = Some(60.0);
    b.enterprise_pricing = Some(true);
    b.free_tier = Some(true);

    m.velocity.releases_per_year = Some(60.0);
    m.velocity.contributors = Some(500);
    m
}

/// Subscription tool with a stated price and no revenue data.
pub fn subscription_metrics(tool_id: &str, base_price: f64) -> ToolMetrics {
    let mut m = empty_metrics(tool_id);
    m.commercial.pricing_model = Some(PricingModel::Subscription);
    m.commercial.base_price = Some(base_price);
    m
}

/// `metrics` stamped with an effective timestamp.
pub fn recorded(mut metrics: ToolMetrics, at: DateTime<Utc>) -> ToolMetrics {
    metrics.recorded_at = Some(at);
    metrics
}

/// An article about `tool_id` from a neutral outlet.
pub fn article(id: &str, tool_id: &str, published_at: DateTime<Utc>) -> NewsArticle {
    NewsArticle {
        id: id.into(),
        title: format!("{tool_id} ships an update"),
        published_at: Some(published_at),
        source_name: "Tech Daily".into(),
        tool_ids: vec![tool_id.into()],
        importance: Some(Importance::Medium),
        ..NewsArticle::default()
    }
}

/// A company press release about `tool_id`.
pub fn press_release(id: &str, tool_id: &str, published_at: DateTime<Utc>) -> NewsArticle {
    NewsArticle {
        source_name: format!("{tool_id} Blog"),
        is_company_announcement: Some(true),
        ..article(id, tool_id, published_at)
    }
}
