use toolrank_core::config::*;
use toolrank_core::errors::ConfigError;
use toolrank_core::models::Tier;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = EngineConfig::from_toml("").unwrap();

    // Tier defaults
    assert_eq!(config.tiers.bands.len(), 4);
    assert_eq!(config.tiers.fallback, Tier::D);

    // Decay defaults
    assert_eq!(config.decay.horizon_days, 365.0);
    assert_eq!(config.decay.exponent, 1.5);
    assert_eq!(config.decay.pr_discount, 0.7);
    assert_eq!(config.decay.default_credibility, 0.75);
    assert!(config.decay.credibility.is_empty());
    assert!(config.decay.pr_source_markers.contains(&"blog".to_string()));

    // Confidence and ranking defaults
    assert_eq!(config.confidence.floor, 0.7);
    assert_eq!(config.ranking.score_precision, 3);
    assert!(config.ranking.parallel);
    assert_eq!(config.ranking.cache_capacity, 0);
    assert_eq!(config.ranking.default_algorithm, "v7.5");

    assert_eq!(
        config.news.terms.get("copilot").map(String::as_str),
        Some("github-copilot")
    );
    assert_eq!(
        config.news.terms.get("claude code").map(String::as_str),
        Some("claude-code")
    );

    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[decay]
pr_discount = 0.5

[decay.credibility]
"Example Wire" = 0.4

[ranking]
parallel = false
default_algorithm = "v7.0"
"#;
    let config = EngineConfig::from_toml(toml).unwrap();
    assert_eq!(config.decay.pr_discount, 0.5);
    assert_eq!(config.decay.credibility.get("Example Wire"), Some(&0.4));
    assert!(!config.ranking.parallel);
    assert_eq!(config.ranking.default_algorithm, "v7.0");
    // Non-overridden fields keep defaults
    assert_eq!(config.decay.horizon_days, 365.0);
    assert_eq!(config.ranking.score_precision, 3);
}

#[test]
fn tier_bands_are_overridable() {
    let toml = r#"
[tiers]
fallback = "C"
bands = [
    { tier = "S", max_position = 10 },
    { tier = "A", max_position = 25 },
]
"#;
    let config = EngineConfig::from_toml(toml).unwrap();
    assert_eq!(config.tiers.tier_for(1), Tier::S);
    assert_eq!(config.tiers.tier_for(10), Tier::S);
    assert_eq!(config.tiers.tier_for(11), Tier::A);
    assert_eq!(config.tiers.tier_for(26), Tier::C);
}

#[test]
fn default_tier_bands_match_documented_boundaries() {
    let tiers = TierConfig::default();
    assert_eq!(tiers.tier_for(5), Tier::S);
    assert_eq!(tiers.tier_for(6), Tier::A);
    assert_eq!(tiers.tier_for(15), Tier::A);
    assert_eq!(tiers.tier_for(25), Tier::B);
    assert_eq!(tiers.tier_for(35), Tier::C);
    assert_eq!(tiers.tier_for(36), Tier::D);
}

#[test]
fn non_increasing_tier_bands_are_rejected() {
    let toml = r#"
[tiers]
bands = [
    { tier = "S", max_position = 10 },
    { tier = "A", max_position = 10 },
]
"#;
    let err = EngineConfig::from_toml(toml).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTierBands { .. }));
}

#[test]
fn empty_tier_bands_are_rejected() {
    let err = EngineConfig::from_toml("[tiers]\nbands = []\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTierBands { .. }));
}

#[test]
fn out_of_range_values_are_rejected() {
    for toml in [
        "[decay]\npr_discount = 1.5\n",
        "[decay]\nhorizon_days = 0.0\n",
        "[confidence]\nfloor = 0.0\n",
        "[ranking]\nscore_precision = 12\n",
        "[decay.credibility]\nWire = -0.1\n",
        "[news.terms]\n\"copilot\" = \"\"\n",
        "[observability]\nlog_level = \"loud\"\n",
    ] {
        let err = EngineConfig::from_toml(toml).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { .. }),
            "expected InvalidValue for {toml:?}, got {err:?}"
        );
    }
}

#[test]
fn news_terms_table_replaces_the_built_in_one() {
    let toml = r#"
[news.terms]
"cc" = "claude-code"
"pilot" = "github-copilot"
"#;
    let config = EngineConfig::from_toml(toml).unwrap();
    assert_eq!(config.news.terms.len(), 2);
    assert_eq!(config.news.terms.get("cc").map(String::as_str), Some("claude-code"));
    assert!(!config.news.terms.contains_key("copilot"));
}

#[test]
fn log_level_becomes_a_filter_directive() {
    let config = EngineConfig::from_toml("[observability]\nlog_level = \" DEBUG \"\n").unwrap();
    assert_eq!(config.observability.filter_directive(), "debug");
    assert_eq!(ObservabilityConfig::default().filter_directive(), "info");

    let err = EngineConfig::from_toml("[observability]\nlog_level = \"verbose\"\n").unwrap_err();
    assert!(err.to_string().contains("observability.log_level"));
}

#[test]
fn malformed_toml_reports_parse_error() {
    let err = EngineConfig::from_toml("[decay\nexponent = ").unwrap_err();
    match err {
        ConfigError::ParseError { path, .. } => assert_eq!(path, "<string>"),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn load_reports_missing_file_path() {
    let err = EngineConfig::load(std::path::Path::new("/nonexistent/toolrank.toml")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/toolrank.toml"));
}

#[test]
fn config_round_trips_through_toml() {
    let config = EngineConfig::default();
    let serialized = toml::to_string(&config).unwrap();
    let parsed = EngineConfig::from_toml(&serialized).unwrap();
    assert_eq!(parsed, config);
}
