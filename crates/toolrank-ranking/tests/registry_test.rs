use toolrank_core::models::{AlgorithmVersion, FormulaVariant};
use toolrank_core::traits::IAlgorithmStore;
use toolrank_ranking::registry::{v7_0, v7_5};
use toolrank_ranking::AlgorithmRegistry;

#[test]
fn builtins_are_valid_and_ordered() {
    let registry = AlgorithmRegistry::with_builtins();
    assert_eq!(registry.versions(), vec!["v7.0", "v7.5"]);
    assert_eq!(registry.latest().unwrap().id, "v7.5");

    let v70 = registry.get("v7.0").unwrap();
    assert_eq!(v70.formula, FormulaVariant::SmartDefaults);
    assert!(v70.validate().is_ok());
    let v75 = registry.get("v7.5").unwrap();
    assert_eq!(v75.formula, FormulaVariant::DataConfidence);
    assert_eq!(v75.supersedes.as_deref(), Some("v7.0"));
    assert!((v75.weights.sum() - 1.0).abs() < 1e-9);
}

#[test]
fn unknown_version_is_a_config_error() {
    let registry = AlgorithmRegistry::with_builtins();
    let err = registry.get("v7.4").unwrap_err();
    assert!(err.is_config());
}

#[test]
fn publish_rejects_weights_not_summing_to_one() {
    let registry = AlgorithmRegistry::with_builtins();
    let mut bad = v7_5();
    bad.id = "v8.0".into();
    bad.weights.innovation += 0.05;
    assert!(registry.publish(bad).unwrap_err().is_config());
    assert!(registry.get("v8.0").is_err());
}

#[test]
fn publish_rejects_negative_weights() {
    let registry = AlgorithmRegistry::new();
    let mut bad = v7_0();
    bad.weights.agentic_capability = -0.25;
    bad.weights.innovation += 0.5;
    assert!(registry.publish(bad).is_err());
}

#[test]
fn published_versions_are_never_replaced() {
    let registry = AlgorithmRegistry::with_builtins();
    let original = registry.get("v7.5").unwrap();

    let mut replacement = v7_0();
    replacement.id = "v7.5".into();
    assert!(registry.publish(replacement).is_err());
    assert_eq!(*registry.get("v7.5").unwrap(), *original);

    let next = AlgorithmVersion {
        id: "v7.6".into(),
        supersedes: Some("v7.5".into()),
        ..v7_5()
    };
    registry.publish(next).unwrap();
    assert_eq!(registry.versions(), vec!["v7.0", "v7.5", "v7.6"]);
    assert_eq!(*registry.get("v7.5").unwrap(), *original);
}
