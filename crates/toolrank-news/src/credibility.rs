use std::collections::BTreeMap;

use toolrank_core::config::DecayConfig;

/// Built-in outlet credibility, keyed by lowercase source name.
const BUILT_IN: &[(&str, f64)] = &[
    ("ars technica", 0.9),
    ("bloomberg", 0.95),
    ("business insider", 0.8),
    ("forbes", 0.8),
    ("hacker news", 0.7),
    ("infoq", 0.85),
    ("medium", 0.6),
    ("reddit", 0.5),
    ("reuters", 0.95),
    ("techcrunch", 0.9),
    ("the information", 0.9),
    ("the verge", 0.85),
    ("venturebeat", 0.85),
    ("wired", 0.85),
    ("zdnet", 0.8),
];

/// Source-name → credibility lookup: exact match, then substring match in
/// key order, then the configured default.
#[derive(Debug, Clone, PartialEq)]
pub struct CredibilityTable {
    entries: BTreeMap<String, f64>,
    default: f64,
}

impl CredibilityTable {
    /// Built-in entries with `overrides` merged on top.
    pub fn new(overrides: &BTreeMap<String, f64>, default: f64) -> Self {
        let mut entries: BTreeMap<String, f64> = BUILT_IN
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect();
        for (name, value) in overrides {
            entries.insert(name.trim().to_lowercase(), *value);
        }
        Self { entries, default }
    }

    pub fn from_config(config: &DecayConfig) -> Self {
        Self::new(&config.credibility, config.default_credibility)
    }

    /// Credibility for a source the table knows, or `None`.
    pub fn known(&self, source_name: &str) -> Option<f64> {
        let source = source_name.trim().to_lowercase();
        if source.is_empty() {
            return None;
        }
        if let Some(value) = self.entries.get(&source) {
            return Some(*value);
        }
        self.entries
            .iter()
            .find(|(name, _)| source.contains(name.as_str()))
            .map(|(_, value)| *value)
    }

    /// Credibility for any source, falling back to the default.
    pub fn lookup(&self, source_name: &str) -> f64 {
        self.known(source_name).unwrap_or(self.default)
    }

    pub fn default_credibility(&self) -> f64 {
        self.default
    }
}

impl Default for CredibilityTable {
    fn default() -> Self {
        Self::from_config(&DecayConfig::default())
    }
}
