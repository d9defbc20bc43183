//! Data-completeness confidence.
//!
//! ```text
//! multiplier = floor + (1 − floor) × completeness / 100
//! ```
//!
//! With the default floor of 0.7 an empty record keeps 70% of its weighted
//! score and a complete record keeps all of it.

use toolrank_core::config::ConfidenceConfig;
use toolrank_core::models::ToolMetrics;

/// An expected field, its completeness points, and its presence test.
struct ExpectedField {
    name: &'static str,
    points: f64,
    present: fn(&ToolMetrics) -> bool,
}

fn positive(value: Option<u64>) -> bool {
    value.is_some_and(|v| v > 0)
}

const EXPECTED_FIELDS: &[ExpectedField] = &[
    ExpectedField {
        name: "github_stars",
        points: 20.0,
        present: |m| positive(m.adoption.github_stars),
    },
    ExpectedField {
        name: "ide_installs",
        points: 20.0,
        present: |m| positive(m.adoption.ide_installs),
    },
    ExpectedField {
        name: "npm_monthly_downloads",
        points: 20.0,
        present: |m| positive(m.adoption.npm_monthly_downloads),
    },
    ExpectedField {
        name: "pypi_monthly_downloads",
        points: 15.0,
        present: |m| positive(m.adoption.pypi_monthly_downloads),
    },
    ExpectedField {
        name: "users",
        points: 15.0,
        present: |m| positive(m.adoption.users),
    },
    ExpectedField {
        name: "revenue",
        points: 15.0,
        present: |m| m.commercial.annual_revenue() > 0.0,
    },
    ExpectedField {
        name: "swe_bench",
        points: 15.0,
        present: |m| m.capability.swe_bench.best().is_some_and(|v| v > 0.0),
    },
    ExpectedField {
        name: "description",
        points: 10.0,
        present: |m| m.description.chars().count() > 100,
    },
    ExpectedField {
        name: "features",
        points: 10.0,
        present: |m| m.features.len() > 5,
    },
    ExpectedField {
        name: "company",
        points: 10.0,
        present: |m| m.company.as_deref().is_some_and(|c| !c.trim().is_empty()),
    },
    ExpectedField {
        name: "pricing_model",
        points: 10.0,
        present: |m| m.commercial.pricing_model.is_some(),
    },
];

/// Completeness and multiplier for one record, with the fields that counted.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceBreakdown {
    /// 0–100.
    pub completeness: f64,
    pub multiplier: f64,
    pub present: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceMultiplier {
    floor: f64,
}

impl ConfidenceMultiplier {
    /// `floor` is clamped into `(0, 1]`.
    pub fn new(floor: f64) -> Self {
        let floor = if floor.is_finite() && floor > 0.0 {
            floor.min(1.0)
        } else {
            f64::EPSILON
        };
        Self { floor }
    }

    pub fn from_config(config: &ConfidenceConfig) -> Self {
        Self::new(config.floor)
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Weighted completeness of the record, capped at 100.
    pub fn completeness(&self, metrics: &ToolMetrics) -> f64 {
        EXPECTED_FIELDS
            .iter()
            .filter(|field| (field.present)(metrics))
            .map(|field| field.points)
            .sum::<f64>()
            .min(100.0)
    }

    pub fn multiplier_for(&self, completeness: f64) -> f64 {
        let fraction = (completeness / 100.0).clamp(0.0, 1.0);
        self.floor + (1.0 - self.floor) * fraction
    }

    pub fn multiplier(&self, metrics: &ToolMetrics) -> f64 {
        self.multiplier_for(self.completeness(metrics))
    }

    pub fn breakdown(&self, metrics: &ToolMetrics) -> ConfidenceBreakdown {
        let present: Vec<&'static str> = EXPECTED_FIELDS
            .iter()
            .filter(|field| (field.present)(metrics))
            .map(|field| field.name)
            .collect();
        let completeness = self.completeness(metrics);
        ConfidenceBreakdown {
            completeness,
            multiplier: self.multiplier_for(completeness),
            present,
        }
    }
}

impl Default for ConfidenceMultiplier {
    fn default() -> Self {
        Self::from_config(&ConfidenceConfig::default())
    }
}
