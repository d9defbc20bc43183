//! # toolrank-scoring
//!
//! Factor score calculation and the data-completeness confidence multiplier.
//!
//! Two formula families are provided, selected by an algorithm version's
//! [`FormulaVariant`](toolrank_core::FormulaVariant):
//! - `DataConfidence`: tiered signal tables in [`factors`]
//! - `SmartDefaults`: neutral baselines in [`smart_defaults`]
//!
//! Every formula is pure. A missing signal contributes its documented
//! default and never fails the calculation.

pub mod calculator;
pub mod confidence;
pub mod factors;
pub mod signals;
pub mod smart_defaults;
pub mod tiebreak;

pub use calculator::{calculator_for, DataConfidenceCalculator, SmartDefaultsCalculator};
pub use confidence::{ConfidenceBreakdown, ConfidenceMultiplier};
pub use tiebreak::Tiebreakers;
