//! # toolrank-news
//!
//! Turns news articles into per-tool impact signals.
//!
//! ```text
//! impact = base × decay(age) × [PR discount] × [source credibility]
//! decay  = 1 / (1 + (age_days / 365)^1.5)
//! ```
//!
//! Bracketed steps apply only when their condition holds; each leaves the
//! running impact unchanged otherwise.

pub mod aggregate;
pub mod classification;
pub mod credibility;
pub mod decay;
pub mod resolve;

pub use aggregate::{base_impact, NewsAggregator};
pub use classification::PrClassifier;
pub use credibility::CredibilityTable;
pub use decay::{decay_for_age, NewsDecayModel};
pub use resolve::{ExactSlugResolver, NameSubstringResolver, ResolverChain, TermMappingResolver};
