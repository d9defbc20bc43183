pub mod algorithm;
pub mod context;
pub mod factor;
pub mod metrics;
pub mod news;
pub mod period;
pub mod ranking;
pub mod serde_helpers;
pub mod snapshot;

pub use algorithm::{AlgorithmVersion, FormulaVariant, WeightConfiguration};
pub use context::ScoringContext;
pub use factor::{clamp_score, Factor, FactorScores};
pub use metrics::{
    AdoptionSignals, CapabilitySignals, CommercialSignals, LifecycleStatus, PricingModel,
    SweBench, ToolMetrics, VelocitySignals,
};
pub use news::{Importance, NewsArticle, NewsImpactSummary};
pub use period::Period;
pub use ranking::{ChangeAnalysis, ChangeCategory, Movement, MovementDirection, Ranking, Tier};
pub use snapshot::RankingVersion;
