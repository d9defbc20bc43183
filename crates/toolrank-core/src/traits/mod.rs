pub mod news;
pub mod providers;
pub mod resolver;
pub mod scoring;
pub mod stores;

pub use news::IDecayModel;
pub use providers::{IMetricsProvider, INewsProvider};
pub use resolver::IToolResolver;
pub use scoring::IFactorCalculator;
pub use stores::{IAlgorithmStore, IRankingHistory};
