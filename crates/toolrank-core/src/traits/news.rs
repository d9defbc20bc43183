use chrono::{DateTime, Utc};

use crate::models::NewsArticle;

/// Time decay and impact adjustment for news articles.
pub trait IDecayModel: Send + Sync {
    /// Decay factor in `(0, 1]` for an article published at `published`.
    fn decay_factor(&self, published: DateTime<Utc>, reference: DateTime<Utc>) -> f64;

    /// `base_impact` after decay, PR discount and source credibility.
    fn adjusted_impact(
        &self,
        article: &NewsArticle,
        base_impact: f64,
        reference: DateTime<Utc>,
    ) -> f64;
}
