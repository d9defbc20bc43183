use chrono::{DateTime, Utc};
use toolrank_core::config::DecayConfig;
use toolrank_core::models::NewsArticle;
use toolrank_core::traits::IDecayModel;

use crate::classification::PrClassifier;
use crate::credibility::CredibilityTable;

/// `1 / (1 + (age_days / horizon)^exponent)`. Negative ages count as zero.
///
/// Equals 1.0 at age 0 and exactly 0.5 at `horizon`; strictly positive for
/// every finite age.
pub fn decay_for_age(age_days: f64, horizon_days: f64, exponent: f64) -> f64 {
    let age = if age_days.is_finite() { age_days.max(0.0) } else { 0.0 };
    1.0 / (1.0 + (age / horizon_days).powf(exponent))
}

/// News decay and impact adjustment.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsDecayModel {
    horizon_days: f64,
    exponent: f64,
    pr_discount: f64,
    classifier: PrClassifier,
    credibility: CredibilityTable,
}

impl NewsDecayModel {
    pub fn from_config(config: &DecayConfig) -> Self {
        Self {
            horizon_days: config.horizon_days,
            exponent: config.exponent,
            pr_discount: config.pr_discount,
            classifier: PrClassifier::from_config(config),
            credibility: CredibilityTable::from_config(config),
        }
    }

    pub fn classifier(&self) -> &PrClassifier {
        &self.classifier
    }

    pub fn credibility(&self) -> &CredibilityTable {
        &self.credibility
    }

    /// Whole days between `published` and `reference`, floored at zero.
    pub fn age_days(published: DateTime<Utc>, reference: DateTime<Utc>) -> i64 {
        (reference - published).num_days().max(0)
    }

    /// Credibility applied to `article`: its own value, else a known source.
    pub fn credibility_for(&self, article: &NewsArticle) -> Option<f64> {
        article
            .source_credibility
            .or_else(|| self.credibility.known(&article.source_name))
    }

    /// Fill an absent credibility from the table (default included), as an
    /// ingestion step would before handing the article to the engine.
    pub fn assign_credibility(&self, article: &mut NewsArticle) {
        if article.source_credibility.is_none() {
            article.source_credibility = Some(self.credibility.lookup(&article.source_name));
        }
    }
}

impl Default for NewsDecayModel {
    fn default() -> Self {
        Self::from_config(&DecayConfig::default())
    }
}

impl IDecayModel for NewsDecayModel {
    fn decay_factor(&self, published: DateTime<Utc>, reference: DateTime<Utc>) -> f64 {
        let age = Self::age_days(published, reference) as f64;
        decay_for_age(age, self.horizon_days, self.exponent)
    }

    fn adjusted_impact(
        &self,
        article: &NewsArticle,
        base_impact: f64,
        reference: DateTime<Utc>,
    ) -> f64 {
        let mut impact = base_impact;
        if let Some(published) = article.published_at {
            impact *= self.decay_factor(published, reference);
        }
        if self.classifier.is_press_release(article) {
            impact *= self.pr_discount;
        }
        if let Some(credibility) = self.credibility_for(article) {
            impact *= credibility;
        }
        impact
    }
}
