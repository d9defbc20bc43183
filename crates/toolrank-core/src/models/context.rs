use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::news::NewsImpactSummary;

/// Per-tool inputs that are not part of the metric record itself.
///
/// The reference date replaces any wall-clock read inside factor formulas, so
/// a historical pass scores exactly as it would have on that date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringContext {
    pub reference_date: NaiveDate,
    pub news: NewsImpactSummary,
}

impl ScoringContext {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            news: NewsImpactSummary::default(),
        }
    }

    pub fn with_news(mut self, news: NewsImpactSummary) -> Self {
        self.news = news;
        self
    }
}
