use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// News attribution configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// Free-text term → tool id, used to attribute untagged articles.
    /// A `[news.terms]` table replaces the built-in one.
    pub terms: BTreeMap<String, String>,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            terms: defaults::DEFAULT_NEWS_TERMS
                .iter()
                .map(|(term, tool_id)| (term.to_string(), tool_id.to_string()))
                .collect(),
        }
    }
}
