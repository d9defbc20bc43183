use toolrank_core::config::DecayConfig;
use toolrank_core::models::NewsArticle;

/// Decides whether an article is a company announcement / press release.
///
/// Precedence: an explicit flag on the article is authoritative; otherwise
/// an article-type tag, then a source-name marker, classifies it as PR.
#[derive(Debug, Clone, PartialEq)]
pub struct PrClassifier {
    article_types: Vec<String>,
    source_markers: Vec<String>,
}

impl PrClassifier {
    pub fn new(article_types: &[String], source_markers: &[String]) -> Self {
        Self {
            article_types: article_types.iter().map(|t| t.to_lowercase()).collect(),
            source_markers: source_markers.iter().map(|m| m.to_lowercase()).collect(),
        }
    }

    pub fn from_config(config: &DecayConfig) -> Self {
        Self::new(&config.pr_article_types, &config.pr_source_markers)
    }

    pub fn is_press_release(&self, article: &NewsArticle) -> bool {
        if let Some(explicit) = article.is_company_announcement {
            return explicit;
        }
        let typed = [&article.article_type, &article.source_type]
            .into_iter()
            .flatten()
            .any(|tag| self.article_types.contains(&tag.to_lowercase()));
        if typed {
            return true;
        }
        let source = article.source_name.to_lowercase();
        self.source_markers.iter().any(|marker| source.contains(marker))
    }
}

impl Default for PrClassifier {
    fn default() -> Self {
        Self::from_config(&DecayConfig::default())
    }
}
