//! Free-text → tool id resolution strategies, tried in a fixed order by
//! [`ResolverChain`].

use std::collections::BTreeMap;

use regex::Regex;
use toolrank_core::models::ToolMetrics;
use toolrank_core::traits::IToolResolver;
use tracing::warn;

/// Matches text that is exactly a tool's slug or id (case-insensitive).
#[derive(Debug, Clone, Default)]
pub struct ExactSlugResolver {
    slugs: BTreeMap<String, String>,
}

impl ExactSlugResolver {
    pub fn new<'a>(tools: impl IntoIterator<Item = &'a ToolMetrics>) -> Self {
        let mut slugs = BTreeMap::new();
        for tool in tools {
            for key in [&tool.slug, &tool.tool_id] {
                if !key.is_empty() {
                    slugs.insert(key.to_lowercase(), tool.tool_id.clone());
                }
            }
        }
        Self { slugs }
    }
}

impl IToolResolver for ExactSlugResolver {
    fn name(&self) -> &'static str {
        "exact_slug"
    }

    fn resolve(&self, text: &str) -> Option<String> {
        self.slugs.get(&text.trim().to_lowercase()).cloned()
    }
}

/// Maps known terms ("claude code", "copilot") to tool ids, matching whole
/// words and the possessive form. Longer terms are tried first.
#[derive(Debug, Clone, Default)]
pub struct TermMappingResolver {
    terms: Vec<(Regex, String)>,
}

impl TermMappingResolver {
    pub fn new<'a>(mapping: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut pairs: Vec<(&str, &str)> = mapping.into_iter().collect();
        pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));

        let terms = pairs
            .into_iter()
            .filter_map(|(term, tool_id)| {
                let pattern = format!(r"(?i)\b{}(?:'s)?\b", regex::escape(term.trim()));
                match Regex::new(&pattern) {
                    Ok(re) => Some((re, tool_id.to_string())),
                    Err(e) => {
                        warn!(term, error = %e, "skipping unmatchable term");
                        None
                    }
                }
            })
            .collect();
        Self { terms }
    }
}

impl IToolResolver for TermMappingResolver {
    fn name(&self) -> &'static str {
        "term_mapping"
    }

    fn resolve(&self, text: &str) -> Option<String> {
        self.terms
            .iter()
            .find(|(re, _)| re.is_match(text))
            .map(|(_, tool_id)| tool_id.clone())
    }
}

/// Matches when a tool's whole display name occurs in the text as whole
/// words. A fragment of a name ("Copilot", "code") never matches; aliases
/// like that belong in [`TermMappingResolver`]. Names shorter than three
/// characters are ignored.
#[derive(Debug, Clone, Default)]
pub struct NameSubstringResolver {
    names: Vec<(String, String)>,
}

impl NameSubstringResolver {
    const MIN_LEN: usize = 3;

    pub fn new<'a>(tools: impl IntoIterator<Item = &'a ToolMetrics>) -> Self {
        let mut names: Vec<(String, String)> = tools
            .into_iter()
            .map(|t| (normalise(&t.name), t.tool_id.clone()))
            .filter(|(name, _)| name.len() >= Self::MIN_LEN)
            .collect();
        names.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        Self { names }
    }
}

impl IToolResolver for NameSubstringResolver {
    fn name(&self) -> &'static str {
        "name_substring"
    }

    fn resolve(&self, text: &str) -> Option<String> {
        let text = normalise(text);
        if text.len() < Self::MIN_LEN {
            return None;
        }
        let padded_text = format!(" {text} ");
        self.names
            .iter()
            .find(|(name, _)| padded_text.contains(&format!(" {name} ")))
            .map(|(_, tool_id)| tool_id.clone())
    }
}

/// Lowercase, punctuation to spaces, whitespace collapsed.
fn normalise(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolvers tried in order; the first match wins.
#[derive(Default)]
pub struct ResolverChain {
    resolvers: Vec<Box<dyn IToolResolver>>,
}

impl ResolverChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, resolver: impl IToolResolver + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// Exact slug, then term mapping, then name substring.
    pub fn standard<'a>(
        tools: &[ToolMetrics],
        terms: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self::new()
            .with(ExactSlugResolver::new(tools))
            .with(TermMappingResolver::new(terms))
            .with(NameSubstringResolver::new(tools))
    }

    pub fn resolve(&self, text: &str) -> Option<String> {
        self.resolvers.iter().find_map(|r| r.resolve(text))
    }

    /// Names of the resolvers in priority order.
    pub fn strategies(&self) -> Vec<&'static str> {
        self.resolvers.iter().map(|r| r.name()).collect()
    }
}
