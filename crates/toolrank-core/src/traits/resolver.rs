/// One strategy for mapping free text to a tool id.
pub trait IToolResolver: Send + Sync {
    fn name(&self) -> &'static str;

    /// Resolve `text` to a tool id, or `None` when this strategy has no match.
    fn resolve(&self, text: &str) -> Option<String>;
}
