/// Namespace name used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "predicates";

/// Settings shared by the predicate builders and the namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateOptions {
    pub(crate) namespace: String,
}

impl Default for PredicateOptions {
    fn default() -> Self {
        PredicateOptions {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl PredicateOptions {
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn namespace_name(&self) -> &str {
        &self.namespace
    }
}
