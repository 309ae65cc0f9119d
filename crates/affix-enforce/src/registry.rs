use crate::prefix::CorrectPrefixRule;
use crate::rule::{RuleMetadata, TypeRule};
use crate::types::ExplainResult;

/// The set of rules a run evaluates, in registration order.
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<Box<dyn TypeRule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every rule shipped with affix.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CorrectPrefixRule));
        registry
    }

    pub fn register(&mut self, rule: Box<dyn TypeRule>) {
        self.rules.push(rule);
    }

    /// Remove the rule with this id. Returns false if no such rule is registered.
    pub fn disable(&mut self, id: &str) -> bool {
        let before = self.rules.len();
        self.rules.retain(|r| r.metadata().id != id);
        self.rules.len() != before
    }

    pub fn rules(&self) -> &[Box<dyn TypeRule>] {
        &self.rules
    }

    pub fn metadata(&self) -> Vec<&'static RuleMetadata> {
        self.rules.iter().map(|r| r.metadata()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Ask each rule in turn to explain `code`.
    pub fn explain(&self, code: &str) -> Option<ExplainResult> {
        self.rules.iter().find_map(|r| r.explain(code))
    }
}
