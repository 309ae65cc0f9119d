use affix_core::types::{CheckOutcome, Confidence, Severity, TypeDescriptor};
use serde::Serialize;

use crate::types::ExplainResult;

/// Static description of a rule, registered alongside it.
#[derive(Debug, Clone, Serialize)]
pub struct RuleMetadata {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    /// Equivalent rule ids in other analyzers.
    pub compatibility: &'static [&'static str],
    /// Finding codes this rule can emit.
    pub codes: &'static [&'static str],
    pub default_severity: Severity,
    pub default_confidence: Confidence,
    pub problem: &'static str,
    pub solution: &'static str,
}

/// A rule invoked once per type declaration found in the analyzed metadata.
///
/// Implementors are shared across rayon workers, so they must be stateless
/// or internally synchronized.
pub trait TypeRule: Send + Sync {
    fn metadata(&self) -> &'static RuleMetadata;

    /// Evaluate one type. Must not depend on any other type.
    fn evaluate(&self, ty: &TypeDescriptor) -> CheckOutcome;

    /// Describe one of this rule's finding codes, if it owns it.
    fn explain(&self, _code: &str) -> Option<ExplainResult> {
        None
    }
}
