use std::collections::HashSet;

use affix_core::types::Finding;

/// Manages suppressed finding codes and rule ids.
///
/// When a finding matches a suppression (by code such as `N002`, or by the
/// id of the rule that produced it), it is:
/// - Kept in the report and marked suppressed=true
/// - Given a suppress_hint explaining the suppression
/// - Excluded from the defect count
#[derive(Debug)]
pub struct SuppressionManager {
    suppressed: HashSet<String>,
}

impl Default for SuppressionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SuppressionManager {
    pub fn new() -> Self {
        Self {
            suppressed: HashSet::new(),
        }
    }

    /// Add a code or rule id to suppress (e.g., "N001", "UseCorrectPrefix").
    pub fn suppress(&mut self, key: &str) {
        self.suppressed.insert(key.to_string());
    }

    /// Check if a code or rule id is currently suppressed.
    pub fn is_suppressed(&self, key: &str) -> bool {
        self.suppressed.contains(key)
    }

    /// Apply suppression to a finding, returning the modified finding.
    /// If neither its code nor its rule is suppressed, returns it unchanged.
    pub fn apply(&self, mut finding: Finding) -> Finding {
        let matched = if self.is_suppressed(&finding.code) {
            Some(finding.code.clone())
        } else if self.is_suppressed(&finding.rule) {
            Some(finding.rule.clone())
        } else {
            None
        };
        if let Some(key) = matched {
            finding.suppress_hint = Some(format!("Suppressed {} via {}", finding.code, key));
            finding.suppressed = true;
        }
        finding
    }

    /// Number of active suppressions.
    pub fn count(&self) -> usize {
        self.suppressed.len()
    }
}
