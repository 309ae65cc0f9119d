//! Output formatters for affix command results.
//!
//! Provides two output modes:
//! - **JSON** (`--json`): Machine-readable structured output
//! - **Human** (default): Compact text output for terminal users

pub mod human;
pub(crate) mod human_helpers;
pub mod json;

use affix_enforce::rule::RuleMetadata;
use affix_enforce::types::{ExplainResult, RunReport};

pub trait OutputFormatter {
    fn format_report(&self, report: &RunReport) -> String;
    fn format_rules(&self, rules: &[&RuleMetadata]) -> String;
    fn format_explain(&self, result: &ExplainResult) -> String;
}
