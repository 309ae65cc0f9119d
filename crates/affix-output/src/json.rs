use affix_enforce::rule::RuleMetadata;
use affix_enforce::types::{ExplainResult, RunReport};

use crate::OutputFormatter;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RunReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }
    fn format_rules(&self, rules: &[&RuleMetadata]) -> String {
        serde_json::to_string_pretty(rules).unwrap_or_default()
    }
    fn format_explain(&self, result: &ExplainResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
}
