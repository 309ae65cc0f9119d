use affix_enforce::rule::RuleMetadata;
use affix_enforce::types::{ExplainResult, RunReport};

use crate::human_helpers::format_finding_human;
use crate::OutputFormatter;

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_report(&self, report: &RunReport) -> String {
        if report.assemblies.iter().all(|a| a.findings.is_empty()) {
            return String::new(); // Clean run = empty stdout
        }

        let mut out = String::new();

        for (assembly, finding) in report.findings() {
            out.push_str(&format_finding_human(assembly, finding));
        }

        let s = &report.summary;
        out.push_str(&format!(
            "\n{} defect(s) in {} type(s) across {} assembly(ies)",
            s.defects, s.types_analyzed, s.assemblies,
        ));
        if s.suppressed > 0 {
            out.push_str(&format!(", {} suppressed", s.suppressed));
        }
        out.push('\n');

        out
    }

    fn format_rules(&self, rules: &[&RuleMetadata]) -> String {
        let mut out = String::new();
        for rule in rules {
            out.push_str(&format!(
                "{} [{}]\n  {}\n  codes: {}\n",
                rule.id,
                rule.category,
                rule.title,
                rule.codes.join(", "),
            ));
            if !rule.compatibility.is_empty() {
                out.push_str(&format!("  compat: {}\n", rule.compatibility.join(", ")));
            }
        }
        out
    }

    fn format_explain(&self, result: &ExplainResult) -> String {
        let mut out = format!(
            "{} ({}): {}\n  severity: {}, confidence: {}\n\n",
            result.code, result.rule, result.title, result.severity, result.confidence,
        );
        out.push_str(&format!("Problem:\n  {}\n\n", result.problem));
        out.push_str(&format!("Solution:\n  {}\n\n", result.solution));
        out.push_str(&format!(
            "Example:\n  bad:  {}\n  good: {}\n",
            result.bad_example, result.good_example,
        ));
        out
    }
}
