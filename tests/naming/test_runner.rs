// Tests for the rule runner over whole manifests

use affix_core::config::AffixConfig;
use affix_core::manifest::parse_manifest;
use affix_core::types::Severity;
use affix_enforce::registry::RuleRegistry;
use affix_enforce::runner::RuleRunner;

use crate::support::{clean_manifest, phone_manifest};

fn parse(value: serde_json::Value) -> affix_core::types::AssemblyMetadata {
    parse_manifest(std::path::Path::new("fixture.json"), &value.to_string()).unwrap()
}

#[test]
/// The phone fixture yields one finding of each code, compiler-generated type skipped.
fn test_phone_fixture() {
    let report = RuleRunner::new(RuleRegistry::builtin()).run(&[parse(phone_manifest())]);
    let codes: Vec<&str> = report.findings().map(|(_, f)| f.code.as_str()).collect();
    assert_eq!(codes, vec!["N002", "N001", "N003"]);
    assert_eq!(report.summary.types_not_applicable, 1);
    assert_eq!(report.summary.types_analyzed, 5);
    assert_eq!(report.status, "defects");
}

#[test]
/// Conforming manifest produces an ok report.
fn test_clean_fixture() {
    let report = RuleRunner::new(RuleRegistry::builtin()).run(&[parse(clean_manifest())]);
    assert_eq!(report.status, "ok");
    assert_eq!(report.summary.defects, 0);
}

#[test]
/// Running twice on the same input gives identical findings.
fn test_runs_are_reproducible() {
    let runner = RuleRunner::new(RuleRegistry::builtin());
    let input = [parse(phone_manifest()), parse(clean_manifest())];
    let first = runner.run(&input);
    let second = runner.run(&input);
    let a: Vec<_> = first.findings().map(|(asm, f)| (asm.to_string(), f.clone())).collect();
    let b: Vec<_> = second.findings().map(|(asm, f)| (asm.to_string(), f.clone())).collect();
    assert_eq!(a, b);
}

#[test]
/// Config filters and suppressions flow through to the report.
fn test_config_driven_run() {
    let mut config = AffixConfig::default();
    config.filter.min_severity = Severity::High;
    config.suppress = vec!["N003".to_string()];
    let runner = RuleRunner::with_config(RuleRegistry::builtin(), &config);
    let report = runner.run(&[parse(phone_manifest())]);

    assert_eq!(report.summary.defects, 1);
    assert_eq!(report.summary.suppressed, 1);
    assert_eq!(report.summary.by_severity.critical, 1);
}
