// Tests for the interface 'I' prefix check (N001)

use affix_core::types::{CheckOutcome, Severity, TypeDescriptor};
use affix_enforce::prefix::CorrectPrefixRule;
use affix_enforce::rule::TypeRule;

fn codes(ty: &TypeDescriptor) -> Vec<String> {
    CorrectPrefixRule
        .evaluate(ty)
        .into_findings()
        .into_iter()
        .map(|f| f.code)
        .collect()
}

#[test]
/// An interface named like a class is reported as Critical.
fn test_interface_without_prefix_is_critical() {
    let outcome = CorrectPrefixRule.evaluate(&TypeDescriptor::interface("Phone"));
    let findings = outcome.findings();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].code, "N001");
    assert_eq!(findings[0].severity, Severity::Critical);
    assert!(findings[0].message.starts_with("Phone interface name"));
}

#[test]
/// Two-letter acronyms after the I are fine.
fn test_interface_with_acronym_passes() {
    assert_eq!(
        CorrectPrefixRule.evaluate(&TypeDescriptor::interface("IODevice")),
        CheckOutcome::Success
    );
}

#[test]
/// Interfaces shorter than three characters cannot carry the prefix.
fn test_short_interfaces_always_fail() {
    assert_eq!(codes(&TypeDescriptor::interface("I")), vec!["N001"]);
    assert_eq!(codes(&TypeDescriptor::interface("Ix")), vec!["N001"]);
    assert_eq!(codes(&TypeDescriptor::interface("IP")), vec!["N001"]);
}

#[test]
/// The class rule never runs on interfaces, so a C-prefixed interface gets N001 only.
fn test_interface_never_gets_class_finding() {
    assert_eq!(codes(&TypeDescriptor::interface("CPhone")), vec!["N001"]);
}
