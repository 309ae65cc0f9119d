use affix_core::types::{
    CheckOutcome, Confidence, Finding, Severity, Subject, TypeDescriptor,
};

use crate::rule::{RuleMetadata, TypeRule};
use crate::types::ExplainResult;

pub const RULE_ID: &str = "UseCorrectPrefix";

pub const CODE_INTERFACE_PREFIX: &str = "N001";
pub const CODE_CLASS_PREFIX: &str = "N002";
pub const CODE_GENERIC_PREFIX: &str = "N003";

static METADATA: RuleMetadata = RuleMetadata {
    id: RULE_ID,
    title: "Types, interfaces and generic parameters use the correct prefix",
    category: "naming",
    compatibility: &["CA1715", "CA1722"],
    codes: &[CODE_INTERFACE_PREFIX, CODE_CLASS_PREFIX, CODE_GENERIC_PREFIX],
    default_severity: Severity::Medium,
    default_confidence: Confidence::High,
    problem: "Interface names should start with 'I' followed by a capital letter, \
              type names should not carry a 'C' prefix, and generic parameter names \
              should start with 'T' unless they are a single uppercase letter.",
    solution: "Rename the type, interface or generic parameter so it follows the \
               prefix convention.",
};

/// A naming violation before it is attached to a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameViolation {
    pub code: &'static str,
    pub severity: Severity,
    pub confidence: Confidence,
    pub message: String,
    pub fix_hint: String,
}

impl NameViolation {
    fn into_finding(self, subject: Subject) -> Finding {
        Finding {
            code: self.code.to_string(),
            rule: RULE_ID.to_string(),
            severity: self.severity,
            confidence: self.confidence,
            message: self.message,
            subject,
            fix_hint: Some(self.fix_hint),
            suppressed: false,
            suppress_hint: None,
        }
    }
}

/// First three characters of `name`, `None` past the end.
fn head(name: &str) -> (Option<char>, Option<char>, Option<char>) {
    let mut chars = name.chars();
    (chars.next(), chars.next(), chars.next())
}

/// `C` + uppercase + lowercase, as in `CPhone`. Names shorter than three
/// characters never match.
pub fn has_hungarian_class_prefix(name: &str) -> bool {
    match head(name) {
        (Some('C'), Some(second), Some(third)) => second.is_uppercase() && third.is_lowercase(),
        _ => false,
    }
}

/// `I` + uppercase with at least three characters in total, as in `IPhone`.
pub fn has_interface_prefix(name: &str) -> bool {
    match head(name) {
        (Some('I'), Some(second), Some(_)) => second.is_uppercase(),
        _ => false,
    }
}

/// A single non-lowercase character, or a longer name starting with `T`.
/// Any name starting with a lowercase character fails, including `t`.
pub fn is_conventional_generic_parameter(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    if first.is_lowercase() {
        return false;
    }
    first == 'T' || chars.next().is_none()
}

/// Check the name of a non-interface type.
pub fn classify_type_name(name: &str) -> Option<NameViolation> {
    if !has_hungarian_class_prefix(name) {
        return None;
    }
    Some(NameViolation {
        code: CODE_CLASS_PREFIX,
        severity: Severity::Medium,
        confidence: Confidence::High,
        message: format!(
            "{} type name starts with 'C' prefix but, according to .NET naming conventions, \
             type names should not have any specific prefix.",
            name
        ),
        // The prefix matched, so the first byte is the ASCII 'C'.
        fix_hint: format!("Rename `{}` to `{}`", name, &name[1..]),
    })
}

/// Check the name of an interface.
pub fn classify_interface_name(name: &str) -> Option<NameViolation> {
    if has_interface_prefix(name) {
        return None;
    }
    Some(NameViolation {
        code: CODE_INTERFACE_PREFIX,
        severity: Severity::Critical,
        confidence: Confidence::High,
        message: format!(
            "{} interface name doesn't have the required 'I' prefix. According to existing \
             naming conventions, all interface names should begin with the 'I' letter \
             followed by another capital letter.",
            name
        ),
        fix_hint: interface_fix_hint(name),
    })
}

/// Check the name of one generic type parameter.
pub fn classify_generic_parameter_name(name: &str) -> Option<NameViolation> {
    if is_conventional_generic_parameter(name) {
        return None;
    }
    Some(NameViolation {
        code: CODE_GENERIC_PREFIX,
        severity: Severity::High,
        confidence: Confidence::High,
        message: format!(
            "The generic parameter '{}' should be prefixed with 'T' or be a single, \
             uppercased letter.",
            name
        ),
        fix_hint: format!(
            "Rename `{}` to `{}`",
            name,
            suggest_generic_parameter_name(name)
        ),
    })
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Names too short to carry the prefix get a length hint instead of a rename
/// that would only stack another `I`.
fn interface_fix_hint(name: &str) -> String {
    if name.chars().count() < 3 {
        return format!(
            "Rename `{}` to `I`, a capital letter and at least one more character",
            name
        );
    }
    format!("Rename `{}` to `{}`", name, suggest_interface_name(name))
}

/// `Iphone` -> `IPhone`, `Phone` -> `IPhone`, `phone` -> `IPhone`.
fn suggest_interface_name(name: &str) -> String {
    match head(name) {
        (Some('I'), Some(second), _) if second.is_lowercase() => {
            format!("I{}", capitalize(&name[1..]))
        }
        _ => format!("I{}", capitalize(name)),
    }
}

/// `t` -> `T`, `tKey` -> `TKey`, `Mechanism` -> `TMechanism`.
fn suggest_generic_parameter_name(name: &str) -> String {
    match head(name) {
        (Some(_), None, _) | (Some('t'), _, _) => capitalize(name),
        _ => format!("T{}", capitalize(name)),
    }
}

/// Flags interfaces without an `I` prefix, types with a Hungarian `C`
/// prefix, and generic parameters without a `T` prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrectPrefixRule;

impl TypeRule for CorrectPrefixRule {
    fn metadata(&self) -> &'static RuleMetadata {
        &METADATA
    }

    fn evaluate(&self, ty: &TypeDescriptor) -> CheckOutcome {
        if ty.is_compiler_generated {
            return CheckOutcome::NotApplicable;
        }

        let mut findings = Vec::new();

        let name_violation = if ty.is_interface {
            classify_interface_name(&ty.name)
        } else {
            classify_type_name(&ty.name)
        };
        if let Some(v) = name_violation {
            findings.push(v.into_finding(Subject::of_type(ty)));
        }

        for param in &ty.generic_parameters {
            if let Some(v) = classify_generic_parameter_name(&param.name) {
                findings.push(v.into_finding(Subject::of_generic_parameter(ty, param)));
            }
        }

        CheckOutcome::from_findings(findings)
    }

    fn explain(&self, code: &str) -> Option<ExplainResult> {
        let (severity, problem, solution, bad, good) = match code {
            CODE_INTERFACE_PREFIX => (
                Severity::Critical,
                "Interface name does not start with 'I' followed by a capital letter. \
                 Names shorter than three characters cannot carry the prefix and are \
                 always reported.",
                "Prefix the interface name with 'I' and capitalize the next letter.",
                "interface Phone",
                "interface IPhone",
            ),
            CODE_CLASS_PREFIX => (
                Severity::Medium,
                "Type name uses the Hungarian 'C' prefix: 'C', then a capital letter, \
                 then a lowercase letter.",
                "Drop the leading 'C'.",
                "class CPhone",
                "class Phone",
            ),
            CODE_GENERIC_PREFIX => (
                Severity::High,
                "Generic parameter is neither a single uppercase letter nor a name \
                 starting with 'T'. Lowercase names, even single letters, are reported.",
                "Use a single uppercase letter or prefix the name with 'T'.",
                "class Call<Mechanism>",
                "class Call<TMechanism>",
            ),
            _ => return None,
        };
        Some(ExplainResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "explain".to_string(),
            code: code.to_string(),
            rule: RULE_ID.to_string(),
            title: METADATA.title.to_string(),
            severity,
            confidence: Confidence::High,
            problem: problem.to_string(),
            solution: solution.to_string(),
            bad_example: bad.to_string(),
            good_example: good.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "prefix_tests.rs"]
mod tests;
