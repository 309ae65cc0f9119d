use affix_core::types::Finding;

pub(crate) fn format_finding_human(assembly: &str, f: &Finding) -> String {
    let mut out = format!(
        "{}[{}]: {}\n  --> {}: {}\n",
        f.severity,
        f.code,
        f.message,
        assembly,
        f.subject.display_name(),
    );

    out.push_str(&format!("   = confidence: {}\n", f.confidence));

    if let Some(fix) = &f.fix_hint {
        out.push_str(&format!("   = fix: {}\n", fix));
    }

    if f.suppressed {
        if let Some(hint) = &f.suppress_hint {
            out.push_str(&format!("   = {}\n", hint));
        }
    }

    out
}
