// Tests for `affix check`

use std::fs;

use crate::support::{clean_manifest, phone_manifest, run_affix, write_manifests};

#[test]
fn test_check_human_output() {
    let dir = write_manifests(&[("phone.json", phone_manifest())]);
    let output = run_affix(dir.path(), &["check", "phone.json"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("medium[N002]: CPhone type name starts with 'C' prefix"),
        "stdout: {stdout}"
    );
    assert!(stdout.contains("critical[N001]: Dialer interface name"));
    assert!(stdout.contains("high[N003]: The generic parameter 'Mechanism'"));
    assert!(stdout.contains("  --> Contoso.Phone.dll: Contoso.Call<Mechanism>"));
    assert!(stdout.contains("3 defect(s) in 5 type(s) across 1 assembly(ies)"));
}

#[test]
fn test_check_clean_is_silent() {
    let dir = write_manifests(&[("clean.json", clean_manifest())]);
    let output = run_affix(dir.path(), &["check", "clean.json"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).trim().is_empty());
}

#[test]
fn test_check_json_output() {
    let dir = write_manifests(&[("phone.json", phone_manifest())]);
    let output = run_affix(dir.path(), &["check", "phone.json", "--json"]);

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["command"], "check");
    assert_eq!(value["status"], "defects");
    assert_eq!(value["summary"]["defects"], 3);
    assert_eq!(value["summary"]["types_not_applicable"], 1);
    let findings = value["assemblies"][0]["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 3);
}

#[test]
fn test_check_severity_filter_flag() {
    let dir = write_manifests(&[("phone.json", phone_manifest())]);
    let output = run_affix(dir.path(), &["check", "phone.json", "--severity", "critical", "--json"]);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let findings = value["assemblies"][0]["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["code"], "N001");
}

#[test]
fn test_check_suppress_flag() {
    let dir = write_manifests(&[("phone.json", phone_manifest())]);
    let output = run_affix(
        dir.path(),
        &["check", "phone.json", "--suppress", "UseCorrectPrefix", "--sequential"],
    );
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Suppressed N002 via UseCorrectPrefix"));
    assert!(stdout.contains("0 defect(s)"));
    assert!(stdout.contains("3 suppressed"));
}

#[test]
fn test_check_reads_project_config() {
    let dir = write_manifests(&[("phone.json", phone_manifest())]);
    fs::create_dir_all(dir.path().join(".affix")).unwrap();
    fs::write(
        dir.path().join(".affix/affix.json"),
        serde_json::json!({ "suppress": ["N001", "N002", "N003"] }).to_string(),
    )
    .unwrap();

    let output = run_affix(dir.path(), &["check", "phone.json"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_check_directory_argument() {
    let dir = write_manifests(&[
        ("out/phone.json", phone_manifest()),
        ("out/clean.json", clean_manifest()),
    ]);
    let output = run_affix(dir.path(), &["check", "out", "--json"]);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["assemblies"], 2);
}
