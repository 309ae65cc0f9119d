// Tests for CLI exit code behavior

use std::fs;

use crate::support::{clean_manifest, phone_manifest, run_affix, write_manifests};

#[test]
/// Exit code 0 when every type conforms.
fn test_exit_code_0_clean() {
    let dir = write_manifests(&[("clean.json", clean_manifest())]);
    let output = run_affix(dir.path(), &["check", "clean.json"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
/// Exit code 1 when unsuppressed findings remain.
fn test_exit_code_1_defects() {
    let dir = write_manifests(&[("phone.json", phone_manifest())]);
    let output = run_affix(dir.path(), &["check", "phone.json"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
/// Exit code 2 for an unreadable manifest.
fn test_exit_code_2_missing_manifest() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = run_affix(dir.path(), &["check", "missing.json"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.json"), "stderr: {stderr}");
}

#[test]
/// Exit code 2 for malformed JSON.
fn test_exit_code_2_malformed_manifest() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("bad.json"), "{ \"types\": [").unwrap();
    let output = run_affix(dir.path(), &["check", "bad.json"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
/// Exit code 2 for an unknown severity level.
fn test_exit_code_2_bad_severity() {
    let dir = write_manifests(&[("clean.json", clean_manifest())]);
    let output = run_affix(dir.path(), &["check", "clean.json", "--severity", "urgent"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown severity 'urgent'"));
}
