// Tests for loading manifests from disk

use std::path::PathBuf;

use affix_core::manifest::{ManifestProvider, MetadataProvider};
use affix_core::types::AffixError;

use crate::support::{clean_manifest, phone_manifest, write_manifests};

#[test]
/// A directory argument picks up every manifest beneath it.
fn test_directory_of_manifests() {
    let dir = write_manifests(&[
        ("bin/a_phone.json", phone_manifest()),
        ("bin/b_clean.json", clean_manifest()),
    ]);
    let provider = ManifestProvider::from_paths(&[dir.path().to_path_buf()]).unwrap();
    let assemblies = provider.load().unwrap();
    let names: Vec<&str> = assemblies.iter().map(|a| a.assembly.as_str()).collect();
    assert_eq!(names, vec!["Contoso.Phone.dll", "Clean.dll"]);
    assert!(assemblies[0].types[5].is_compiler_generated);
}

#[test]
/// A manifest with an empty type name is rejected, not silently accepted.
fn test_empty_name_rejected() {
    let dir = write_manifests(&[(
        "bad.json",
        serde_json::json!({ "types": [ { "name": "" } ] }),
    )]);
    let provider = ManifestProvider::from_paths(&[dir.path().join("bad.json")]).unwrap();
    assert!(matches!(provider.load(), Err(AffixError::Manifest { .. })));
}

#[test]
/// Missing files surface as I/O errors naming the path.
fn test_missing_file() {
    let provider =
        ManifestProvider::from_paths(&[PathBuf::from("/definitely/not/here.json")]).unwrap();
    let err = provider.load().unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}
