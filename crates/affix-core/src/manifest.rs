//! Type manifests: the metadata affix analyzes.
//!
//! A manifest is a JSON description of the types declared in one compiled
//! binary, produced by whatever tool reads the binary's metadata tables:
//!
//! ```json
//! {
//!   "assembly": "Contoso.Phone.dll",
//!   "types": [
//!     { "name": "IPhone", "namespace": "Contoso", "is_interface": true },
//!     { "name": "Call", "generic_parameters": ["TMechanism"] }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

use crate::types::{AffixError, AssemblyMetadata, GenericParameterDescriptor, TypeDescriptor};

/// Supplies the types of every analyzed binary.
pub trait MetadataProvider {
    fn load(&self) -> Result<Vec<AssemblyMetadata>, AffixError>;
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    assembly: Option<String>,
    #[serde(default)]
    types: Vec<RawType>,
}

#[derive(Debug, Deserialize)]
struct RawType {
    name: String,
    #[serde(default)]
    namespace: Option<String>,
    #[serde(default)]
    is_interface: bool,
    #[serde(default)]
    is_compiler_generated: Option<bool>,
    #[serde(default)]
    generic_parameters: Vec<GenericParameterDescriptor>,
}

/// Reads JSON manifests from disk. Directories are searched recursively for `*.json`.
#[derive(Debug, Clone)]
pub struct ManifestProvider {
    files: Vec<PathBuf>,
}

impl ManifestProvider {
    /// Expand `paths` into manifest files. Files are taken as given; directories
    /// contribute every `.json` file beneath them, in file-name order.
    pub fn from_paths(paths: &[PathBuf]) -> Result<Self, AffixError> {
        let mut files = Vec::new();
        for path in paths {
            if path.is_dir() {
                for entry in WalkDir::new(path).sort_by_file_name() {
                    let entry = entry.map_err(|e| AffixError::Io {
                        path: path.clone(),
                        source: e.into(),
                    })?;
                    if entry.file_type().is_file()
                        && entry.path().extension().is_some_and(|ext| ext == "json")
                    {
                        files.push(entry.into_path());
                    }
                }
            } else {
                files.push(path.clone());
            }
        }
        Ok(Self { files })
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl MetadataProvider for ManifestProvider {
    fn load(&self) -> Result<Vec<AssemblyMetadata>, AffixError> {
        self.files
            .iter()
            .map(|path| {
                let content = std::fs::read_to_string(path).map_err(|source| AffixError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_manifest(path, &content)
            })
            .collect()
    }
}

/// Parse one manifest. `path` names the source in errors and supplies the
/// assembly name when the manifest omits it.
pub fn parse_manifest(path: &Path, content: &str) -> Result<AssemblyMetadata, AffixError> {
    let raw: RawManifest = serde_json::from_str(content).map_err(|source| AffixError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let assembly = raw.assembly.unwrap_or_else(|| {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    let mut types = Vec::with_capacity(raw.types.len());
    for (index, raw_type) in raw.types.into_iter().enumerate() {
        if raw_type.name.is_empty() {
            return Err(AffixError::Manifest {
                path: path.to_path_buf(),
                message: format!("type #{} has an empty name", index),
            });
        }
        if let Some(pos) = raw_type
            .generic_parameters
            .iter()
            .position(|p| p.name.is_empty())
        {
            return Err(AffixError::Manifest {
                path: path.to_path_buf(),
                message: format!(
                    "generic parameter #{} of `{}` has an empty name",
                    pos, raw_type.name
                ),
            });
        }
        let is_compiler_generated = raw_type
            .is_compiler_generated
            .unwrap_or_else(|| looks_compiler_generated(&raw_type.name));
        types.push(TypeDescriptor {
            name: raw_type.name,
            namespace: raw_type.namespace,
            is_interface: raw_type.is_interface,
            is_compiler_generated,
            generic_parameters: raw_type.generic_parameters,
        });
    }

    tracing::debug!(assembly = %assembly, types = types.len(), "parsed manifest");
    Ok(AssemblyMetadata { assembly, types })
}

/// Compilers name closures, iterators and anonymous types with characters
/// that are not legal in source identifiers (`<>c__DisplayClass1`, `$Proxy`).
pub fn looks_compiler_generated(name: &str) -> bool {
    name.contains('<') || name.contains('$')
}
