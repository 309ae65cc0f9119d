use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How bad a finding is. Ordered `Low < Medium < High < Critical`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = AffixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            _ => Err(AffixError::UnknownSeverity(s.to_string())),
        }
    }
}

/// How sure the rule is that a finding is real. Ordered `Low < Normal < High < Total`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    #[default]
    Low,
    Normal,
    High,
    Total,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Normal => "normal",
            Confidence::High => "high",
            Confidence::Total => "total",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = AffixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Confidence::Low),
            "normal" => Ok(Confidence::Normal),
            "high" => Ok(Confidence::High),
            "total" => Ok(Confidence::Total),
            _ => Err(AffixError::UnknownConfidence(s.to_string())),
        }
    }
}

/// A generic type parameter declared on a type (`T`, `TKey`).
///
/// Serialized as a bare string so manifests can list `["TKey", "TValue"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenericParameterDescriptor {
    pub name: String,
}

impl GenericParameterDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A type or interface declaration read from compiled metadata.
///
/// `name` is the simple identifier without namespace or arity suffix.
/// `generic_parameters` keeps declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default)]
    pub is_interface: bool,
    #[serde(default)]
    pub is_compiler_generated: bool,
    #[serde(default)]
    pub generic_parameters: Vec<GenericParameterDescriptor>,
}

impl TypeDescriptor {
    /// A non-interface type with no generic parameters.
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            is_interface: false,
            is_compiler_generated: false,
            generic_parameters: Vec::new(),
        }
    }

    /// An interface with no generic parameters.
    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            is_interface: true,
            ..Self::class(name)
        }
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_generic_parameters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.generic_parameters = names
            .into_iter()
            .map(GenericParameterDescriptor::new)
            .collect();
        self
    }

    pub fn compiler_generated(mut self) -> Self {
        self.is_compiler_generated = true;
        self
    }

    /// `Namespace.Name`, or just `Name` for the global namespace.
    pub fn full_name(&self) -> String {
        match self.namespace.as_deref() {
            Some(ns) if !ns.is_empty() => format!("{}.{}", ns, self.name),
            _ => self.name.clone(),
        }
    }
}

/// All types read from one analyzed binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyMetadata {
    pub assembly: String,
    pub types: Vec<TypeDescriptor>,
}

/// What a finding is about: a type, or one generic parameter of a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_parameter: Option<String>,
}

impl Subject {
    pub fn of_type(ty: &TypeDescriptor) -> Self {
        Self {
            type_name: ty.name.clone(),
            namespace: ty.namespace.clone(),
            generic_parameter: None,
        }
    }

    pub fn of_generic_parameter(ty: &TypeDescriptor, param: &GenericParameterDescriptor) -> Self {
        Self {
            generic_parameter: Some(param.name.clone()),
            ..Self::of_type(ty)
        }
    }

    /// `Namespace.Type` or `Namespace.Type<Param>`.
    pub fn display_name(&self) -> String {
        let base = match self.namespace.as_deref() {
            Some(ns) if !ns.is_empty() => format!("{}.{}", ns, self.type_name),
            _ => self.type_name.clone(),
        };
        match &self.generic_parameter {
            Some(param) => format!("{}<{}>", base, param),
            None => base,
        }
    }
}

/// A naming violation reported by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub code: String,
    pub rule: String,
    pub severity: Severity,
    pub confidence: Confidence,
    pub message: String,
    pub subject: Subject,
    pub fix_hint: Option<String>,
    pub suppressed: bool,
    pub suppress_hint: Option<String>,
}

/// Result of evaluating one type against one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The type was excluded from analysis (e.g. compiler generated).
    NotApplicable,
    /// The type was analyzed and nothing was found.
    Success,
    /// The type was analyzed and produced at least one finding.
    Findings(Vec<Finding>),
}

impl CheckOutcome {
    /// `Success` for an empty list, `Findings` otherwise.
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        if findings.is_empty() {
            CheckOutcome::Success
        } else {
            CheckOutcome::Findings(findings)
        }
    }

    pub fn is_applicable(&self) -> bool {
        !matches!(self, CheckOutcome::NotApplicable)
    }

    pub fn findings(&self) -> &[Finding] {
        match self {
            CheckOutcome::Findings(findings) => findings,
            _ => &[],
        }
    }

    pub fn into_findings(self) -> Vec<Finding> {
        match self {
            CheckOutcome::Findings(findings) => findings,
            _ => Vec::new(),
        }
    }
}

/// Errors raised while loading metadata or configuration.
#[derive(Debug, thiserror::Error)]
pub enum AffixError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid manifest {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid manifest {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },

    #[error("unknown severity '{0}' (expected low, medium, high or critical)")]
    UnknownSeverity(String),

    #[error("unknown confidence '{0}' (expected low, normal, high or total)")]
    UnknownConfidence(String),
}
