//! Configuration file loading for affix.
//!
//! Reads `.affix/affix.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{Confidence, Severity};

/// Top-level affix configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffixConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    /// Finding codes or rule ids to suppress (e.g. `"N002"`).
    #[serde(default)]
    pub suppress: Vec<String>,
    #[serde(default = "default_true")]
    pub parallel: bool,
}

/// Rule selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub disabled: Vec<String>,
}

/// Minimum severity and confidence a finding needs to be reported.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub min_severity: Severity,
    #[serde(default)]
    pub min_confidence: Confidence,
}

fn default_version() -> String {
    "0.1.0".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for AffixConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            rules: RulesConfig::default(),
            filter: FilterConfig::default(),
            suppress: vec![],
            parallel: true,
        }
    }
}

impl AffixConfig {
    /// Load configuration from `affix.json` inside the given `.affix` directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(affix_dir: &Path) -> Self {
        let config_path = affix_dir.join("affix.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => {
                tracing::debug!(path = %config_path.display(), "loaded config");
                cfg
            }
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Self::default()
            }
        }
    }
}
