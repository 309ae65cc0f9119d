use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "affix",
    version,
    about = "Naming-prefix checks for types, interfaces and generic parameters"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug details to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Check type manifests for naming-prefix violations
    Check {
        /// Manifest files or directories containing manifests
        #[arg(required = true)]
        manifests: Vec<PathBuf>,
        /// Only report findings at or above this severity (low, medium, high, critical)
        #[arg(long)]
        severity: Option<String>,
        /// Only report findings at or above this confidence (low, normal, high, total)
        #[arg(long)]
        confidence: Option<String>,
        /// Suppress a finding code or rule id (repeatable)
        #[arg(long)]
        suppress: Vec<String>,
        /// Evaluate types on a single thread
        #[arg(long)]
        sequential: bool,
    },

    /// List registered rules
    Rules,

    /// Describe a finding code
    Explain {
        /// Finding code (e.g., N001)
        code: String,
    },

    /// Generate shell completions
    Completion {
        /// Shell (bash, zsh, fish, elvish, powershell)
        shell: String,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
