use std::path::PathBuf;

use affix_core::config::AffixConfig;
use affix_core::manifest::{ManifestProvider, MetadataProvider};
use affix_core::types::{AffixError, Confidence, Severity};
use affix_enforce::registry::RuleRegistry;
use affix_enforce::runner::RuleRunner;
use affix_output::OutputFormatter;

use crate::commands::{emit, EXIT_DEFECTS, EXIT_ERROR, EXIT_OK};

pub struct CheckArgs {
    pub manifests: Vec<PathBuf>,
    pub severity: Option<String>,
    pub confidence: Option<String>,
    pub suppress: Vec<String>,
    pub sequential: bool,
}

/// Run `affix check` — evaluate every type in the given manifests.
pub fn run(formatter: &dyn OutputFormatter, args: CheckArgs) -> i32 {
    match check(formatter, args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("affix check: {}", e);
            EXIT_ERROR
        }
    }
}

fn check(formatter: &dyn OutputFormatter, args: CheckArgs) -> Result<i32, AffixError> {
    let config = match std::env::current_dir() {
        Ok(cwd) => AffixConfig::load(&cwd.join(".affix")),
        Err(e) => {
            tracing::warn!(error = %e, "cannot resolve current directory, using default config");
            AffixConfig::default()
        }
    };

    let mut runner = RuleRunner::with_config(RuleRegistry::builtin(), &config);
    if let Some(severity) = &args.severity {
        runner.set_min_severity(severity.parse::<Severity>()?);
    }
    if let Some(confidence) = &args.confidence {
        runner.set_min_confidence(confidence.parse::<Confidence>()?);
    }
    for key in &args.suppress {
        runner.suppress(key);
    }
    if args.sequential {
        runner.set_parallel(false);
    }

    let provider = ManifestProvider::from_paths(&args.manifests)?;
    tracing::debug!(files = provider.files().len(), "loading manifests");
    let assemblies = provider.load()?;

    let report = runner.run(&assemblies);
    emit(&formatter.format_report(&report));

    Ok(if report.has_defects() {
        EXIT_DEFECTS
    } else {
        EXIT_OK
    })
}
