use affix_core::config::AffixConfig;
use affix_core::types::{AssemblyMetadata, Confidence, Finding, Severity, TypeDescriptor};
use rayon::prelude::*;

use crate::registry::RuleRegistry;
use crate::suppress::SuppressionManager;
use crate::types::{AssemblyReport, RunReport, RunSummary};

/// Per-type result of running every registered rule.
struct TypeResult {
    applicable: bool,
    findings: Vec<Finding>,
}

/// Runs the registered rules over analyzed metadata and aggregates findings.
pub struct RuleRunner {
    pub(crate) registry: RuleRegistry,
    pub(crate) suppressions: SuppressionManager,
    pub(crate) min_severity: Severity,
    pub(crate) min_confidence: Confidence,
    pub(crate) parallel: bool,
}

impl RuleRunner {
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry,
            suppressions: SuppressionManager::new(),
            min_severity: Severity::Low,
            min_confidence: Confidence::Low,
            parallel: true,
        }
    }

    /// Create a runner configured from an `AffixConfig`.
    pub fn with_config(mut registry: RuleRegistry, config: &AffixConfig) -> Self {
        for id in &config.rules.disabled {
            if !registry.disable(id) {
                tracing::warn!(rule = %id, "cannot disable unknown rule");
            }
        }
        let mut runner = Self::new(registry);
        for key in &config.suppress {
            runner.suppress(key);
        }
        runner.min_severity = config.filter.min_severity;
        runner.min_confidence = config.filter.min_confidence;
        runner.parallel = config.parallel;
        runner
    }

    /// Suppress a finding code or rule id for this run.
    pub fn suppress(&mut self, key: &str) {
        self.suppressions.suppress(key);
    }

    pub fn set_min_severity(&mut self, severity: Severity) {
        self.min_severity = severity;
    }

    pub fn set_min_confidence(&mut self, confidence: Confidence) {
        self.min_confidence = confidence;
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Evaluate every type of every assembly. Output order follows input
    /// order regardless of parallelism.
    pub fn run(&self, assemblies: &[AssemblyMetadata]) -> RunReport {
        let reports: Vec<AssemblyReport> =
            assemblies.iter().map(|a| self.run_assembly(a)).collect();

        let mut summary = RunSummary {
            assemblies: reports.len() as u32,
            ..RunSummary::default()
        };
        for report in &reports {
            summary.types_analyzed += report.types_analyzed;
            summary.types_not_applicable += report.types_not_applicable;
            for f in &report.findings {
                if f.suppressed {
                    summary.suppressed += 1;
                } else {
                    summary.defects += 1;
                    summary.by_severity.record(f.severity);
                }
            }
        }

        tracing::debug!(
            defects = summary.defects,
            suppressed = summary.suppressed,
            suppressions = self.suppressions.count(),
            "run finished"
        );

        let status = if summary.defects > 0 { "defects" } else { "ok" };
        RunReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "check".to_string(),
            status: status.to_string(),
            assemblies: reports,
            summary,
        }
    }

    fn run_assembly(&self, assembly: &AssemblyMetadata) -> AssemblyReport {
        let results: Vec<TypeResult> = if self.parallel {
            assembly
                .types
                .par_iter()
                .map(|ty| self.evaluate_type(ty))
                .collect()
        } else {
            assembly
                .types
                .iter()
                .map(|ty| self.evaluate_type(ty))
                .collect()
        };

        let mut report = AssemblyReport {
            assembly: assembly.assembly.clone(),
            types_analyzed: 0,
            types_not_applicable: 0,
            findings: Vec::new(),
        };
        for result in results {
            if result.applicable {
                report.types_analyzed += 1;
            } else {
                report.types_not_applicable += 1;
            }
            report.findings.extend(result.findings);
        }

        tracing::debug!(
            assembly = %report.assembly,
            analyzed = report.types_analyzed,
            not_applicable = report.types_not_applicable,
            findings = report.findings.len(),
            "assembly checked"
        );
        report
    }

    fn evaluate_type(&self, ty: &TypeDescriptor) -> TypeResult {
        let mut applicable = false;
        let mut findings = Vec::new();
        for rule in self.registry.rules() {
            let outcome = rule.evaluate(ty);
            applicable |= outcome.is_applicable();
            findings.extend(
                outcome
                    .into_findings()
                    .into_iter()
                    .map(|f| self.suppressions.apply(f))
                    .filter(|f| self.passes_filter(f)),
            );
        }
        TypeResult {
            applicable,
            findings,
        }
    }

    fn passes_filter(&self, finding: &Finding) -> bool {
        finding.severity >= self.min_severity && finding.confidence >= self.min_confidence
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
