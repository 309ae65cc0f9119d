use affix_core::types::{Confidence, Finding, Severity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "defects"
    pub assemblies: Vec<AssemblyReport>,
    pub summary: RunSummary,
}

impl RunReport {
    /// True when at least one unsuppressed finding survived filtering.
    pub fn has_defects(&self) -> bool {
        self.summary.defects > 0
    }

    /// All findings across assemblies, paired with the assembly they came from.
    pub fn findings(&self) -> impl Iterator<Item = (&str, &Finding)> {
        self.assemblies
            .iter()
            .flat_map(|a| a.findings.iter().map(move |f| (a.assembly.as_str(), f)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyReport {
    pub assembly: String,
    pub types_analyzed: u32,
    pub types_not_applicable: u32,
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub assemblies: u32,
    pub types_analyzed: u32,
    pub types_not_applicable: u32,
    /// Findings that count against the run (not suppressed).
    pub defects: u32,
    pub suppressed: u32,
    pub by_severity: SeverityCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
    pub critical: u32,
}

impl SeverityCounts {
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Low => self.low += 1,
            Severity::Medium => self.medium += 1,
            Severity::High => self.high += 1,
            Severity::Critical => self.critical += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainResult {
    pub version: String,
    pub command: String,
    pub code: String,
    pub rule: String,
    pub title: String,
    pub severity: Severity,
    pub confidence: Confidence,
    pub problem: String,
    pub solution: String,
    pub bad_example: String,
    pub good_example: String,
}
