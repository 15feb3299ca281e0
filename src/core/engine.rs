use crate::core::checks::standard_checks;
use crate::domain::expectations::Expectations;
use crate::domain::findings::CheckReport;
use crate::domain::model::Dataset;
use crate::domain::ports::Check;
use serde::Serialize;

/// Combined result of one verification run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationSummary {
    pub total_players: usize,
    pub total_teams: usize,
    pub reports: Vec<CheckReport>,
}

impl VerificationSummary {
    /// True only if every check passed.
    pub fn passed(&self) -> bool {
        self.reports.iter().all(|r| r.passed)
    }

    pub fn passed_count(&self) -> usize {
        self.reports.iter().filter(|r| r.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.total_checks() - self.passed_count()
    }

    pub fn total_checks(&self) -> usize {
        self.reports.len()
    }

    pub fn total_findings(&self) -> usize {
        self.reports.iter().map(|r| r.findings.len()).sum()
    }
}

pub struct IntegrityEngine {
    checks: Vec<Box<dyn Check>>,
    expectations: Expectations,
}

impl IntegrityEngine {
    pub fn new(expectations: Expectations) -> Self {
        Self::with_checks(standard_checks(), expectations)
    }

    pub fn with_checks(checks: Vec<Box<dyn Check>>, expectations: Expectations) -> Self {
        Self {
            checks,
            expectations,
        }
    }

    /// Runs every check in order. A failing check never stops the later ones.
    pub fn run(&self, dataset: &Dataset) -> VerificationSummary {
        tracing::info!(
            "Running {} integrity checks on {} players and {} teams",
            self.checks.len(),
            dataset.players.len(),
            dataset.teams.len()
        );

        let reports: Vec<CheckReport> = self
            .checks
            .iter()
            .map(|check| {
                let report = check.run(dataset, &self.expectations);
                if report.passed {
                    tracing::info!("✅ {:?} passed", check.kind());
                } else {
                    tracing::warn!(
                        "🚨 {:?} failed with {} findings",
                        check.kind(),
                        report.findings.len()
                    );
                }
                report
            })
            .collect();

        let summary = VerificationSummary {
            total_players: dataset.players.len(),
            total_teams: dataset.teams.len(),
            reports,
        };

        tracing::debug!(
            "Verification finished: {}/{} checks passed, {} findings",
            summary.passed_count(),
            summary.total_checks(),
            summary.total_findings()
        );

        summary
    }
}

impl Default for IntegrityEngine {
    fn default() -> Self {
        Self::new(Expectations::default())
    }
}
