use crate::core::engine::VerificationSummary;
use crate::domain::findings::CheckReport;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub passed: bool,
    pub passed_checks: usize,
    pub failed_checks: usize,
    pub total_players: usize,
    pub total_teams: usize,
    pub total_findings: usize,
    pub checks: &'a [CheckReport],
}

impl<'a> JsonReport<'a> {
    pub fn new(summary: &'a VerificationSummary) -> Self {
        Self {
            generated_at: Utc::now(),
            passed: summary.passed(),
            passed_checks: summary.passed_count(),
            failed_checks: summary.failed_count(),
            total_players: summary.total_players,
            total_teams: summary.total_teams,
            total_findings: summary.total_findings(),
            checks: &summary.reports,
        }
    }
}

/// Machine-readable report carrying every finding, not just a sample.
pub fn render_json(summary: &VerificationSummary) -> Result<String> {
    let report = JsonReport::new(summary);
    Ok(serde_json::to_string_pretty(&report)?)
}
