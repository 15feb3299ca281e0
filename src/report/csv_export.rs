use crate::core::engine::VerificationSummary;
use crate::domain::findings::{CheckKind, FindingCategory};
use crate::utils::error::{Result, VerifyError};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct FindingRow {
    check: CheckKind,
    category: FindingCategory,
    subject: String,
    detail: String,
}

/// One row per finding, all checks, no sampling.
pub fn write_findings_csv<W: Write>(writer: W, summary: &VerificationSummary) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut rows = 0;

    for report in &summary.reports {
        for finding in &report.findings {
            csv_writer.serialize(FindingRow {
                check: report.check,
                category: finding.category(),
                subject: finding.subject(),
                detail: finding.to_string(),
            })?;
            rows += 1;
        }
    }

    csv_writer.flush().map_err(|e| VerifyError::Report {
        message: e.to_string(),
    })?;
    Ok(rows)
}

pub fn export_findings_csv(path: &Path, summary: &VerificationSummary) -> Result<usize> {
    let file = std::fs::File::create(path).map_err(|e| VerifyError::Report {
        message: format!("cannot create {}: {}", path.display(), e),
    })?;
    let rows = write_findings_csv(file, summary)?;
    tracing::info!("📁 Wrote {} findings to {}", rows, path.display());
    Ok(rows)
}
