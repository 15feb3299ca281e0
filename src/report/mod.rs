pub mod csv_export;
pub mod json;
pub mod text;

use crate::config::settings::ReportSettings;
use crate::core::engine::VerificationSummary;
use crate::utils::error::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

/// Renders the summary for stdout in the requested format.
pub fn render(
    summary: &VerificationSummary,
    format: ReportFormat,
    settings: &ReportSettings,
) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(text::render_text(summary, settings)),
        ReportFormat::Json => json::render_json(summary),
    }
}
