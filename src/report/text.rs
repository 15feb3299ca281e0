use crate::config::settings::ReportSettings;
use crate::core::engine::VerificationSummary;
use crate::domain::findings::{CheckReport, FindingCategory};
use std::fmt;

const RULE: &str = "============================================================";

fn sample_limit(category: FindingCategory, settings: &ReportSettings) -> Option<usize> {
    match category {
        // 重複姓名全部列出
        FindingCategory::DuplicateName => None,
        FindingCategory::GameBreaking => Some(settings.game_breaking_sample_limit),
        _ => Some(settings.sample_limit),
    }
}

/// Human-readable report: banner, one section per check, final tally.
pub struct TextReport<'a> {
    summary: &'a VerificationSummary,
    settings: &'a ReportSettings,
}

impl<'a> TextReport<'a> {
    pub fn new(summary: &'a VerificationSummary, settings: &'a ReportSettings) -> Self {
        Self { summary, settings }
    }

    fn write_section(&self, f: &mut fmt::Formatter<'_>, number: usize, report: &CheckReport) -> fmt::Result {
        writeln!(f, "\n{}", RULE)?;
        writeln!(f, "{}. {}", number, report.check.title())?;
        writeln!(f, "{}", RULE)?;

        for stat in &report.statistics {
            writeln!(f, "{}: {}", stat.label, stat.value)?;
        }

        for &category in report.check.categories() {
            let findings: Vec<_> = report.findings_in(category).collect();
            if findings.is_empty() {
                writeln!(f, "✅ {}", category.all_clear())?;
                continue;
            }

            writeln!(f, "\n🚨 {}: {}", category.heading(), findings.len())?;
            let shown = sample_limit(category, self.settings).unwrap_or(findings.len());
            for finding in findings.iter().take(shown) {
                writeln!(f, "  - {}", finding)?;
            }
            if findings.len() > shown {
                writeln!(f, "  ... and {} more", findings.len() - shown)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;
        writeln!(f, "COMPREHENSIVE DATABASE INTEGRITY VERIFICATION")?;
        writeln!(f, "{}", RULE)?;
        writeln!(
            f,
            "Loaded {} players and {} teams",
            summary.total_players, summary.total_teams
        )?;

        for (i, report) in summary.reports.iter().enumerate() {
            self.write_section(f, i + 1, report)?;
        }

        writeln!(f, "\n{}", RULE)?;
        writeln!(f, "FINAL VERIFICATION SUMMARY")?;
        writeln!(f, "{}", RULE)?;

        if summary.passed() {
            writeln!(f, "🎉 ALL CHECKS PASSED! Database is fully verified and ready for use.")?;
            writeln!(
                f,
                "✅ {}/{} verification checks successful",
                summary.passed_count(),
                summary.total_checks()
            )
        } else {
            writeln!(
                f,
                "🚨 {}/{} verification checks failed",
                summary.failed_count(),
                summary.total_checks()
            )?;
            writeln!(f, "⚠️  Database has issues that need to be resolved")
        }
    }
}

pub fn render_text(summary: &VerificationSummary, settings: &ReportSettings) -> String {
    TextReport::new(summary, settings).to_string()
}
