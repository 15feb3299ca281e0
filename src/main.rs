use anyhow::Context;
use clap::Parser;
use squad_integrity::report::{self, csv_export::export_findings_csv};
use squad_integrity::utils::{logger, monitor::SystemMonitor};
use squad_integrity::{load_dataset, CliConfig, IntegrityEngine, VerifyError};
use std::process::ExitCode;

fn report_fatal(e: &VerifyError) -> ExitCode {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    ExitCode::FAILURE
}

fn main() -> anyhow::Result<ExitCode> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting squad-integrity");
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => return Ok(report_fatal(&e)),
    };

    let mut monitor = SystemMonitor::new(config.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 任何載入錯誤都直接結束，不執行檢查
    let dataset = match load_dataset(&settings.data.players, &settings.data.teams) {
        Ok(dataset) => dataset,
        Err(e) => return Ok(report_fatal(&e)),
    };
    monitor.log_stats("Load");

    let engine = IntegrityEngine::new(settings.expectations());
    let summary = engine.run(&dataset);
    monitor.log_stats("Checks");

    let output = report::render(&summary, config.format, &settings.report)
        .context("failed to render verification report")?;
    print!("{}", output);

    if let Some(path) = &config.findings_csv {
        export_findings_csv(path, &summary)
            .with_context(|| format!("failed to export findings to {}", path.display()))?;
    }

    monitor.log_final_stats();

    if summary.passed() {
        tracing::info!("✅ All {} checks passed", summary.total_checks());
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::warn!(
            "🚨 {}/{} checks failed",
            summary.failed_count(),
            summary.total_checks()
        );
        Ok(ExitCode::FAILURE)
    }
}
