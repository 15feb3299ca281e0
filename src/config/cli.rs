use crate::config::settings::VerifySettings;
use crate::report::ReportFormat;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "squad-integrity")]
#[command(about = "Integrity checks for the player pool and team rosters")]
pub struct CliConfig {
    /// Player pool document (overrides the settings file)
    #[arg(long)]
    pub players: Option<PathBuf>,

    /// Team document (overrides the settings file)
    #[arg(long)]
    pub teams: Option<PathBuf>,

    /// Path to TOML settings file
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Also write every finding to this CSV file
    #[arg(long)]
    pub findings_csv: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Log memory usage and timings")]
    pub monitor: bool,
}

impl CliConfig {
    /// Settings file (or defaults) with command-line overrides applied, validated.
    pub fn resolve_settings(&self) -> Result<VerifySettings> {
        let mut settings = match &self.settings {
            Some(path) => {
                tracing::info!("📁 Loading settings from: {}", path.display());
                VerifySettings::from_file(path)?
            }
            None => VerifySettings::default(),
        };

        if let Some(players) = &self.players {
            settings.data.players = players.clone();
        }
        if let Some(teams) = &self.teams {
            settings.data.teams = teams.clone();
        }

        settings.validate()?;
        Ok(settings)
    }
}
