use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid settings file {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Report error: {message}")]
    Report { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Load,
    Configuration,
    Reporting,
}

impl VerifyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            VerifyError::Io { .. } | VerifyError::Parse { .. } => ErrorCategory::Load,
            VerifyError::ConfigParse { .. } | VerifyError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            VerifyError::Csv(_) | VerifyError::Serialization(_) | VerifyError::Report { .. } => {
                ErrorCategory::Reporting
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Load => format!("Failed to load data: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Reporting => format!("Failed to write report: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            VerifyError::Io { .. } => "Check that the file exists and is readable, or pass --players/--teams",
            VerifyError::Parse { .. } => "Fix the JSON document at the reported line and column",
            VerifyError::ConfigParse { .. } => "Make sure the settings file is valid TOML",
            VerifyError::InvalidConfigValue { .. } => "Correct the reported setting or remove it to use the default",
            VerifyError::Csv(_) | VerifyError::Report { .. } => "Check that the export path is writable",
            VerifyError::Serialization(_) => "Re-run with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, VerifyError>;
