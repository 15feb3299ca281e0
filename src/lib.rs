pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::VerifySettings;
pub use crate::core::engine::{IntegrityEngine, VerificationSummary};
pub use crate::core::loader::load_dataset;
pub use domain::expectations::Expectations;
pub use domain::findings::{CheckKind, CheckReport, Finding};
pub use domain::model::{Dataset, Player, PlayerPool, Team, TeamSet};
pub use utils::error::{Result, VerifyError};
