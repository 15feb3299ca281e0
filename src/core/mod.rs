pub mod checks;
pub mod engine;
pub mod loader;

pub use crate::domain::expectations::Expectations;
pub use crate::domain::findings::{CheckKind, CheckReport, Finding, FindingCategory};
pub use crate::domain::model::{Dataset, PlayerPool, TeamSet};
pub use crate::domain::ports::Check;
pub use crate::utils::error::Result;
