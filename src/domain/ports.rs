use crate::domain::expectations::Expectations;
use crate::domain::findings::{CheckKind, CheckReport};
use crate::domain::model::Dataset;

/// A single integrity pass over a loaded dataset.
///
/// Implementations are pure: same dataset and expectations, same report.
pub trait Check {
    fn kind(&self) -> CheckKind;
    fn run(&self, dataset: &Dataset, expectations: &Expectations) -> CheckReport;
}
