use super::model::FieldDefect;
use serde::Serialize;
use std::fmt;

/// The six integrity checks, in the order the engine runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    DuplicateNames,
    PlayerIds,
    CrossReference,
    PositionDistribution,
    DataStructure,
    GameBreaking,
}

impl CheckKind {
    pub const ALL: [CheckKind; 6] = [
        CheckKind::DuplicateNames,
        CheckKind::PlayerIds,
        CheckKind::CrossReference,
        CheckKind::PositionDistribution,
        CheckKind::DataStructure,
        CheckKind::GameBreaking,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CheckKind::DuplicateNames => "ZERO DUPLICATE NAMES VERIFICATION",
            CheckKind::PlayerIds => "PLAYER ID INTEGRITY VERIFICATION",
            CheckKind::CrossReference => "TEAM-PLAYER CROSS-REFERENCE VERIFICATION",
            CheckKind::PositionDistribution => "POSITION DISTRIBUTION VERIFICATION",
            CheckKind::DataStructure => "DATA STRUCTURE VALIDATION",
            CheckKind::GameBreaking => "GAME-BREAKING ISSUES CHECK",
        }
    }

    /// Finding categories this check can emit, in report order.
    pub fn categories(self) -> &'static [FindingCategory] {
        use FindingCategory as C;
        match self {
            CheckKind::DuplicateNames => &[C::DuplicateName],
            CheckKind::PlayerIds => &[C::DuplicateId, C::MissingId, C::UnexpectedId],
            CheckKind::CrossReference => &[C::InvalidReference, C::RosterSize, C::RosterDuplicates],
            CheckKind::PositionDistribution => &[C::GoalkeeperQuota, C::GoalkeeperShare],
            CheckKind::DataStructure => &[C::PlayerData, C::TeamData],
            CheckKind::GameBreaking => &[C::GameBreaking],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    DuplicateName,
    DuplicateId,
    MissingId,
    UnexpectedId,
    InvalidReference,
    RosterSize,
    RosterDuplicates,
    GoalkeeperQuota,
    GoalkeeperShare,
    PlayerData,
    TeamData,
    GameBreaking,
}

impl FindingCategory {
    pub fn heading(self) -> &'static str {
        match self {
            FindingCategory::DuplicateName => "DUPLICATE NAMES FOUND",
            FindingCategory::DuplicateId => "DUPLICATE IDs FOUND",
            FindingCategory::MissingId => "MISSING IDs",
            FindingCategory::UnexpectedId => "UNEXPECTED IDs",
            FindingCategory::InvalidReference => "INVALID PLAYER REFERENCES",
            FindingCategory::RosterSize => "ROSTER SIZE ISSUES",
            FindingCategory::RosterDuplicates => "DUPLICATE PLAYERS IN TEAMS",
            FindingCategory::GoalkeeperQuota => "GOALKEEPER DISTRIBUTION ISSUES",
            FindingCategory::GoalkeeperShare => "GOALKEEPER PERCENTAGE OUT OF RANGE",
            FindingCategory::PlayerData => "PLAYER DATA ISSUES",
            FindingCategory::TeamData => "TEAM DATA ISSUES",
            FindingCategory::GameBreaking => "GAME-BREAKING ISSUES FOUND",
        }
    }

    pub fn all_clear(self) -> &'static str {
        match self {
            FindingCategory::DuplicateName => "No duplicates found - all names are unique",
            FindingCategory::DuplicateId => "No duplicate player IDs",
            FindingCategory::MissingId => "No missing player IDs",
            FindingCategory::UnexpectedId => "No unexpected player IDs",
            FindingCategory::InvalidReference => "All player references are valid",
            FindingCategory::RosterSize => "All teams have the expected roster size",
            FindingCategory::RosterDuplicates => "No duplicate players within teams",
            FindingCategory::GoalkeeperQuota => "All teams meet the goalkeeper quota",
            FindingCategory::GoalkeeperShare => "Goalkeeper percentage within target range",
            FindingCategory::PlayerData => "All player data structures are valid",
            FindingCategory::TeamData => "All team data structures are valid",
            FindingCategory::GameBreaking => "No game-breaking issues found",
        }
    }
}

/// One integrity violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    DuplicateName { name: String, player_ids: Vec<String> },
    DuplicateId { player_id: String, occurrences: usize },
    MissingId { player_id: String },
    UnexpectedId { player_id: String },
    InvalidReference { team: String, player_id: String },
    RosterSize { team: String, size: usize, expected: usize },
    RosterDuplicates { team: String, duplicates: usize },
    GoalkeeperQuota { team: String, goalkeepers: usize, min: usize, max: usize },
    GoalkeeperShare { percent: f64, target: f64, tolerance: f64 },
    PlayerField { tier: String, index: usize, field: &'static str, defect: FieldDefect },
    TeamField { team: String, field: &'static str, defect: FieldDefect },
    InvalidStrength { player_id: String, value: Option<f64> },
    InvalidForm { player_id: String, value: i64 },
    InvalidKondition { player_id: String, value: f64 },
    InvalidMorale { team: String, value: i64 },
}

impl Finding {
    pub fn category(&self) -> FindingCategory {
        match self {
            Finding::DuplicateName { .. } => FindingCategory::DuplicateName,
            Finding::DuplicateId { .. } => FindingCategory::DuplicateId,
            Finding::MissingId { .. } => FindingCategory::MissingId,
            Finding::UnexpectedId { .. } => FindingCategory::UnexpectedId,
            Finding::InvalidReference { .. } => FindingCategory::InvalidReference,
            Finding::RosterSize { .. } => FindingCategory::RosterSize,
            Finding::RosterDuplicates { .. } => FindingCategory::RosterDuplicates,
            Finding::GoalkeeperQuota { .. } => FindingCategory::GoalkeeperQuota,
            Finding::GoalkeeperShare { .. } => FindingCategory::GoalkeeperShare,
            Finding::PlayerField { .. } => FindingCategory::PlayerData,
            Finding::TeamField { .. } => FindingCategory::TeamData,
            Finding::InvalidStrength { .. }
            | Finding::InvalidForm { .. }
            | Finding::InvalidKondition { .. }
            | Finding::InvalidMorale { .. } => FindingCategory::GameBreaking,
        }
    }

    /// Entity the finding is about, used as a CSV column.
    pub fn subject(&self) -> String {
        match self {
            Finding::DuplicateName { name, .. } => name.clone(),
            Finding::DuplicateId { player_id, .. }
            | Finding::MissingId { player_id }
            | Finding::UnexpectedId { player_id }
            | Finding::InvalidStrength { player_id, .. }
            | Finding::InvalidForm { player_id, .. }
            | Finding::InvalidKondition { player_id, .. } => player_id.clone(),
            Finding::InvalidReference { team, .. }
            | Finding::RosterSize { team, .. }
            | Finding::RosterDuplicates { team, .. }
            | Finding::GoalkeeperQuota { team, .. }
            | Finding::TeamField { team, .. }
            | Finding::InvalidMorale { team, .. } => team.clone(),
            Finding::GoalkeeperShare { .. } => "player pool".to_string(),
            Finding::PlayerField { tier, index, .. } => format!("{}[{}]", tier, index),
        }
    }
}

fn describe_defect(field: &str, defect: FieldDefect) -> String {
    match defect {
        FieldDefect::Missing => field.to_string(),
        FieldDefect::Empty => format!("{} is empty/null", field),
    }
}

fn show_or_none<T: fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "None".to_string())
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::DuplicateName { name, player_ids } => {
                write!(f, "'{}': [{}]", name, player_ids.join(", "))
            }
            Finding::DuplicateId { player_id, occurrences } => {
                write!(f, "{} (appears {} times)", player_id, occurrences)
            }
            Finding::MissingId { player_id } | Finding::UnexpectedId { player_id } => {
                write!(f, "{}", player_id)
            }
            Finding::InvalidReference { team, player_id } => {
                write!(f, "Team {}: player {} doesn't exist", team, player_id)
            }
            Finding::RosterSize { team, size, expected } => {
                write!(f, "Team {}: {} players (expected {})", team, size, expected)
            }
            Finding::RosterDuplicates { team, duplicates } => {
                write!(f, "Team {}: {} duplicate players", team, duplicates)
            }
            Finding::GoalkeeperQuota { team, goalkeepers, min, max } => write!(
                f,
                "Team {}: {} goalkeepers (expected {}-{})",
                team, goalkeepers, min, max
            ),
            Finding::GoalkeeperShare { percent, target, tolerance } => write!(
                f,
                "Goalkeeper percentage {:.1}% deviates from {:.1}% target by more than {:.1} points",
                percent, target, tolerance
            ),
            Finding::PlayerField { tier, index, field, defect } => {
                write!(f, "Tier {}, Player {}: {}", tier, index, describe_defect(field, *defect))
            }
            Finding::TeamField { team, field, defect } => {
                write!(f, "Team {}: {}", team, describe_defect(field, *defect))
            }
            Finding::InvalidStrength { player_id, value } => write!(
                f,
                "Player {} has invalid strength: {}",
                player_id,
                show_or_none(*value)
            ),
            Finding::InvalidForm { player_id, value } => {
                write!(f, "Player {} has invalid form: {}", player_id, value)
            }
            Finding::InvalidKondition { player_id, value } => {
                write!(f, "Player {} has invalid kondition: {}", player_id, value)
            }
            Finding::InvalidMorale { team, value } => {
                write!(f, "Team {} has invalid morale: {}", team, value)
            }
        }
    }
}

/// A labelled figure printed ahead of a check's findings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistic {
    pub label: String,
    pub value: String,
}

impl Statistic {
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
        }
    }
}

/// Outcome of one check: verdict, context figures and every finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub check: CheckKind,
    pub passed: bool,
    pub statistics: Vec<Statistic>,
    pub findings: Vec<Finding>,
}

impl CheckReport {
    pub fn new(check: CheckKind, statistics: Vec<Statistic>, findings: Vec<Finding>) -> Self {
        Self {
            check,
            passed: findings.is_empty(),
            statistics,
            findings,
        }
    }

    pub fn findings_in(&self, category: FindingCategory) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.category() == category)
    }
}
