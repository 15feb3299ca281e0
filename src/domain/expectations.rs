use crate::domain::model::{PlayerField, TeamField};
use serde::Serialize;
use std::collections::BTreeSet;

pub const REQUIRED_PLAYER_FIELDS: [PlayerField; 8] = [
    PlayerField::PlayerId,
    PlayerField::FirstName,
    PlayerField::LastName,
    PlayerField::Age,
    PlayerField::PrimaryPosition,
    PlayerField::StrengthOverallBase,
    PlayerField::CurrentForm,
    PlayerField::KonditionBasis,
];

pub const REQUIRED_TEAM_FIELDS: [TeamField; 5] = [
    TeamField::PlayerRoster,
    TeamField::City,
    TeamField::DefaultEinsatz,
    TeamField::DefaultTactic,
    TeamField::Morale,
];

/// Domain constants the checks compare the data against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expectations {
    pub id_prefix: String,
    pub id_width: usize,
    pub id_count: usize,
    pub roster_size: usize,
    pub goalkeeper_position: String,
    pub goalkeepers_min: usize,
    pub goalkeepers_max: usize,
    pub goalkeeper_target_percent: f64,
    pub goalkeeper_tolerance_percent: f64,
    pub form_min: i64,
    pub form_max: i64,
    pub kondition_min: f64,
    pub kondition_max: f64,
    pub morale_min: i64,
    pub morale_max: i64,
}

impl Default for Expectations {
    fn default() -> Self {
        Self {
            id_prefix: "p".to_string(),
            id_width: 4,
            id_count: 8200,
            roster_size: 22,
            goalkeeper_position: "Torwart".to_string(),
            goalkeepers_min: 3,
            goalkeepers_max: 4,
            goalkeeper_target_percent: 6.0,
            goalkeeper_tolerance_percent: 1.0,
            form_min: 0,
            form_max: 20,
            kondition_min: 0.0,
            kondition_max: 100.0,
            morale_min: 0,
            morale_max: 8,
        }
    }
}

impl Expectations {
    pub fn format_id(&self, sequence: usize) -> String {
        format!("{}{:0width$}", self.id_prefix, sequence, width = self.id_width)
    }

    /// `p0001..=p8200` with the default settings.
    pub fn expected_ids(&self) -> BTreeSet<String> {
        (1..=self.id_count).map(|n| self.format_id(n)).collect()
    }

    pub fn first_id(&self) -> String {
        self.format_id(1)
    }

    pub fn last_id(&self) -> String {
        self.format_id(self.id_count)
    }
}
