use crate::domain::expectations::{Expectations, REQUIRED_PLAYER_FIELDS, REQUIRED_TEAM_FIELDS};
use crate::domain::findings::{CheckKind, CheckReport, Finding, Statistic};
use crate::domain::model::{Dataset, FieldDefect, PlayerField, PlayerPool, TeamField, TeamSet};
use crate::domain::ports::Check;

/// Required fields must be present and non-empty on every record.
///
/// Absence is always a defect here. Only fields for which
/// [`PlayerField::allows_empty`] holds may be null or "".
pub fn verify_data_structure(
    players: &PlayerPool,
    teams: &TeamSet,
    player_fields: &[PlayerField],
    team_fields: &[TeamField],
) -> CheckReport {
    let mut findings = Vec::new();

    for tier in &players.tiers {
        for (index, player) in tier.players.iter().enumerate() {
            for &field in player_fields {
                match player.field_defect(field) {
                    Some(FieldDefect::Empty) if field.allows_empty() => {}
                    Some(defect) => findings.push(Finding::PlayerField {
                        tier: tier.name.clone(),
                        index,
                        field: field.name(),
                        defect,
                    }),
                    None => {}
                }
            }
        }
    }

    for team in teams.iter() {
        for &field in team_fields {
            if let Some(defect) = team.field_defect(field) {
                findings.push(Finding::TeamField {
                    team: team.key.clone(),
                    field: field.name(),
                    defect,
                });
            }
        }
    }

    let statistics = vec![
        Statistic::new("Player records checked", players.len()),
        Statistic::new("Team records checked", teams.len()),
        Statistic::new(
            "Required fields (player/team)",
            format!("{}/{}", player_fields.len(), team_fields.len()),
        ),
    ];

    CheckReport::new(CheckKind::DataStructure, statistics, findings)
}

pub struct DataStructureCheck;

impl Check for DataStructureCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::DataStructure
    }

    fn run(&self, dataset: &Dataset, _expectations: &Expectations) -> CheckReport {
        verify_data_structure(
            &dataset.players,
            &dataset.teams,
            &REQUIRED_PLAYER_FIELDS,
            &REQUIRED_TEAM_FIELDS,
        )
    }
}
