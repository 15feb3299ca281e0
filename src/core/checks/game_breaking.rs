use crate::domain::expectations::Expectations;
use crate::domain::findings::{CheckKind, CheckReport, Finding, Statistic};
use crate::domain::model::{Dataset, PlayerPool, TeamSet};
use crate::domain::ports::Check;

// Values the match simulation assumes when a field is missing.
const DEFAULT_STRENGTH: f64 = 0.0;
const DEFAULT_FORM: i64 = 10;
const DEFAULT_KONDITION: f64 = 100.0;
const DEFAULT_MORALE: i64 = 3;

/// Values that would trip the simulation's runtime assertions.
///
/// Missing or empty fields read as the simulation defaults instead of being
/// reported; the structure check owns absence. The strength default of 0 is
/// itself out of range, so a player without a strength is still flagged.
pub fn check_game_breaking_issues(
    players: &PlayerPool,
    teams: &TeamSet,
    expectations: &Expectations,
) -> CheckReport {
    let mut findings = Vec::new();

    for player in players.players() {
        let player_id = player.id_label();

        let strength = player.strength_overall_base.value_or(DEFAULT_STRENGTH);
        if strength <= 0.0 {
            findings.push(Finding::InvalidStrength {
                player_id: player_id.to_string(),
                value: player.strength_overall_base.present().copied(),
            });
        }

        let form = player.current_form.value_or(DEFAULT_FORM);
        if form < expectations.form_min || form > expectations.form_max {
            findings.push(Finding::InvalidForm {
                player_id: player_id.to_string(),
                value: form,
            });
        }

        let kondition = player.kondition_basis.value_or(DEFAULT_KONDITION);
        if kondition < expectations.kondition_min || kondition > expectations.kondition_max {
            findings.push(Finding::InvalidKondition {
                player_id: player_id.to_string(),
                value: kondition,
            });
        }
    }

    for team in teams.iter() {
        let morale = team.morale.value_or(DEFAULT_MORALE);
        if morale < expectations.morale_min || morale > expectations.morale_max {
            findings.push(Finding::InvalidMorale {
                team: team.key.clone(),
                value: morale,
            });
        }
    }

    let statistics = vec![
        Statistic::new("Players scanned", players.len()),
        Statistic::new("Teams scanned", teams.len()),
    ];

    CheckReport::new(CheckKind::GameBreaking, statistics, findings)
}

pub struct GameBreakingCheck;

impl Check for GameBreakingCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::GameBreaking
    }

    fn run(&self, dataset: &Dataset, expectations: &Expectations) -> CheckReport {
        check_game_breaking_issues(&dataset.players, &dataset.teams, expectations)
    }
}
