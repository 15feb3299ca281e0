use crate::domain::expectations::Expectations;
use crate::domain::findings::{CheckKind, CheckReport, Finding, Statistic};
use crate::domain::model::{Dataset, Player, PlayerPool};
use crate::domain::ports::Check;
use std::collections::{BTreeSet, HashMap};

/// IDs must be unique and form exactly the expected sequence.
///
/// Duplicates are listed in encounter order, missing and unexpected IDs
/// sorted. Players without an ID are left to the structure check.
pub fn verify_player_ids(players: &PlayerPool, expectations: &Expectations) -> CheckReport {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut encounter_order: Vec<&str> = Vec::new();

    for id in players.players().filter_map(Player::id) {
        let count = counts.entry(id).or_insert(0);
        if *count == 0 {
            encounter_order.push(id);
        }
        *count += 1;
    }

    let observed: BTreeSet<&str> = encounter_order.iter().copied().collect();
    let expected = expectations.expected_ids();

    let mut findings: Vec<Finding> = encounter_order
        .iter()
        .filter(|id| counts[**id] > 1)
        .map(|id| Finding::DuplicateId {
            player_id: id.to_string(),
            occurrences: counts[*id],
        })
        .collect();

    findings.extend(
        expected
            .iter()
            .filter(|id| !observed.contains(id.as_str()))
            .map(|id| Finding::MissingId {
                player_id: id.clone(),
            }),
    );

    findings.extend(
        observed
            .iter()
            .filter(|id| !expected.contains(**id))
            .map(|id| Finding::UnexpectedId {
                player_id: id.to_string(),
            }),
    );

    let statistics = vec![
        Statistic::new("Total players", players.len()),
        Statistic::new("Unique player IDs", observed.len()),
        Statistic::new(
            "Expected range",
            format!(
                "{} to {} ({} IDs)",
                expectations.first_id(),
                expectations.last_id(),
                expected.len()
            ),
        ),
    ];

    CheckReport::new(CheckKind::PlayerIds, statistics, findings)
}

pub struct PlayerIdsCheck;

impl Check for PlayerIdsCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::PlayerIds
    }

    fn run(&self, dataset: &Dataset, expectations: &Expectations) -> CheckReport {
        verify_player_ids(&dataset.players, expectations)
    }
}
