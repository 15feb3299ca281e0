use crate::domain::expectations::Expectations;
use crate::domain::findings::{CheckKind, CheckReport, Finding, Statistic};
use crate::domain::model::{Dataset, PlayerPool};
use crate::domain::ports::Check;
use std::collections::HashMap;

/// Every "first last" combination must belong to exactly one player.
pub fn verify_duplicate_names(players: &PlayerPool) -> CheckReport {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    // 以 (first, last) 分組；合併字串只用於顯示
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for player in players.players() {
        let slot = *index.entry(player.name_parts()).or_insert_with(|| {
            groups.push((player.full_name(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(player.id_label().to_string());
    }

    let statistics = vec![
        Statistic::new("Total players processed", players.len()),
        Statistic::new("Unique name combinations", groups.len()),
        Statistic::new("Expected unique names", players.len()),
    ];

    let findings = groups
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|(name, player_ids)| Finding::DuplicateName { name, player_ids })
        .collect();

    CheckReport::new(CheckKind::DuplicateNames, statistics, findings)
}

pub struct DuplicateNamesCheck;

impl Check for DuplicateNamesCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::DuplicateNames
    }

    fn run(&self, dataset: &Dataset, _expectations: &Expectations) -> CheckReport {
        verify_duplicate_names(&dataset.players)
    }
}
