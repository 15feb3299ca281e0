use crate::domain::expectations::Expectations;
use crate::domain::findings::{CheckKind, CheckReport, Finding, Statistic};
use crate::domain::model::{Dataset, Player, PlayerPool, TeamSet};
use crate::domain::ports::Check;
use std::collections::HashSet;

/// Rosters must reference known players, have the expected size and no repeats.
///
/// The three issue kinds are collected independently for every team.
pub fn verify_cross_references(
    players: &PlayerPool,
    teams: &TeamSet,
    expectations: &Expectations,
) -> CheckReport {
    let known: HashSet<&str> = players.players().filter_map(Player::id).collect();

    let mut invalid_refs = Vec::new();
    let mut roster_issues = Vec::new();
    let mut duplicate_players = Vec::new();

    for team in teams.iter() {
        let roster = team.roster();

        if roster.len() != expectations.roster_size {
            roster_issues.push(Finding::RosterSize {
                team: team.key.clone(),
                size: roster.len(),
                expected: expectations.roster_size,
            });
        }

        let distinct: HashSet<&str> = roster.iter().map(String::as_str).collect();
        if distinct.len() != roster.len() {
            duplicate_players.push(Finding::RosterDuplicates {
                team: team.key.clone(),
                duplicates: roster.len() - distinct.len(),
            });
        }

        for player_id in roster {
            if !known.contains(player_id.as_str()) {
                invalid_refs.push(Finding::InvalidReference {
                    team: team.key.clone(),
                    player_id: player_id.clone(),
                });
            }
        }
    }

    let statistics = vec![
        Statistic::new("Total teams to check", teams.len()),
        Statistic::new("Total players available", known.len()),
    ];

    let mut findings = invalid_refs;
    findings.extend(roster_issues);
    findings.extend(duplicate_players);

    CheckReport::new(CheckKind::CrossReference, statistics, findings)
}

pub struct CrossReferenceCheck;

impl Check for CrossReferenceCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::CrossReference
    }

    fn run(&self, dataset: &Dataset, expectations: &Expectations) -> CheckReport {
        verify_cross_references(&dataset.players, &dataset.teams, expectations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::checks::fixtures::{ids, pool_of, team, teams};
    use crate::domain::findings::FindingCategory;

    fn pool_44() -> PlayerPool {
        let ids = ids(1..=44);
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        pool_of(&refs)
    }

    #[test]
    fn test_valid_rosters_pass() {
        let set = teams(vec![team("t1", ids(1..=22)), team("t2", ids(23..=44))]);
        let report = verify_cross_references(&pool_44(), &set, &Expectations::default());
        assert!(report.passed, "{:?}", report.findings);
    }

    #[test]
    fn test_short_roster_is_flagged_with_its_size() {
        let set = teams(vec![team("t1", ids(1..=21))]);
        let report = verify_cross_references(&pool_44(), &set, &Expectations::default());

        assert_eq!(
            report.findings,
            vec![Finding::RosterSize {
                team: "t1".to_string(),
                size: 21,
                expected: 22
            }]
        );
    }

    #[test]
    fn test_unknown_player_is_an_invalid_reference() {
        let mut roster = ids(1..=21);
        roster.push("pXXXX".to_string());
        let set = teams(vec![team("t1", roster)]);

        let report = verify_cross_references(&pool_44(), &set, &Expectations::default());
        assert_eq!(
            report.findings,
            vec![Finding::InvalidReference {
                team: "t1".to_string(),
                player_id: "pXXXX".to_string()
            }]
        );
    }

    #[test]
    fn test_all_issue_kinds_are_collected_together() {
        // 23 entries, p0001 twice, one unknown reference
        let mut roster = ids(1..=21);
        roster.push("p0001".to_string());
        roster.push("p9999".to_string());
        let set = teams(vec![team("t1", roster)]);

        let report = verify_cross_references(&pool_44(), &set, &Expectations::default());
        assert!(!report.passed);
        assert_eq!(report.findings_in(FindingCategory::InvalidReference).count(), 1);
        assert_eq!(report.findings_in(FindingCategory::RosterSize).count(), 1);
        assert_eq!(
            report.findings_in(FindingCategory::RosterDuplicates).next(),
            Some(&Finding::RosterDuplicates {
                team: "t1".to_string(),
                duplicates: 1
            })
        );
    }

    #[test]
    fn test_missing_roster_counts_as_empty() {
        let mut bare = team("t1", Vec::new());
        bare.player_roster = crate::domain::model::Field::Absent;

        let report = verify_cross_references(&pool_44(), &teams(vec![bare]), &Expectations::default());
        assert_eq!(
            report.findings,
            vec![Finding::RosterSize {
                team: "t1".to_string(),
                size: 0,
                expected: 22
            }]
        );
    }
}
