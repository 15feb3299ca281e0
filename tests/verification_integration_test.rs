mod common;

use common::*;
use serde_json::{json, Value};
use squad_integrity::domain::findings::FindingCategory;
use squad_integrity::domain::model::FieldDefect;
use squad_integrity::{CheckKind, CheckReport, Finding, VerificationSummary};

fn report(summary: &VerificationSummary, kind: CheckKind) -> &CheckReport {
    summary.reports.iter().find(|r| r.check == kind).unwrap()
}

fn failed_checks(summary: &VerificationSummary) -> Vec<CheckKind> {
    summary
        .reports
        .iter()
        .filter(|r| !r.passed)
        .map(|r| r.check)
        .collect()
}

#[test]
fn test_valid_dataset_passes_every_check() {
    let summary = verify(&valid_players(), &valid_teams());

    assert_eq!(summary.total_players, PLAYER_COUNT);
    assert_eq!(summary.total_teams, TEAM_COUNT);
    assert!(failed_checks(&summary).is_empty(), "{:#?}", summary.reports);
    assert!(summary.passed());
    assert_eq!(summary.passed_count(), 6);
}

#[test]
fn test_duplicate_name_is_reported_with_both_ids() {
    let mut players = valid_players();
    let twin = player_mut(&mut players, "p0200");
    twin["first_name"] = json!("Vorname100");
    twin["last_name"] = json!("Nachname100");

    let summary = verify(&players, &valid_teams());

    assert_eq!(failed_checks(&summary), vec![CheckKind::DuplicateNames]);
    assert_eq!(
        report(&summary, CheckKind::DuplicateNames).findings,
        vec![Finding::DuplicateName {
            name: "Vorname100 Nachname100".to_string(),
            player_ids: vec!["p0100".to_string(), "p0200".to_string()],
        }]
    );
}

#[test]
fn test_removed_id_is_reported_missing() {
    let mut players = valid_players();
    players["tier_1"]
        .as_array_mut()
        .unwrap()
        .retain(|p| p["player_id"] != "p0042");

    let summary = verify(&players, &valid_teams());
    let ids = report(&summary, CheckKind::PlayerIds);

    assert!(!ids.passed);
    assert_eq!(
        ids.findings,
        vec![Finding::MissingId {
            player_id: "p0042".to_string()
        }]
    );
}

#[test]
fn test_added_id_is_reported_unexpected() {
    let mut players = valid_players();
    let mut extra = player_record(9999);
    extra["player_id"] = json!("p9999");
    players["tier_4"].as_array_mut().unwrap().push(extra);

    let summary = verify(&players, &valid_teams());

    assert_eq!(
        report(&summary, CheckKind::PlayerIds).findings,
        vec![Finding::UnexpectedId {
            player_id: "p9999".to_string()
        }]
    );
}

#[test]
fn test_duplicated_id_is_reported_with_multiplicity() {
    let mut players = valid_players();
    let mut copy = player_record(1);
    copy["first_name"] = json!("Doppel");
    players["tier_2"].as_array_mut().unwrap().push(copy);

    let summary = verify(&players, &valid_teams());

    assert_eq!(
        report(&summary, CheckKind::PlayerIds).findings,
        vec![Finding::DuplicateId {
            player_id: "p0001".to_string(),
            occurrences: 2
        }]
    );
}

#[test]
fn test_short_roster_is_flagged() {
    let mut teams = valid_teams();
    roster_mut(&mut teams, "team_05").pop();

    let summary = verify(&valid_players(), &teams);

    assert_eq!(
        report(&summary, CheckKind::CrossReference).findings,
        vec![Finding::RosterSize {
            team: "team_05".to_string(),
            size: 21,
            expected: 22
        }]
    );
}

#[test]
fn test_unknown_roster_entry_is_an_invalid_reference() {
    let mut teams = valid_teams();
    roster_mut(&mut teams, "team_02")[21] = json!("pXXXX");

    let summary = verify(&valid_players(), &teams);
    let cross = report(&summary, CheckKind::CrossReference);

    assert_eq!(
        cross.findings,
        vec![Finding::InvalidReference {
            team: "team_02".to_string(),
            player_id: "pXXXX".to_string()
        }]
    );
}

#[test]
fn test_team_with_two_goalkeepers_is_flagged() {
    let mut teams = valid_teams();
    // 第一個守門員換成場上球員 p0023
    roster_mut(&mut teams, "team_01")[0] = json!("p0023");

    let summary = verify(&valid_players(), &teams);

    assert_eq!(failed_checks(&summary), vec![CheckKind::PositionDistribution]);
    assert_eq!(
        report(&summary, CheckKind::PositionDistribution).findings,
        vec![Finding::GoalkeeperQuota {
            team: "team_01".to_string(),
            goalkeepers: 2,
            min: 3,
            max: 4
        }]
    );
}

#[test]
fn test_eight_percent_goalkeepers_fails_the_share_check() {
    let mut players = valid_players();
    // one extra keeper per block of 50, outside every roster: 656 / 8200 = 8%
    for block in 0..PLAYER_COUNT / 50 {
        let id = player_id(50 * block + 50);
        player_mut(&mut players, &id)["primary_position"] = json!("Torwart");
    }

    let summary = verify(&players, &valid_teams());
    let positions = report(&summary, CheckKind::PositionDistribution);

    assert!(!positions.passed);
    assert_eq!(positions.findings_in(FindingCategory::GoalkeeperQuota).count(), 0);
    match positions.findings_in(FindingCategory::GoalkeeperShare).next() {
        Some(Finding::GoalkeeperShare { percent, .. }) => assert!((percent - 8.0).abs() < 1e-9),
        other => panic!("expected a goalkeeper share finding, got {:?}", other),
    };
}

#[test]
fn test_missing_age_is_reported_by_location() {
    let mut players = valid_players();
    players["tier_3"][7].as_object_mut().unwrap().remove("age");

    let summary = verify(&players, &valid_teams());

    assert_eq!(failed_checks(&summary), vec![CheckKind::DataStructure]);
    assert_eq!(
        report(&summary, CheckKind::DataStructure).findings,
        vec![Finding::PlayerField {
            tier: "tier_3".to_string(),
            index: 7,
            field: "age",
            defect: FieldDefect::Missing
        }]
    );
}

#[test]
fn test_empty_injury_descriptor_is_accepted() {
    let mut players = valid_players();
    player_mut(&mut players, "p0003")["verletzungsart"] = Value::Null;
    player_mut(&mut players, "p0004")
        .as_object_mut()
        .unwrap()
        .remove("verletzungsart");

    assert!(verify(&players, &valid_teams()).passed());
}

#[test]
fn test_negative_strength_and_high_morale_are_game_breaking() {
    let mut players = valid_players();
    player_mut(&mut players, "p0777")["strength_overall_base"] = json!(-1);
    let mut teams = valid_teams();
    teams["team_03"]["morale"] = json!(9);

    let summary = verify(&players, &teams);

    assert_eq!(failed_checks(&summary), vec![CheckKind::GameBreaking]);
    assert_eq!(
        report(&summary, CheckKind::GameBreaking).findings,
        vec![
            Finding::InvalidStrength {
                player_id: "p0777".to_string(),
                value: Some(-1.0)
            },
            Finding::InvalidMorale {
                team: "team_03".to_string(),
                value: 9
            },
        ]
    );
}

#[test]
fn test_empty_documents_fail_only_on_ids_and_share() {
    let summary = verify(&json!({}), &json!({}));

    assert!(report(&summary, CheckKind::DuplicateNames).passed);
    assert!(report(&summary, CheckKind::DataStructure).passed);
    assert!(report(&summary, CheckKind::GameBreaking).passed);
    assert!(report(&summary, CheckKind::CrossReference).passed);
    assert!(!report(&summary, CheckKind::PositionDistribution).passed);

    let ids = report(&summary, CheckKind::PlayerIds);
    assert!(!ids.passed);
    assert_eq!(ids.findings_in(FindingCategory::MissingId).count(), 8200);
    assert!(!summary.passed());
}

#[test]
fn test_running_twice_gives_identical_results() {
    let mut players = valid_players();
    player_mut(&mut players, "p0010")["current_form"] = json!(25);
    let teams = valid_teams();

    let first = verify(&players, &teams);
    let second = verify(&players, &teams);

    assert_eq!(first, second);
    assert_eq!(first.total_findings(), 1);
}
