#![allow(dead_code)]

use serde_json::{json, Map, Value};
use squad_integrity::{load_dataset, IntegrityEngine, VerificationSummary};
use std::path::PathBuf;
use tempfile::TempDir;

pub const PLAYER_COUNT: usize = 8200;
pub const TEAM_COUNT: usize = 20;
pub const TIER_SIZE: usize = 2050;

pub fn player_id(n: usize) -> String {
    format!("p{:04}", n)
}

/// The first three IDs of every block of 50 are goalkeepers: 6% overall.
pub fn is_goalkeeper(n: usize) -> bool {
    (n - 1) % 50 < 3
}

pub fn player_record(n: usize) -> Value {
    let position = if is_goalkeeper(n) { "Torwart" } else { "Mittelfeld" };
    json!({
        "player_id": player_id(n),
        "first_name": format!("Vorname{}", n),
        "last_name": format!("Nachname{}", n),
        "age": 18 + (n % 17),
        "primary_position": position,
        "strength_overall_base": 40.0 + (n % 50) as f64,
        "current_form": n % 21,
        "kondition_basis": 60.0 + (n % 40) as f64,
        "verletzungsart": ""
    })
}

pub fn valid_players() -> Value {
    let mut tiers = Map::new();
    for tier in 0..PLAYER_COUNT / TIER_SIZE {
        let players: Vec<Value> = (1..=TIER_SIZE)
            .map(|i| player_record(tier * TIER_SIZE + i))
            .collect();
        tiers.insert(format!("tier_{}", tier + 1), Value::Array(players));
    }
    Value::Object(tiers)
}

/// Team `i` takes IDs `50i+1 ..= 50i+22`, three of which are goalkeepers.
pub fn valid_teams() -> Value {
    let mut teams = Map::new();
    for i in 0..TEAM_COUNT {
        let roster: Vec<String> = (50 * i + 1..=50 * i + 22).map(player_id).collect();
        teams.insert(
            format!("team_{:02}", i + 1),
            json!({
                "player_roster": roster,
                "city": format!("Stadt {}", i + 1),
                "default_einsatz": "normal",
                "default_tactic": "4-4-2",
                "morale": (i % 9) as i64
            }),
        );
    }
    Value::Object(teams)
}

pub fn player_mut<'a>(players: &'a mut Value, id: &str) -> &'a mut Value {
    players
        .as_object_mut()
        .unwrap()
        .values_mut()
        .flat_map(|tier| tier.as_array_mut().unwrap().iter_mut())
        .find(|p| p["player_id"] == id)
        .unwrap()
}

pub fn roster_mut<'a>(teams: &'a mut Value, key: &str) -> &'a mut Vec<Value> {
    teams[key]["player_roster"].as_array_mut().unwrap()
}

pub struct Fixture {
    pub dir: TempDir,
    pub players_path: PathBuf,
    pub teams_path: PathBuf,
}

pub fn write_dataset(players: &Value, teams: &Value) -> Fixture {
    let dir = TempDir::new().unwrap();
    let players_path = dir.path().join("master_players_pool.json");
    let teams_path = dir.path().join("master_teams.json");
    std::fs::write(&players_path, serde_json::to_vec_pretty(players).unwrap()).unwrap();
    std::fs::write(&teams_path, serde_json::to_vec_pretty(teams).unwrap()).unwrap();
    Fixture {
        dir,
        players_path,
        teams_path,
    }
}

/// Writes both documents to disk, loads them back and runs every check.
pub fn verify(players: &Value, teams: &Value) -> VerificationSummary {
    let fixture = write_dataset(players, teams);
    let dataset = load_dataset(&fixture.players_path, &fixture.teams_path).unwrap();
    IntegrityEngine::default().run(&dataset)
}
