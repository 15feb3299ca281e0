use serde::de::{self, DeserializeOwned, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A record field as it appears in the source document.
///
/// `Absent` means the key is missing, `Null` is an explicit JSON null and
/// `Blank` is the empty string. Anything else is parsed into `T`.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Absent,
    Null,
    Blank,
    Present(T),
}

/// Why a required field is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldDefect {
    Missing,
    Empty,
}

impl<T> Field<T> {
    /// Required-or-fail access: absence, null and "" are all defects.
    pub fn required(&self) -> Result<&T, FieldDefect> {
        match self {
            Field::Present(value) => Ok(value),
            Field::Absent => Err(FieldDefect::Missing),
            Field::Null | Field::Blank => Err(FieldDefect::Empty),
        }
    }

    pub fn defect(&self) -> Option<FieldDefect> {
        self.required().err()
    }

    pub fn present(&self) -> Option<&T> {
        match self {
            Field::Present(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: Clone> Field<T> {
    /// Optional-with-default access: anything but a parsed value yields `default`.
    pub fn value_or(&self, default: T) -> T {
        self.present().cloned().unwrap_or(default)
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Null => Ok(Field::Null),
            serde_json::Value::String(s) if s.is_empty() => Ok(Field::Blank),
            other => T::deserialize(other)
                .map(Field::Present)
                .map_err(de::Error::custom),
        }
    }
}

fn whole_number_value(number: &serde_json::Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Integer fields also accept whole-number floats such as `10.0`; `10.5` is a parse error.
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Field<i64>, D::Error> {
    match Field::<serde_json::Number>::deserialize(deserializer)? {
        Field::Absent => Ok(Field::Absent),
        Field::Null => Ok(Field::Null),
        Field::Blank => Ok(Field::Blank),
        Field::Present(number) => whole_number_value(&number)
            .map(Field::Present)
            .ok_or_else(|| de::Error::custom(format!("expected a whole number, found {}", number))),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub player_id: Field<String>,
    #[serde(default)]
    pub first_name: Field<String>,
    #[serde(default)]
    pub last_name: Field<String>,
    #[serde(default, deserialize_with = "whole_number")]
    pub age: Field<i64>,
    #[serde(default)]
    pub primary_position: Field<String>,
    #[serde(default)]
    pub strength_overall_base: Field<f64>,
    #[serde(default, deserialize_with = "whole_number")]
    pub current_form: Field<i64>,
    #[serde(default)]
    pub kondition_basis: Field<f64>,
    #[serde(default)]
    pub verletzungsart: Field<String>,
}

impl Player {
    pub fn id(&self) -> Option<&str> {
        self.player_id.present().map(String::as_str)
    }

    /// ID for display; players without one still show up in findings.
    pub fn id_label(&self) -> &str {
        self.id().unwrap_or("<missing id>")
    }

    /// `(first_name, last_name)`; 缺失時以空字串代替
    pub fn name_parts(&self) -> (&str, &str) {
        let first = self.first_name.present().map(String::as_str).unwrap_or("");
        let last = self.last_name.present().map(String::as_str).unwrap_or("");
        (first, last)
    }

    pub fn full_name(&self) -> String {
        let (first, last) = self.name_parts();
        format!("{} {}", first, last)
    }

    pub fn position(&self) -> Option<&str> {
        self.primary_position.present().map(String::as_str)
    }

    pub fn field_defect(&self, field: PlayerField) -> Option<FieldDefect> {
        match field {
            PlayerField::PlayerId => self.player_id.defect(),
            PlayerField::FirstName => self.first_name.defect(),
            PlayerField::LastName => self.last_name.defect(),
            PlayerField::Age => self.age.defect(),
            PlayerField::PrimaryPosition => self.primary_position.defect(),
            PlayerField::StrengthOverallBase => self.strength_overall_base.defect(),
            PlayerField::CurrentForm => self.current_form.defect(),
            PlayerField::KonditionBasis => self.kondition_basis.defect(),
            PlayerField::Verletzungsart => self.verletzungsart.defect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerField {
    PlayerId,
    FirstName,
    LastName,
    Age,
    PrimaryPosition,
    StrengthOverallBase,
    CurrentForm,
    KonditionBasis,
    Verletzungsart,
}

impl PlayerField {
    pub fn name(self) -> &'static str {
        match self {
            PlayerField::PlayerId => "player_id",
            PlayerField::FirstName => "first_name",
            PlayerField::LastName => "last_name",
            PlayerField::Age => "age",
            PlayerField::PrimaryPosition => "primary_position",
            PlayerField::StrengthOverallBase => "strength_overall_base",
            PlayerField::CurrentForm => "current_form",
            PlayerField::KonditionBasis => "kondition_basis",
            PlayerField::Verletzungsart => "verletzungsart",
        }
    }

    /// The injury descriptor may legitimately be null or "".
    pub fn allows_empty(self) -> bool {
        matches!(self, PlayerField::Verletzungsart)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Team {
    #[serde(skip)]
    pub key: String,
    #[serde(default)]
    pub player_roster: Field<Vec<String>>,
    #[serde(default)]
    pub city: Field<String>,
    #[serde(default)]
    pub default_einsatz: Field<serde_json::Value>,
    #[serde(default)]
    pub default_tactic: Field<serde_json::Value>,
    #[serde(default, deserialize_with = "whole_number")]
    pub morale: Field<i64>,
}

impl Team {
    /// A missing or null roster reads as an empty one.
    pub fn roster(&self) -> &[String] {
        self.player_roster.present().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn field_defect(&self, field: TeamField) -> Option<FieldDefect> {
        match field {
            TeamField::PlayerRoster => self.player_roster.defect(),
            TeamField::City => self.city.defect(),
            TeamField::DefaultEinsatz => self.default_einsatz.defect(),
            TeamField::DefaultTactic => self.default_tactic.defect(),
            TeamField::Morale => self.morale.defect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamField {
    PlayerRoster,
    City,
    DefaultEinsatz,
    DefaultTactic,
    Morale,
}

impl TeamField {
    pub fn name(self) -> &'static str {
        match self {
            TeamField::PlayerRoster => "player_roster",
            TeamField::City => "city",
            TeamField::DefaultEinsatz => "default_einsatz",
            TeamField::DefaultTactic => "default_tactic",
            TeamField::Morale => "morale",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tier {
    pub name: String,
    pub players: Vec<Player>,
}

/// Player pool keyed by tier, in document order. A repeated tier name
/// keeps its first position and its last value.
#[derive(Debug, Clone, Default)]
pub struct PlayerPool {
    pub tiers: Vec<Tier>,
}

impl PlayerPool {
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.tiers.iter().flat_map(|tier| tier.players.iter())
    }

    pub fn len(&self) -> usize {
        self.tiers.iter().map(|tier| tier.players.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'de> Deserialize<'de> for PlayerPool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PoolVisitor;

        impl<'de> Visitor<'de> for PoolVisitor {
            type Value = PlayerPool;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of tier name to a list of players")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut tiers: Vec<Tier> = Vec::new();
                let mut seen: HashMap<String, usize> = HashMap::new();
                while let Some((name, players)) = map.next_entry::<String, Vec<Player>>()? {
                    match seen.get(&name) {
                        Some(&slot) => tiers[slot].players = players,
                        None => {
                            seen.insert(name.clone(), tiers.len());
                            tiers.push(Tier { name, players });
                        }
                    }
                }
                Ok(PlayerPool { tiers })
            }
        }

        deserializer.deserialize_map(PoolVisitor)
    }
}

/// Teams keyed by team key, in document order. A repeated key keeps its
/// first position and its last value.
#[derive(Debug, Clone, Default)]
pub struct TeamSet {
    pub teams: Vec<Team>,
}

impl TeamSet {
    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl<'de> Deserialize<'de> for TeamSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TeamsVisitor;

        impl<'de> Visitor<'de> for TeamsVisitor {
            type Value = TeamSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of team key to a team record")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut teams: Vec<Team> = Vec::new();
                let mut seen: HashMap<String, usize> = HashMap::new();
                while let Some((key, mut team)) = map.next_entry::<String, Team>()? {
                    team.key = key.clone();
                    match seen.get(&key) {
                        Some(&slot) => teams[slot] = team,
                        None => {
                            seen.insert(key, teams.len());
                            teams.push(team);
                        }
                    }
                }
                Ok(TeamSet { teams })
            }
        }

        deserializer.deserialize_map(TeamsVisitor)
    }
}

/// Both collections of one run. Read-only once loaded.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub players: PlayerPool,
    pub teams: TeamSet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_states_are_distinguished() {
        let player: Player = serde_json::from_value(json!({
            "player_id": "p0001",
            "first_name": "",
            "last_name": null,
            "verletzungsart": ""
        }))
        .unwrap();

        assert_eq!(player.player_id, Field::Present("p0001".to_string()));
        assert_eq!(player.first_name, Field::Blank);
        assert_eq!(player.last_name, Field::Null);
        assert_eq!(player.age, Field::Absent);
        assert_eq!(player.field_defect(PlayerField::Age), Some(FieldDefect::Missing));
        assert_eq!(player.field_defect(PlayerField::FirstName), Some(FieldDefect::Empty));
        assert_eq!(player.field_defect(PlayerField::PlayerId), None);
    }

    #[test]
    fn test_required_and_default_accessors_differ() {
        let absent: Field<i64> = Field::Absent;
        assert_eq!(absent.required(), Err(FieldDefect::Missing));
        assert_eq!(absent.value_or(10), 10);

        let present: Field<i64> = Field::Present(25);
        assert_eq!(present.required(), Ok(&25));
        assert_eq!(present.value_or(10), 25);
    }

    #[test]
    fn test_wrong_type_is_a_parse_error() {
        let result: Result<Player, _> = serde_json::from_value(json!({"age": "twenty"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_pool_keeps_document_order() {
        let pool: PlayerPool = serde_json::from_str(
            r#"{"zeta": [{"player_id": "p0001"}], "alpha": [{"player_id": "p0002"}, {"player_id": "p0003"}]}"#,
        )
        .unwrap();

        let names: Vec<&str> = pool.tiers.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.players().next().and_then(Player::id), Some("p0001"));
    }

    #[test]
    fn test_team_set_carries_keys() {
        let teams: TeamSet = serde_json::from_str(
            r#"{"t2": {"city": "Bremen", "morale": 4}, "t1": {"player_roster": null}}"#,
        )
        .unwrap();

        assert_eq!(teams.len(), 2);
        assert_eq!(teams.teams[0].key, "t2");
        assert_eq!(teams.teams[1].key, "t1");
        assert!(teams.teams[1].roster().is_empty());
        assert_eq!(teams.teams[0].morale.value_or(3), 4);
    }

    #[test]
    fn test_whole_number_floats_are_accepted_for_integer_fields() {
        let player: Player = serde_json::from_value(json!({
            "player_id": "p0001",
            "age": 24.0,
            "current_form": 10.0
        }))
        .unwrap();
        assert_eq!(player.age, Field::Present(24));
        assert_eq!(player.current_form, Field::Present(10));

        let team: Team = serde_json::from_value(json!({"morale": 9.0, "city": "Kiel"})).unwrap();
        assert_eq!(team.morale, Field::Present(9));
    }

    #[test]
    fn test_fractional_value_for_integer_field_is_a_parse_error() {
        let result: Result<Player, _> = serde_json::from_value(json!({"current_form": 10.5}));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("whole number"));
    }

    #[test]
    fn test_integer_fields_keep_null_and_blank_states() {
        let player: Player = serde_json::from_value(json!({"age": null, "current_form": ""})).unwrap();
        assert_eq!(player.age, Field::Null);
        assert_eq!(player.current_form, Field::Blank);
    }

    #[test]
    fn test_repeated_team_key_keeps_last_value() {
        let teams: TeamSet = serde_json::from_str(
            r#"{"a": {"morale": 1}, "b": {"morale": 2}, "a": {"morale": 7}}"#,
        )
        .unwrap();

        assert_eq!(teams.len(), 2);
        assert_eq!(teams.teams[0].key, "a");
        assert_eq!(teams.teams[0].morale, Field::Present(7));
        assert_eq!(teams.teams[1].key, "b");
    }

    #[test]
    fn test_repeated_tier_name_keeps_last_value() {
        let pool: PlayerPool = serde_json::from_str(
            r#"{"tier_1": [{"player_id": "p0001"}], "tier_2": [], "tier_1": [{"player_id": "p0002"}, {"player_id": "p0003"}]}"#,
        )
        .unwrap();

        assert_eq!(pool.tiers.len(), 2);
        assert_eq!(pool.tiers[0].name, "tier_1");
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.players().next().and_then(Player::id), Some("p0002"));
    }

    #[test]
    fn test_full_name_tolerates_missing_parts() {
        let player = Player {
            first_name: Field::Present("Uwe".to_string()),
            ..Player::default()
        };
        assert_eq!(player.full_name(), "Uwe ");
    }
}
