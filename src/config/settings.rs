use crate::domain::expectations::Expectations;
use crate::utils::error::{Result, VerifyError};
use crate::utils::validation::{
    validate_bounds, validate_non_empty_string, validate_path, validate_positive_number,
    validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_PLAYERS_PATH: &str = "data/master_players_pool.json";
pub const DEFAULT_TEAMS_PATH: &str = "data/master_teams.json";

/// Optional TOML settings. Every key falls back to the built-in constant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifySettings {
    pub data: DataSettings,
    pub ids: IdSettings,
    pub roster: RosterSettings,
    pub positions: PositionSettings,
    pub ranges: RangeSettings,
    pub report: ReportSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataSettings {
    pub players: PathBuf,
    pub teams: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            players: PathBuf::from(DEFAULT_PLAYERS_PATH),
            teams: PathBuf::from(DEFAULT_TEAMS_PATH),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdSettings {
    pub prefix: String,
    pub width: usize,
    pub count: usize,
}

impl Default for IdSettings {
    fn default() -> Self {
        Self {
            prefix: "p".to_string(),
            width: 4,
            count: 8200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RosterSettings {
    pub size: usize,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self { size: 22 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PositionSettings {
    pub goalkeeper: String,
    pub per_team_min: usize,
    pub per_team_max: usize,
    pub target_percent: f64,
    pub tolerance_percent: f64,
}

impl Default for PositionSettings {
    fn default() -> Self {
        Self {
            goalkeeper: "Torwart".to_string(),
            per_team_min: 3,
            per_team_max: 4,
            target_percent: 6.0,
            tolerance_percent: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RangeSettings {
    pub form_min: i64,
    pub form_max: i64,
    pub kondition_min: f64,
    pub kondition_max: f64,
    pub morale_min: i64,
    pub morale_max: i64,
}

impl Default for RangeSettings {
    fn default() -> Self {
        Self {
            form_min: 0,
            form_max: 20,
            kondition_min: 0.0,
            kondition_max: 100.0,
            morale_min: 0,
            morale_max: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSettings {
    pub sample_limit: usize,
    pub game_breaking_sample_limit: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            sample_limit: 10,
            game_breaking_sample_limit: 20,
        }
    }
}

impl VerifySettings {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| VerifyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, origin: &Path) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content, origin)?;

        toml::from_str(&processed_content).map_err(|e| VerifyError::ConfigParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未定義的保持原樣
    fn substitute_env_vars(content: &str, origin: &Path) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| VerifyError::ConfigParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn expectations(&self) -> Expectations {
        Expectations {
            id_prefix: self.ids.prefix.clone(),
            id_width: self.ids.width,
            id_count: self.ids.count,
            roster_size: self.roster.size,
            goalkeeper_position: self.positions.goalkeeper.clone(),
            goalkeepers_min: self.positions.per_team_min,
            goalkeepers_max: self.positions.per_team_max,
            goalkeeper_target_percent: self.positions.target_percent,
            goalkeeper_tolerance_percent: self.positions.tolerance_percent,
            form_min: self.ranges.form_min,
            form_max: self.ranges.form_max,
            kondition_min: self.ranges.kondition_min,
            kondition_max: self.ranges.kondition_max,
            morale_min: self.ranges.morale_min,
            morale_max: self.ranges.morale_max,
        }
    }
}

impl Validate for VerifySettings {
    fn validate(&self) -> Result<()> {
        validate_path("data.players", &self.data.players.to_string_lossy())?;
        validate_path("data.teams", &self.data.teams.to_string_lossy())?;

        validate_non_empty_string("ids.prefix", &self.ids.prefix)?;
        validate_positive_number("ids.width", self.ids.width, 1)?;
        validate_positive_number("ids.count", self.ids.count, 1)?;

        validate_positive_number("roster.size", self.roster.size, 1)?;

        validate_non_empty_string("positions.goalkeeper", &self.positions.goalkeeper)?;
        validate_bounds(
            "positions.per_team",
            self.positions.per_team_min,
            self.positions.per_team_max,
        )?;
        validate_range("positions.target_percent", self.positions.target_percent, 0.0, 100.0)?;
        validate_range(
            "positions.tolerance_percent",
            self.positions.tolerance_percent,
            0.0,
            100.0,
        )?;

        validate_bounds("ranges.form", self.ranges.form_min, self.ranges.form_max)?;
        validate_bounds(
            "ranges.kondition",
            self.ranges.kondition_min,
            self.ranges.kondition_max,
        )?;
        validate_bounds("ranges.morale", self.ranges.morale_min, self.ranges.morale_max)?;

        validate_positive_number("report.sample_limit", self.report.sample_limit, 1)?;
        validate_positive_number(
            "report.game_breaking_sample_limit",
            self.report.game_breaking_sample_limit,
            1,
        )?;

        Ok(())
    }
}
