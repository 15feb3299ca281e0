use crate::domain::model::{Dataset, PlayerPool, TeamSet};
use crate::utils::error::{Result, VerifyError};
use serde::de::DeserializeOwned;
use std::path::Path;

/// 讀取並解析 JSON 文件；任何錯誤都帶上檔案路徑
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|source| VerifyError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| VerifyError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_players(path: &Path) -> Result<PlayerPool> {
    tracing::debug!("Loading player pool from {}", path.display());
    let pool: PlayerPool = load_json(path)?;
    tracing::info!(
        "Loaded {} players in {} tiers from {}",
        pool.len(),
        pool.tiers.len(),
        path.display()
    );
    Ok(pool)
}

pub fn load_teams(path: &Path) -> Result<TeamSet> {
    tracing::debug!("Loading teams from {}", path.display());
    let teams: TeamSet = load_json(path)?;
    tracing::info!("Loaded {} teams from {}", teams.len(), path.display());
    Ok(teams)
}

/// Loads both documents. Nothing is returned unless both parse.
pub fn load_dataset(players_path: &Path, teams_path: &Path) -> Result<Dataset> {
    let players = load_players(players_path)?;
    let teams = load_teams(teams_path)?;
    Ok(Dataset { players, teams })
}
