// Player pool loading from CSV.
//
// One row per player:
// player_id,name,short_name,role,country,team_id,team_name,team_short_name,credits,total_points,is_playing
//
// Rows that cannot be used (bad role, non-positive credits, malformed
// fields) are skipped with a warning rather than failing the whole load.

use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use pickxi_core::{Player, Role, TeamId};
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("no usable players in {path}")]
    Empty { path: PathBuf },
}

/// Raw CSV row. Blank optional columns default to empty, zero points and
/// available.
#[derive(Debug, Deserialize)]
struct RawPlayerRow {
    player_id: String,
    name: String,
    #[serde(default)]
    short_name: String,
    role: String,
    #[serde(default)]
    country: String,
    team_id: TeamId,
    team_name: String,
    #[serde(default)]
    team_short_name: String,
    credits: f64,
    #[serde(default)]
    total_points: Option<u32>,
    #[serde(default)]
    is_playing: Option<String>,
}

fn parse_flag(raw: Option<&str>) -> Option<bool> {
    match raw.map(|s| s.trim().to_lowercase()) {
        None => Some(true),
        Some(s) if s.is_empty() => Some(true),
        Some(s) => match s.as_str() {
            "true" | "yes" | "y" | "1" => Some(true),
            "false" | "no" | "n" | "0" => Some(false),
            _ => None,
        },
    }
}

impl RawPlayerRow {
    fn into_player(self) -> Option<Player> {
        let player_id = self.player_id.trim().to_string();
        let name = self.name.trim().to_string();

        let Some(role) = Role::from_str_role(&self.role) else {
            warn!("skipping player '{}': unknown role '{}'", name, self.role);
            return None;
        };
        if !(self.credits.is_finite() && self.credits > 0.0) {
            warn!("skipping player '{}': bad credits {}", name, self.credits);
            return None;
        }
        let Some(is_playing) = parse_flag(self.is_playing.as_deref()) else {
            warn!(
                "skipping player '{}': bad is_playing value {:?}",
                name, self.is_playing
            );
            return None;
        };

        let team_name = self.team_name.trim().to_string();
        let short_name = match self.short_name.trim() {
            "" => name.clone(),
            s => s.to_string(),
        };
        let team_short_name = match self.team_short_name.trim() {
            "" => team_name.clone(),
            s => s.to_string(),
        };

        Some(Player {
            player_id,
            name,
            short_name,
            role,
            country: self.country.trim().to_string(),
            team_id: self.team_id,
            team_name,
            team_short_name,
            credits: self.credits,
            total_points: self.total_points.unwrap_or(0),
            is_playing,
        })
    }
}

/// Parse players from any CSV reader. Duplicate ids keep the first row.
pub fn load_players_from_reader<R: Read>(rdr: R) -> Result<Vec<Player>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    let mut seen = HashSet::new();
    let mut players = Vec::new();

    for result in reader.deserialize::<RawPlayerRow>() {
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping malformed player row: {}", e);
                continue;
            }
        };
        let Some(player) = raw.into_player() else {
            continue;
        };
        if !seen.insert(player.player_id.clone()) {
            warn!("skipping duplicate player id '{}'", player.player_id);
            continue;
        }
        players.push(player);
    }
    Ok(players)
}

/// Load the pool from a CSV file. An empty result is an error: nothing can
/// be built from it.
pub fn load_players(path: &Path) -> Result<Vec<Player>, PoolError> {
    let file = std::fs::File::open(path).map_err(|e| PoolError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let players = load_players_from_reader(file).map_err(|e| PoolError::Csv {
        path: path.to_path_buf(),
        source: e,
    })?;
    if players.is_empty() {
        return Err(PoolError::Empty {
            path: path.to_path_buf(),
        });
    }
    info!("loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

/// Keep only players in the announced playing side.
pub fn only_playing(players: Vec<Player>) -> Vec<Player> {
    players.into_iter().filter(|p| p.is_playing).collect()
}
