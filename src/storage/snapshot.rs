use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{Match, Player, Team};

/// Everything the engine computes from: one immutable season of matches,
/// players and teams, loaded in a single piece.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonSnapshot {
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// Reads a season snapshot from a JSON file.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<SeasonSnapshot> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file {}", path.display()))?;
    let snapshot: SeasonSnapshot =
        serde_json::from_str(&json).context("Failed to parse season snapshot")?;
    info!(
        "Loaded snapshot: {} matches, {} players, {} teams",
        snapshot.matches.len(),
        snapshot.players.len(),
        snapshot.teams.len()
    );
    Ok(snapshot)
}
