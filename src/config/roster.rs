// src/config/roster.rs

use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::ScrapeError;

/// One rostered player, as supplied by the roster file. Immutable for the
/// whole run.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub rating: u32,
    pub pdga_number: u32,
}

#[derive(Debug, Deserialize)]
struct RosterFile {
    players: Vec<Player>,
}

/// Load the ordered roster from a TOML file of `[[players]]` tables.
pub fn load(path: &Path) -> Result<Vec<Player>, ScrapeError> {
    let text = fs::read_to_string(path).map_err(|e| ScrapeError::Roster {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let file: RosterFile = toml::from_str(&text).map_err(|e| ScrapeError::Roster {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(file.players)
}
