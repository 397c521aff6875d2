//! Save and load of the full game state as JSON

use std::fs;
use std::path::Path;

use crate::core::error::Result;
use crate::engine::state::GameState;

pub fn to_json(state: &GameState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

pub fn from_json(json: &str) -> Result<GameState> {
    Ok(serde_json::from_str(json)?)
}

pub fn save_to_path(state: &GameState, path: &Path) -> Result<()> {
    fs::write(path, to_json(state)?)?;
    tracing::debug!("Saved turn {} to {}", state.turn, path.display());
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<GameState> {
    let json = fs::read_to_string(path)?;
    let state = from_json(&json)?;
    tracing::debug!("Loaded turn {} from {}", state.turn, path.display());
    Ok(state)
}
