//! Difficulty configuration
//!
//! Each difficulty is a bundle of starting values and scaling knobs. The
//! built-in tables are the shipped balance; a TOML file can override any of
//! them for playtesting.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::Result;
use crate::core::types::Difficulty;
use crate::engine::resources::ResourceState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    pub difficulty: Difficulty,

    /// Capital credited every turn before trade income
    pub base_capital_income: i32,

    /// Applied to the rival's capped per-turn growth
    ///
    /// Story softens the rival, crisis accelerates it. The cap of +8 is
    /// taken before this multiplier, so crisis can exceed 8 per turn.
    pub rival_growth_multiplier: f64,

    /// Length of the term in turns (months)
    pub max_turns: u32,

    /// Added to every bloc's authored starting loyalty
    pub starting_loyalty_offset: i32,

    pub starting_rival_power: i32,
    pub starting_labor_cohesion: i32,
    pub starting_central_bank_independence: i32,
    pub starting_colossus_patience: i32,
    pub starting_trade_dependency: i32,

    /// Kept last so the TOML form puts the nested table after plain keys
    pub starting_resources: ResourceState,
}

impl DifficultyConfig {
    pub fn story() -> Self {
        Self {
            difficulty: Difficulty::Story,
            base_capital_income: 15,
            rival_growth_multiplier: 0.7,
            max_turns: 48,
            starting_resources: ResourceState {
                legitimacy: 65,
                narrative: 50,
                capital: 200,
                mobilization: 45,
                polarization: 30,
                inflation: 5,
                dread: 10,
                colossus_alignment: 50,
            },
            starting_loyalty_offset: 5,
            starting_rival_power: 10,
            starting_labor_cohesion: 55,
            starting_central_bank_independence: 60,
            starting_colossus_patience: 80,
            starting_trade_dependency: 60,
        }
    }

    pub fn standard() -> Self {
        Self {
            difficulty: Difficulty::Standard,
            base_capital_income: 10,
            rival_growth_multiplier: 1.0,
            max_turns: 48,
            starting_resources: ResourceState {
                legitimacy: 55,
                narrative: 45,
                capital: 150,
                mobilization: 40,
                polarization: 35,
                inflation: 6,
                dread: 15,
                colossus_alignment: 50,
            },
            starting_loyalty_offset: 0,
            starting_rival_power: 15,
            starting_labor_cohesion: 50,
            starting_central_bank_independence: 60,
            starting_colossus_patience: 70,
            starting_trade_dependency: 60,
        }
    }

    pub fn crisis() -> Self {
        Self {
            difficulty: Difficulty::Crisis,
            base_capital_income: 8,
            rival_growth_multiplier: 1.3,
            max_turns: 48,
            starting_resources: ResourceState {
                legitimacy: 45,
                narrative: 40,
                capital: 100,
                mobilization: 35,
                polarization: 45,
                inflation: 9,
                dread: 20,
                colossus_alignment: 45,
            },
            starting_loyalty_offset: -5,
            starting_rival_power: 20,
            starting_labor_cohesion: 45,
            starting_central_bank_independence: 55,
            starting_colossus_patience: 60,
            starting_trade_dependency: 65,
        }
    }

    /// Parse a full configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Built-in configuration for a difficulty
pub fn get_difficulty_config(difficulty: Difficulty) -> DifficultyConfig {
    match difficulty {
        Difficulty::Story => DifficultyConfig::story(),
        Difficulty::Standard => DifficultyConfig::standard(),
        Difficulty::Crisis => DifficultyConfig::crisis(),
    }
}

/// Load a configuration override from a TOML file
pub fn load_difficulty_config(path: &Path) -> Result<DifficultyConfig> {
    let contents = fs::read_to_string(path)?;
    let config = DifficultyConfig::from_toml_str(&contents)?;
    tracing::debug!(
        "Loaded {} difficulty config from {}",
        config.difficulty,
        path.display()
    );
    Ok(config)
}
