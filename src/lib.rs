//! Miranda - turn-based political simulation engine

pub mod content;
pub mod core;
pub mod engine;

pub use crate::core::error::{MirandaError, Result};
pub use crate::core::types::{BlocId, Difficulty, ResourceKey};
pub use crate::engine::{create_initial_state, resolve_turn, GameState, PolicyChoice, TurnReport};
