pub mod config;
pub mod error;
pub mod rng;
pub mod types;

pub use config::{get_difficulty_config, DifficultyConfig};
pub use error::{MirandaError, Result};
pub use rng::RandomSource;
pub use types::{BlocId, BlocMap, Difficulty, ResourceKey, Turn};
