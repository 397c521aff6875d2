use thiserror::Error;

#[derive(Error, Debug)]
pub enum MirandaError {
    #[error("Unknown policy: {0}")]
    UnknownPolicy(String),

    #[error("Policy is still locked: {0}")]
    PolicyLocked(String),

    #[error("Policy selected more than once: {0}")]
    DuplicatePolicy(String),

    #[error("Insufficient capital: need {required}, have {available}")]
    InsufficientCapital { required: i32, available: i32 },

    #[error("Policy {0} requires a target bloc")]
    MissingTargetBloc(String),

    #[error("The game is over; no further turns can be resolved")]
    GameOver,

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, MirandaError>;
