//! Error types for scenario loading and simulation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    #[error("trial count must be positive")]
    ZeroTrials,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
