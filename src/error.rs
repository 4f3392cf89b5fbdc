use thiserror::Error;

use crate::sim::NpcId;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Entity already registered: {0}")]
    DuplicateEntity(NpcId),

    #[error("Invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type SimResult<T> = std::result::Result<T, SimError>;
