use encounter_battle::EffectivenessError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DialogError {
    #[error("A line is already being typed")]
    LineInProgress,

    #[error("Invalid typewriter config: {0}")]
    InvalidConfig(String),

    #[error("Malformed typewriter config: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Effectiveness(#[from] EffectivenessError),
}
