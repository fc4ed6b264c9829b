use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoveError {
    #[error("Malformed move data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid move {name}: {reason}")]
    Invalid { name: String, reason: String },

    #[error("Duplicate move number: {0}")]
    DuplicateNumber(u16),

    #[error("Duplicate move name: {0}")]
    DuplicateName(String),

    #[error("{0} has no PP left")]
    OutOfPp(String),
}
