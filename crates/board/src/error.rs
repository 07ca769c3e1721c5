use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid challenge identifier: {0:?}")]
    InvalidChallengeId(String),

    #[error("Failed to parse leaderboard payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
