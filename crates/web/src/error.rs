use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use board::{BoardError, view::LOAD_FAILED_MESSAGE};
use client::ClientError;
use serde_json::json;
use std::fmt;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Upstream(ClientError),
    InvalidChallenge(BoardError),
    NotFound(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upstream(e) => write!(f, "Upstream error: {}", e),
            Self::InvalidChallenge(e) => write!(f, "Invalid challenge: {}", e),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status_code, body) = match &self {
            Self::Upstream(ClientError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, json!({ "error": msg }))
            }
            Self::Upstream(e) => {
                tracing::error!("Error fetching challenge leaderboard: {:?}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "error": LOAD_FAILED_MESSAGE }),
                )
            }
            Self::InvalidChallenge(e) => (StatusCode::BAD_REQUEST, json!({ "error": e.to_string() })),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<ClientError> for WebError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::BoardError(e) => Self::InvalidChallenge(e),
            other => Self::Upstream(other),
        }
    }
}

impl From<BoardError> for WebError {
    fn from(error: BoardError) -> Self {
        Self::InvalidChallenge(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
