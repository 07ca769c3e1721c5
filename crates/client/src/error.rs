use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Board error: {0}")]
    BoardError(#[from] board::BoardError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("API error ({status}): {message}")]
    ApiError { status: StatusCode, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ClientError {
    /// Builds the error for a non-success response, preferring the API's own
    /// `{"error": ...}` message over the raw body.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("error")?.as_str().map(String::from))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unexpected response")
                    .to_string()
            });

        match status {
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::UNAUTHORIZED => Self::Unauthorized(message),
            _ => Self::ApiError { status, message },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_uses_api_message() {
        let error = ClientError::from_status(
            StatusCode::NOT_FOUND,
            r#"{"error": "Challenge not found"}"#,
        );
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Not found: Challenge not found");

        let error = ClientError::from_status(StatusCode::UNAUTHORIZED, "");
        assert!(error.is_unauthorized());
        assert_eq!(error.to_string(), "Unauthorized: Unauthorized");
    }

    #[test]
    fn test_other_statuses_keep_status_code() {
        let error = ClientError::from_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error": "Failed to fetch challenge leaderboard", "details": "boom"}"#,
        );

        match error {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(message, "Failed to fetch challenge leaderboard");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
