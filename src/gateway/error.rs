use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The backend answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    Status(StatusCode),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to encode employee payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to read image: {0}")]
    Image(#[from] std::io::Error),
}

impl GatewayError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GatewayError::Status(s) => Some(*s),
            GatewayError::Transport(e) => e.status(),
            _ => None,
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
