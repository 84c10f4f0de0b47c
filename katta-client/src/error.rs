//! Client error types

use thiserror::Error;

/// Error body the server sends: `{ "code": "E0002", "message": "..." }`
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("API error {status} [{code}]: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },
}

pub type ClientResult<T> = Result<T, ClientError>;
