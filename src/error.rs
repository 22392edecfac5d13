//! Error handling for the interview client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterviewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error (status {status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, InterviewError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for InterviewError {
    fn from(err: anyhow::Error) -> Self {
        InterviewError::InvalidState(err.to_string())
    }
}

impl From<reqwest::Error> for InterviewError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => InterviewError::Backend {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => InterviewError::Network(err.to_string()),
        }
    }
}

impl From<askama::Error> for InterviewError {
    fn from(err: askama::Error) -> Self {
        InterviewError::OutputFormatting(err.to_string())
    }
}
