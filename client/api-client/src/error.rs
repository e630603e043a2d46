/// Error types for the backend API client
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
