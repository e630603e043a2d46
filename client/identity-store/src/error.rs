/// Error types for the identity store
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Storage error: {0}")]
    Storage(#[from] blob_store::BlobError),
}

/// Result type alias for identity store operations
pub type Result<T> = std::result::Result<T, IdentityError>;
