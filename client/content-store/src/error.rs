/// Error types for the content store
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Storage error: {0}")]
    Storage(#[from] blob_store::BlobError),
}

/// Result type alias for content store operations
pub type Result<T> = std::result::Result<T, ContentError>;
