//! Error types for the storage layer.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored bytes are not valid UTF-8.
    #[error("serialization error: {0}")]
    Serialization(#[from] std::string::FromUtf8Error),

    /// Namespace cannot be mapped onto the backend.
    #[error("invalid namespace: {0}")]
    InvalidNamespace(String),

    /// The backend refused the operation. None of the bundled stores return
    /// this; it exists for host-supplied `KeyValueStore` implementations
    /// (e.g. a platform preferences API that is not ready yet).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
