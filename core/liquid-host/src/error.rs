//! Error types for the host adapter.

use thiserror::Error;

/// Host adapter errors. Only manifest loading can fail; fact queries degrade.
#[derive(Debug, Error)]
pub enum HostError {
    /// Manifest TOML is malformed.
    #[error("invalid app manifest: {0}")]
    Manifest(#[from] toml::de::Error),

    /// Manifest file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for host adapter operations.
pub type HostResult<T> = Result<T, HostError>;
