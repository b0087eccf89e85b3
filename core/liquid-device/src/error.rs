//! Error types for the device profile.

use thiserror::Error;

/// Result type for device profile operations.
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Errors surfaced by the device profile.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// Attribute rejected by the overlay or by snapshot serialization.
    #[error(transparent)]
    Attribute(#[from] liquid_types::Error),

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl DeviceError {
    /// True if a snapshot failed because an attribute value is not representable.
    pub fn is_serialization(&self) -> bool {
        matches!(
            self,
            Self::Attribute(liquid_types::Error::Serialization { .. })
        )
    }
}
