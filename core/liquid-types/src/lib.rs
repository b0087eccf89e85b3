//! Core type definitions for the Liquid device context.
//!
//! This crate defines the plain types shared by the storage and device
//! layers:
//! - Device identifiers (UUID v4, persisted per namespace)
//! - Attribute values carried by the overlay and the snapshot
//! - The reserved attribute key set and the platform constant
//!
//! Anything that talks to the OS or to storage lives elsewhere.

mod attribute;
mod ids;
mod reserved;

pub use attribute::{AttributeValue, Location};
pub use ids::DeviceId;
pub use reserved::{is_reserved, keys, PLATFORM, RESERVED_KEYS};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller tried to assign one of the reserved attribute names.
    #[error("attribute key is reserved: {0}")]
    ReservedKey(String),

    /// The key belongs to a dedicated setter (location pair, push token).
    #[error("attribute key has a dedicated setter: {0}")]
    ManagedKey(String),

    /// An attribute value cannot be represented in the canonical snapshot.
    #[error("cannot serialize attribute {key}: {reason}")]
    Serialization { key: String, reason: String },

    #[error("invalid device identifier: {0}")]
    InvalidIdentifier(String),
}
