//! Persistence layer for the Liquid device context.
//!
//! The device profile only needs one durable value: the installation
//! identifier. Storage is consumed through the small [`KeyValueStore`]
//! interface so a host can plug in whatever preferences mechanism its
//! platform offers.
//!
//! # Backends
//!
//! - [`MemoryStore`]: process-local, for tests and ephemeral sessions
//! - [`FileStore`]: one file per namespace under a directory, written
//!   atomically via rename
//!
//! [`IdentifierStore`] sits on top of any backend and guarantees the
//! identifier of a namespace is generated at most once per process.

mod error;
mod file;
mod identifier;
mod kv;

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use identifier::{IdentifierOrigin, IdentifierOutcome, IdentifierStore, DEFAULT_NAMESPACE};
pub use kv::{KeyValueStore, MemoryStore};
