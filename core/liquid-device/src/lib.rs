//! Device context for Liquid telemetry events.
//!
//! A [`DeviceProfile`] is built once per process. It gathers static facts
//! from an [`OsFactsProvider`], resolves the persistent device identifier,
//! and holds an [`AttributeOverlay`] the host mutates at runtime. Every call
//! to [`DeviceProfile::snapshot`] produces a flat [`Snapshot`] ready to be
//! attached to an event.
//!
//! # Precedence
//!
//! Snapshots are built in two phases: the overlay is copied, then every
//! reserved key is overwritten from static facts and the freshly queried
//! connectivity. Overlay values can never shadow a reserved key.

mod config;
mod error;
mod facts;
mod overlay;
mod profile;
mod provider;
mod snapshot;

pub use config::ProfileConfig;
pub use error::{DeviceError, DeviceResult};
pub use facts::{fallback, StaticFacts};
pub use overlay::AttributeOverlay;
pub use profile::DeviceProfile;
pub use provider::{Connectivity, OsFactsProvider, ScreenSize};
pub use snapshot::{merge_reserved, Snapshot};
