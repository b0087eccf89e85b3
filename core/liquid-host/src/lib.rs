//! Desktop host adapter for the Liquid device profile.
//!
//! [`HostFacts`] answers the OS-facts queries from the running machine:
//! - Vendor and model from DMI (Linux) or `sysctl` (macOS)
//! - OS major version from `/etc/os-release` or `sw_vers`
//! - Connectivity from interface state under `/sys/class/net`
//! - Locale from the POSIX locale environment
//!
//! A desktop process has no package manager to ask for application
//! metadata, so that comes from an [`AppManifest`] supplied by the host.

mod error;
mod host;
mod locale;
mod manifest;
mod network;

pub use error::{HostError, HostResult};
pub use host::HostFacts;
pub use locale::{language_of, parse_locale};
pub use manifest::AppManifest;
pub use network::scan_interfaces;
