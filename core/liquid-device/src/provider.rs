//! The OS-facts capability consumed by the device profile.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Network reachability as reported in `internet_connectivity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connectivity {
    #[serde(rename = "WiFi")]
    WiFi,
    #[serde(rename = "Cellular")]
    Cellular,
    #[serde(rename = "No Connectivity")]
    NoConnectivity,
    /// The host is not allowed to inspect network state.
    #[serde(rename = "No ACCESS_NETWORK_STATE permission")]
    PermissionDenied,
}

impl Connectivity {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WiFi => "WiFi",
            Self::Cellular => "Cellular",
            Self::NoConnectivity => "No Connectivity",
            Self::PermissionDenied => "No ACCESS_NETWORK_STATE permission",
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Read-only source of device and application facts.
///
/// Every query may degrade: returning `None` means the fact is unavailable
/// and the profile substitutes the documented fallback (see
/// [`fallback`](crate::fallback)). Implementations must not panic on missing
/// permissions or metadata.
///
/// Only [`connectivity`](Self::connectivity) is called after construction;
/// it is queried on every snapshot and must be side-effect free.
pub trait OsFactsProvider: Send + Sync {
    /// Device manufacturer.
    fn vendor(&self) -> Option<String> {
        None
    }

    /// Device model name.
    fn model(&self) -> Option<String> {
        None
    }

    /// OS version as an integer (API level or major version).
    fn system_version(&self) -> Option<i64> {
        None
    }

    fn screen_size(&self) -> Option<ScreenSize> {
        None
    }

    /// Network operator name.
    fn carrier(&self) -> Option<String> {
        None
    }

    fn connectivity(&self) -> Connectivity {
        Connectivity::NoConnectivity
    }

    /// Application package / bundle identifier.
    fn app_bundle(&self) -> Option<String> {
        None
    }

    /// Human-readable application name.
    fn app_name(&self) -> Option<String> {
        None
    }

    fn app_version(&self) -> Option<String> {
        None
    }

    /// Monotonic build number of the application.
    fn release_version(&self) -> Option<i64> {
        None
    }

    /// Full locale tag, e.g. `en_US`.
    fn locale(&self) -> Option<String> {
        None
    }

    /// Language part of the locale, e.g. `en`.
    fn system_language(&self) -> Option<String> {
        None
    }
}
