//! OS facts for the current desktop host.

use crate::locale;
use crate::manifest::AppManifest;
use crate::network::scan_interfaces;
use liquid_device::{Connectivity, OsFactsProvider, ScreenSize};
use std::path::PathBuf;

const DEFAULT_NET_ROOT: &str = "/sys/class/net";

/// [`OsFactsProvider`] backed by the running machine.
#[derive(Debug, Clone)]
pub struct HostFacts {
    manifest: AppManifest,
    screen_size: Option<ScreenSize>,
    net_root: PathBuf,
}

impl HostFacts {
    /// Creates a provider reporting `manifest` as the application metadata.
    #[must_use]
    pub fn new(manifest: AppManifest) -> Self {
        Self {
            manifest,
            screen_size: None,
            net_root: PathBuf::from(DEFAULT_NET_ROOT),
        }
    }

    /// Reports a fixed screen size; hosts are treated as headless otherwise.
    #[must_use]
    pub fn with_screen_size(mut self, size: ScreenSize) -> Self {
        self.screen_size = Some(size);
        self
    }

    /// Scans interfaces under `root` instead of `/sys/class/net`.
    #[must_use]
    pub fn with_net_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.net_root = root.into();
        self
    }

    pub fn manifest(&self) -> &AppManifest {
        &self.manifest
    }
}

impl OsFactsProvider for HostFacts {
    fn vendor(&self) -> Option<String> {
        get_vendor()
    }

    fn model(&self) -> Option<String> {
        get_model().or_else(get_hostname)
    }

    fn system_version(&self) -> Option<i64> {
        get_os_version().as_deref().and_then(major_version)
    }

    fn screen_size(&self) -> Option<ScreenSize> {
        self.screen_size
    }

    fn connectivity(&self) -> Connectivity {
        scan_interfaces(&self.net_root)
    }

    fn app_bundle(&self) -> Option<String> {
        self.manifest.bundle.clone()
    }

    fn app_name(&self) -> Option<String> {
        self.manifest.name.clone()
    }

    fn app_version(&self) -> Option<String> {
        self.manifest.version.clone()
    }

    fn release_version(&self) -> Option<i64> {
        self.manifest.release
    }

    fn locale(&self) -> Option<String> {
        locale::from_env()
    }

    fn system_language(&self) -> Option<String> {
        locale::from_env().map(|l| locale::language_of(&l))
    }
}

/// Leading numeric component of a dotted version (`22.04` → 22).
pub(crate) fn major_version(version: &str) -> Option<i64> {
    version.trim().split('.').next()?.parse().ok()
}

/// Reads a DMI attribute, ignoring placeholder values firmware often ships.
#[cfg(target_os = "linux")]
fn read_dmi(name: &str) -> Option<String> {
    std::fs::read_to_string(format!("/sys/class/dmi/id/{name}"))
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && s != "To Be Filled By O.E.M.")
}

fn get_vendor() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        read_dmi("sys_vendor")
    }

    #[cfg(target_os = "macos")]
    {
        Some("Apple".to_string())
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

fn get_model() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        read_dmi("product_name")
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("sysctl")
            .args(["-n", "hw.model"])
            .output()
            .ok()
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

fn get_hostname() -> Option<String> {
    hostname::get().ok().and_then(|h| h.into_string().ok())
}

fn get_os_version() -> Option<String> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("sw_vers")
            .arg("-productVersion")
            .output()
            .ok()
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .map(|s| s.trim().to_string())
    }

    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/etc/os-release")
            .ok()
            .and_then(|content| {
                content
                    .lines()
                    .find(|l| l.starts_with("VERSION_ID="))
                    .map(|l| {
                        l.trim_start_matches("VERSION_ID=")
                            .trim_matches('"')
                            .to_string()
                    })
            })
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        None
    }
}
