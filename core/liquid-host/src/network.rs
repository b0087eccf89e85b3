//! Connectivity detection from Linux interface state.

use liquid_device::Connectivity;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Classifies connectivity from a `/sys/class/net`-style directory.
///
/// Every subdirectory is an interface whose `operstate` file reads `up` when
/// the link is active. `wwan*` interfaces count as cellular; any other active
/// non-loopback link counts as WiFi, since the backend only distinguishes
/// local network from cellular. Local network wins when both are up.
pub fn scan_interfaces(root: &Path) -> Connectivity {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            debug!(path = %root.display(), "Network state not readable");
            return Connectivity::PermissionDenied;
        }
        Err(_) => return Connectivity::NoConnectivity,
    };

    let mut cellular = false;
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == "lo" || !is_up(&entry.path()) {
            continue;
        }
        if name.starts_with("wwan") {
            cellular = true;
        } else {
            return Connectivity::WiFi;
        }
    }

    if cellular {
        Connectivity::Cellular
    } else {
        Connectivity::NoConnectivity
    }
}

fn is_up(interface: &Path) -> bool {
    fs::read_to_string(interface.join("operstate"))
        .map(|state| state.trim() == "up")
        .unwrap_or(false)
}
