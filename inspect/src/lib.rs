//! Profile assembly for the `liquid-inspect` binary.

use anyhow::{bail, Context, Result};
use liquid_device::{DeviceProfile, ProfileConfig, Snapshot};
use liquid_host::{AppManifest, HostFacts};
use liquid_storage::{FileStore, IdentifierStore};
use liquid_types::Location;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Inputs gathered from the command line.
#[derive(Debug, Clone, Default)]
pub struct InspectOptions {
    pub storage_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub push_token: Option<String>,
    pub net_root: Option<PathBuf>,
}

impl InspectOptions {
    /// Both coordinates or neither.
    pub fn location(&self) -> Result<Option<Location>> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Ok(Some(Location::new(lat, lon))),
            (None, None) => Ok(None),
            _ => bail!("--latitude and --longitude must be given together"),
        }
    }
}

/// Manifest describing this binary, used for fields the config leaves unset.
fn own_manifest() -> AppManifest {
    AppManifest {
        bundle: Some("io.lqd.inspect".to_string()),
        name: Some(env!("CARGO_PKG_NAME").to_string()),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
        release: None,
    }
}

/// Builds a device profile for the current host.
pub fn build_profile(options: &InspectOptions) -> Result<DeviceProfile> {
    let location = options.location()?;

    let (config, manifest) = match &options.config {
        Some(path) => {
            let manifest = AppManifest::load(path)
                .with_context(|| format!("Failed to load app manifest from {}", path.display()))?;
            (ProfileConfig::load_from(path), manifest)
        }
        None => (ProfileConfig::default(), AppManifest::default()),
    };

    let mut facts = HostFacts::new(manifest.or(own_manifest()));
    if let Some(root) = &options.net_root {
        facts = facts.with_net_root(root);
    }

    let storage = options
        .storage_dir
        .clone()
        .unwrap_or_else(FileStore::default_location);
    info!("Using identifier storage at {:?}", storage);
    let identifiers = IdentifierStore::new(FileStore::new(storage));

    let profile = DeviceProfile::with_location(Arc::new(facts), &identifiers, &config, location);
    profile.set_push_token(options.push_token.as_deref());
    debug!(unique_id = %profile.unique_id(), "Profile ready");
    Ok(profile)
}

/// Renders a snapshot as JSON text.
pub fn render(snapshot: Snapshot, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(&snapshot).context("Failed to render snapshot")
    } else {
        Ok(snapshot.to_json_string())
    }
}
