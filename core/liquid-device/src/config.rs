//! Profile configuration, read from the `[profile]` table of `liquid.toml`.

use crate::error::DeviceResult;
use liquid_storage::DEFAULT_NAMESPACE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Settings that shape a [`DeviceProfile`](crate::DeviceProfile).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Reported as `liquid_version`.
    #[serde(default = "default_sdk_version")]
    pub sdk_version: String,
    /// Storage namespace of the device identifier.
    #[serde(default = "default_namespace")]
    pub identifier_namespace: String,
}

fn default_sdk_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            sdk_version: default_sdk_version(),
            identifier_namespace: default_namespace(),
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    profile: Option<ProfileConfig>,
}

impl ProfileConfig {
    /// Parses the `[profile]` table of a TOML document. A document without
    /// the table yields the defaults.
    pub fn from_toml_str(contents: &str) -> DeviceResult<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.profile.unwrap_or_default())
    }

    /// Loads the configuration from `path`.
    /// Falls back to defaults with a warning on read or parse errors.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No config file found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded profile config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse config file {:?}: {}. Falling back to defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}
