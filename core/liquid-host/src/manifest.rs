//! Application metadata, read from the `[app]` table of `liquid.toml`.

use crate::error::HostResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What a package manager would report about the running application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppManifest {
    #[serde(default)]
    pub bundle: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub release: Option<i64>,
}

#[derive(Deserialize)]
struct ManifestFile {
    #[serde(default)]
    app: AppManifest,
}

impl AppManifest {
    /// Parses the `[app]` table of a TOML document.
    pub fn from_toml_str(contents: &str) -> HostResult<Self> {
        let file: ManifestFile = toml::from_str(contents)?;
        Ok(file.app)
    }

    /// Reads and parses the `[app]` table of the file at `path`.
    pub fn load(path: &Path) -> HostResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Fills unset fields from `other`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self {
            bundle: self.bundle.or(other.bundle),
            name: self.name.or(other.name),
            version: self.version.or(other.version),
            release: self.release.or(other.release),
        }
    }
}
