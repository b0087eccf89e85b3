//! File-backed key-value store.
//!
//! Each namespace maps to one file in the store directory. Writes go through
//! a temporary file in the same directory and are renamed into place, so a
//! reader sees either the old value or the new one.

use crate::error::{StorageError, StorageResult};
use crate::kv::KeyValueStore;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores one value per namespace as a file under `root`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Opens a store in the platform data directory (`<data_dir>/liquid`).
    pub fn open_default() -> Self {
        Self::new(Self::default_location())
    }

    /// Platform data directory for Liquid, falling back to `./liquid`.
    pub fn default_location() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("liquid")
    }

    /// Returns the store directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, namespace: &str) -> StorageResult<PathBuf> {
        validate_namespace(namespace)?;
        Ok(self.root.join(namespace))
    }
}

/// Namespaces become file names, so only a conservative character set is
/// accepted and hidden/relative names are refused.
fn validate_namespace(namespace: &str) -> StorageResult<()> {
    let valid_chars = namespace
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if namespace.is_empty() || namespace.starts_with('.') || !valid_chars {
        return Err(StorageError::InvalidNamespace(namespace.to_string()));
    }
    Ok(())
}

impl KeyValueStore for FileStore {
    fn get(&self, namespace: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(namespace)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(String::from_utf8(bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&self, namespace: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(namespace)?;
        fs::create_dir_all(&self.root)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.root)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| StorageError::Io(e.error))?;

        debug!(path = %path.display(), "Stored value");
        Ok(())
    }
}
