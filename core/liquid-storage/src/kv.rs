//! The key-value interface consumed by the identifier store.

use crate::error::StorageResult;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Durable string storage addressed by namespace.
///
/// `put` returning `Ok` is the only durability signal the identifier store
/// relies on.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `namespace`.
    fn get(&self, namespace: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `namespace`, replacing any previous value.
    fn put(&self, namespace: &str, value: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, namespace: &str) -> StorageResult<Option<String>> {
        (**self).get(namespace)
    }

    fn put(&self, namespace: &str, value: &str) -> StorageResult<()> {
        (**self).put(namespace, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, namespace: &str) -> StorageResult<Option<String>> {
        (**self).get(namespace)
    }

    fn put(&self, namespace: &str, value: &str) -> StorageResult<()> {
        (**self).put(namespace, value)
    }
}

/// Process-local store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every stored value, as if the host cleared app data.
    pub fn clear(&self) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of namespaces holding a value.
    pub fn len(&self) -> usize {
        self.values.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, namespace: &str) -> StorageResult<Option<String>> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(namespace).cloned())
    }

    fn put(&self, namespace: &str, value: &str) -> StorageResult<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(namespace.to_string(), value.to_string());
        Ok(())
    }
}
