//! Persistent device identifier.
//!
//! The identifier is generated the first time a namespace is requested and
//! then read back from storage on every later process start.
//!
//! # Durability
//!
//! The write result is checked but never retried. When the write fails the
//! generated identifier is still returned and kept in this store's process
//! cache, so every caller in the current process agrees on one value. A
//! later process may not find it and will then generate a new one.

use crate::kv::KeyValueStore;
use liquid_types::DeviceId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

/// Namespace used by the device profile unless configured otherwise.
pub const DEFAULT_NAMESPACE: &str = "io.lqd.UUID";

/// Where a returned identifier came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierOrigin {
    /// Already resolved earlier in this process.
    Cached,
    /// Read back from storage.
    Stored,
    /// Freshly generated. `persisted` is false when the durable write failed.
    Generated { persisted: bool },
}

/// Result of [`IdentifierStore::get_or_create_detailed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierOutcome {
    pub id: DeviceId,
    pub origin: IdentifierOrigin,
}

type Slot = Arc<Mutex<Option<DeviceId>>>;

/// Generates and caches one identifier per namespace.
pub struct IdentifierStore<S> {
    store: S,
    /// One slot per namespace. Holding a slot's lock is the critical section
    /// for reading, generating, and persisting that namespace.
    slots: Mutex<HashMap<String, Slot>>,
}

impl<S: KeyValueStore> IdentifierStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the identifier for `namespace`, generating it if needed.
    pub fn get_or_create(&self, namespace: &str) -> DeviceId {
        self.get_or_create_detailed(namespace).id
    }

    /// Like [`get_or_create`](Self::get_or_create), also reporting whether the
    /// value was cached, read from storage, or generated.
    pub fn get_or_create_detailed(&self, namespace: &str) -> IdentifierOutcome {
        let slot = self.slot(namespace);
        let mut cached = slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(id) = cached.as_ref() {
            return IdentifierOutcome {
                id: id.clone(),
                origin: IdentifierOrigin::Cached,
            };
        }

        if let Some(id) = self.load(namespace) {
            debug!(namespace = %namespace, "Loaded device identifier");
            *cached = Some(id.clone());
            return IdentifierOutcome {
                id,
                origin: IdentifierOrigin::Stored,
            };
        }

        let id = DeviceId::generate();
        let persisted = match self.store.put(namespace, id.as_str()) {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    namespace = %namespace,
                    error = %e,
                    "Failed to persist device identifier; it may change on next launch"
                );
                false
            }
        };
        info!(namespace = %namespace, persisted, "Generated device identifier");

        *cached = Some(id.clone());
        IdentifierOutcome {
            id,
            origin: IdentifierOrigin::Generated { persisted },
        }
    }

    fn slot(&self, namespace: &str) -> Slot {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(namespace.to_string()).or_default())
    }

    /// Reads a stored identifier. Read errors and blank values count as absent.
    fn load(&self, namespace: &str) -> Option<DeviceId> {
        match self.store.get(namespace) {
            Ok(Some(raw)) => match DeviceId::parse(&raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    warn!(namespace = %namespace, "Stored device identifier is blank, regenerating");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(namespace = %namespace, error = %e, "Failed to read device identifier");
                None
            }
        }
    }
}
