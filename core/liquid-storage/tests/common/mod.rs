//! Shared test doubles for storage tests.

#![allow(dead_code)]

use liquid_storage::{KeyValueStore, MemoryStore, StorageError, StorageResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Wraps a `MemoryStore` and counts reads and writes. Writes are slowed down
/// so concurrent callers pile up inside the critical section.
#[derive(Default)]
pub struct CountingStore {
    pub inner: MemoryStore,
    pub gets: AtomicUsize,
    pub puts: AtomicUsize,
    pub put_delay: Duration,
}

impl CountingStore {
    pub fn with_put_delay(delay: Duration) -> Self {
        Self {
            put_delay: delay,
            ..Self::default()
        }
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for CountingStore {
    fn get(&self, namespace: &str) -> StorageResult<Option<String>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(namespace)
    }

    fn put(&self, namespace: &str, value: &str) -> StorageResult<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(self.put_delay);
        self.inner.put(namespace, value)
    }
}

/// A store whose writes always fail, like a read-only preferences file.
#[derive(Default)]
pub struct ReadOnlyStore {
    pub puts: AtomicUsize,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _namespace: &str) -> StorageResult<Option<String>> {
        Ok(None)
    }

    fn put(&self, _namespace: &str, _value: &str) -> StorageResult<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Unavailable("read-only".into()))
    }
}

/// A store whose reads fail.
pub struct BrokenReadStore;

impl KeyValueStore for BrokenReadStore {
    fn get(&self, _namespace: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Io(std::io::Error::other("disk gone")))
    }

    fn put(&self, _namespace: &str, _value: &str) -> StorageResult<()> {
        Ok(())
    }
}
