use super::{KeyValueStore, StorageError};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-process store used for `--ephemeral` sessions and tests.
///
/// Clones share the same entries, so a test can keep a handle and inspect
/// what the catalog wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry. Does not count as a write.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.lock().insert(key.to_string(), value.to_string());
        store
    }

    /// Number of `set` and `remove` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().remove(key);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let store = MemoryKvStore::new();
        let observer = store.clone();
        store.set("movies", "[]").unwrap();
        assert_eq!(observer.get("movies").unwrap().as_deref(), Some("[]"));
        assert_eq!(observer.write_count(), 1);
    }

    #[test]
    fn seeded_entry_is_not_a_write() {
        let store = MemoryKvStore::with_entry("movies", "{not json");
        assert_eq!(store.write_count(), 0);
        store.remove("movies").unwrap();
        assert_eq!(store.get("movies").unwrap(), None);
        assert_eq!(store.write_count(), 1);
    }
}
