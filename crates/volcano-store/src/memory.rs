//! In-process key-value store.
//!
//! Backs tests and any session that does not need to outlive the process.
//! Clones share the same map.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// A shared, in-memory [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All keys currently present, in sorted order.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let entries = self.entries.read().map_err(poisoned("keys"))?;
        Ok(entries.keys().cloned().collect())
    }

    /// Number of keys currently present.
    pub fn len(&self) -> Result<usize, StoreError> {
        let entries = self.entries.read().map_err(poisoned("len"))?;
        Ok(entries.len())
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        self.len().map(|n| n == 0)
    }
}

/// Map a poisoned lock onto [`StoreError::LockPoisoned`], logging it.
fn poisoned<G>(op: &'static str) -> impl FnOnce(PoisonError<G>) -> StoreError {
    move |e| {
        tracing::error!(op, error = %e, "Memory store lock poisoned");
        StoreError::LockPoisoned(op)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().map_err(poisoned("read"))?;
        Ok(entries.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(poisoned("write"))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(poisoned("remove"))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set_raw("lavaMode", "\"dark\"").unwrap();
        assert_eq!(
            other.get_raw("lavaMode").unwrap().as_deref(),
            Some("\"dark\"")
        );
    }

    #[test]
    fn set_replaces_and_remove_deletes() {
        let store = MemoryStore::new();
        store.set_raw("k", "1").unwrap();
        store.set_raw("k", "2").unwrap();
        assert_eq!(store.get_raw("k").unwrap().as_deref(), Some("2"));
        assert_eq!(store.len().unwrap(), 1);

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get_raw("k").unwrap(), None);
    }

    #[test]
    fn keys_are_sorted() {
        let store = MemoryStore::new();
        store.set_raw("rw.v3.wallet", "{}").unwrap();
        store.set_raw("lavaMode", "\"light\"").unwrap();
        assert_eq!(store.keys().unwrap(), vec!["lavaMode", "rw.v3.wallet"]);
    }
}
