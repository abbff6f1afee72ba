//! The key-value store abstraction and its JSON codec.
//!
//! Backends only move strings. The provided methods layer `serde_json` on
//! top so that every owner of a key encodes and decodes the same way.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// A string-valued key-value store with JSON helpers.
///
/// Implementations are cheap handles: cloning one yields another view of
/// the same backing data, so several owners can share a store.
pub trait KeyValueStore {
    /// Read the raw value stored at `key`, if any.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the raw value stored at `key`.
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Serialize `value` as JSON and store it at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if serialization fails, or the
    /// backend's error if the write fails.
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json)
    }

    /// Read the value at `key` and deserialize it from JSON.
    ///
    /// Returns `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if the stored value does not
    /// decode as `T`, or the backend's error if the read fails.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        self.get_raw(key)?
            .map(|raw| serde_json::from_str(&raw).map_err(StoreError::from))
            .transpose()
    }

    /// Read `key`, falling back to `default` when it is absent or unreadable.
    ///
    /// Decode and read failures are logged and never surface to the caller.
    fn load_or_default<T, F>(&self, key: &str, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.get_json(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                tracing::debug!(key, "No persisted value, using default");
                default()
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "Persisted value unreadable, using default");
                default()
            }
        }
    }

    /// Store `value` at `key`, logging instead of failing.
    ///
    /// Returns whether the write succeeded.
    fn save_best_effort<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match self.set_json(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to persist value");
                false
            }
        }
    }
}
