//! Persisted key-value storage for the Volcano World rewards system.
//!
//! Every piece of persistent state is an independently keyed JSON blob. A
//! slice that cannot be read falls back to its default without affecting
//! any other key, and writes replace the whole value for a key.
//!
//! # Architecture
//!
//! ```text
//! RewardsEngine / VolcanoCatalog / ThemePreferences
//!     |
//!     +-- set_json / get_json / load_or_default   (KeyValueStore, provided)
//!         |
//!         +-- get_raw / set_raw / remove           (backend)
//!             |-- MemoryStore  (shared in-process map)
//!             +-- FileStore    (one file per key in a directory)
//! ```
//!
//! # Modules
//!
//! - [`kv`] -- The [`KeyValueStore`] trait and its JSON codec helpers
//! - [`memory`] -- In-process [`MemoryStore`]
//! - [`file`] -- Directory-backed [`FileStore`]
//! - [`error`] -- Shared error types

pub mod error;
pub mod file;
pub mod kv;
pub mod memory;

// Re-export primary types for convenience.
pub use error::StoreError;
pub use file::FileStore;
pub use kv::KeyValueStore;
pub use memory::MemoryStore;
