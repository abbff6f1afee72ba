//! Error types for the storage layer.
//!
//! All errors are propagated via [`StoreError`], which wraps the underlying
//! I/O and [`serde_json`] errors with the key the operation touched.

/// Errors that can occur in the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file for a key failed.
    #[error("I/O error on key {key}: {source}")]
    Io {
        /// The key being read or written.
        key: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Opening the store's directory failed.
    #[error("cannot open store directory {path}: {source}")]
    Open {
        /// The directory that could not be created or read.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The key cannot be stored under its own file name.
    #[error("invalid store key {key:?}")]
    InvalidKey {
        /// The rejected key.
        key: String,
    },

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The in-memory map's lock was poisoned by a panicking writer.
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}
