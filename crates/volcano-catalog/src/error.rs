//! Error types for the `volcano-catalog` crate.

use volcano_types::EntryId;

/// Errors that can occur during catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No catalog entry has the given id.
    #[error("volcano not found: {0}")]
    UnknownEntry(EntryId),

    /// The entry has no player photo at the given index.
    #[error("volcano {id} has no photo at index {index}")]
    UnknownPhoto {
        /// The entry that was addressed.
        id: EntryId,
        /// The out-of-range index.
        index: usize,
    },
}
