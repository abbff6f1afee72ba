//! The capability the rewards engine consumes from the volcano catalog.

use std::collections::BTreeSet;

use crate::ids::EntryId;

/// Read-only view of catalog progress.
///
/// The engine never merges viewed sets across calls: whatever
/// [`viewed_entry_ids`](ProgressSource::viewed_entry_ids) returns is taken as
/// authoritative and replaces the engine's mirror.
pub trait ProgressSource {
    /// Total number of entries in the catalog.
    fn total_entry_count(&self) -> u64;

    /// Entries the player has viewed so far.
    fn viewed_entry_ids(&self) -> BTreeSet<EntryId>;
}

/// A fixed [`ProgressSource`], for callers that already hold the numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticProgress {
    /// Catalog size reported to the engine.
    pub total: u64,
    /// Viewed set reported to the engine.
    pub viewed: BTreeSet<EntryId>,
}

impl StaticProgress {
    /// Build a source from a catalog size and a list of viewed ids.
    pub fn new(total: u64, viewed: impl IntoIterator<Item = i64>) -> Self {
        Self {
            total,
            viewed: viewed.into_iter().map(EntryId).collect(),
        }
    }
}

impl ProgressSource for StaticProgress {
    fn total_entry_count(&self) -> u64 {
        self.total
    }

    fn viewed_entry_ids(&self) -> BTreeSet<EntryId> {
        self.viewed.clone()
    }
}
