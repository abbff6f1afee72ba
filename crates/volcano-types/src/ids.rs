//! Type-safe identifier for volcano catalog entries.
//!
//! Catalog entries are numbered with small integers. Wrapping them keeps
//! entry ids from being mixed up with coin amounts or progress counters,
//! while `#[serde(transparent)]` keeps the persisted form a bare number.

use serde::{Deserialize, Serialize};

/// Unique identifier for a volcano in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub i64);

impl core::fmt::Display for EntryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntryId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<EntryId> for i64 {
    fn from(id: EntryId) -> Self {
        id.0
    }
}
