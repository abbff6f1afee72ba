//! The persisted volcano catalog.
//!
//! Entries (including their favorite flag and player photos) and the viewed
//! set are stored under separate keys. Each falls back to its default on its
//! own when the stored form is missing or unreadable, and both are written
//! back on load.

use std::collections::BTreeSet;

use volcano_store::KeyValueStore;
use volcano_types::{EntryId, ProgressSource, VolcanoEntry};

use crate::error::CatalogError;
use crate::starting_catalog::starting_catalog;

/// Store key for the entry list.
pub const KEY_VOLCANOES: &str = "vw.volcanoes";

/// Store key for the viewed-entry set.
pub const KEY_VIEWED_IDS: &str = "vw.viewed.ids";

/// Volcano entries plus the player's viewed set and favorites.
#[derive(Debug)]
pub struct VolcanoCatalog<S> {
    store: S,
    entries: Vec<VolcanoEntry>,
    viewed: BTreeSet<EntryId>,
}

impl<S: KeyValueStore> VolcanoCatalog<S> {
    /// Restore the catalog from `store`, defaulting each key independently.
    pub fn load(store: S) -> Self {
        let entries = store.load_or_default(KEY_VOLCANOES, starting_catalog);
        let viewed = store.load_or_default(KEY_VIEWED_IDS, BTreeSet::new);

        let catalog = Self {
            store,
            entries,
            viewed,
        };
        catalog.save_entries();
        catalog.save_viewed();

        tracing::info!(
            entries = catalog.entries.len(),
            viewed = catalog.viewed.len(),
            "Volcano catalog loaded"
        );
        catalog
    }

    /// All entries, in catalog order.
    pub fn entries(&self) -> &[VolcanoEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn total_count(&self) -> u64 {
        u64::try_from(self.entries.len()).unwrap_or(u64::MAX)
    }

    /// Look up an entry by id.
    pub fn entry(&self, id: EntryId) -> Option<&VolcanoEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries the player starred.
    pub fn favorites(&self) -> Vec<&VolcanoEntry> {
        self.entries.iter().filter(|e| e.is_favorite).collect()
    }

    /// Entries the player has opened.
    pub const fn viewed_ids(&self) -> &BTreeSet<EntryId> {
        &self.viewed
    }

    /// Record that `id` was viewed. Returns `false` if it already was.
    ///
    /// The id is recorded even if it is not in the catalog; the viewed set
    /// mirrors what the screens reported.
    pub fn mark_viewed(&mut self, id: EntryId) -> bool {
        let inserted = self.viewed.insert(id);
        if inserted {
            tracing::debug!(%id, "Volcano marked viewed");
            self.save_viewed();
        }
        inserted
    }

    /// Flip the favorite flag of `id`, returning the new value.
    pub fn toggle_favorite(&mut self, id: EntryId) -> Result<bool, CatalogError> {
        let entry = self.entry_mut(id)?;
        entry.is_favorite = !entry.is_favorite;
        let now = entry.is_favorite;
        self.save_entries();
        Ok(now)
    }

    /// Set the favorite flag of `id`. Persists only when it changes.
    pub fn set_favorite(&mut self, id: EntryId, is_favorite: bool) -> Result<(), CatalogError> {
        let entry = self.entry_mut(id)?;
        if entry.is_favorite != is_favorite {
            entry.is_favorite = is_favorite;
            self.save_entries();
        }
        Ok(())
    }

    /// Total number of player photos across all entries.
    pub fn total_user_photos_count(&self) -> usize {
        self.entries.iter().map(|e| e.user_photos.len()).sum()
    }

    /// Append a player photo to `id`, returning its index.
    pub fn add_user_photo(&mut self, id: EntryId, data: Vec<u8>) -> Result<usize, CatalogError> {
        let entry = self.entry_mut(id)?;
        entry.user_photos.push(data);
        let index = entry.user_photos.len().saturating_sub(1);
        tracing::debug!(%id, index, "User photo added");
        self.save_entries();
        Ok(index)
    }

    /// Remove the player photo at `index`; later photos shift down by one.
    pub fn remove_user_photo(&mut self, id: EntryId, index: usize) -> Result<(), CatalogError> {
        let entry = self.entry_mut(id)?;
        if index >= entry.user_photos.len() {
            return Err(CatalogError::UnknownPhoto { id, index });
        }
        entry.user_photos.remove(index);
        tracing::debug!(%id, index, "User photo removed");
        self.save_entries();
        Ok(())
    }

    /// Overwrite the player photo at `index`.
    pub fn replace_user_photo(
        &mut self,
        id: EntryId,
        index: usize,
        data: Vec<u8>,
    ) -> Result<(), CatalogError> {
        let entry = self.entry_mut(id)?;
        let slot = entry
            .user_photos
            .get_mut(index)
            .ok_or(CatalogError::UnknownPhoto { id, index })?;
        *slot = data;
        self.save_entries();
        Ok(())
    }

    /// Replace every player photo of `id`.
    pub fn set_user_photos(
        &mut self,
        id: EntryId,
        photos: Vec<Vec<u8>>,
    ) -> Result<(), CatalogError> {
        let entry = self.entry_mut(id)?;
        entry.user_photos = photos;
        self.save_entries();
        Ok(())
    }

    fn entry_mut(&mut self, id: EntryId) -> Result<&mut VolcanoEntry, CatalogError> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(CatalogError::UnknownEntry(id))
    }

    fn save_entries(&self) {
        self.store.save_best_effort(KEY_VOLCANOES, &self.entries);
    }

    fn save_viewed(&self) {
        self.store.save_best_effort(KEY_VIEWED_IDS, &self.viewed);
    }
}

impl<S: KeyValueStore> ProgressSource for VolcanoCatalog<S> {
    fn total_entry_count(&self) -> u64 {
        self.total_count()
    }

    fn viewed_entry_ids(&self) -> BTreeSet<EntryId> {
        self.viewed.clone()
    }
}
