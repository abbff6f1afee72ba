//! The six persisted slices of reward state.
//!
//! Each slice is an independent JSON blob under a stable key. Loading
//! decodes every key on its own, so one corrupt slice resets to its default
//! while the other five are kept. Saving always writes all six: the store
//! holds a full snapshot, never a diff.
//!
//! # Key Layout
//!
//! | Key | Slice |
//! |-----|-------|
//! | `rw.v3.wallet` | [`CoinWallet`] |
//! | `rw.v3.progress` | [`PlayerProgress`] |
//! | `rw.v3.achievements` | `Vec<Achievement>` |
//! | `rw.v3.shop` | `Vec<ShopItem>` |
//! | `rw.v3.opened.history.ids` | `BTreeSet<EntryId>` |
//! | `rw.v3.opened.map.ids` | `BTreeSet<EntryId>` |
//! | `volcanicThemeUnlocked` | `bool`, derived from the shop |

use std::collections::BTreeSet;

use volcano_store::KeyValueStore;
use volcano_types::{
    Achievement, CoinWallet, EntryId, PlayerProgress, ShopItem, THEME_VOLCANIC_ITEM_ID,
    default_achievements, default_shop_items,
};

/// Store key for the wallet slice.
pub const KEY_WALLET: &str = "rw.v3.wallet";
/// Store key for the progress slice.
pub const KEY_PROGRESS: &str = "rw.v3.progress";
/// Store key for the achievement list.
pub const KEY_ACHIEVEMENTS: &str = "rw.v3.achievements";
/// Store key for the shop list.
pub const KEY_SHOP: &str = "rw.v3.shop";
/// Store key for the opened-history set.
pub const KEY_OPENED_HISTORY: &str = "rw.v3.opened.history.ids";
/// Store key for the opened-map set.
pub const KEY_OPENED_MAP: &str = "rw.v3.opened.map.ids";
/// Store key of the side-flag read by theme selection.
pub const KEY_VOLCANIC_THEME_UNLOCKED: &str = "volcanicThemeUnlocked";

/// Everything the rewards engine persists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardsState {
    pub(crate) wallet: CoinWallet,
    pub(crate) progress: PlayerProgress,
    pub(crate) achievements: Vec<Achievement>,
    pub(crate) shop_items: Vec<ShopItem>,
    pub(crate) opened_history_ids: BTreeSet<EntryId>,
    pub(crate) opened_map_ids: BTreeSet<EntryId>,
}

impl Default for RewardsState {
    fn default() -> Self {
        Self {
            wallet: CoinWallet::default(),
            progress: PlayerProgress::default(),
            achievements: default_achievements(),
            shop_items: default_shop_items(),
            opened_history_ids: BTreeSet::new(),
            opened_map_ids: BTreeSet::new(),
        }
    }
}

impl RewardsState {
    /// Decode every slice from `store`, defaulting each one independently.
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        Self {
            wallet: store.load_or_default(KEY_WALLET, CoinWallet::default),
            progress: store.load_or_default(KEY_PROGRESS, PlayerProgress::default),
            achievements: store.load_or_default(KEY_ACHIEVEMENTS, default_achievements),
            shop_items: store.load_or_default(KEY_SHOP, default_shop_items),
            opened_history_ids: store.load_or_default(KEY_OPENED_HISTORY, BTreeSet::new),
            opened_map_ids: store.load_or_default(KEY_OPENED_MAP, BTreeSet::new),
        }
    }

    /// Write all six slices. Failures are logged and absorbed.
    ///
    /// Returns whether every slice was written.
    pub fn save<S: KeyValueStore>(&self, store: &S) -> bool {
        let results = [
            store.save_best_effort(KEY_WALLET, &self.wallet),
            store.save_best_effort(KEY_PROGRESS, &self.progress),
            store.save_best_effort(KEY_ACHIEVEMENTS, &self.achievements),
            store.save_best_effort(KEY_SHOP, &self.shop_items),
            store.save_best_effort(KEY_OPENED_HISTORY, &self.opened_history_ids),
            store.save_best_effort(KEY_OPENED_MAP, &self.opened_map_ids),
        ];
        results.iter().all(|ok| *ok)
    }

    /// The coin wallet.
    pub const fn wallet(&self) -> &CoinWallet {
        &self.wallet
    }

    /// The progress streams.
    pub const fn progress(&self) -> &PlayerProgress {
        &self.progress
    }

    /// The achievement list.
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    /// The shop list.
    pub fn shop_items(&self) -> &[ShopItem] {
        &self.shop_items
    }

    /// Volcanoes whose full history was opened.
    pub const fn opened_history_ids(&self) -> &BTreeSet<EntryId> {
        &self.opened_history_ids
    }

    /// Volcanoes whose map was opened.
    pub const fn opened_map_ids(&self) -> &BTreeSet<EntryId> {
        &self.opened_map_ids
    }

    /// Whether the volcanic theme is owned, derived from the shop.
    pub fn owns_volcanic_theme(&self) -> bool {
        self.shop_items
            .iter()
            .any(|item| item.id == THEME_VOLCANIC_ITEM_ID && item.is_owned)
    }
}
