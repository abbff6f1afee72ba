//! The rewards engine: operations and read surface.
//!
//! Every mutator follows the same shape: evaluate, mutate, persist, then
//! return a [`RewardResult`]. Persistence is best effort. A failed write is
//! logged and the in-memory state stays authoritative for the session.

use std::collections::BTreeSet;

use volcano_store::KeyValueStore;
use volcano_types::{
    Achievement, CoinWallet, EntryId, ItemCategory, PlayerProgress, ProgressSource, RewardResult,
    ShopItem, THEME_VOLCANIC_ITEM_ID,
};

use crate::PurchaseError;
use crate::evaluation::Unlocks;
use crate::state::{KEY_VOLCANIC_THEME_UNLOCKED, RewardsState};

/// Owner of all reward state.
///
/// `S` is a cheap store handle; the engine writes its six slices plus the
/// theme flag through it after every mutation.
#[derive(Debug)]
pub struct RewardsEngine<S> {
    store: S,
    state: RewardsState,
}

impl<S: KeyValueStore> RewardsEngine<S> {
    /// Restore state from `store` and write the full snapshot back.
    ///
    /// Missing or unreadable slices start from their defaults. The theme
    /// flag is rewritten from shop ownership so that it always agrees with
    /// the shop.
    pub fn load(store: S) -> Self {
        let state = RewardsState::load(&store);
        let engine = Self { store, state };
        engine.persist();

        tracing::info!(
            balance = engine.state.wallet.balance,
            lifetime = engine.state.progress.lifetime_coins_earned,
            unlocked = engine.achievements_unlocked_count(),
            "Rewards state loaded"
        );
        engine
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Record that `entry_id` was viewed and recompute the view-driven
    /// achievements.
    ///
    /// The viewed mirror is replaced by whatever `source` reports; the
    /// engine itself never merges sets. `entry_id` is only logged.
    pub fn register_view<P>(&mut self, entry_id: EntryId, source: &P) -> RewardResult
    where
        P: ProgressSource + ?Sized,
    {
        let viewed = source.viewed_entry_ids();
        let total = source.total_entry_count();
        tracing::debug!(%entry_id, viewed = viewed.len(), total, "Registering view");

        let unlocks = self.state.apply_views(viewed, total);
        self.finish(unlocks, 0)
    }

    /// Record that the full history of `id` was opened.
    ///
    /// A repeated id returns [`RewardResult::none`] and writes nothing.
    pub fn register_opened_history(&mut self, id: EntryId) -> RewardResult {
        match self.state.open_history(id) {
            Some(unlocks) => {
                let opened = self.state.opened_history_ids.len();
                tracing::debug!(%id, opened, "History opened");
                self.finish(unlocks, 0)
            }
            None => RewardResult::none(),
        }
    }

    /// Record that the map of `id` was opened.
    ///
    /// A repeated id returns [`RewardResult::none`] and writes nothing.
    pub fn register_opened_map(&mut self, id: EntryId) -> RewardResult {
        match self.state.open_map(id) {
            Some(unlocks) => {
                let opened = self.state.opened_map_ids.len();
                tracing::debug!(%id, opened, "Map opened");
                self.finish(unlocks, 0)
            }
            None => RewardResult::none(),
        }
    }

    /// Credit a direct coin award.
    ///
    /// Amounts of zero or less are ignored. The award counts toward
    /// lifetime earnings and `treasure_hunter`.
    pub fn add_coins(&mut self, amount: i64) -> RewardResult {
        let Ok(amount) = u64::try_from(amount) else {
            tracing::debug!(amount, "Ignoring negative coin award");
            return RewardResult::none();
        };
        if amount == 0 {
            return RewardResult::none();
        }

        let unlocks = self.state.award_coins(amount);
        tracing::debug!(
            amount,
            balance = self.state.wallet.balance,
            "Coins credited"
        );
        self.finish(unlocks, amount)
    }

    /// Buy `item_id`. Returns whether the purchase went through.
    ///
    /// See [`purchase_detailed`](Self::purchase_detailed) for the reason a
    /// purchase was refused.
    pub fn purchase(&mut self, item_id: &str) -> bool {
        self.purchase_detailed(item_id).is_ok()
    }

    /// Buy `item_id`, reporting the outcome.
    ///
    /// A refused purchase changes nothing and writes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError`] if the item is unknown, already owned, or
    /// costs more than the current balance.
    pub fn purchase_detailed(&mut self, item_id: &str) -> Result<RewardResult, PurchaseError> {
        let unlocks = self.state.buy(item_id).inspect_err(|e| {
            tracing::debug!(item = item_id, reason = %e, "Purchase refused");
        })?;

        if item_id == THEME_VOLCANIC_ITEM_ID {
            tracing::info!("Volcanic theme purchased, dark mode unlocked");
        }
        Ok(self.finish(unlocks, 0))
    }

    /// Persist and build the caller-facing result.
    fn finish(&self, unlocks: Unlocks, direct_coins: u64) -> RewardResult {
        for id in &unlocks.ids {
            tracing::info!(achievement = %id, "Achievement unlocked");
        }
        self.persist();
        unlocks.into_result(direct_coins)
    }

    /// Write the six slices and the derived theme flag.
    fn persist(&self) -> bool {
        let slices = self.state.save(&self.store);
        let theme_unlocked = self.state.owns_volcanic_theme();
        let flag = self
            .store
            .save_best_effort(KEY_VOLCANIC_THEME_UNLOCKED, &theme_unlocked);
        slices && flag
    }

    // -----------------------------------------------------------------------
    // Read surface
    // -----------------------------------------------------------------------

    /// The full in-memory state.
    pub const fn state(&self) -> &RewardsState {
        &self.state
    }

    /// Current wallet balance.
    pub const fn balance(&self) -> u64 {
        self.state.wallet.balance
    }

    /// The coin wallet.
    pub const fn wallet(&self) -> &CoinWallet {
        &self.state.wallet
    }

    /// Viewed mirror and lifetime earnings.
    pub const fn progress(&self) -> &PlayerProgress {
        &self.state.progress
    }

    /// All achievements, in display order.
    pub fn achievements(&self) -> &[Achievement] {
        &self.state.achievements
    }

    /// Look up an achievement by id.
    pub fn achievement(&self, id: &str) -> Option<&Achievement> {
        self.state.achievements.iter().find(|a| a.id == id)
    }

    /// How many achievements are unlocked.
    pub fn achievements_unlocked_count(&self) -> usize {
        self.state
            .achievements
            .iter()
            .filter(|a| a.is_unlocked)
            .count()
    }

    /// All shop items, in display order.
    pub fn shop_items(&self) -> &[ShopItem] {
        &self.state.shop_items
    }

    /// Look up a shop item by id.
    pub fn shop_item(&self, id: &str) -> Option<&ShopItem> {
        self.state.shop_items.iter().find(|i| i.id == id)
    }

    /// Shop items on one shelf.
    pub fn items_in_category(&self, category: ItemCategory) -> Vec<&ShopItem> {
        self.state
            .shop_items
            .iter()
            .filter(|i| i.category == category)
            .collect()
    }

    /// Ids of every owned item.
    pub fn owned_item_ids(&self) -> BTreeSet<String> {
        self.state
            .shop_items
            .iter()
            .filter(|i| i.is_owned)
            .map(|i| i.id.clone())
            .collect()
    }

    /// Volcanoes whose history was opened.
    pub const fn opened_history_ids(&self) -> &BTreeSet<EntryId> {
        &self.state.opened_history_ids
    }

    /// Volcanoes whose map was opened.
    pub const fn opened_map_ids(&self) -> &BTreeSet<EntryId> {
        &self.state.opened_map_ids
    }

    /// Whether the volcanic theme is owned.
    pub fn volcanic_theme_unlocked(&self) -> bool {
        self.state.owns_volcanic_theme()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use volcano_store::{MemoryStore, StoreError};
    use volcano_types::StaticProgress;

    use super::*;
    use crate::state::{KEY_SHOP, KEY_WALLET};

    fn theme_flag(store: &MemoryStore) -> Option<String> {
        store.get_raw(KEY_VOLCANIC_THEME_UNLOCKED).unwrap()
    }

    /// A store whose writes always fail.
    #[derive(Debug, Default)]
    struct ReadOnlyStore {
        inner: MemoryStore,
    }

    impl KeyValueStore for ReadOnlyStore {
        fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get_raw(key)
        }

        fn set_raw(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io {
                key: key.to_owned(),
                source: std::io::Error::other("read-only"),
            })
        }

        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[test]
    fn load_writes_snapshot_and_flag() {
        let store = MemoryStore::new();
        let engine = RewardsEngine::load(store.clone());
        assert_eq!(engine.balance(), 0);
        assert_eq!(store.len().unwrap(), 7);
        assert_eq!(theme_flag(&store).as_deref(), Some("false"));
    }

    #[test]
    fn view_result_reports_payout() {
        let mut engine = RewardsEngine::load(MemoryStore::new());
        let result = engine.register_view(EntryId(0), &StaticProgress::new(8, [0]));
        assert_eq!(result.coins_delta, 100);
        assert_eq!(result.unlocked_achievement_ids, vec!["first_explorer"]);
        assert_eq!(engine.achievements_unlocked_count(), 1);
    }

    #[test]
    fn non_positive_awards_are_ignored() {
        let store = MemoryStore::new();
        let mut engine = RewardsEngine::load(store.clone());
        store.remove(KEY_WALLET).unwrap();

        assert!(engine.add_coins(0).is_none());
        assert!(engine.add_coins(-50).is_none());
        assert_eq!(engine.balance(), 0);
        // No write happened.
        assert!(store.get_raw(KEY_WALLET).unwrap().is_none());
    }

    #[test]
    fn add_coins_reports_direct_amount() {
        let mut engine = RewardsEngine::load(MemoryStore::new());
        let result = engine.add_coins(40);
        assert_eq!(result.coins_delta, 40);
        assert!(result.unlocked_achievement_ids.is_empty());
        assert_eq!(engine.progress().lifetime_coins_earned, 40);
    }

    #[test]
    fn theme_purchase_flips_flag() {
        let store = MemoryStore::new();
        let mut engine = RewardsEngine::load(store.clone());
        engine.add_coins(500);

        let result = engine.purchase_detailed("theme_volcanic").unwrap();
        assert_eq!(result.coins_delta, 300);
        assert_eq!(result.unlocked_achievement_ids, vec!["first_purchase"]);
        assert_eq!(theme_flag(&store).as_deref(), Some("true"));
        assert_eq!(
            engine.owned_item_ids(),
            BTreeSet::from(["theme_volcanic".to_owned()])
        );
    }

    #[test]
    fn refused_purchase_writes_nothing() {
        let store = MemoryStore::new();
        let mut engine = RewardsEngine::load(store.clone());
        store.remove(KEY_SHOP).unwrap();

        assert!(!engine.purchase("crown_of_fire"));
        assert!(store.get_raw(KEY_SHOP).unwrap().is_none());
    }

    #[test]
    fn read_surface_lookups() {
        let engine = RewardsEngine::load(MemoryStore::new());
        assert_eq!(engine.achievements().len(), 7);
        assert_eq!(engine.shop_items().len(), 8);
        assert_eq!(
            engine.achievement("historian").map(|a| a.reward_coins),
            Some(800)
        );
        assert_eq!(engine.shop_item("cap_volcano").map(|i| i.price), Some(250));
        assert!(engine.achievement("nope").is_none());
        assert_eq!(engine.items_in_category(ItemCategory::Theme).len(), 1);
        assert_eq!(engine.items_in_category(ItemCategory::Badge).len(), 4);
        assert_eq!(engine.items_in_category(ItemCategory::AvatarItem).len(), 3);
    }

    #[test]
    fn write_failures_are_absorbed() {
        let mut engine = RewardsEngine::load(ReadOnlyStore::default());
        assert!(!engine.persist());

        engine.add_coins(500);
        assert!(engine.purchase("theme_volcanic"));
        assert!(engine.register_opened_map(EntryId(1)).is_none());

        assert_eq!(engine.balance(), 300);
        assert!(engine.volcanic_theme_unlocked());
        assert_eq!(engine.opened_map_ids().len(), 1);
    }
}
