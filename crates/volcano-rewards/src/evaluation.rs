//! Achievement recompute rules and the unlock protocol.
//!
//! Everything here is pure state manipulation on [`RewardsState`]: no I/O,
//! no logging beyond `debug!`. The engine wraps each transition with
//! persistence.
//!
//! # Recompute Rules
//!
//! | Kind | Target | Current |
//! |------|--------|---------|
//! | `FirstExplorer` | 1 | 1 if anything viewed, else 0 |
//! | `VolcanoEnthusiast{count}` | `count` | `min(count, viewed)` |
//! | `MasterExplorer{total}` | `min(total, catalog size)` | `min(target, viewed)` |
//! | `Historian{count}` | `count` | `min(count, histories opened)` |
//! | `Cartographer{count}` | `count` | `min(count, maps opened)` |
//! | `FirstPurchase` | 1 | 1 once anything is bought |
//! | `TreasureHunter{target}` | `target` | `min(target, lifetime coins)` |
//!
//! Every path ends by re-evaluating `TreasureHunter`, because any payout
//! made along the way raises lifetime earnings.

use std::collections::BTreeSet;

use volcano_types::{Achievement, AchievementKind, EntryId, RewardResult};

use crate::PurchaseError;
use crate::state::RewardsState;

// ---------------------------------------------------------------------------
// Unlock protocol
// ---------------------------------------------------------------------------

/// The achievements unlocked and coins paid out during one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Unlocks {
    /// Reward coins owed for the unlocks, not yet credited.
    pub coins: u64,
    /// Ids unlocked, in order.
    pub ids: Vec<String>,
}

impl Unlocks {
    /// Turn into the caller-facing result, adding coins credited directly.
    pub fn into_result(self, direct_coins: u64) -> RewardResult {
        RewardResult {
            coins_delta: direct_coins.saturating_add(self.coins),
            unlocked_achievement_ids: self.ids,
        }
    }
}

/// Unlock `achievement` if its progress has reached its target.
///
/// The reward is added to `unlocks` for the caller to credit. Returns
/// whether the achievement transitioned. Calling it again after the
/// transition does nothing.
pub fn unlock_if_ready(achievement: &mut Achievement, unlocks: &mut Unlocks) -> bool {
    if achievement.is_unlocked || !achievement.is_complete() {
        return false;
    }

    achievement.is_unlocked = true;
    unlocks.coins = unlocks.coins.saturating_add(achievement.reward_coins);
    unlocks.ids.push(achievement.id.clone());

    tracing::debug!(
        achievement = %achievement.id,
        reward = achievement.reward_coins,
        "Achievement unlocked"
    );
    true
}

/// Saturating `usize` to `u64` for set sizes.
fn count_of<T>(set: &BTreeSet<T>) -> u64 {
    u64::try_from(set.len()).unwrap_or(u64::MAX)
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

impl RewardsState {
    /// Add `amount` to both the wallet and lifetime earnings.
    pub(crate) const fn credit(&mut self, amount: u64) {
        self.wallet.balance = self.wallet.balance.saturating_add(amount);
        self.progress.lifetime_coins_earned =
            self.progress.lifetime_coins_earned.saturating_add(amount);
    }

    /// Pay out the rewards collected in `unlocks`, then re-check
    /// `TreasureHunter` against the new lifetime total.
    fn settle(&mut self, mut unlocks: Unlocks) -> Unlocks {
        self.credit(unlocks.coins);
        unlocks.ids.extend(self.recompute_treasure_hunter());
        unlocks
    }

    /// Re-evaluate `TreasureHunter` against lifetime earnings.
    ///
    /// Unlocking on this path credits nothing, whatever the achievement's
    /// configured reward.
    pub(crate) fn recompute_treasure_hunter(&mut self) -> Vec<String> {
        let lifetime = self.progress.lifetime_coins_earned;
        let mut unlocked = Vec::new();

        for achievement in &mut self.achievements {
            if let AchievementKind::TreasureHunter { target } = achievement.kind {
                achievement.progress_target = target;
                achievement.progress_current = target.min(lifetime);
                if achievement.is_complete() && !achievement.is_unlocked {
                    achievement.is_unlocked = true;
                    tracing::debug!(
                        achievement = %achievement.id,
                        lifetime,
                        "Achievement unlocked"
                    );
                    unlocked.push(achievement.id.clone());
                }
            }
        }
        unlocked
    }

    /// Recompute every achievement `select` picks out against `observed`,
    /// then settle.
    ///
    /// `select` returns the requirement of a matching kind.
    fn recompute_counted<F>(&mut self, select: F, observed: u64) -> Unlocks
    where
        F: Fn(AchievementKind) -> Option<u64>,
    {
        let mut unlocks = Unlocks::default();
        for achievement in &mut self.achievements {
            if let Some(need) = select(achievement.kind) {
                achievement.progress_target = need;
                achievement.progress_current = need.min(observed);
                unlock_if_ready(achievement, &mut unlocks);
            }
        }
        self.settle(unlocks)
    }

    /// Replace the viewed set and recompute the view-driven achievements.
    ///
    /// The unlock check then runs over the whole list, not only the kinds
    /// that were recomputed.
    pub fn apply_views(&mut self, viewed: BTreeSet<EntryId>, catalog_total: u64) -> Unlocks {
        self.progress.viewed_entry_ids = viewed;
        let viewed_count = count_of(&self.progress.viewed_entry_ids);

        let mut unlocks = Unlocks::default();
        for achievement in &mut self.achievements {
            match achievement.kind {
                AchievementKind::FirstExplorer => {
                    achievement.progress_target = 1;
                    achievement.progress_current = u64::from(viewed_count > 0);
                }
                AchievementKind::VolcanoEnthusiast { count } => {
                    achievement.progress_target = count;
                    achievement.progress_current = count.min(viewed_count);
                }
                AchievementKind::MasterExplorer { total } => {
                    let target = total.min(catalog_total);
                    achievement.progress_target = target;
                    achievement.progress_current = target.min(viewed_count);
                }
                _ => {}
            }
            unlock_if_ready(achievement, &mut unlocks);
        }
        self.settle(unlocks)
    }

    /// Record an opened history page.
    ///
    /// Returns `None` if `id` was already recorded; nothing is recomputed.
    pub fn open_history(&mut self, id: EntryId) -> Option<Unlocks> {
        if !self.opened_history_ids.insert(id) {
            return None;
        }
        let opened = count_of(&self.opened_history_ids);
        Some(self.recompute_counted(
            |kind| match kind {
                AchievementKind::Historian { count } => Some(count),
                _ => None,
            },
            opened,
        ))
    }

    /// Record an opened map.
    ///
    /// Returns `None` if `id` was already recorded; nothing is recomputed.
    pub fn open_map(&mut self, id: EntryId) -> Option<Unlocks> {
        if !self.opened_map_ids.insert(id) {
            return None;
        }
        let opened = count_of(&self.opened_map_ids);
        Some(self.recompute_counted(
            |kind| match kind {
                AchievementKind::Cartographer { count } => Some(count),
                _ => None,
            },
            opened,
        ))
    }

    /// Credit a direct coin award and re-check `TreasureHunter`.
    ///
    /// The award itself is not part of the returned [`Unlocks::coins`].
    pub fn award_coins(&mut self, amount: u64) -> Unlocks {
        self.credit(amount);
        Unlocks {
            coins: 0,
            ids: self.recompute_treasure_hunter(),
        }
    }

    /// Buy `item_id`: debit the price, mark it owned, recompute
    /// `FirstPurchase`.
    ///
    /// Nothing changes when the purchase is refused.
    pub fn buy(&mut self, item_id: &str) -> Result<Unlocks, PurchaseError> {
        let item = self
            .shop_items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| PurchaseError::UnknownItem(item_id.to_owned()))?;

        if item.is_owned {
            return Err(PurchaseError::AlreadyOwned(item_id.to_owned()));
        }

        if !self.wallet.can_afford(item.price) {
            return Err(PurchaseError::InsufficientFunds {
                item_id: item_id.to_owned(),
                price: item.price,
                balance: self.wallet.balance,
            });
        }

        item.is_owned = true;
        self.wallet.balance = self.wallet.balance.saturating_sub(item.price);
        tracing::debug!(
            item = item_id,
            remaining = self.wallet.balance,
            "Shop item purchased"
        );

        Ok(self.recompute_counted(
            |kind| match kind {
                AchievementKind::FirstPurchase => Some(1),
                _ => None,
            },
            1,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ids(values: &[i64]) -> BTreeSet<EntryId> {
        values.iter().copied().map(EntryId).collect()
    }

    fn achievement<'a>(state: &'a RewardsState, id: &str) -> &'a Achievement {
        state.achievements.iter().find(|a| a.id == id).unwrap()
    }

    fn assert_progress_bounded(state: &RewardsState) {
        for a in &state.achievements {
            assert!(
                a.progress_current <= a.progress_target,
                "{} exceeds its target",
                a.id
            );
        }
    }

    // -----------------------------------------------------------------------
    // unlock_if_ready
    // -----------------------------------------------------------------------

    #[test]
    fn unlock_is_idempotent() {
        let mut a = Achievement::new("a", "A", "", "", 50, AchievementKind::FirstExplorer);
        a.progress_current = 1;
        let mut unlocks = Unlocks::default();

        assert!(unlock_if_ready(&mut a, &mut unlocks));
        assert!(!unlock_if_ready(&mut a, &mut unlocks));

        assert_eq!(unlocks.coins, 50);
        assert_eq!(unlocks.ids, vec!["a"]);
    }

    #[test]
    fn incomplete_achievement_stays_locked() {
        let kind = AchievementKind::Historian { count: 5 };
        let mut a = Achievement::new("a", "A", "", "", 50, kind);
        a.progress_current = 4;
        let mut unlocks = Unlocks::default();
        assert!(!unlock_if_ready(&mut a, &mut unlocks));
        assert!(!a.is_unlocked);
        assert_eq!(unlocks, Unlocks::default());
    }

    #[test]
    fn into_result_adds_direct_coins() {
        let unlocks = Unlocks {
            coins: 300,
            ids: vec!["first_purchase".to_owned()],
        };
        let result = unlocks.into_result(20);
        assert_eq!(result.coins_delta, 320);
        assert_eq!(result.unlocked_achievement_ids, vec!["first_purchase"]);
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    #[test]
    fn first_view_unlocks_first_explorer() {
        let mut state = RewardsState::default();
        let unlocks = state.apply_views(ids(&[0]), 8);

        assert_eq!(unlocks.ids, vec!["first_explorer"]);
        assert_eq!(unlocks.coins, 100);
        assert_eq!(state.wallet.balance, 100);
        assert_eq!(state.progress.lifetime_coins_earned, 100);
        assert_eq!(
            achievement(&state, "volcano_enthusiast").progress_current,
            1
        );
        assert_eq!(achievement(&state, "master_explorer").progress_current, 1);
    }

    #[test]
    fn viewed_set_is_replaced_not_merged() {
        let mut state = RewardsState::default();
        state.apply_views(ids(&[0, 1, 2]), 8);
        state.apply_views(ids(&[5]), 8);

        assert_eq!(state.progress.viewed_entry_ids, ids(&[5]));
        assert_eq!(
            achievement(&state, "volcano_enthusiast").progress_current,
            1
        );
        // Unlocks are sticky even though the mirror shrank.
        assert!(achievement(&state, "first_explorer").is_unlocked);
    }

    #[test]
    fn five_views_unlock_enthusiast() {
        let mut state = RewardsState::default();
        state.apply_views(ids(&[0, 1, 2, 3]), 8);
        let unlocks = state.apply_views(ids(&[0, 1, 2, 3, 4]), 8);

        assert_eq!(unlocks.ids, vec!["volcano_enthusiast"]);
        assert_eq!(state.wallet.balance, 600);
    }

    #[test]
    fn master_explorer_target_tracks_catalog_size() {
        let mut state = RewardsState::default();
        state.apply_views(ids(&[0, 1]), 3);
        let master = achievement(&state, "master_explorer");
        assert_eq!(master.progress_target, 3);
        assert_eq!(master.progress_current, 2);
        assert!(!master.is_unlocked);

        let unlocks = state.apply_views(ids(&[0, 1, 2]), 3);
        assert!(unlocks.ids.contains(&"master_explorer".to_owned()));
        assert_progress_bounded(&state);
    }

    #[test]
    fn master_explorer_target_never_exceeds_configured_total() {
        let mut state = RewardsState::default();
        state.apply_views(ids(&[0]), 50);
        assert_eq!(achievement(&state, "master_explorer").progress_target, 8);
    }

    #[test]
    fn all_views_unlock_every_view_achievement_and_treasure() {
        let mut state = RewardsState::default();
        let unlocks = state.apply_views(ids(&[0, 1, 2, 3, 4, 5, 6, 7]), 8);

        assert_eq!(
            unlocks.ids,
            vec![
                "first_explorer",
                "volcano_enthusiast",
                "master_explorer",
                "treasure_hunter"
            ]
        );
        assert_eq!(unlocks.coins, 3600);
        assert_eq!(state.wallet.balance, 3600);
        assert_progress_bounded(&state);
    }

    // -----------------------------------------------------------------------
    // History and map
    // -----------------------------------------------------------------------

    #[test]
    fn duplicate_history_open_is_ignored() {
        let mut state = RewardsState::default();
        assert!(state.open_history(EntryId(1)).is_some());
        let before = state.clone();
        assert!(state.open_history(EntryId(1)).is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn fifth_history_unlocks_historian() {
        let mut state = RewardsState::default();
        for id in 1..5 {
            let unlocks = state.open_history(EntryId(id)).unwrap();
            assert!(unlocks.ids.is_empty());
        }
        let unlocks = state.open_history(EntryId(5)).unwrap();
        assert_eq!(unlocks.ids, vec!["historian"]);
        assert_eq!(state.wallet.balance, 800);
        assert_eq!(achievement(&state, "historian").progress_current, 5);
    }

    #[test]
    fn sixth_history_keeps_progress_clamped() {
        let mut state = RewardsState::default();
        for id in 0..6 {
            state.open_history(EntryId(id));
        }
        assert_eq!(achievement(&state, "historian").progress_current, 5);
        assert_eq!(state.wallet.balance, 800);
    }

    #[test]
    fn maps_drive_cartographer_only() {
        let mut state = RewardsState::default();
        for id in 0..5 {
            state.open_map(EntryId(id));
        }
        assert!(achievement(&state, "cartographer").is_unlocked);
        assert!(!achievement(&state, "historian").is_unlocked);
        assert_eq!(achievement(&state, "historian").progress_current, 0);
        assert_eq!(state.opened_map_ids.len(), 5);
        assert!(state.opened_history_ids.is_empty());
    }

    // -----------------------------------------------------------------------
    // Coins and purchases
    // -----------------------------------------------------------------------

    #[test]
    fn award_tracks_lifetime() {
        let mut state = RewardsState::default();
        let unlocks = state.award_coins(250);
        assert!(unlocks.ids.is_empty());
        assert_eq!(state.wallet.balance, 250);
        assert_eq!(state.progress.lifetime_coins_earned, 250);
        assert_eq!(achievement(&state, "treasure_hunter").progress_current, 250);
    }

    #[test]
    fn treasure_hunter_pays_nothing_on_its_own_path() {
        let mut state = RewardsState::default();
        for a in &mut state.achievements {
            if a.id == "treasure_hunter" {
                a.reward_coins = 999;
            }
        }
        let unlocks = state.award_coins(1000);
        assert_eq!(unlocks.ids, vec!["treasure_hunter"]);
        assert_eq!(unlocks.coins, 0);
        assert_eq!(state.wallet.balance, 1000);
    }

    #[test]
    fn award_saturates_instead_of_overflowing() {
        let mut state = RewardsState::default();
        state.award_coins(u64::MAX);
        state.award_coins(10);
        assert_eq!(state.wallet.balance, u64::MAX);
        assert_eq!(state.progress.lifetime_coins_earned, u64::MAX);
    }

    #[test]
    fn buy_rejections_leave_state_untouched() {
        let mut state = RewardsState::default();
        state.award_coins(499);
        let before = state.clone();

        assert_eq!(
            state.buy("theme_volcanic"),
            Err(PurchaseError::InsufficientFunds {
                item_id: "theme_volcanic".to_owned(),
                price: 500,
                balance: 499,
            })
        );
        assert_eq!(
            state.buy("jetpack"),
            Err(PurchaseError::UnknownItem("jetpack".to_owned()))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn buy_at_exact_balance_then_refuses_repeat() {
        let mut state = RewardsState::default();
        state.award_coins(500);

        let unlocks = state.buy("theme_volcanic").unwrap();
        assert_eq!(unlocks.ids, vec!["first_purchase"]);
        assert_eq!(state.wallet.balance, 300);
        assert!(state.owns_volcanic_theme());

        assert_eq!(
            state.buy("theme_volcanic"),
            Err(PurchaseError::AlreadyOwned("theme_volcanic".to_owned()))
        );
        assert_eq!(state.wallet.balance, 300);
    }

    #[test]
    fn second_purchase_pays_no_second_reward() {
        let mut state = RewardsState::default();
        state.award_coins(1000);
        state.buy("badge_explorer").unwrap();
        let unlocks = state.buy("cap_volcano").unwrap();
        assert!(unlocks.ids.is_empty());
        assert_eq!(state.wallet.balance, 1000 - 200 + 300 - 250);
    }

    #[test]
    fn purchase_payout_can_complete_treasure_hunter() {
        let mut state = RewardsState::default();
        state.award_coins(800);
        let unlocks = state.buy("badge_explorer").unwrap();
        assert_eq!(unlocks.ids, vec!["first_purchase", "treasure_hunter"]);
        assert_eq!(state.progress.lifetime_coins_earned, 1100);
    }
}
