//! Core entity structs persisted by the rewards engine and the catalog.
//!
//! Field order is fixed and every collection is ordered (`BTreeSet`,
//! `Vec`), so the JSON produced for a value is canonical and diffs cleanly
//! between snapshots.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::enums::{AchievementKind, ItemCategory, ItemRarity};
use crate::ids::EntryId;

// ---------------------------------------------------------------------------
// Wallet and progress
// ---------------------------------------------------------------------------

/// The player's spendable coins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinWallet {
    /// Current spendable balance.
    pub balance: u64,
}

impl CoinWallet {
    /// A wallet holding `balance` coins.
    pub const fn new(balance: u64) -> Self {
        Self { balance }
    }

    /// Whether the wallet can pay `price`.
    pub const fn can_afford(&self, price: u64) -> bool {
        self.balance >= price
    }
}

/// Progress streams that feed the achievements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProgress {
    /// Mirror of the catalog's viewed set, replaced on every view.
    pub viewed_entry_ids: BTreeSet<EntryId>,
    /// Every coin ever credited. Never decreases.
    pub lifetime_coins_earned: u64,
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

/// A single achievement and its progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Stable identifier, unique within the list.
    pub id: String,
    /// Display title.
    pub title: String,
    /// One-line description of what unlocks it.
    pub subtitle: String,
    /// Icon shown next to the title.
    pub emoji: String,
    /// Coins paid out once, when the achievement unlocks.
    pub reward_coins: u64,
    /// What the achievement measures.
    pub kind: AchievementKind,
    /// Whether it has been unlocked. Never goes back to `false`.
    pub is_unlocked: bool,
    /// Current progress, clamped to `progress_target` by every recompute.
    pub progress_current: u64,
    /// Live target.
    pub progress_target: u64,
}

impl Achievement {
    /// Create a locked achievement with zero progress.
    ///
    /// The initial target is the kind's configured requirement.
    pub fn new(
        id: &str,
        title: &str,
        subtitle: &str,
        emoji: &str,
        reward_coins: u64,
        kind: AchievementKind,
    ) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            subtitle: subtitle.to_owned(),
            emoji: emoji.to_owned(),
            reward_coins,
            kind,
            is_unlocked: false,
            progress_current: 0,
            progress_target: kind.requirement(),
        }
    }

    /// Whether current progress has reached the target.
    pub const fn is_complete(&self) -> bool {
        self.progress_current >= self.progress_target
    }
}

// ---------------------------------------------------------------------------
// Shop
// ---------------------------------------------------------------------------

/// An item that can be bought with coins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    /// Stable identifier, unique within the shop.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Price in coins.
    pub price: u64,
    /// Shelf the item sits on.
    pub category: ItemCategory,
    /// Rarity tier.
    pub rarity: ItemRarity,
    /// Icon.
    pub emoji: String,
    /// Whether the player owns it. Set once by a purchase.
    pub is_owned: bool,
}

impl ShopItem {
    /// Create an unowned shop item.
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        price: u64,
        category: ItemCategory,
        rarity: ItemRarity,
        emoji: &str,
    ) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            description: description.to_owned(),
            price,
            category,
            rarity,
            emoji: emoji.to_owned(),
            is_owned: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog entries
// ---------------------------------------------------------------------------

/// Eruptive status of a volcano.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolcanoStatus {
    /// Whether the volcano is considered active.
    pub is_active: bool,
    /// Summit altitude, as displayed (e.g. `1281m`).
    pub altitude: String,
    /// Last eruption, as displayed (e.g. `1944`).
    pub last_eruption: String,
    /// Volcano type (e.g. `Stratovolcano`).
    pub volcano_type: String,
}

/// Where a volcano is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeographicData {
    /// Latitude, as displayed.
    pub latitude: String,
    /// Longitude, as displayed.
    pub longitude: String,
    /// Country or region.
    pub country: String,
}

/// A dated eruption on a volcano's timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EruptionEvent {
    /// Year or year range, as displayed (e.g. `1707–1708`).
    pub year: String,
    /// Volcanic Explosivity Index, as displayed (e.g. `VEI 5`).
    pub vei: String,
    /// What happened.
    pub description: String,
}

/// One volcano in the catalog.
///
/// Content fields default to empty when absent from the persisted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolcanoEntry {
    /// Catalog identifier.
    pub id: EntryId,
    /// Display name.
    pub name: String,
    /// Short introduction.
    #[serde(default)]
    pub overview: String,
    /// Legends attached to the volcano.
    #[serde(default)]
    pub mythology: String,
    /// Whether the player starred this volcano.
    pub is_favorite: bool,
    /// Eruptive status.
    pub status: VolcanoStatus,
    /// Location.
    pub geographic: GeographicData,
    /// Headline facts shown on the detail page.
    #[serde(default)]
    pub quick_facts: Vec<String>,
    /// Notable eruptions, oldest first.
    #[serde(default)]
    pub eruption_timeline: Vec<EruptionEvent>,
    /// Body of the full history page.
    #[serde(default)]
    pub historical_overview: String,
    /// Longer fact list on the full history page.
    #[serde(default)]
    pub fascinating_facts: Vec<String>,
    /// Names of the bundled photos.
    #[serde(default)]
    pub photos: Vec<String>,
    /// Photos the player attached, as raw image bytes.
    #[serde(default)]
    pub user_photos: Vec<Vec<u8>>,
}

// ---------------------------------------------------------------------------
// Operation results
// ---------------------------------------------------------------------------

/// What a rewards operation did to the wallet and achievements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardResult {
    /// Coins credited to the wallet by the operation (direct plus payouts).
    pub coins_delta: u64,
    /// Achievements unlocked by the operation, in unlock order.
    pub unlocked_achievement_ids: Vec<String>,
}

impl RewardResult {
    /// The result of an operation that changed nothing.
    pub const fn none() -> Self {
        Self {
            coins_delta: 0,
            unlocked_achievement_ids: Vec::new(),
        }
    }

    /// Whether the operation had no visible effect.
    pub const fn is_none(&self) -> bool {
        self.coins_delta == 0 && self.unlocked_achievement_ids.is_empty()
    }
}
