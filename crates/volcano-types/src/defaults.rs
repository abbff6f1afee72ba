//! Canonical definitions used on first launch.
//!
//! These are the values a fresh profile starts from, and the values a slice
//! falls back to when its persisted snapshot is missing or unreadable.

use crate::enums::{AchievementKind, ItemCategory, ItemRarity};
use crate::structs::{Achievement, ShopItem};

/// Number of volcanoes in the bundled catalog. Ceiling for `master_explorer`.
pub const DEFAULT_VOLCANO_COUNT: u64 = 8;

/// Shop item whose ownership unlocks the dark theme.
pub const THEME_VOLCANIC_ITEM_ID: &str = "theme_volcanic";

/// The achievement list of a fresh profile.
pub fn default_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "first_explorer",
            "First Explorer",
            "View your first volcano",
            "🌋",
            100,
            AchievementKind::FirstExplorer,
        ),
        Achievement::new(
            "volcano_enthusiast",
            "Volcano Enthusiast",
            "Explore 5 different volcanoes",
            "🔥",
            500,
            AchievementKind::VolcanoEnthusiast { count: 5 },
        ),
        Achievement::new(
            "master_explorer",
            "Master Explorer",
            "Discover all volcanoes",
            "⭐",
            3000,
            AchievementKind::MasterExplorer {
                total: DEFAULT_VOLCANO_COUNT,
            },
        ),
        Achievement::new(
            "historian",
            "Historian",
            "Open Full History on 5 volcanoes",
            "📖",
            800,
            AchievementKind::Historian { count: 5 },
        ),
        Achievement::new(
            "cartographer",
            "Cartographer",
            "Open Location/Map on 5 volcanoes",
            "🗺️",
            800,
            AchievementKind::Cartographer { count: 5 },
        ),
        Achievement::new(
            "first_purchase",
            "First Purchase",
            "Buy any item in the shop",
            "🛍️",
            300,
            AchievementKind::FirstPurchase,
        ),
        // Pays nothing: unlocking it only reports the id.
        Achievement::new(
            "treasure_hunter",
            "Treasure Hunter",
            "Collect 1000 lava coins",
            "🏆",
            0,
            AchievementKind::TreasureHunter { target: 1000 },
        ),
    ]
}

/// The shop catalog of a fresh profile.
pub fn default_shop_items() -> Vec<ShopItem> {
    use ItemCategory::{AvatarItem, Badge, Theme};
    use ItemRarity::{Common, Epic, Legendary, Rare};

    vec![
        ShopItem::new(
            THEME_VOLCANIC_ITEM_ID,
            "Volcanic Theme",
            "Exclusive dark theme with lava effects",
            500,
            Theme,
            Rare,
            "🌋",
        ),
        ShopItem::new(
            "badge_explorer",
            "Explorer Badge",
            "Show off your explorer status",
            200,
            Badge,
            Common,
            "🏅",
        ),
        ShopItem::new(
            "shirt_volcano_lovers",
            "Volcano Lovers Shirt",
            "Virtual shirt for volcano enthusiasts",
            300,
            AvatarItem,
            Common,
            "👕",
        ),
        ShopItem::new(
            "badge_lava_master",
            "Lava Master Badge",
            "Legendary badge for true masters",
            1000,
            Badge,
            Legendary,
            "🔥",
        ),
        ShopItem::new(
            "cap_volcano",
            "Volcano Cap",
            "Stylish cap for volcano explorers",
            250,
            AvatarItem,
            Common,
            "🧢",
        ),
        ShopItem::new(
            "frame_golden_photo",
            "Golden Photo Frame",
            "Premium frame for your best photos",
            400,
            Badge,
            Rare,
            "🖼️",
        ),
        ShopItem::new(
            "badge_crystal_volcano",
            "Crystal Volcano Badge",
            "Rare crystalline badge",
            750,
            Badge,
            Epic,
            "💎",
        ),
        ShopItem::new(
            "crown_of_fire",
            "Crown of Fire",
            "Ultimate volcanic crown",
            2000,
            AvatarItem,
            Legendary,
            "👑",
        ),
    ]
}
