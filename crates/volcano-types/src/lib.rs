//! Shared type definitions for the Volcano World rewards system.
//!
//! This crate is the single source of truth for the entities persisted by the
//! rewards engine and the volcano catalog. It performs no I/O; the store and
//! engine crates build on top of it.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe wrapper for catalog entry identifiers
//! - [`enums`] -- Achievement kinds, shop categories and rarities, theme modes
//! - [`structs`] -- Wallet, progress, achievements, shop items, catalog entries
//! - [`defaults`] -- Canonical achievement list and shop catalog
//! - [`progress`] -- The [`ProgressSource`] capability consumed by the engine

pub mod defaults;
pub mod enums;
pub mod ids;
pub mod progress;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use defaults::{
    DEFAULT_VOLCANO_COUNT, THEME_VOLCANIC_ITEM_ID, default_achievements, default_shop_items,
};
pub use enums::{AchievementKind, ItemCategory, ItemRarity, LavaMode};
pub use ids::EntryId;
pub use progress::{ProgressSource, StaticProgress};
pub use structs::{
    Achievement, CoinWallet, EruptionEvent, GeographicData, PlayerProgress, RewardResult, ShopItem,
    VolcanoEntry, VolcanoStatus,
};
