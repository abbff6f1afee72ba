//! Coins, achievements and shop for the Volcano World app.
//!
//! The [`RewardsEngine`] owns every piece of reward state: the coin wallet,
//! the progress streams, the achievement list, the shop and the two
//! opened-content sets. Its mutators are the only way to change that state,
//! and each of them runs evaluate, mutate and persist to completion before
//! returning.
//!
//! # Architecture
//!
//! The crate provides four modules:
//!
//! - [`state`] -- The six persisted slices ([`RewardsState`]) and their keys.
//! - [`evaluation`] -- Achievement recompute rules and the unlock protocol.
//! - [`engine`] -- The [`RewardsEngine`]: operations and read surface.
//! - [`theme`] -- [`ThemePreferences`], gated on owning the volcanic theme.
//!
//! # Unlock Protocol
//!
//! For any achievement:
//!
//! ```text
//! progress_current >= progress_target && !is_unlocked
//!     => is_unlocked = true
//!        wallet.balance        += reward_coins
//!        lifetime_coins_earned += reward_coins
//!        result.unlocked       += id
//! ```
//!
//! An unlocked achievement is never re-locked, so its reward is paid once.
//! `treasure_hunter` is configured with a zero reward and its own recompute
//! path never credits coins; unlocking it only reports the id.
//!
//! # Usage
//!
//! ```
//! use volcano_rewards::RewardsEngine;
//! use volcano_store::MemoryStore;
//!
//! let mut engine = RewardsEngine::load(MemoryStore::new());
//! engine.add_coins(500);
//! assert!(engine.purchase("theme_volcanic"));
//!
//! // The first purchase pays 300.
//! assert_eq!(engine.balance(), 300);
//! assert!(engine.volcanic_theme_unlocked());
//! ```

pub mod engine;
pub mod evaluation;
pub mod state;
pub mod theme;

// Re-export primary types at crate root.
pub use engine::RewardsEngine;
pub use state::RewardsState;
pub use theme::ThemePreferences;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Why a purchase was refused.
///
/// [`RewardsEngine::purchase`] collapses these into `false`;
/// [`RewardsEngine::purchase_detailed`] reports them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PurchaseError {
    /// No shop item has this id.
    #[error("unknown shop item: {0}")]
    UnknownItem(String),

    /// The item was bought before.
    #[error("shop item already owned: {0}")]
    AlreadyOwned(String),

    /// The wallet cannot cover the price.
    #[error("cannot afford {item_id}: price {price}, balance {balance}")]
    InsufficientFunds {
        /// The item being bought.
        item_id: String,
        /// Its price.
        price: u64,
        /// The wallet balance at the time of the attempt.
        balance: u64,
    },
}
