//! Colour-mode preference, gated on owning the volcanic theme.
//!
//! The preference reads the `volcanicThemeUnlocked` flag that
//! [`RewardsEngine`](crate::RewardsEngine) writes after every mutation, so
//! it only needs a store handle, never the engine itself.

use volcano_store::KeyValueStore;
use volcano_types::LavaMode;

use crate::state::KEY_VOLCANIC_THEME_UNLOCKED;

/// Store key for the selected [`LavaMode`].
pub const KEY_LAVA_MODE: &str = "lavaMode";

/// The player's colour mode.
#[derive(Debug)]
pub struct ThemePreferences<S> {
    store: S,
    mode: LavaMode,
    dark_unlocked: bool,
}

impl<S: KeyValueStore> ThemePreferences<S> {
    /// Read the stored mode and the unlock flag.
    ///
    /// A stored `Dark` with the theme locked falls back to `Light`.
    pub fn load(store: S) -> Self {
        let mode = store.load_or_default(KEY_LAVA_MODE, LavaMode::default);
        let mut prefs = Self {
            store,
            mode,
            dark_unlocked: false,
        };
        prefs.refresh();
        prefs
    }

    /// The active mode.
    pub const fn mode(&self) -> LavaMode {
        self.mode
    }

    /// Whether dark mode is still locked.
    pub const fn is_dark_locked(&self) -> bool {
        !self.dark_unlocked
    }

    /// Switch to `mode`. Returns `false`, changing nothing, if `mode` is
    /// `Dark` while the theme is locked.
    pub fn request_set_mode(&mut self, mode: LavaMode) -> bool {
        if mode == LavaMode::Dark && self.is_dark_locked() {
            tracing::debug!("Dark mode requested while locked");
            return false;
        }
        self.mode = mode;
        self.store.save_best_effort(KEY_LAVA_MODE, &self.mode);
        tracing::debug!(mode = mode.display_name(), "Theme mode set");
        true
    }

    /// Re-read the unlock flag, e.g. after a purchase.
    pub fn refresh(&mut self) {
        self.dark_unlocked = self
            .store
            .load_or_default(KEY_VOLCANIC_THEME_UNLOCKED, || false);

        if self.mode == LavaMode::Dark && self.is_dark_locked() {
            tracing::warn!("Stored dark mode without the volcanic theme, reverting to light");
            self.mode = LavaMode::Light;
            self.store.save_best_effort(KEY_LAVA_MODE, &self.mode);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use volcano_store::MemoryStore;

    use super::*;
    use crate::RewardsEngine;

    #[test]
    fn fresh_store_is_light_and_locked() {
        let prefs = ThemePreferences::load(MemoryStore::new());
        assert_eq!(prefs.mode(), LavaMode::Light);
        assert!(prefs.is_dark_locked());
    }

    #[test]
    fn dark_refused_while_locked() {
        let store = MemoryStore::new();
        let mut prefs = ThemePreferences::load(store.clone());
        assert!(!prefs.request_set_mode(LavaMode::Dark));
        assert_eq!(prefs.mode(), LavaMode::Light);
        assert!(store.get_raw(KEY_LAVA_MODE).unwrap().is_none());
        assert!(prefs.request_set_mode(LavaMode::Light));
    }

    #[test]
    fn purchase_unlocks_dark_after_refresh() {
        let store = MemoryStore::new();
        let mut engine = RewardsEngine::load(store.clone());
        let mut prefs = ThemePreferences::load(store.clone());

        engine.add_coins(500);
        assert!(engine.purchase("theme_volcanic"));
        assert!(prefs.is_dark_locked());

        prefs.refresh();
        assert!(!prefs.is_dark_locked());
        assert!(prefs.request_set_mode(LavaMode::Dark));
        assert_eq!(
            store.get_raw(KEY_LAVA_MODE).unwrap().as_deref(),
            Some("\"dark\"")
        );

        let reloaded = ThemePreferences::load(store);
        assert_eq!(reloaded.mode(), LavaMode::Dark);
    }

    #[test]
    fn stale_dark_mode_reverts_when_locked() {
        let store = MemoryStore::new();
        store.set_json(KEY_LAVA_MODE, &LavaMode::Dark).unwrap();
        store.set_json(KEY_VOLCANIC_THEME_UNLOCKED, &false).unwrap();

        let prefs = ThemePreferences::load(store.clone());
        assert_eq!(prefs.mode(), LavaMode::Light);
        assert_eq!(
            store.get_raw(KEY_LAVA_MODE).unwrap().as_deref(),
            Some("\"light\"")
        );
    }
}
