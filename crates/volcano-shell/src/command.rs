//! Shell commands: parsing and execution.
//!
//! # Commands
//!
//! | Command | Effect |
//! |---------|--------|
//! | `status` | Wallet, progress and theme summary |
//! | `view <id>` | Mark a volcano viewed, then register the view |
//! | `history <id>` | Show a volcano's history and register the opened page |
//! | `map <id>` | Show a volcano's location and register the opened map |
//! | `coins <amount>` | Credit a coin award |
//! | `buy <item_id>` | Attempt a purchase |
//! | `shop [category]` | List shop items, optionally one shelf |
//! | `achievements` | List achievements with progress |
//! | `theme <light\|dark>` | Request a colour mode |
//! | `favorite <id>` | Toggle a volcano's favorite flag |

use std::fmt::Display;

use serde_json::{Value, json};
use volcano_catalog::{CatalogError, VolcanoCatalog};
use volcano_rewards::{RewardsEngine, ThemePreferences};
use volcano_store::KeyValueStore;
use volcano_types::{EntryId, ItemCategory, LavaMode, VolcanoEntry};

use crate::error::ShellError;

/// One-line usage summary.
pub const USAGE: &str = "volcano-shell <status | view <id> | history <id> | map <id> | \
                         coins <amount> | buy <item_id> | shop [category] | achievements | \
                         theme <light|dark> | favorite <id>>";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print a summary of the player's state.
    Status,
    /// Mark a volcano viewed and register the view.
    View(EntryId),
    /// Register an opened history page.
    History(EntryId),
    /// Register an opened map.
    Map(EntryId),
    /// Credit a coin award.
    Coins(i64),
    /// Buy a shop item.
    Buy(String),
    /// List shop items, optionally one category.
    Shop(Option<ItemCategory>),
    /// List achievements.
    Achievements,
    /// Request a colour mode.
    Theme(LavaMode),
    /// Toggle a favorite.
    Favorite(EntryId),
}

impl Command {
    /// Parse the arguments following the program name.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Usage`] for unknown commands, wrong arity, or
    /// arguments that do not parse.
    pub fn parse(args: &[&str]) -> Result<Self, ShellError> {
        match args {
            ["status"] => Ok(Self::Status),
            ["view", id] => parse_id(id).map(Self::View),
            ["history", id] => parse_id(id).map(Self::History),
            ["map", id] => parse_id(id).map(Self::Map),
            ["coins", amount] => amount
                .parse()
                .map(Self::Coins)
                .map_err(invalid("coin amount", amount)),
            ["buy", item_id] => Ok(Self::Buy((*item_id).to_owned())),
            ["shop"] => Ok(Self::Shop(None)),
            ["shop", category] => ItemCategory::from_name(category)
                .map(|c| Self::Shop(Some(c)))
                .ok_or_else(|| unknown("shop category", category)),
            ["achievements"] => Ok(Self::Achievements),
            ["theme", mode] => LavaMode::from_name(mode)
                .map(Self::Theme)
                .ok_or_else(|| unknown("theme mode", mode)),
            ["favorite", id] => parse_id(id).map(Self::Favorite),
            [] => Err(ShellError::usage(USAGE)),
            [name, ..] => Err(unknown("command", name)),
        }
    }
}

fn parse_id(raw: &str) -> Result<EntryId, ShellError> {
    raw.parse().map(EntryId).map_err(invalid("volcano id", raw))
}

/// Usage error for an argument that does not parse as `what`.
fn invalid<E: Display>(what: &'static str, raw: &str) -> impl FnOnce(E) -> ShellError {
    move |e| ShellError::usage(format!("not a {what}: {raw} ({e})"))
}

fn unknown(what: &str, raw: &str) -> ShellError {
    ShellError::usage(format!("unknown {what}: {raw}"))
}

/// Look up `id`, failing for volcanoes outside the catalog.
fn known_entry<S: KeyValueStore>(
    catalog: &VolcanoCatalog<S>,
    id: EntryId,
) -> Result<&VolcanoEntry, CatalogError> {
    catalog.entry(id).ok_or(CatalogError::UnknownEntry(id))
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// The catalog, engine and theme preference over one shared store.
#[derive(Debug)]
pub struct Shell<S> {
    catalog: VolcanoCatalog<S>,
    engine: RewardsEngine<S>,
    theme: ThemePreferences<S>,
}

impl<S: KeyValueStore + Clone> Shell<S> {
    /// Load every component from `store`.
    ///
    /// The engine loads before the theme so the theme sees a freshly
    /// derived unlock flag.
    pub fn open(store: S) -> Self {
        let catalog = VolcanoCatalog::load(store.clone());
        let engine = RewardsEngine::load(store.clone());
        let theme = ThemePreferences::load(store);
        Self {
            catalog,
            engine,
            theme,
        }
    }

    /// The rewards engine.
    pub const fn engine(&self) -> &RewardsEngine<S> {
        &self.engine
    }

    /// Execute `command`, returning its JSON output.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Catalog`] for an unknown volcano id.
    pub fn run(&mut self, command: &Command) -> Result<Value, ShellError> {
        tracing::debug!(?command, "Running command");
        match command {
            Command::Status => Ok(self.status()),
            Command::View(id) => {
                let name = known_entry(&self.catalog, *id)?.name.clone();
                self.catalog.mark_viewed(*id);
                let result = self.engine.register_view(*id, &self.catalog);
                Ok(json!({ "volcano": name, "result": result }))
            }
            Command::History(id) => {
                let entry = known_entry(&self.catalog, *id)?;
                let result = self.engine.register_opened_history(*id);
                Ok(json!({
                    "volcano": entry.name,
                    "historical_overview": entry.historical_overview,
                    "eruption_timeline": entry.eruption_timeline,
                    "fascinating_facts": entry.fascinating_facts,
                    "result": result,
                }))
            }
            Command::Map(id) => {
                let entry = known_entry(&self.catalog, *id)?;
                let result = self.engine.register_opened_map(*id);
                Ok(json!({
                    "volcano": entry.name,
                    "geographic": entry.geographic,
                    "result": result,
                }))
            }
            Command::Coins(amount) => {
                let result = self.engine.add_coins(*amount);
                let balance = self.engine.balance();
                Ok(json!({ "result": result, "balance": balance }))
            }
            Command::Buy(item_id) => Ok(self.buy(item_id)),
            Command::Shop(category) => {
                let items = match category {
                    Some(c) => self.engine.items_in_category(*c),
                    None => self.engine.shop_items().iter().collect(),
                };
                let balance = self.engine.balance();
                Ok(json!({ "balance": balance, "items": items }))
            }
            Command::Achievements => Ok(json!({
                "unlocked": self.engine.achievements_unlocked_count(),
                "achievements": self.engine.achievements(),
            })),
            Command::Theme(mode) => {
                let accepted = self.theme.request_set_mode(*mode);
                Ok(json!({ "accepted": accepted, "theme": self.theme_json() }))
            }
            Command::Favorite(id) => {
                let is_favorite = self.catalog.toggle_favorite(*id)?;
                Ok(json!({ "volcano": id, "is_favorite": is_favorite }))
            }
        }
    }

    fn buy(&mut self, item_id: &str) -> Value {
        match self.engine.purchase_detailed(item_id) {
            Ok(result) => {
                self.theme.refresh();
                json!({
                    "purchased": true,
                    "result": result,
                    "balance": self.engine.balance(),
                })
            }
            Err(e) => json!({
                "purchased": false,
                "reason": e.to_string(),
                "balance": self.engine.balance(),
            }),
        }
    }

    fn status(&self) -> Value {
        let favorites: Vec<EntryId> = self.catalog.favorites().iter().map(|e| e.id).collect();
        json!({
            "balance": self.engine.balance(),
            "lifetime_coins_earned": self.engine.progress().lifetime_coins_earned,
            "achievements_unlocked": self.engine.achievements_unlocked_count(),
            "achievements_total": self.engine.achievements().len(),
            "catalog_size": self.catalog.total_count(),
            "viewed": self.catalog.viewed_ids(),
            "favorites": favorites,
            "opened_history": self.engine.opened_history_ids(),
            "opened_map": self.engine.opened_map_ids(),
            "owned_items": self.engine.owned_item_ids(),
            "theme": self.theme_json(),
        })
    }

    fn theme_json(&self) -> Value {
        let mode = self.theme.mode();
        json!({
            "mode": mode,
            "display_name": mode.display_name(),
            "dark_locked": self.theme.is_dark_locked(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use volcano_store::MemoryStore;

    use super::*;

    fn shell() -> Shell<MemoryStore> {
        Shell::open(MemoryStore::new())
    }

    fn buy(item_id: &str) -> Command {
        Command::Buy(item_id.to_owned())
    }

    // -----------------------------------------------------------------------
    // Parsing
    // -----------------------------------------------------------------------

    #[test]
    fn parses_every_command() {
        assert_eq!(Command::parse(&["status"]).unwrap(), Command::Status);
        assert_eq!(
            Command::parse(&["view", "3"]).unwrap(),
            Command::View(EntryId(3))
        );
        assert_eq!(
            Command::parse(&["history", "1"]).unwrap(),
            Command::History(EntryId(1))
        );
        assert_eq!(
            Command::parse(&["map", "0"]).unwrap(),
            Command::Map(EntryId(0))
        );
        assert_eq!(
            Command::parse(&["coins", "-5"]).unwrap(),
            Command::Coins(-5)
        );
        assert_eq!(
            Command::parse(&["buy", "cap_volcano"]).unwrap(),
            Command::Buy("cap_volcano".to_owned())
        );
        assert_eq!(Command::parse(&["shop"]).unwrap(), Command::Shop(None));
        assert_eq!(
            Command::parse(&["shop", "avatar_item"]).unwrap(),
            Command::Shop(Some(ItemCategory::AvatarItem))
        );
        assert_eq!(
            Command::parse(&["achievements"]).unwrap(),
            Command::Achievements
        );
        assert_eq!(
            Command::parse(&["theme", "dark"]).unwrap(),
            Command::Theme(LavaMode::Dark)
        );
        assert_eq!(
            Command::parse(&["favorite", "7"]).unwrap(),
            Command::Favorite(EntryId(7))
        );
    }

    #[test]
    fn rejects_bad_input() {
        for args in [
            &[][..],
            &["fly"][..],
            &["view"][..],
            &["view", "x"][..],
            &["coins", "lots"][..],
            &["shop", "hats"][..],
            &["theme", "sepia"][..],
            &["status", "extra"][..],
        ] {
            assert!(
                matches!(Command::parse(args), Err(ShellError::Usage { .. })),
                "{args:?} should be rejected"
            );
        }
    }

    // -----------------------------------------------------------------------
    // Execution
    // -----------------------------------------------------------------------

    #[test]
    fn view_marks_catalog_and_pays() {
        let mut shell = shell();
        let out = shell.run(&Command::View(EntryId(0))).unwrap();
        assert_eq!(out["volcano"], "Mount Vesuvius");
        assert_eq!(out["result"]["coins_delta"], 100);
        assert_eq!(
            out["result"]["unlocked_achievement_ids"][0],
            "first_explorer"
        );

        let status = shell.run(&Command::Status).unwrap();
        assert_eq!(status["viewed"], json!([0]));
        assert_eq!(status["balance"], 100);
    }

    #[test]
    fn view_of_unknown_volcano_fails() {
        let mut shell = shell();
        let err = shell.run(&Command::View(EntryId(42))).unwrap_err();
        assert!(matches!(err, ShellError::Catalog { .. }));
        assert_eq!(shell.engine().balance(), 0);
    }

    #[test]
    fn history_and_map_of_unknown_volcano_fail() {
        let mut shell = shell();
        for id in 100..105 {
            let err = shell.run(&Command::History(EntryId(id))).unwrap_err();
            assert!(matches!(err, ShellError::Catalog { .. }));
            let err = shell.run(&Command::Map(EntryId(id))).unwrap_err();
            assert!(matches!(err, ShellError::Catalog { .. }));
        }
        let engine = shell.engine();
        assert!(engine.opened_history_ids().is_empty());
        assert!(engine.opened_map_ids().is_empty());
        assert!(!engine.achievement("historian").unwrap().is_unlocked);
        assert!(!engine.achievement("cartographer").unwrap().is_unlocked);
        assert_eq!(engine.balance(), 0);
    }

    #[test]
    fn history_shows_timeline_and_map_shows_location() {
        let mut shell = shell();
        let history = shell.run(&Command::History(EntryId(1))).unwrap();
        assert_eq!(history["volcano"], "Mount Fuji");
        assert_eq!(history["eruption_timeline"][1]["vei"], "VEI 5");
        assert_eq!(history["result"]["coins_delta"], 0);

        let map = shell.run(&Command::Map(EntryId(2))).unwrap();
        assert_eq!(map["geographic"]["country"], "Indonesia");
        assert_eq!(shell.engine().opened_map_ids().len(), 1);
    }

    #[test]
    fn buying_theme_unlocks_dark_mode() {
        let mut shell = shell();
        let refused = shell.run(&Command::Theme(LavaMode::Dark)).unwrap();
        assert_eq!(refused["accepted"], false);
        assert_eq!(refused["theme"]["mode"], "light");

        shell.run(&Command::Coins(500)).unwrap();
        let bought = shell.run(&buy("theme_volcanic")).unwrap();
        assert_eq!(bought["purchased"], true);
        assert_eq!(bought["balance"], 300);

        let accepted = shell.run(&Command::Theme(LavaMode::Dark)).unwrap();
        assert_eq!(accepted["accepted"], true);
        assert_eq!(accepted["theme"]["display_name"], "Lava Dark");
    }

    #[test]
    fn status_reports_theme_state_only() {
        let mut shell = shell();
        let status = shell.run(&Command::Status).unwrap();
        let theme = status["theme"].as_object().unwrap();
        assert!(!theme.contains_key("accepted"));
        assert_eq!(theme["mode"], "light");
        assert_eq!(theme["dark_locked"], true);
    }

    #[test]
    fn refused_purchase_reports_reason() {
        let mut shell = shell();
        let out = shell.run(&buy("crown_of_fire")).unwrap();
        assert_eq!(out["purchased"], false);
        assert_eq!(
            out["reason"],
            "cannot afford crown_of_fire: price 2000, balance 0"
        );
    }

    #[test]
    fn shop_filters_by_category() {
        let mut shell = shell();
        let all = shell.run(&Command::Shop(None)).unwrap();
        assert_eq!(all["items"].as_array().unwrap().len(), 8);

        let themes = shell
            .run(&Command::Shop(Some(ItemCategory::Theme)))
            .unwrap();
        let items = themes["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], "theme_volcanic");
    }

    #[test]
    fn favorite_toggles() {
        let mut shell = shell();
        let on = shell.run(&Command::Favorite(EntryId(1))).unwrap();
        assert_eq!(on["is_favorite"], true);
        let off = shell.run(&Command::Favorite(EntryId(1))).unwrap();
        assert_eq!(off["is_favorite"], false);
    }

    #[test]
    fn state_survives_reopen() {
        let store = MemoryStore::new();
        {
            let mut shell = Shell::open(store.clone());
            for id in 0..5 {
                shell.run(&Command::History(EntryId(id))).unwrap();
            }
        }
        let mut shell = Shell::open(store);
        let out = shell.run(&Command::Achievements).unwrap();
        assert_eq!(out["unlocked"], 1);
        assert_eq!(shell.engine().balance(), 800);
    }
}
