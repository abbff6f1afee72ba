//! Enumeration types for the rewards system.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Achievement kinds
// ---------------------------------------------------------------------------

/// What an achievement measures, together with its configured requirement.
///
/// The payload is the configured requirement. The live target an
/// achievement is judged against is denormalized into
/// [`Achievement::progress_target`](crate::Achievement::progress_target),
/// which the engine rewrites on every recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AchievementKind {
    /// View any volcano.
    FirstExplorer,
    /// View `count` distinct volcanoes.
    VolcanoEnthusiast {
        /// Number of distinct volcanoes required.
        count: u64,
    },
    /// View every volcano, capped at `total`.
    MasterExplorer {
        /// Configured ceiling; the live target is `min(total, catalog size)`.
        total: u64,
    },
    /// Open the full history page of `count` volcanoes.
    Historian {
        /// Number of distinct history pages required.
        count: u64,
    },
    /// Open the map of `count` volcanoes.
    Cartographer {
        /// Number of distinct maps required.
        count: u64,
    },
    /// Buy anything in the shop.
    FirstPurchase,
    /// Earn `target` coins over the lifetime of the profile.
    TreasureHunter {
        /// Lifetime coins required.
        target: u64,
    },
}

impl AchievementKind {
    /// The configured requirement for this kind.
    ///
    /// Unit kinds require a single occurrence.
    pub const fn requirement(self) -> u64 {
        match self {
            Self::FirstExplorer | Self::FirstPurchase => 1,
            Self::VolcanoEnthusiast { count }
            | Self::Historian { count }
            | Self::Cartographer { count } => count,
            Self::MasterExplorer { total } => total,
            Self::TreasureHunter { target } => target,
        }
    }
}

// ---------------------------------------------------------------------------
// Shop
// ---------------------------------------------------------------------------

/// Shop shelf an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// App colour themes.
    Theme,
    /// Profile badges and frames.
    Badge,
    /// Wearables for the avatar.
    AvatarItem,
}

impl ItemCategory {
    /// Every category, in shelf order.
    pub const ALL: [Self; 3] = [Self::Theme, Self::Badge, Self::AvatarItem];

    /// Parse the snake-case name used in persisted form and on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "theme" => Some(Self::Theme),
            "badge" => Some(Self::Badge),
            "avatar_item" => Some(Self::AvatarItem),
            _ => None,
        }
    }
}

/// How rare a shop item is. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemRarity {
    /// Common.
    Common,
    /// Rare.
    Rare,
    /// Epic.
    Epic,
    /// Legendary.
    Legendary,
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Colour mode of the app. Dark mode is unlocked by the volcanic theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LavaMode {
    /// The default light palette.
    #[default]
    Light,
    /// The dark palette, gated on owning the volcanic theme.
    Dark,
}

impl LavaMode {
    /// Human-readable name shown in settings.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Lava Light",
            Self::Dark => "Lava Dark",
        }
    }

    /// Parse a mode from its snake-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_reads_payload() {
        assert_eq!(AchievementKind::FirstExplorer.requirement(), 1);
        assert_eq!(AchievementKind::FirstPurchase.requirement(), 1);
        assert_eq!(AchievementKind::Historian { count: 5 }.requirement(), 5);
        assert_eq!(
            AchievementKind::MasterExplorer { total: 8 }.requirement(),
            8
        );
        assert_eq!(
            AchievementKind::TreasureHunter { target: 1000 }.requirement(),
            1000
        );
    }

    #[test]
    fn kind_serializes_with_tag() {
        let json = serde_json::to_string(&AchievementKind::Historian { count: 5 }).ok();
        assert_eq!(json.as_deref(), Some(r#"{"type":"historian","count":5}"#));

        let unit = serde_json::to_string(&AchievementKind::FirstPurchase).ok();
        assert_eq!(unit.as_deref(), Some(r#"{"type":"first_purchase"}"#));
    }

    #[test]
    fn category_names_parse() {
        for category in ItemCategory::ALL {
            let json = serde_json::to_string(&category).unwrap_or_default();
            let name = json.trim_matches('"');
            assert_eq!(ItemCategory::from_name(name), Some(category));
        }
        assert_eq!(ItemCategory::from_name("hat"), None);
    }

    #[test]
    fn lava_mode_defaults_to_light() {
        assert_eq!(LavaMode::default(), LavaMode::Light);
        assert_eq!(LavaMode::Dark.display_name(), "Lava Dark");
        assert_eq!(LavaMode::from_name("dark"), Some(LavaMode::Dark));
        assert_eq!(LavaMode::from_name("sepia"), None);
    }
}
