//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

pub type GameId = u32;

/// Which collection a game belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Membership {
    Playing,
    Wishlist,
}

impl Membership {
    pub const ALL: [Membership; 2] = [Membership::Playing, Membership::Wishlist];

    /// Tag used on the wire and as the drop container id
    pub fn as_str(&self) -> &'static str {
        match self {
            Membership::Playing => "playing",
            Membership::Wishlist => "wishlist",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "playing" => Some(Membership::Playing),
            "wishlist" => Some(Membership::Wishlist),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Membership::Playing => "Playing now",
            Membership::Wishlist => "Wishlist",
        }
    }
}

/// Platform a game is being played on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "PC")]
    Pc,
    PlayStation,
    Xbox,
    Switch,
    Mobile,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Pc,
        Platform::PlayStation,
        Platform::Xbox,
        Platform::Switch,
        Platform::Mobile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Pc => "PC",
            Platform::PlayStation => "PlayStation",
            Platform::Xbox => "Xbox",
            Platform::Switch => "Switch",
            Platform::Mobile => "Mobile",
        }
    }

    /// Badge CSS modifier
    pub fn badge_class(&self) -> &'static str {
        match self {
            Platform::Pc => "badge pc",
            Platform::PlayStation => "badge playstation",
            Platform::Xbox => "badge xbox",
            Platform::Switch => "badge switch",
            Platform::Mobile => "badge mobile",
        }
    }
}

/// A tracked game (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEntry {
    pub id: GameId,
    pub catalog_id: u32,
    pub name: String,
    pub cover_url: String,
    pub membership: Membership,
    pub platform: Option<Platform>,
    #[serde(default)]
    pub position: Option<i32>,
}

impl GameEntry {
    /// Platform shown on the card; untagged games show as PC
    pub fn display_platform(&self) -> Platform {
        self.platform.unwrap_or(Platform::Pc)
    }
}

/// Checklist task attached to a game (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskEntry {
    pub id: u32,
    pub game_id: GameId,
    pub text: String,
    pub completed: bool,
}

/// Search result from the external catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogGame {
    pub id: u32,
    pub name: String,
    pub cover_url: String,
}

/// Fields sent to the backend when a game is added
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGame {
    pub catalog_id: u32,
    pub name: String,
    pub cover_url: String,
    pub membership: Membership,
    pub platform: Option<Platform>,
}

impl NewGame {
    pub fn from_catalog(game: &CatalogGame, membership: Membership, platform: Option<Platform>) -> Self {
        Self {
            catalog_id: game.id,
            name: game.name.clone(),
            cover_url: game.cover_url.clone(),
            membership,
            platform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_tags() {
        assert_eq!(Membership::from_str("playing"), Some(Membership::Playing));
        assert_eq!(Membership::from_str(Membership::Wishlist.as_str()), Some(Membership::Wishlist));
        assert_eq!(Membership::from_str("backlog"), None);
    }

    #[test]
    fn test_platform_serialization() {
        let json = serde_json::to_string(&Platform::Pc).unwrap();
        assert_eq!(json, "\"PC\"");
        let parsed: Platform = serde_json::from_str("\"PlayStation\"").unwrap();
        assert_eq!(parsed, Platform::PlayStation);
    }

    #[test]
    fn test_game_entry_from_backend_json() {
        let json = r#"{"id":7,"catalog_id":3498,"name":"Hades","cover_url":"h.jpg","membership":"wishlist","platform":null}"#;
        let entry: GameEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.membership, Membership::Wishlist);
        assert_eq!(entry.position, None);
        assert_eq!(entry.display_platform(), Platform::Pc);
    }
}
