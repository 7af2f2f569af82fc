//! Game Entity
//!
//! A tracked game belongs to exactly one collection: playing or wishlist.

use serde::{Deserialize, Serialize};
use super::error::{DomainError, DomainResult};

/// Which collection a game is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Membership {
    Playing,
    Wishlist,
}

impl Membership {
    pub fn as_str(&self) -> &'static str {
        match self {
            Membership::Playing => "playing",
            Membership::Wishlist => "wishlist",
        }
    }

    pub fn parse(s: &str) -> DomainResult<Self> {
        match s {
            "playing" => Ok(Membership::Playing),
            "wishlist" => Ok(Membership::Wishlist),
            other => Err(DomainError::InvalidInput(format!("unknown membership {:?}", other))),
        }
    }
}

/// Where a playing game is played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "PC")]
    Pc,
    PlayStation,
    Xbox,
    Switch,
    Mobile,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Pc => "PC",
            Platform::PlayStation => "PlayStation",
            Platform::Xbox => "Xbox",
            Platform::Switch => "Switch",
            Platform::Mobile => "Mobile",
        }
    }

    /// Case-insensitive
    pub fn parse(s: &str) -> DomainResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pc" => Ok(Platform::Pc),
            "playstation" => Ok(Platform::PlayStation),
            "xbox" => Ok(Platform::Xbox),
            "switch" => Ok(Platform::Switch),
            "mobile" => Ok(Platform::Mobile),
            _ => Err(DomainError::InvalidInput(format!("unknown platform {:?}", s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: u32,
    /// Catalog (RAWG) id; a game is tracked at most once
    pub catalog_id: u32,
    pub name: String,
    pub cover_url: String,
    pub membership: Membership,
    pub platform: Option<Platform>,
    /// Order within its collection, appended at the end on create and move
    pub position: i32,
    pub created_at: i64,
}

impl Game {
    /// Validated game ready for insert. The id is assigned by the database.
    pub fn new(
        catalog_id: u32,
        name: &str,
        cover_url: &str,
        membership: Membership,
        platform: Option<Platform>,
    ) -> DomainResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("game name is empty".to_string()));
        }
        Ok(Self {
            id: 0,
            catalog_id,
            name: name.to_string(),
            cover_url: cover_url.trim().to_string(),
            membership,
            platform,
            position: 0,
            created_at: chrono::Utc::now().timestamp_millis(),
        })
    }
}
