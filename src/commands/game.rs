//! Game Commands
//!
//! Frontend bindings for game-related backend commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::{GameEntry, GameId, Membership, NewGame};
use super::call;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CreateGameArgs<'a> {
    #[serde(rename = "catalogId")]
    catalog_id: u32,
    name: &'a str,
    #[serde(rename = "coverUrl")]
    cover_url: &'a str,
    membership: Membership,
    platform: Option<&'static str>,
}

impl<'a> CreateGameArgs<'a> {
    fn from_game(game: &'a NewGame) -> Self {
        Self {
            catalog_id: game.catalog_id,
            name: &game.name,
            cover_url: &game.cover_url,
            membership: game.membership,
            platform: game.platform.map(|p| p.label()),
        }
    }
}

#[derive(Serialize)]
struct IdArgs {
    id: GameId,
}

#[derive(Serialize)]
struct UpdateMembershipArgs {
    id: GameId,
    membership: Membership,
}

// ========================
// Commands
// ========================

pub async fn create_game(game: &NewGame) -> Result<GameEntry, String> {
    let js_args = serde_wasm_bindgen::to_value(&CreateGameArgs::from_game(game)).map_err(|e| e.to_string())?;
    call("create_game", js_args).await
}

pub async fn list_games() -> Result<Vec<GameEntry>, String> {
    call("list_games", JsValue::NULL).await
}

pub async fn update_game_membership(id: GameId, membership: Membership) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateMembershipArgs { id, membership }).map_err(|e| e.to_string())?;
    call("update_game_membership", js_args).await
}

pub async fn delete_game(id: GameId) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    call("delete_game", js_args).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CatalogGame, Platform};
    use serde_json::json;

    #[test]
    fn test_create_args_use_command_keys() {
        let hades = CatalogGame { id: 3498, name: "Hades".to_string(), cover_url: "h.jpg".to_string() };
        let game = NewGame::from_catalog(&hades, Membership::Playing, Some(Platform::PlayStation));

        let args = serde_json::to_value(CreateGameArgs::from_game(&game)).unwrap();

        assert_eq!(args, json!({
            "catalogId": 3498,
            "name": "Hades",
            "coverUrl": "h.jpg",
            "membership": "playing",
            "platform": "PlayStation",
        }));
    }

    #[test]
    fn test_wishlist_args_send_null_platform() {
        let celeste = CatalogGame { id: 9, name: "Celeste".to_string(), cover_url: String::new() };
        let game = NewGame::from_catalog(&celeste, Membership::Wishlist, None);

        let args = serde_json::to_value(CreateGameArgs::from_game(&game)).unwrap();

        assert_eq!(args["membership"], "wishlist");
        assert!(args["platform"].is_null());
    }

    #[test]
    fn test_update_membership_args() {
        let args = serde_json::to_value(UpdateMembershipArgs { id: 4, membership: Membership::Wishlist }).unwrap();
        assert_eq!(args, json!({ "id": 4, "membership": "wishlist" }));
    }

    #[test]
    fn test_platform_labels_sent_to_backend() {
        let labels: Vec<&str> = Platform::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["PC", "PlayStation", "Xbox", "Switch", "Mobile"]);
    }
}
