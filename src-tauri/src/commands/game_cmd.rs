//! Tauri Commands for Games
//!
//! Exposes the game collections to the frontend via Tauri IPC.

use tauri::State;
use crate::domain::{Game, Membership, Platform};
use crate::repository::Repository;
use crate::AppState;

/// Track a new game. Platform labels are matched case-insensitively.
#[tauri::command]
pub async fn create_game(
    state: State<'_, AppState>,
    catalog_id: u32,
    name: String,
    cover_url: String,
    membership: String,
    platform: Option<String>,
) -> Result<Game, String> {
    let membership = Membership::parse(&membership).map_err(|e| e.to_string())?;
    let platform = platform
        .as_deref()
        .map(Platform::parse)
        .transpose()
        .map_err(|e| e.to_string())?;
    let game = Game::new(catalog_id, &name, &cover_url, membership, platform).map_err(|e| e.to_string())?;

    state.games.create(&game).await.map_err(|e| {
        log::warn!("[CMD] create_game {} failed: {}", name, e);
        e.to_string()
    })
}

/// Both collections, in display order
#[tauri::command]
pub async fn list_games(state: State<'_, AppState>) -> Result<Vec<Game>, String> {
    state.games.list().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_game_membership(
    state: State<'_, AppState>,
    id: u32,
    membership: String,
) -> Result<(), String> {
    let membership = Membership::parse(&membership).map_err(|e| e.to_string())?;
    state
        .games
        .update_membership(id, membership)
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Delete a game and its tasks
#[tauri::command]
pub async fn delete_game(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    state.games.delete(id).await.map_err(|e| e.to_string())
}
