//! Task Commands
//!
//! Frontend bindings for per-game checklist commands.

use serde::Serialize;
use crate::models::{GameId, TaskEntry};
use super::call;

#[derive(Serialize)]
struct CreateTaskArgs<'a> {
    #[serde(rename = "gameId")]
    game_id: GameId,
    text: &'a str,
}

#[derive(Serialize)]
struct GameIdArgs {
    #[serde(rename = "gameId")]
    game_id: GameId,
}

#[derive(Serialize)]
struct ToggleTaskArgs {
    id: u32,
    completed: bool,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

pub async fn create_task(game_id: GameId, text: &str) -> Result<TaskEntry, String> {
    let js_args = serde_wasm_bindgen::to_value(&CreateTaskArgs { game_id, text }).map_err(|e| e.to_string())?;
    call("create_task", js_args).await
}

pub async fn list_tasks(game_id: GameId) -> Result<Vec<TaskEntry>, String> {
    let js_args = serde_wasm_bindgen::to_value(&GameIdArgs { game_id }).map_err(|e| e.to_string())?;
    call("list_tasks", js_args).await
}

pub async fn toggle_task(id: u32, completed: bool) -> Result<TaskEntry, String> {
    let js_args = serde_wasm_bindgen::to_value(&ToggleTaskArgs { id, completed }).map_err(|e| e.to_string())?;
    call("toggle_task", js_args).await
}

pub async fn delete_task(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    call("delete_task", js_args).await
}
