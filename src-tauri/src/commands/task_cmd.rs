//! Tauri Commands for Task Checklists

use tauri::State;
use crate::domain::Task;
use crate::repository::Repository;
use crate::AppState;

#[tauri::command]
pub async fn create_task(
    state: State<'_, AppState>,
    game_id: u32,
    text: String,
) -> Result<Task, String> {
    let task = Task::new(game_id, &text).map_err(|e| e.to_string())?;
    state.tasks.create(&task).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn list_tasks(state: State<'_, AppState>, game_id: u32) -> Result<Vec<Task>, String> {
    state.tasks.list_by_game(game_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn toggle_task(
    state: State<'_, AppState>,
    id: u32,
    completed: bool,
) -> Result<Task, String> {
    state.tasks.set_completed(id, completed).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_task(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    state.tasks.delete(id).await.map_err(|e| e.to_string())
}
