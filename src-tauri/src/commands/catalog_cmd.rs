//! Tauri Command for Catalog Search
//!
//! The API key stays in the backend.

use tauri::State;
use crate::catalog::CatalogGame;
use crate::AppState;

#[tauri::command]
pub async fn search_catalog(state: State<'_, AppState>, query: String) -> Result<Vec<CatalogGame>, String> {
    state.catalog.search_by_name(&query).await.map_err(|e| {
        log::warn!("[CMD] search_catalog {:?} failed: {}", query, e);
        e.to_string()
    })
}
