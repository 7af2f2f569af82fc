//! Catalog Search Command
//!
//! Game search goes through the backend so the API key never reaches the webview.

use serde::Serialize;
use crate::models::CatalogGame;
use super::call;

#[derive(Serialize)]
struct SearchArgs<'a> {
    query: &'a str,
}

pub async fn search_catalog(query: &str) -> Result<Vec<CatalogGame>, String> {
    let js_args = serde_wasm_bindgen::to_value(&SearchArgs { query }).map_err(|e| e.to_string())?;
    call("search_catalog", js_args).await
}
