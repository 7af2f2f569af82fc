//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod game;
mod task;
mod catalog;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Rejected promises (command returned `Err`) come back as `Err`
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Run a command and decode its result, turning rejections into messages
async fn call<T: serde::de::DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, String> {
    let result = invoke(cmd, args).await.map_err(|e| error_message(&e))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

fn error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use game::*;
pub use task::*;
pub use catalog::*;
