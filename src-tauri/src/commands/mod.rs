//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod game_cmd;
mod task_cmd;
mod catalog_cmd;

pub use game_cmd::*;
pub use task_cmd::*;
pub use catalog_cmd::*;
