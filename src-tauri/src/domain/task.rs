//! Task Entity
//!
//! A checklist entry attached to one game.

use serde::{Deserialize, Serialize};
use super::error::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub game_id: u32,
    pub text: String,
    pub completed: bool,
    pub created_at: i64,
}

impl Task {
    pub fn new(game_id: u32, text: &str) -> DomainResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::InvalidInput("task text is empty".to_string()));
        }
        Ok(Self {
            id: 0,
            game_id,
            text: text.to_string(),
            completed: false,
            created_at: chrono::Utc::now().timestamp_millis(),
        })
    }
}
