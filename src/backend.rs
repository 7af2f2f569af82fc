//! Backend Collaborators
//!
//! Persistence and catalog interfaces consumed by the reconciliation and
//! checklist flows. `TauriBackend` forwards to the Tauri commands; tests
//! substitute in-memory fakes.

use async_trait::async_trait;

use crate::commands;
use crate::models::{CatalogGame, GameEntry, GameId, Membership, NewGame, TaskEntry};

/// Game and task persistence
#[async_trait(?Send)]
pub trait GameBackend {
    async fn create_game(&self, game: &NewGame) -> Result<GameEntry, String>;
    async fn list_games(&self) -> Result<Vec<GameEntry>, String>;
    async fn update_game_membership(&self, id: GameId, membership: Membership) -> Result<(), String>;
    async fn delete_game(&self, id: GameId) -> Result<(), String>;

    async fn create_task(&self, game_id: GameId, text: &str) -> Result<TaskEntry, String>;
    async fn list_tasks(&self, game_id: GameId) -> Result<Vec<TaskEntry>, String>;
    async fn toggle_task(&self, id: u32, completed: bool) -> Result<TaskEntry, String>;
    async fn delete_task(&self, id: u32) -> Result<(), String>;
}

/// Read-only game catalog search
#[async_trait(?Send)]
pub trait CatalogClient {
    async fn search_by_name(&self, text: &str) -> Result<Vec<CatalogGame>, String>;
}

/// Backend reached over Tauri IPC
#[derive(Clone, Copy, Debug, Default)]
pub struct TauriBackend;

#[async_trait(?Send)]
impl GameBackend for TauriBackend {
    async fn create_game(&self, game: &NewGame) -> Result<GameEntry, String> {
        commands::create_game(game).await
    }

    async fn list_games(&self) -> Result<Vec<GameEntry>, String> {
        commands::list_games().await
    }

    async fn update_game_membership(&self, id: GameId, membership: Membership) -> Result<(), String> {
        commands::update_game_membership(id, membership).await
    }

    async fn delete_game(&self, id: GameId) -> Result<(), String> {
        commands::delete_game(id).await
    }

    async fn create_task(&self, game_id: GameId, text: &str) -> Result<TaskEntry, String> {
        commands::create_task(game_id, text).await
    }

    async fn list_tasks(&self, game_id: GameId) -> Result<Vec<TaskEntry>, String> {
        commands::list_tasks(game_id).await
    }

    async fn toggle_task(&self, id: u32, completed: bool) -> Result<TaskEntry, String> {
        commands::toggle_task(id, completed).await
    }

    async fn delete_task(&self, id: u32) -> Result<(), String> {
        commands::delete_task(id).await
    }
}

#[async_trait(?Send)]
impl CatalogClient for TauriBackend {
    async fn search_by_name(&self, text: &str) -> Result<Vec<CatalogGame>, String> {
        commands::search_catalog(text).await
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory backend with switchable failures.

    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    pub(crate) struct FakeBackend {
        pub games: RefCell<Vec<GameEntry>>,
        pub tasks: RefCell<Vec<TaskEntry>>,
        pub fail: Cell<bool>,
        /// Suspend once before each game update or delete, like a round trip
        pub slow: Cell<bool>,
        /// Every call, in order, e.g. "create_game:Hades"
        pub calls: RefCell<Vec<String>>,
        next_id: Cell<u32>,
    }

    impl FakeBackend {
        pub(crate) fn failing() -> Self {
            let backend = Self::default();
            backend.fail.set(true);
            backend
        }

        fn record(&self, call: String) -> Result<(), String> {
            self.calls.borrow_mut().push(call);
            if self.fail.get() {
                Err("backend unavailable".to_string())
            } else {
                Ok(())
            }
        }

        async fn round_trip(&self) {
            if self.slow.get() {
                tokio::task::yield_now().await;
            }
        }

        fn next_id(&self) -> u32 {
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            id
        }
    }

    #[async_trait(?Send)]
    impl GameBackend for FakeBackend {
        async fn create_game(&self, game: &NewGame) -> Result<GameEntry, String> {
            self.record(format!("create_game:{}", game.name))?;
            let entry = GameEntry {
                id: self.next_id(),
                catalog_id: game.catalog_id,
                name: game.name.clone(),
                cover_url: game.cover_url.clone(),
                membership: game.membership,
                platform: game.platform,
                position: None,
            };
            self.games.borrow_mut().push(entry.clone());
            Ok(entry)
        }

        async fn list_games(&self) -> Result<Vec<GameEntry>, String> {
            self.record("list_games".to_string())?;
            Ok(self.games.borrow().clone())
        }

        async fn update_game_membership(&self, id: GameId, membership: Membership) -> Result<(), String> {
            self.round_trip().await;
            self.record(format!("update_game_membership:{}:{}", id, membership.as_str()))?;
            let mut games = self.games.borrow_mut();
            let game = games.iter_mut().find(|g| g.id == id).ok_or("game not found")?;
            game.membership = membership;
            Ok(())
        }

        async fn delete_game(&self, id: GameId) -> Result<(), String> {
            self.round_trip().await;
            self.record(format!("delete_game:{}", id))?;
            self.games.borrow_mut().retain(|g| g.id != id);
            self.tasks.borrow_mut().retain(|t| t.game_id != id);
            Ok(())
        }

        async fn create_task(&self, game_id: GameId, text: &str) -> Result<TaskEntry, String> {
            self.record(format!("create_task:{}", text))?;
            let task = TaskEntry {
                id: self.next_id(),
                game_id,
                text: text.to_string(),
                completed: false,
            };
            self.tasks.borrow_mut().push(task.clone());
            Ok(task)
        }

        async fn list_tasks(&self, game_id: GameId) -> Result<Vec<TaskEntry>, String> {
            self.record(format!("list_tasks:{}", game_id))?;
            Ok(self
                .tasks
                .borrow()
                .iter()
                .filter(|t| t.game_id == game_id)
                .cloned()
                .collect())
        }

        async fn toggle_task(&self, id: u32, completed: bool) -> Result<TaskEntry, String> {
            self.record(format!("toggle_task:{}:{}", id, completed))?;
            let mut tasks = self.tasks.borrow_mut();
            let task = tasks.iter_mut().find(|t| t.id == id).ok_or("task not found")?;
            task.completed = completed;
            Ok(task.clone())
        }

        async fn delete_task(&self, id: u32) -> Result<(), String> {
            self.record(format!("delete_task:{}", id))?;
            self.tasks.borrow_mut().retain(|t| t.id != id);
            Ok(())
        }
    }
}
