//! Task Checklist Flow
//!
//! Every mutation is followed by a fresh fetch of the game's tasks; the
//! returned list replaces whatever the view was showing.

use crate::backend::GameBackend;
use crate::models::{GameId, TaskEntry};

/// Create a task. Blank text is ignored without a backend call.
pub async fn add_task<B: GameBackend>(backend: &B, game_id: GameId, text: &str) -> Result<Option<Vec<TaskEntry>>, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    backend.create_task(game_id, text).await?;
    backend.list_tasks(game_id).await.map(Some)
}

/// Flip a task's completion flag
pub async fn toggle_task<B: GameBackend>(backend: &B, task: &TaskEntry) -> Result<Vec<TaskEntry>, String> {
    backend.toggle_task(task.id, !task.completed).await?;
    backend.list_tasks(task.game_id).await
}

pub async fn delete_task<B: GameBackend>(backend: &B, task: &TaskEntry) -> Result<Vec<TaskEntry>, String> {
    backend.delete_task(task.id).await?;
    backend.list_tasks(task.game_id).await
}

/// Split into (active, completed), keeping backend order
pub fn partition(tasks: &[TaskEntry]) -> (Vec<TaskEntry>, Vec<TaskEntry>) {
    tasks.iter().cloned().partition(|t| !t.completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::fake::FakeBackend;

    #[tokio::test]
    async fn test_add_task_refetches() {
        let backend = FakeBackend::default();

        let tasks = add_task(&backend, 7, "  Beat the first boss ").await.unwrap().unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Beat the first boss");
        assert_eq!(
            *backend.calls.borrow(),
            vec!["create_task:Beat the first boss".to_string(), "list_tasks:7".to_string()]
        );
    }

    #[tokio::test]
    async fn test_blank_task_is_ignored() {
        let backend = FakeBackend::default();
        assert_eq!(add_task(&backend, 7, "   ").await.unwrap(), None);
        assert!(backend.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_and_delete() {
        let backend = FakeBackend::default();
        let tasks = add_task(&backend, 7, "Find all relics").await.unwrap().unwrap();
        add_task(&backend, 8, "Other game").await.unwrap();

        let tasks = toggle_task(&backend, &tasks[0]).await.unwrap();
        assert!(tasks[0].completed);
        let (active, done) = partition(&tasks);
        assert!(active.is_empty());
        assert_eq!(done.len(), 1);

        let tasks = delete_task(&backend, &tasks[0]).await.unwrap();
        assert!(tasks.is_empty());
        assert_eq!(backend.list_tasks(8).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_surfaces_message() {
        let backend = FakeBackend::failing();
        let err = add_task(&backend, 7, "Anything").await.unwrap_err();
        assert_eq!(err, "backend unavailable");
    }
}
