//! Repository Integration Tests
//!
//! Tests for GameRepository and TaskRepository with in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, Game, Membership, Platform, Task};
    use crate::repository::{init_db, GameRepository, Repository, TaskRepository};
    use std::path::PathBuf;

    fn setup_test_db() -> (GameRepository, TaskRepository) {
        // Use in-memory database for tests
        let db_path = PathBuf::from(":memory:");
        let db_state = init_db(&db_path).expect("Failed to init test DB");
        (
            GameRepository::new(db_state.connection()),
            TaskRepository::new(db_state.connection()),
        )
    }

    fn game(catalog_id: u32, name: &str, membership: Membership) -> Game {
        Game::new(catalog_id, name, "https://media.rawg.io/cover.jpg", membership, None).unwrap()
    }

    #[tokio::test]
    async fn test_create_game() {
        let (games, _) = setup_test_db();

        let created = games.create(&game(3498, "Hades", Membership::Wishlist)).await.expect("Failed to create");

        assert!(created.id > 0);
        assert_eq!(created.name, "Hades");
        assert_eq!(created.membership, Membership::Wishlist);
        assert_eq!(created.position, 0);
    }

    #[tokio::test]
    async fn test_platform_persistence() {
        let (games, _) = setup_test_db();

        let mut entry = game(1, "Celeste", Membership::Playing);
        entry.platform = Some(Platform::Switch);
        let created = games.create(&entry).await.unwrap();

        let found = games.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.platform, Some(Platform::Switch));
    }

    #[tokio::test]
    async fn test_duplicate_catalog_id_conflicts() {
        let (games, _) = setup_test_db();
        games.create(&game(3498, "Hades", Membership::Wishlist)).await.unwrap();

        let err = games.create(&game(3498, "Hades", Membership::Playing)).await.unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(games.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_positions_append_per_collection() {
        let (games, _) = setup_test_db();
        let a = games.create(&game(1, "A", Membership::Wishlist)).await.unwrap();
        let b = games.create(&game(2, "B", Membership::Wishlist)).await.unwrap();
        let c = games.create(&game(3, "C", Membership::Playing)).await.unwrap();

        assert_eq!((a.position, b.position, c.position), (0, 1, 0));
    }

    #[tokio::test]
    async fn test_update_membership_appends_to_target() {
        let (games, _) = setup_test_db();
        games.create(&game(1, "Tunic", Membership::Playing)).await.unwrap();
        let hades = games.create(&game(3498, "Hades", Membership::Wishlist)).await.unwrap();

        let moved = games.update_membership(hades.id, Membership::Playing).await.unwrap();

        assert_eq!(moved.membership, Membership::Playing);
        assert_eq!(moved.position, 1);
        let found = games.find_by_id(hades.id).await.unwrap().unwrap();
        assert_eq!(found.membership, Membership::Playing);
    }

    #[tokio::test]
    async fn test_update_membership_missing_game() {
        let (games, _) = setup_test_db();
        let err = games.update_membership(42, Membership::Playing).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_game_cascades_tasks() {
        let (games, tasks) = setup_test_db();
        let hades = games.create(&game(3498, "Hades", Membership::Playing)).await.unwrap();
        let celeste = games.create(&game(1, "Celeste", Membership::Playing)).await.unwrap();
        tasks.create(&Task::new(hades.id, "Escape once").unwrap()).await.unwrap();
        tasks.create(&Task::new(celeste.id, "Reach the summit").unwrap()).await.unwrap();

        games.delete(hades.id).await.expect("Delete failed");

        assert!(games.find_by_id(hades.id).await.unwrap().is_none());
        assert!(tasks.list_by_game(hades.id).await.unwrap().is_empty());
        assert_eq!(tasks.list().await.unwrap().len(), 1);
        // Deleting again is fine
        games.delete(hades.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_task_lifecycle() {
        let (games, tasks) = setup_test_db();
        let hades = games.create(&game(3498, "Hades", Membership::Playing)).await.unwrap();

        let first = tasks.create(&Task::new(hades.id, "Escape once").unwrap()).await.unwrap();
        let second = tasks.create(&Task::new(hades.id, "Max a keepsake").unwrap()).await.unwrap();

        let toggled = tasks.set_completed(first.id, true).await.unwrap();
        assert!(toggled.completed);

        let listed = tasks.list_by_game(hades.id).await.unwrap();
        assert_eq!(listed.iter().map(|t| t.id).collect::<Vec<_>>(), vec![first.id, second.id]);
        assert!(listed[0].completed);

        tasks.delete(second.id).await.unwrap();
        assert_eq!(tasks.list_by_game(hades.id).await.unwrap().len(), 1);
        assert!(tasks.find_by_id(second.id).await.unwrap().is_none());
        assert_eq!(tasks.find_by_id(first.id).await.unwrap().map(|t| t.text), Some("Escape once".to_string()));
    }

    #[tokio::test]
    async fn test_task_for_missing_game() {
        let (_, tasks) = setup_test_db();
        let err = tasks.create(&Task::new(9, "Orphan").unwrap()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_toggle_missing_task() {
        let (_, tasks) = setup_test_db();
        assert!(matches!(tasks.set_completed(5, true).await, Err(DomainError::NotFound(_))));
    }
}
