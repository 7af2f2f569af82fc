//! Task Repository
//!
//! SQLite-backed checklist tasks, listed oldest first per game.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, Task};
use super::db::internal;
use super::traits::Repository;

const TASK_COLUMNS: &str = "id, game_id, text, completed, created_at";

pub struct TaskRepository {
    conn: Arc<Mutex<Connection>>,
}

fn row_to_task(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        game_id: row.get(1)?,
        text: row.get(2)?,
        completed: row.get::<_, i32>(3)? != 0,
        created_at: row.get(4)?,
    })
}

fn select_by_id(conn: &Connection, id: u32) -> DomainResult<Option<Task>> {
    conn.query_row(
        &format!("SELECT {} FROM tasks WHERE id = ?1", TASK_COLUMNS),
        params![id],
        row_to_task,
    )
    .optional()
    .map_err(internal)
}

fn select_many(conn: &Connection, sql: &str, game_id: Option<u32>) -> DomainResult<Vec<Task>> {
    let mut stmt = conn.prepare(sql).map_err(internal)?;
    let rows = match game_id {
        Some(id) => stmt.query_map(params![id], row_to_task),
        None => stmt.query_map([], row_to_task),
    };
    rows.map_err(internal)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(internal)
}

impl TaskRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    pub async fn list_by_game(&self, game_id: u32) -> DomainResult<Vec<Task>> {
        let conn = self.conn.lock().await;
        select_many(
            &conn,
            &format!("SELECT {} FROM tasks WHERE game_id = ?1 ORDER BY created_at ASC, id ASC", TASK_COLUMNS),
            Some(game_id),
        )
    }

    pub async fn set_completed(&self, id: u32, completed: bool) -> DomainResult<Task> {
        let conn = self.conn.lock().await;
        let changed = conn
            .execute(
                "UPDATE tasks SET completed = ?1 WHERE id = ?2",
                params![completed as i32, id],
            )
            .map_err(internal)?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("task {}", id)));
        }
        select_by_id(&conn, id)?.ok_or_else(|| DomainError::NotFound(format!("task {}", id)))
    }
}

#[async_trait]
impl Repository<Task> for TaskRepository {
    async fn create(&self, entity: &Task) -> DomainResult<Task> {
        let conn = self.conn.lock().await;

        let game_exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM games WHERE id = ?1)",
                params![entity.game_id],
                |row| row.get(0),
            )
            .map_err(internal)?;
        if !game_exists {
            return Err(DomainError::NotFound(format!("game {}", entity.game_id)));
        }

        conn.execute(
            "INSERT INTO tasks (game_id, text, completed, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![entity.game_id, entity.text, entity.completed as i32, entity.created_at],
        )
        .map_err(internal)?;

        let id = conn.last_insert_rowid() as u32;
        Ok(Task { id, ..entity.clone() })
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Task>> {
        let conn = self.conn.lock().await;
        select_by_id(&conn, id)
    }

    async fn list(&self) -> DomainResult<Vec<Task>> {
        let conn = self.conn.lock().await;
        select_many(
            &conn,
            &format!("SELECT {} FROM tasks ORDER BY game_id ASC, created_at ASC, id ASC", TASK_COLUMNS),
            None,
        )
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])
            .map_err(internal)?;
        Ok(())
    }
}
