//! Game Repository
//!
//! SQLite-backed storage for tracked games. New and moved games are
//! appended at the end of their target collection.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, Game, Membership, Platform};
use super::db::internal;
use super::traits::Repository;

const GAME_COLUMNS: &str = "id, catalog_id, name, cover_url, membership, platform, position, created_at";

/// SQLite implementation of Game repository
pub struct GameRepository {
    conn: Arc<Mutex<Connection>>,
}

fn conversion_error(idx: usize, e: DomainError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
}

fn row_to_game(row: &Row) -> rusqlite::Result<Game> {
    let membership: String = row.get(4)?;
    let platform: Option<String> = row.get(5)?;
    Ok(Game {
        id: row.get(0)?,
        catalog_id: row.get(1)?,
        name: row.get(2)?,
        cover_url: row.get(3)?,
        membership: Membership::parse(&membership).map_err(|e| conversion_error(4, e))?,
        platform: platform
            .map(|p| Platform::parse(&p))
            .transpose()
            .map_err(|e| conversion_error(5, e))?,
        position: row.get(6)?,
        created_at: row.get(7)?,
    })
}

fn select_by_id(conn: &Connection, id: u32) -> DomainResult<Option<Game>> {
    conn.query_row(
        &format!("SELECT {} FROM games WHERE id = ?1", GAME_COLUMNS),
        params![id],
        row_to_game,
    )
    .optional()
    .map_err(internal)
}

/// One past the last position in a collection
fn next_position(conn: &Connection, membership: Membership) -> DomainResult<i32> {
    conn.query_row(
        "SELECT COALESCE(MAX(position), -1) + 1 FROM games WHERE membership = ?1",
        params![membership.as_str()],
        |row| row.get(0),
    )
    .map_err(internal)
}

impl GameRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Move a game to another collection, appending it at the end
    pub async fn update_membership(&self, id: u32, membership: Membership) -> DomainResult<Game> {
        let conn = self.conn.lock().await;
        let game = select_by_id(&conn, id)?
            .ok_or_else(|| DomainError::NotFound(format!("game {}", id)))?;
        if game.membership == membership {
            return Ok(game);
        }

        let position = next_position(&conn, membership)?;
        conn.execute(
            "UPDATE games SET membership = ?1, position = ?2 WHERE id = ?3",
            params![membership.as_str(), position, id],
        )
        .map_err(internal)?;

        log::info!("[GAMES] {} moved {} -> {}", game.name, game.membership.as_str(), membership.as_str());
        Ok(Game { membership, position, ..game })
    }
}

#[async_trait]
impl Repository<Game> for GameRepository {
    async fn create(&self, entity: &Game) -> DomainResult<Game> {
        let conn = self.conn.lock().await;

        let existing: Option<String> = conn
            .query_row(
                "SELECT membership FROM games WHERE catalog_id = ?1",
                params![entity.catalog_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(internal)?;
        if let Some(membership) = existing {
            return Err(DomainError::Conflict(format!("{} is already in {}", entity.name, membership)));
        }

        let position = next_position(&conn, entity.membership)?;
        conn.execute(
            "INSERT INTO games (catalog_id, name, cover_url, membership, platform, position, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                entity.catalog_id,
                entity.name,
                entity.cover_url,
                entity.membership.as_str(),
                entity.platform.map(|p| p.as_str()),
                position,
                entity.created_at,
            ],
        )
        .map_err(internal)?;

        let id = conn.last_insert_rowid() as u32;
        log::info!("[GAMES] created {} ({}) in {}", entity.name, id, entity.membership.as_str());
        Ok(Game { id, position, ..entity.clone() })
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Game>> {
        let conn = self.conn.lock().await;
        select_by_id(&conn, id)
    }

    async fn list(&self) -> DomainResult<Vec<Game>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM games ORDER BY position ASC, id ASC", GAME_COLUMNS))
            .map_err(internal)?;
        let games = stmt
            .query_map([], row_to_game)
            .map_err(internal)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(internal)?;
        Ok(games)
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        // Tasks go with it (ON DELETE CASCADE)
        let removed = conn
            .execute("DELETE FROM games WHERE id = ?1", params![id])
            .map_err(internal)?;
        if removed == 0 {
            log::debug!("[GAMES] delete of missing game {}", id);
        }
        Ok(())
    }
}
