/*!
 * Repository layer for database operations.
 *
 * This module provides the SQL behind the reading-session store,
 * abstracting away the SQL details and providing type-safe access.
 */

use anyhow::Result;
use log::debug;
use rusqlite::{Connection, params};

use super::connection::DatabaseConnection;
use super::models::ReadingSessionRecord;
use crate::session::models::ReadingSession;

/// Repository for database operations
pub struct Repository {
    /// Database connection
    db: DatabaseConnection,
}

impl Repository {
    /// Create a new repository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get the underlying connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Replace every stored session with `session` in a single transaction
    ///
    /// Returns the id of the inserted row. If anything fails the transaction
    /// rolls back and the previously stored sessions are kept.
    pub fn replace_session(&mut self, session: &ReadingSession) -> Result<i64> {
        let saved_at = chrono::Utc::now().to_rfc3339();

        self.db.transaction(|tx| {
            let removed = Self::delete_all_sync(tx)?;
            let id = Self::insert_session_sync(tx, session, &saved_at)?;
            debug!("Replaced {} session(s) with session {}", removed, id);
            Ok(id)
        })
    }

    /// Insert a session without removing existing ones (synchronous version for use within transactions)
    fn insert_session_sync(conn: &Connection, session: &ReadingSession, saved_at: &str) -> Result<i64> {
        conn.execute(
            r#"
            INSERT INTO reading_sessions (last_text, last_position, from_last_point, saved_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                session.text,
                session.position,
                session.resume_from_last_point,
                saved_at,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Delete all sessions (synchronous version for use within transactions)
    fn delete_all_sync(conn: &Connection) -> Result<usize> {
        Ok(conn.execute("DELETE FROM reading_sessions", [])?)
    }

    /// List all stored sessions in insertion order
    pub fn list_sessions(&self) -> Result<Vec<ReadingSessionRecord>> {
        self.db.execute(|conn| {
            let mut stmt = conn.prepare(
                r#"
                SELECT id, last_text, last_position, from_last_point, saved_at
                FROM reading_sessions
                ORDER BY id ASC
                "#,
            )?;

            let records = stmt
                .query_map([], ReadingSessionRecord::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(records)
        })
    }

    /// Delete every stored session, returning how many were removed
    pub fn delete_all_sessions(&mut self) -> Result<usize> {
        self.db.transaction(|tx| Self::delete_all_sync(tx))
    }

    /// Count stored sessions
    pub fn count_sessions(&self) -> Result<i64> {
        self.db.execute(|conn| {
            Ok(conn.query_row("SELECT COUNT(*) FROM reading_sessions", [], |row| row.get(0))?)
        })
    }
}
