/*!
 * Database entity models.
 *
 * These structures map directly to database tables and provide
 * type-safe access to persisted data.
 */

use serde::{Deserialize, Serialize};

use crate::session::models::ReadingSession;

/// A row of the `reading_sessions` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingSessionRecord {
    /// Row identifier, increasing with insertion order
    pub id: i64,
    /// Full text that was active when the session was saved
    pub last_text: Option<String>,
    /// Character offset of the last word read
    pub last_position: i64,
    /// Whether reading resumes from `last_position`
    pub from_last_point: bool,
    /// RFC 3339 timestamp of the save
    pub saved_at: String,
}

impl ReadingSessionRecord {
    /// Map a row selected with `id, last_text, last_position, from_last_point, saved_at`
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            last_text: row.get(1)?,
            last_position: row.get(2)?,
            from_last_point: row.get(3)?,
            saved_at: row.get(4)?,
        })
    }

    /// Drop the storage metadata and keep the session fields
    pub fn into_session(self) -> ReadingSession {
        ReadingSession {
            text: self.last_text,
            position: self.last_position,
            resume_from_last_point: self.from_last_point,
        }
    }

    /// Parse `saved_at` into a UTC timestamp
    pub fn saved_at_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::parse_from_rfc3339(&self.saved_at)
            .ok()
            .map(|dt| dt.with_timezone(&chrono::Utc))
    }
}
