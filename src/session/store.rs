/*!
 * Reading-session store.
 *
 * This module handles:
 * - Saving the active text, read position and resume flag
 * - Loading every stored session (at most one under normal operation)
 * - Clearing the store
 *
 * Every save replaces all previous sessions atomically, so the store holds
 * at most one session at a time.
 */

use log::{debug, error, info};
use std::path::Path;

use crate::database::connection::DatabaseConnection;
use crate::database::models::ReadingSessionRecord;
use crate::database::repository::Repository;
use crate::errors::StoreError;

use super::models::ReadingSession;

/// Durable storage of the single reading session
///
/// The store owns its database connection. Mutating operations take
/// `&mut self`, so calls are totally ordered by their owner.
pub struct ReadingSessionStore {
    /// Repository for database operations
    repo: Repository,
}

impl ReadingSessionStore {
    /// Create a store on top of an already opened connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            repo: Repository::new(db),
        }
    }

    /// Open (or create) a file-backed store at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Ok(Self::new(DatabaseConnection::new(path)?))
    }

    /// Open the store at the default location
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::new(DatabaseConnection::new_default()?))
    }

    /// Create a store with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self, StoreError> {
        Ok(Self::new(DatabaseConnection::new_in_memory()?))
    }

    /// Get the underlying database connection
    ///
    /// Only the path and statistics are reachable through a shared reference;
    /// raw SQL access stays inside the crate.
    ///
    /// ```compile_fail
    /// let store = easyread::ReadingSessionStore::new_in_memory().unwrap();
    /// store
    ///     .connection()
    ///     .execute(|conn| Ok(conn.execute("DELETE FROM reading_sessions", [])?))
    ///     .unwrap();
    /// ```
    pub fn connection(&self) -> &DatabaseConnection {
        self.repo.connection()
    }

    /// Replace every stored session with the given values
    ///
    /// `text` must be the entire current text; there is no append or patch.
    /// `position` is stored as given.
    pub fn save(
        &mut self,
        text: &str,
        position: i64,
        resume_from_last_point: bool,
    ) -> Result<(), StoreError> {
        self.save_session(&ReadingSession::new(text, position, resume_from_last_point))
    }

    /// Replace every stored session with `session`
    pub fn save_session(&mut self, session: &ReadingSession) -> Result<(), StoreError> {
        match self.repo.replace_session(session) {
            Ok(id) => {
                debug!("Saved reading session {} ({})", id, session);
                Ok(())
            }
            Err(e) => {
                error!("Problem saving reading session: {:#}", e);
                Err(StoreError::StorageWrite(format!("{:#}", e)))
            }
        }
    }

    /// Load every stored session in insertion order
    ///
    /// An empty vector means nothing has been saved (or the store was cleared);
    /// a failed read is reported as `StoreError::StorageRead` instead.
    pub fn load(&self) -> Result<Vec<ReadingSession>, StoreError> {
        let records = self.load_records()?;
        Ok(records.into_iter().map(ReadingSessionRecord::into_session).collect())
    }

    /// Load every stored record including its storage metadata
    pub fn load_records(&self) -> Result<Vec<ReadingSessionRecord>, StoreError> {
        match self.repo.list_sessions() {
            Ok(records) => {
                if records.is_empty() {
                    info!("No reading session saved");
                } else {
                    debug!("Loaded {} reading session(s)", records.len());
                }
                Ok(records)
            }
            Err(e) => {
                error!("Problem loading reading session: {:#}", e);
                Err(StoreError::StorageRead(format!("{:#}", e)))
            }
        }
    }

    /// The current session: the last stored one, if any
    pub fn current(&self) -> Result<Option<ReadingSession>, StoreError> {
        Ok(self.load()?.pop())
    }

    /// The current session, or the defaults when nothing is stored
    pub fn current_or_default(&self) -> Result<ReadingSession, StoreError> {
        Ok(ReadingSession::current_of(&self.load()?))
    }

    /// Remove every stored session; clearing an empty store succeeds
    pub fn clear(&mut self) -> Result<(), StoreError> {
        match self.repo.delete_all_sessions() {
            Ok(removed) => {
                debug!("Cleared {} reading session(s)", removed);
                Ok(())
            }
            Err(e) => {
                error!("Problem clearing reading sessions: {:#}", e);
                Err(StoreError::StorageWrite(format!("{:#}", e)))
            }
        }
    }
}
