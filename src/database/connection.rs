/*!
 * Database connection management.
 *
 * This module handles SQLite database connection creation and initialization.
 * A `DatabaseConnection` owns its connection outright: it is not `Clone` and
 * mutating operations need `&mut self`, so exactly one owner can write to the
 * database file at a time.
 */

use anyhow::{Context, Result};
use log::{debug, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

use super::schema;
use crate::errors::StoreError;

/// Default database filename
const DEFAULT_DB_FILENAME: &str = "easyread.db";

/// Default database directory name under user's data directory
const DEFAULT_DB_DIRNAME: &str = "easyread";

/// Path reported for in-memory databases
const IN_MEMORY_PATH: &str = ":memory:";

/// Database connection wrapper with single-owner access
pub struct DatabaseConnection {
    /// Path to the database file
    db_path: PathBuf,
    /// The underlying SQLite connection
    connection: Connection,
}

impl DatabaseConnection {
    /// Create a new database connection at the default location
    pub fn new_default() -> Result<Self, StoreError> {
        let db_path =
            Self::default_database_path().map_err(|e| StoreError::Open(format!("{:#}", e)))?;
        Self::new(&db_path)
    }

    /// Create a new database connection at the specified path
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self, StoreError> {
        let db_path = db_path.as_ref().to_path_buf();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Open(format!(
                    "Failed to create database directory {:?}: {}",
                    parent, e
                ))
            })?;
        }

        info!("Opening database at: {:?}", db_path);

        let conn = Connection::open(&db_path).map_err(|e| {
            StoreError::Open(format!("Failed to open database {:?}: {}", db_path, e))
        })?;

        schema::initialize_schema(&conn).map_err(|e| StoreError::Schema(format!("{:#}", e)))?;

        Ok(Self {
            db_path,
            connection: conn,
        })
    }

    /// Create an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self, StoreError> {
        debug!("Creating in-memory database");

        let conn = Connection::open_in_memory().map_err(|e| {
            StoreError::Open(format!("Failed to create in-memory database: {}", e))
        })?;

        schema::initialize_schema(&conn).map_err(|e| StoreError::Schema(format!("{:#}", e)))?;

        Ok(Self {
            db_path: PathBuf::from(IN_MEMORY_PATH),
            connection: conn,
        })
    }

    /// Get the default database path
    pub fn default_database_path() -> Result<PathBuf> {
        // Try to use the system data directory
        let base_dir = dirs::data_local_dir()
            .or_else(dirs::data_dir)
            .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;

        Ok(base_dir.join(DEFAULT_DB_DIRNAME).join(DEFAULT_DB_FILENAME))
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Whether this connection is backed by an in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.db_path.as_os_str() == IN_MEMORY_PATH
    }

    /// Run an operation with the raw connection
    ///
    /// Kept inside the crate: the closure could write, and writes must go
    /// through the store's `&mut self` methods.
    pub(crate) fn execute<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        f(&self.connection)
    }

    /// Begin a transaction and execute operations within it
    ///
    /// The transaction is committed only if the closure succeeds; otherwise it
    /// is rolled back when dropped and the database is left untouched.
    pub(crate) fn transaction<F, T>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&rusqlite::Transaction) -> Result<T>,
    {
        let tx = self
            .connection
            .transaction()
            .context("Failed to begin transaction")?;
        let result = f(&tx)?;
        tx.commit().context("Failed to commit transaction")?;

        Ok(result)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DatabaseStats> {
        self.execute(|conn| {
            let session_count: i64 =
                conn.query_row("SELECT COUNT(*) FROM reading_sessions", [], |row| row.get(0))?;

            let schema_version = schema::get_schema_version(conn)?;

            // Get file size if not in-memory
            let file_size_bytes = if self.is_in_memory() {
                0
            } else {
                std::fs::metadata(&self.db_path)
                    .map(|m| m.len())
                    .unwrap_or(0)
            };

            Ok(DatabaseStats {
                session_count,
                schema_version,
                file_size_bytes,
            })
        })
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DatabaseStats {
    /// Number of stored reading sessions
    pub session_count: i64,
    /// Schema version of the database
    pub schema_version: i32,
    /// Database file size in bytes
    pub file_size_bytes: u64,
}

impl std::fmt::Display for DatabaseStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sessions: {}, Schema: v{}, Size: {} KB",
            self.session_count,
            self.schema_version,
            self.file_size_bytes / 1024
        )
    }
}
