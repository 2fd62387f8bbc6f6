/*!
 * Database module for persistent storage of the reading session.
 *
 * This module provides SQLite-based persistence for:
 * - The last active text and its read position
 * - The resume-from-last-point flag
 * - Schema versioning for upgrades
 */

pub mod schema;
pub mod connection;
pub mod repository;
pub mod models;

// Re-export main types
pub use connection::{DatabaseConnection, DatabaseStats};
pub use models::ReadingSessionRecord;
pub use repository::Repository;
