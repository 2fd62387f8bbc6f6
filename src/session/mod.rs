/*!
 * Reading-session module.
 *
 * This module provides:
 * - The `ReadingSession` value (text, read position, resume flag)
 * - The store that persists exactly one session across restarts
 */

pub mod models;
pub mod store;

// Re-export main types
pub use models::ReadingSession;
pub use store::ReadingSessionStore;
