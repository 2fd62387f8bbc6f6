/*!
 * Session-specific models.
 *
 * These structures provide a higher-level abstraction over the raw
 * database records for the reading-session store.
 */

use serde::{Deserialize, Serialize};

/// The persisted state of the reader: what text was last active, where
/// reading stopped, and whether the next session resumes from there.
///
/// `position` is a character offset into `text` of the same session and is
/// meaningless for any other text. It is stored as given, without checking it
/// against the text length; callers clamp it before use (see
/// [`crate::reading::reading_range`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingSession {
    /// Full body of text most recently active
    pub text: Option<String>,
    /// Character offset of the last word spoken
    pub position: i64,
    /// Start the next read at `position` instead of the beginning
    pub resume_from_last_point: bool,
}

impl ReadingSession {
    /// Create a session for the given text
    pub fn new(text: impl Into<String>, position: i64, resume_from_last_point: bool) -> Self {
        Self {
            text: Some(text.into()),
            position,
            resume_from_last_point,
        }
    }

    /// The stored text, or an empty string when none was saved
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Number of characters in the stored text
    pub fn char_len(&self) -> usize {
        self.text_or_empty().chars().count()
    }

    /// Whether `position` points inside the stored text
    pub fn position_in_bounds(&self) -> bool {
        self.position >= 0 && (self.position as u64) <= self.char_len() as u64
    }

    /// Pick the current session out of a loaded sequence: the last element,
    /// or the defaults (empty text, position 0, no resume) when empty
    pub fn current_of(sessions: &[ReadingSession]) -> ReadingSession {
        sessions.last().cloned().unwrap_or_else(Self::empty)
    }

    /// The session substituted when nothing has been saved yet
    pub fn empty() -> Self {
        Self::new("", 0, false)
    }
}

impl std::fmt::Display for ReadingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} chars, position {}, resume {}",
            self.char_len(),
            self.position,
            if self.resume_from_last_point { "on" } else { "off" }
        )
    }
}
