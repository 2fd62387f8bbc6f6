use log::{debug, info, warn};
use std::ops::Range;
use std::path::Path;

use crate::app_config::Config;
use crate::document;
use crate::errors::{AppError, StoreError};
use crate::language_utils::LanguageChoice;
use crate::reading;
use crate::session::{ReadingSession, ReadingSessionStore};
use crate::speech::{SpeechEngine, Utterance};

// @module: Reading controller

/// Main application controller for reading text aloud
///
/// Holds the full text, the read pointer and the resume flag, persists them
/// through the session store, and drives a speech engine. All calls come
/// from one owner, in the order the user triggers them.
pub struct Controller<E: SpeechEngine> {
    // @field: Persistent session storage
    store: ReadingSessionStore,
    // @field: Speech synthesizer
    engine: E,
    // @field: Entire text loaded in the reader
    full_text: String,
    // @field: Character offset of the last word spoken
    pointer: i64,
    // @field: Resume from the pointer on the next read
    resume_from_last_point: bool,
    // @field: Language used to pick the voice
    language: LanguageChoice,
    // @field: User selection, in characters
    selection: Option<Range<usize>>,
    // @field: Utterance currently handed to the engine
    current: Option<Utterance>,
}

impl<E: SpeechEngine> Controller<E> {
    /// Open the store configured in `config` and restore the last session
    pub fn with_config(config: &Config, engine: E) -> Result<Self, AppError> {
        let path = config.resolved_database_path()?;
        let store = ReadingSessionStore::open(path)?;
        Self::open(store, engine, config)
    }

    /// Restore the last session from `store`
    ///
    /// Without a saved session the reader starts empty, with the resume flag
    /// taken from the configuration.
    pub fn open(store: ReadingSessionStore, engine: E, config: &Config) -> Result<Self, AppError> {
        let session = match store.current()? {
            Some(session) => session,
            None => ReadingSession {
                resume_from_last_point: config.resume_from_last_point,
                ..ReadingSession::empty()
            },
        };

        info!("Restored reading session: {}", session);

        Ok(Self {
            store,
            engine,
            full_text: session.text.unwrap_or_default(),
            pointer: session.position,
            resume_from_last_point: session.resume_from_last_point,
            language: config.language,
            selection: None,
            current: None,
        })
    }

    pub fn text(&self) -> &str {
        &self.full_text
    }

    pub fn pointer(&self) -> i64 {
        self.pointer
    }

    pub fn resume_from_last_point(&self) -> bool {
        self.resume_from_last_point
    }

    pub fn language(&self) -> LanguageChoice {
        self.language
    }

    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    /// Utterance last handed to the engine, if still in progress
    pub fn current_utterance(&self) -> Option<&Utterance> {
        self.current.as_ref()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn store(&self) -> &ReadingSessionStore {
        &self.store
    }

    /// The session as it would be saved right now
    pub fn session(&self) -> ReadingSession {
        ReadingSession::new(self.full_text.clone(), self.pointer, self.resume_from_last_point)
    }

    pub fn set_language(&mut self, language: LanguageChoice) {
        self.language = language;
    }

    pub fn set_resume_from_last_point(&mut self, resume: bool) {
        self.resume_from_last_point = resume;
    }

    /// Select a character range to read when not resuming
    pub fn select(&mut self, range: Range<usize>) {
        self.selection = Some(range);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Replace the text; the pointer moves back to the beginning
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.full_text = text.into();
        self.pointer = 0;
        self.selection = None;
    }

    /// Persist the full text, pointer and resume flag
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.store.save(&self.full_text, self.pointer, self.resume_from_last_point)
    }

    /// Character range that the next `start_reading` will speak
    pub fn next_range(&self) -> Range<usize> {
        reading::reading_range(
            &self.full_text,
            self.pointer,
            self.resume_from_last_point,
            self.selection.clone(),
        )
    }

    /// Save the session and start speaking the next range
    pub fn start_reading(&mut self) -> Result<Utterance, AppError> {
        let range = self.next_range();
        let text = reading::slice_chars(&self.full_text, range.clone()).to_string();

        self.save()?;

        let language = self.language.resolve_tag(&text);
        let utterance = Utterance::new(text, range.start, language);

        debug!(
            "Reading characters {}..{} with language {:?}",
            range.start, range.end, utterance.language
        );

        self.engine.speak(&utterance)?;
        self.current = Some(utterance.clone());
        Ok(utterance)
    }

    /// Record that the engine is about to speak `range` of the current utterance
    ///
    /// The range is relative to the utterance text; the pointer stores the
    /// absolute offset in the full text.
    pub fn on_word_boundary(&mut self, range: Range<usize>) {
        let offset = self.current.as_ref().map_or(0, |u| u.offset);
        self.pointer = (offset + range.start) as i64;
    }

    /// The engine finished the current utterance
    pub fn on_utterance_finished(&mut self) {
        self.current = None;
    }

    /// Pause when speaking, continue when paused
    pub fn toggle_pause(&mut self) -> Result<(), AppError> {
        if self.engine.is_paused() {
            self.engine.resume()?;
        } else {
            self.engine.pause()?;
        }
        Ok(())
    }

    /// Stop speaking and save where reading stopped
    pub fn stop(&mut self) -> Result<(), AppError> {
        self.engine.stop()?;
        self.current = None;
        self.save()?;
        Ok(())
    }

    /// Empty the reader and save the empty session
    pub fn erase_all(&mut self) -> Result<(), AppError> {
        self.engine.stop()?;
        self.current = None;
        self.set_text(String::new());
        self.save()?;
        Ok(())
    }

    /// Stop speaking, replace the text with a document's contents and save
    ///
    /// On a decoding error the current text and pointer are kept.
    pub fn load_document<P: AsRef<Path>>(&mut self, path: P) -> Result<(), AppError> {
        self.engine.stop()?;
        self.current = None;

        let text = match document::load_document(path.as_ref()) {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not load {:?}: {}", path.as_ref(), e);
                return Err(e.into());
            }
        };

        self.set_text(text);
        self.save()?;
        Ok(())
    }

    /// Save the session and release the store
    pub fn close(mut self) -> Result<(), AppError> {
        self.engine.stop()?;
        self.save()?;
        Ok(())
    }
}
