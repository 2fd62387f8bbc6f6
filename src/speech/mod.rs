/*!
 * Speech engine abstraction.
 *
 * The reader never talks to a synthesizer directly. It hands an `Utterance`
 * to a `SpeechEngine` and receives word-progress notifications back through
 * `Controller::on_word_boundary`.
 */

use std::fmt::Debug;

use crate::errors::SpeechError;

pub mod transcript;

pub use transcript::TranscriptEngine;

/// A piece of text to be spoken
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    /// Text to speak
    pub text: String,
    /// Character offset of `text` inside the full reader text
    pub offset: usize,
    /// Voice language tag (`en-US`, `it`, ...); `None` uses the engine default
    pub language: Option<String>,
}

impl Utterance {
    /// Create a new utterance
    pub fn new(text: impl Into<String>, offset: usize, language: Option<String>) -> Self {
        Self {
            text: text.into(),
            offset,
            language,
        }
    }
}

/// Common trait for speech synthesizers
///
/// Implementations start speaking on `speak` and report progress to the
/// reader separately; `speak` itself does not block until the end of the
/// utterance.
pub trait SpeechEngine: Debug {
    /// Start speaking an utterance, replacing anything in progress
    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError>;

    /// Pause speaking immediately
    fn pause(&mut self) -> Result<(), SpeechError>;

    /// Continue a paused utterance
    fn resume(&mut self) -> Result<(), SpeechError>;

    /// Stop speaking immediately and drop the current utterance
    fn stop(&mut self) -> Result<(), SpeechError>;

    /// Whether the engine is paused
    fn is_paused(&self) -> bool;
}
