/*!
 * Mock speech engine for testing
 *
 * Records every call instead of producing sound, and can be told to fail
 * so error propagation through the controller can be checked.
 */

use easyread::errors::SpeechError;
use easyread::speech::{SpeechEngine, Utterance};

/// Calls received by the mock engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechCall {
    Speak(Utterance),
    Pause,
    Resume,
    Stop,
}

/// Mock implementation of a speech engine
#[derive(Debug, Default)]
pub struct MockSpeechEngine {
    /// Calls in the order they were made
    pub calls: Vec<SpeechCall>,
    /// Should the next speak call fail
    pub should_fail: bool,
    paused: bool,
}

impl MockSpeechEngine {
    /// Create a new mock engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock engine whose speak calls fail
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Utterances spoken so far
    pub fn spoken(&self) -> Vec<&Utterance> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SpeechCall::Speak(utterance) => Some(utterance),
                _ => None,
            })
            .collect()
    }
}

impl SpeechEngine for MockSpeechEngine {
    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        if self.should_fail {
            return Err(SpeechError::VoiceUnavailable(
                utterance.language.clone().unwrap_or_default(),
            ));
        }
        self.paused = false;
        self.calls.push(SpeechCall::Speak(utterance.clone()));
        Ok(())
    }

    fn pause(&mut self) -> Result<(), SpeechError> {
        self.paused = true;
        self.calls.push(SpeechCall::Pause);
        Ok(())
    }

    fn resume(&mut self) -> Result<(), SpeechError> {
        self.paused = false;
        self.calls.push(SpeechCall::Resume);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), SpeechError> {
        self.paused = false;
        self.calls.push(SpeechCall::Stop);
        Ok(())
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}
