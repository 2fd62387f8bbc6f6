use log::debug;
use std::io::Write;

use super::{SpeechEngine, Utterance};
use crate::errors::SpeechError;

/// Speech engine that writes utterances as text to a sink
///
/// Used where no synthesizer is available, e.g. on the command line.
#[derive(Debug)]
pub struct TranscriptEngine<W: Write + std::fmt::Debug> {
    out: W,
    paused: bool,
    speaking: bool,
}

impl<W: Write + std::fmt::Debug> TranscriptEngine<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            paused: false,
            speaking: false,
        }
    }

    /// Whether an utterance is in progress
    pub fn is_speaking(&self) -> bool {
        self.speaking
    }

    /// The sink written to so far
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Give back the sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + std::fmt::Debug> SpeechEngine for TranscriptEngine<W> {
    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        let language = utterance.language.as_deref().unwrap_or("default");
        debug!(
            "Speaking {} chars from offset {} [{}]",
            utterance.text.chars().count(),
            utterance.offset,
            language
        );

        writeln!(self.out, "[{}] {}", language, utterance.text)?;
        self.out.flush()?;

        self.paused = false;
        self.speaking = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), SpeechError> {
        self.paused = self.speaking;
        Ok(())
    }

    fn resume(&mut self) -> Result<(), SpeechError> {
        self.paused = false;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), SpeechError> {
        self.paused = false;
        self.speaking = false;
        Ok(())
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}
