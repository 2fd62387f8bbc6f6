/*!
 * Error types for the easyread application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when working with the reading-session store
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database file or its directory could not be opened or created
    #[error("Failed to open session store: {0}")]
    Open(String),

    /// Schema creation or migration failed
    #[error("Session store schema error: {0}")]
    Schema(String),

    /// A save or clear was rejected by the storage engine
    #[error("Failed to write reading session: {0}")]
    StorageWrite(String),

    /// Fetching the stored sessions failed
    #[error("Failed to read reading session: {0}")]
    StorageRead(String),
}

/// Errors that can occur while turning a file into readable text
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file format has no decoder
    #[error("{message}")]
    Unsupported {
        /// Lowercase extension of the rejected file
        extension: String,
        /// Message shown to the user
        message: String,
    },

    /// The file could not be read
    #[error("Failed to read document {path}: {message}")]
    Io {
        /// Path of the document
        path: String,
        /// Underlying error message
        message: String,
    },

    /// The file was read but its contents could not be decoded
    #[error("Failed to decode document {path}: {message}")]
    Decode {
        /// Path of the document
        path: String,
        /// Underlying error message
        message: String,
    },
}

/// Errors reported by a speech engine
#[derive(Error, Debug)]
pub enum SpeechError {
    /// No voice is available for the requested language
    #[error("No voice available for language: {0}")]
    VoiceUnavailable(String),

    /// The engine output could not be written
    #[error("Speech output error: {0}")]
    Output(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the session store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Error from document import
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from the speech engine
    #[error("Speech error: {0}")]
    Speech(#[from] SpeechError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<std::io::Error> for SpeechError {
    fn from(error: std::io::Error) -> Self {
        Self::Output(error.to_string())
    }
}
