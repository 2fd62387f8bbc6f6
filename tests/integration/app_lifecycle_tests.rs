/*!
 * Integration tests for the store across application restarts
 */

use anyhow::Result;
use easyread::app_config::Config;
use easyread::database::DatabaseConnection;
use easyread::session::{ReadingSession, ReadingSessionStore};
use easyread::{Controller, TranscriptEngine};

use crate::common;
use crate::common::mock_speech::MockSpeechEngine;

/// Test that a saved session survives closing and reopening the store
#[test]
fn test_fileStore_afterReopen_shouldReturnSavedSession() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let db_path = temp_dir.path().join("easyread.db");

    {
        let mut store = ReadingSessionStore::open(&db_path)?;
        store.save("Persisted text", 10, true)?;
    }

    let store = ReadingSessionStore::open(&db_path)?;
    assert_eq!(
        store.load()?,
        vec![ReadingSession::new("Persisted text", 10, true)]
    );
    Ok(())
}

/// Test that a clear survives a restart
#[test]
fn test_fileStore_clearThenReopen_shouldStayEmpty() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let db_path = temp_dir.path().join("easyread.db");

    {
        let mut store = ReadingSessionStore::open(&db_path)?;
        store.save("gone soon", 0, false)?;
        store.clear()?;
    }

    let store = ReadingSessionStore::open(&db_path)?;
    assert!(store.load()?.is_empty());
    Ok(())
}

/// Test that opening creates missing parent directories
#[test]
fn test_open_withNestedMissingDirectory_shouldCreateDatabase() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let db_path = temp_dir.path().join("data").join("reader").join("easyread.db");

    let store = ReadingSessionStore::open(&db_path)?;

    assert!(db_path.exists());
    assert_eq!(store.connection().path(), db_path.as_path());
    assert_eq!(store.connection().stats()?.schema_version, 1);
    Ok(())
}

/// Test that opening a directory as a database fails
#[test]
fn test_open_withDirectoryPath_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    assert!(DatabaseConnection::new(temp_dir.path()).is_err());
    Ok(())
}

/// Test a full reading session followed by a restart of the reader
#[test]
fn test_controller_afterRestart_shouldResumeWhereStopped() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = Config {
        resume_from_last_point: true,
        ..common::config_in(temp_dir.path())
    };

    {
        let mut controller = Controller::with_config(&config, MockSpeechEngine::new())?;
        controller.set_text("First sentence. Second sentence.");
        let utterance = controller.start_reading()?;
        assert_eq!(utterance.offset, 0);

        // The engine reached "Second"
        controller.on_word_boundary(16..22);
        controller.close()?;
    }

    let mut controller = Controller::with_config(&config, MockSpeechEngine::new())?;
    assert_eq!(controller.pointer(), 16);

    let utterance = controller.start_reading()?;
    assert_eq!(utterance.text, "Second sentence.");
    assert_eq!(utterance.offset, 16);
    Ok(())
}

/// Test the transcript engine end to end
#[test]
fn test_transcriptEngine_withController_shouldWriteUtterance() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = Config {
        language: easyread::LanguageChoice::Spanish,
        ..common::config_in(temp_dir.path())
    };

    let mut controller = Controller::with_config(&config, TranscriptEngine::new(Vec::new()))?;
    controller.set_text("Hola mundo");
    controller.start_reading()?;

    let transcript = String::from_utf8(controller.engine().get_ref().clone())?;
    assert_eq!(transcript, "[es-ES] Hola mundo\n");
    assert!(controller.engine().is_speaking());

    controller.close()?;

    let store = ReadingSessionStore::open(temp_dir.path().join("easyread.db"))?;
    assert_eq!(
        store.current()?,
        Some(ReadingSession::new("Hola mundo", 0, false))
    );
    Ok(())
}
