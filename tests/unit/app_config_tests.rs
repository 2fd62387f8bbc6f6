/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use easyread::app_config::{Config, LogLevel};
use easyread::language_utils::LanguageChoice;
use std::path::PathBuf;

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.database_path, None);
    assert_eq!(config.language, LanguageChoice::Auto);
    assert!(!config.resume_from_last_point);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    // Default is valid
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // File path inside an existing directory
    config.database_path = Some(temp_dir.path().join("store.db"));
    assert!(config.validate().is_ok());

    // Empty path
    config.database_path = Some(PathBuf::new());
    assert!(config.validate().is_err());

    // Directory instead of a file
    config.database_path = Some(temp_dir.path().to_path_buf());
    assert!(config.validate().is_err());

    Ok(())
}

/// Test that a missing config file is created with defaults
#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let config = Config::load_or_create(&path)?;

    assert_eq!(config, Config::default());
    assert!(path.exists());
    Ok(())
}

/// Test loading a partial config file
#[test]
fn test_loadOrCreate_withPartialFile_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "language": "it", "resume_from_last_point": true }"#,
    )?;

    let config = Config::load_or_create(&path)?;

    assert_eq!(config.language, LanguageChoice::Italian);
    assert!(config.resume_from_last_point);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.database_path, None);
    Ok(())
}

/// Test that a malformed config file is rejected
#[test]
fn test_loadOrCreate_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    assert!(Config::load_or_create(&path).is_err());
    Ok(())
}

/// Test that a saved config loads back unchanged
#[test]
fn test_save_withCustomValues_shouldLoadSameConfig() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("nested").join("conf.json");
    let config = Config {
        database_path: Some(temp_dir.path().join("reader.db")),
        language: LanguageChoice::Spanish,
        resume_from_last_point: true,
        log_level: LogLevel::Debug,
    };

    config.save(&path)?;
    let loaded = Config::load_or_create(&path)?;

    assert_eq!(loaded, config);
    Ok(())
}

/// Test database path resolution
#[test]
fn test_resolvedDatabasePath_withExplicitPath_shouldUseIt() -> Result<()> {
    let config = Config {
        database_path: Some(PathBuf::from("/tmp/reader.db")),
        ..Config::default()
    };

    assert_eq!(config.resolved_database_path()?, PathBuf::from("/tmp/reader.db"));
    Ok(())
}

/// Test log level mapping
#[test]
fn test_toLevelFilter_withEachLevel_shouldMap() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), log::LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
