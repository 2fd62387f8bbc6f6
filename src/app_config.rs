use anyhow::{Context, Result, anyhow};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::database::DatabaseConnection;
use crate::file_utils::FileManager;
use crate::language_utils::LanguageChoice;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Database file; the platform data directory is used when unset
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Language to read with
    #[serde(default)]
    pub language: LanguageChoice,

    /// Resume flag used when no session has been saved yet
    #[serde(default)]
    pub resume_from_last_point: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log::LevelFilter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Config {

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.database_path {
            if path.as_os_str().is_empty() {
                return Err(anyhow!("Database path must not be empty"));
            }
            if FileManager::dir_exists(path) {
                return Err(anyhow!("Database path is a directory: {:?}", path));
            }
        }

        Ok(())
    }

    /// Resolve the database file, falling back to the platform data directory
    pub fn resolved_database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => DatabaseConnection::default_database_path(),
        }
    }

    /// Load the configuration at `path`, writing a default one when missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if FileManager::file_exists(path) {
            let content = FileManager::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            return Ok(config);
        }

        warn!("Config file not found at {:?}, creating default config.", path);

        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        FileManager::write_to_file(path, &json)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: None,
            language: LanguageChoice::default(),
            resume_from_last_point: false,
            log_level: LogLevel::default(),
        }
    }
}
