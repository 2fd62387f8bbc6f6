// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info};
use std::io::Write;
use std::path::PathBuf;

use easyread::app_config::{self, Config};
use easyread::file_utils::FileManager;
use easyread::language_utils::{self, LanguageChoice};
use easyread::reading;
use easyread::{Controller, ReadingSessionStore, TranscriptEngine};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for LanguageChoice to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLanguage {
    Auto,
    It,
    En,
    Fr,
    Es,
}

impl From<CliLanguage> for LanguageChoice {
    fn from(cli_language: CliLanguage) -> Self {
        match cli_language {
            CliLanguage::Auto => LanguageChoice::Auto,
            CliLanguage::It => LanguageChoice::Italian,
            CliLanguage::En => LanguageChoice::English,
            CliLanguage::Fr => LanguageChoice::French,
            CliLanguage::Es => LanguageChoice::Spanish,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the saved reading session
    Show {
        /// Print the stored record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Save a text as the current reading session
    Save {
        /// Text to save
        #[arg(value_name = "TEXT", required_unless_present = "file", conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from a UTF-8 file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// Character offset of the last word read
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        position: i64,

        /// Resume from the saved position next time
        #[arg(long, conflicts_with = "no_resume")]
        resume: bool,

        /// Start from the beginning next time
        #[arg(long)]
        no_resume: bool,
    },

    /// Load a document (txt, rtf, html, pdf) as the current text
    Import {
        /// Document to import
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Read the next part of the text to standard output
    Read {
        /// Advance the saved position by this many words
        #[arg(short, long, default_value_t = 0)]
        advance: usize,

        /// Language override
        #[arg(long, value_enum)]
        language: Option<CliLanguage>,
    },

    /// Turn resuming from the last point on or off
    Resume {
        #[arg(value_enum)]
        state: Toggle,
    },

    /// Delete the saved reading session
    Clear,

    /// Detect the language of a text
    DetectLanguage {
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Show database statistics
    Stats,

    /// Generate shell completions for easyread
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// easyread - read texts aloud and pick up where you stopped
///
/// Keeps the last text, the position of the last word read, and whether to
/// resume from there, in a local SQLite database.
#[derive(Parser, Debug)]
#[command(name = "easyread")]
#[command(version)]
#[command(about = "Read texts aloud and resume where you stopped")]
#[command(long_about = "easyread keeps the text you are reading, the last word read and whether to resume from it.

EXAMPLES:
    easyread import book.pdf                 # Load a document
    easyread resume on                       # Resume from the last word next time
    easyread read --advance 20               # Read, then move 20 words forward
    easyread show --json                     # Print the saved session
    easyread completions bash > easyread.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. If the file doesn't
    exist, a default one is created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Database file, overriding the configuration
    #[arg(short, long, global = true, env = "EASYREAD_DATABASE")]
    database: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and label for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, label) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, label, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Accept every level here and narrow it with set_max_level once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "easyread", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::load_or_create(&cli.config_path)?;

    if let Some(database) = &cli.database {
        config.database_path = Some(database.clone());
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;
    log::set_max_level(config.log_level.to_level_filter());

    run(cli.command, &config)
}

fn open_store(config: &Config) -> Result<ReadingSessionStore> {
    let path = config.resolved_database_path()?;
    debug!("Using database {:?}", path);
    Ok(ReadingSessionStore::open(path)?)
}

fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Show { json } => {
            let store = open_store(config)?;
            let records = store.load_records()?;

            match records.last() {
                None if json => println!("null"),
                None => println!("No saved session"),
                Some(record) if json => println!("{}", serde_json::to_string_pretty(record)?),
                Some(record) => {
                    let session = record.clone().into_session();
                    println!("Saved at: {}", record.saved_at);
                    println!("Session:  {}", session);
                    if !session.position_in_bounds() {
                        println!("Warning:  position is outside the text");
                    }
                    println!();
                    println!("{}", session.text_or_empty());
                }
            }
        }

        Commands::Save {
            text,
            file,
            position,
            resume,
            no_resume,
        } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(file)) => FileManager::read_to_string(&file)?,
                (None, None) => return Err(anyhow!("Either TEXT or --file is required")),
            };

            let mut store = open_store(config)?;
            let resume = if resume {
                true
            } else if no_resume {
                false
            } else {
                store
                    .current()?
                    .map_or(config.resume_from_last_point, |s| s.resume_from_last_point)
            };

            store.save(&text, position, resume)?;
            info!("Saved {} characters at position {}", reading::char_len(&text), position);
        }

        Commands::Import { path } => {
            let engine = TranscriptEngine::new(std::io::sink());
            let mut controller = Controller::with_config(config, engine)?;
            controller.load_document(&path)?;
            info!(
                "Imported {:?} ({} characters)",
                path,
                reading::char_len(controller.text())
            );
        }

        Commands::Read { advance, language } => {
            let engine = TranscriptEngine::new(std::io::stdout());
            let mut controller = Controller::with_config(config, engine)?;
            if let Some(language) = language {
                controller.set_language(language.into());
            }

            if controller.text().is_empty() {
                println!("Nothing to read");
                return Ok(());
            }

            let utterance = controller.start_reading()?;

            for start in reading::word_starts(&utterance.text).into_iter().take(advance) {
                controller.on_word_boundary(reading::word_at(&utterance.text, start));
            }

            if advance > 0 {
                info!("Position moved to {}", controller.pointer());
            }
            controller.stop()?;
        }

        Commands::Resume { state } => {
            let mut store = open_store(config)?;
            let mut session = store.current_or_default()?;
            session.resume_from_last_point = matches!(state, Toggle::On);
            store.save_session(&session)?;
            info!("Resume from last point: {:?}", state);
        }

        Commands::Clear => {
            let mut store = open_store(config)?;
            store.clear()?;
            info!("Reading session cleared");
        }

        Commands::DetectLanguage { text } => match language_utils::detect_language(&text) {
            Some(detected) => println!(
                "{} ({}) confidence {:.2}",
                detected.name, detected.code, detected.confidence
            ),
            None => println!("not found"),
        },

        Commands::Stats => {
            let store = open_store(config)?;
            println!("{}", store.connection().stats()?);
        }

        Commands::Completions { .. } => {}
    }

    Ok(())
}
