//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::{
    DEFAULT_COUNT_FILES, DEFAULT_DB_PATH, DEFAULT_INPUT_FILE, DEFAULT_NOTIFY_URL,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, DEFAULT_WORKERS, MAX_TIMEOUT_SECS, MAX_WORKERS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Run configuration.
///
/// Parsed from the command line (most flags can also come from a
/// `USER_INGEST_*` environment variable) or built programmatically.
///
/// # Examples
///
/// ```no_run
/// use user_ingest::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input_file: PathBuf::from("users.txt"),
///     notify: false,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "user_ingest", version, about)]
pub struct Config {
    /// File to read user records from (`key=value` pairs, one record per line)
    #[arg(
        long,
        env = "USER_INGEST_INPUT_FILE",
        default_value = DEFAULT_INPUT_FILE
    )]
    pub input_file: PathBuf,

    /// SQLite database path (`:memory:` for an in-memory store)
    #[arg(long, env = "USER_INGEST_DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Endpoint that receives the `{"inserted": N}` summary
    #[arg(long, env = "USER_INGEST_NOTIFY_URL", default_value = DEFAULT_NOTIFY_URL)]
    pub notify_url: String,

    /// Skip posting the summary to `notify_url`
    ///
    /// `USER_INGEST_NOTIFY=false` has the same effect.
    #[arg(long = "no-notify", env = "USER_INGEST_NOTIFY", action = clap::ArgAction::SetFalse)]
    pub notify: bool,

    /// Timeout for the summary POST in seconds
    #[arg(
        long,
        env = "USER_INGEST_TIMEOUT_SECONDS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, env = "USER_INGEST_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Number of files the line counter processes concurrently
    #[arg(long, env = "USER_INGEST_WORKERS", default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Files to count lines in (repeat the flag or separate with commas)
    #[arg(
        long = "count-file",
        env = "USER_INGEST_COUNT_FILES",
        value_delimiter = ',',
        default_values = DEFAULT_COUNT_FILES.iter().copied()
    )]
    pub count_files: Vec<PathBuf>,

    /// Log level
    #[arg(long, env = "USER_INGEST_LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, env = "USER_INGEST_LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            notify_url: DEFAULT_NOTIFY_URL.to_string(),
            notify: true,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            workers: DEFAULT_WORKERS,
            count_files: DEFAULT_COUNT_FILES.iter().map(PathBuf::from).collect(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// A configuration value outside its accepted range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted
    pub message: String,
}

impl Config {
    /// Checks value ranges that clap's type parsing can't express.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigValidationError`] found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.workers == 0 || self.workers > MAX_WORKERS {
            return Err(ConfigValidationError {
                field: "workers",
                message: format!(
                    "must be greater than 0 and at most {} (got {})",
                    MAX_WORKERS, self.workers
                ),
            });
        }
        if self.timeout_seconds == 0 || self.timeout_seconds > MAX_TIMEOUT_SECS {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: format!(
                    "must be greater than 0 and at most {} (got {})",
                    MAX_TIMEOUT_SECS, self.timeout_seconds
                ),
            });
        }
        if self.notify {
            match url::Url::parse(&self.notify_url) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                Ok(url) => {
                    return Err(ConfigValidationError {
                        field: "notify_url",
                        message: format!(
                            "scheme must be http or https (got '{}'); use --no-notify to skip the summary",
                            url.scheme()
                        ),
                    })
                }
                Err(e) => {
                    return Err(ConfigValidationError {
                        field: "notify_url",
                        message: format!(
                            "{} is not an absolute URL ({}); use --no-notify to skip the summary",
                            self.notify_url, e
                        ),
                    })
                }
            }
        }
        Ok(())
    }
}
