//! Error type definitions.
//!
//! This module defines the error types used throughout the application, plus
//! the reasons a line can be skipped during ingestion.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Errors raised while reading an input file into the pipeline.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The input file does not exist.
    #[error("{} not found", path.display())]
    NotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Reading the input file failed part-way.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Storing a record failed.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Reasons a line fails to parse into a [`UserRecord`](crate::models::UserRecord).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A non-empty segment has no `=`.
    #[error("segment {segment:?} has no '=' separator")]
    MissingSeparator {
        /// The offending segment, untrimmed
        segment: String,
    },

    /// A required key is absent.
    #[error("required field '{0}' is missing")]
    MissingField(&'static str),

    /// A required key is present but its value is blank.
    #[error("required field '{0}' is empty")]
    EmptyField(&'static str),
}

/// Errors from posting the ingestion summary.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The configured endpoint is not an absolute http(s) URL.
    #[error("Invalid notification URL {url:?}: {reason}")]
    InvalidUrl {
        /// URL as configured
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The endpoint answered with a non-2xx status.
    #[error("{url} responded with HTTP {status}")]
    Status {
        /// Endpoint URL
        url: String,
        /// Response status
        status: reqwest::StatusCode,
    },

    /// The request never produced a response (connect, TLS, timeout, ...).
    #[error("Request to {url} failed: {source}")]
    Transport {
        /// Endpoint URL
        url: String,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },
}

/// Failure of a single file in the parallel line counter.
#[derive(Error, Debug)]
pub enum TaskError {
    /// The file does not exist.
    #[error("{} not found", path.display())]
    NotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Opening or reading the file failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The counting task panicked or was aborted.
    #[error("Line count task for {} did not complete: {reason}", path.display())]
    Panicked {
        /// Path the task was counting
        path: PathBuf,
        /// Join error description
        reason: String,
    },
}

impl TaskError {
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            TaskError::NotFound { path }
        } else {
            TaskError::Io { path, source }
        }
    }
}

/// Why the pipeline skipped a line.
///
/// Skips are never fatal. Each one is logged and counted in
/// [`IngestStats`](super::IngestStats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum SkipReason {
    /// A segment had no `=`
    MissingSeparator,
    /// `name` or `email` was absent
    MissingField,
    /// `name` or `email` was blank
    EmptyField,
    /// The line was not valid UTF-8
    InvalidUtf8,
}

impl SkipReason {
    /// Human-readable label used in the run summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MissingSeparator => "Segment without '=' separator",
            SkipReason::MissingField => "Missing required field",
            SkipReason::EmptyField => "Empty required field",
            SkipReason::InvalidUtf8 => "Line is not valid UTF-8",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&ParseError> for SkipReason {
    fn from(err: &ParseError) -> Self {
        match err {
            ParseError::MissingSeparator { .. } => SkipReason::MissingSeparator,
            ParseError::MissingField(_) => SkipReason::MissingField,
            ParseError::EmptyField(_) => SkipReason::EmptyField,
        }
    }
}
