//! Ingestion pipeline.
//!
//! Streams an input file line by line, parses each line, stores valid
//! records, and hands admin records to an optional [`AdminHandler`].
//! Malformed lines are logged and counted; they never stop the run.

mod handler;

use std::path::Path;

use log::{debug, info, warn};
use sqlx::SqlitePool;

use crate::error_handling::{IngestError, IngestStats, SkipReason};
use crate::parse::{is_admin_role, try_parse_line};
use crate::source::{LineSource, SourceLine};
use crate::storage::insert_user;

pub use handler::{AdminHandler, LoggingAdminHandler};

/// Outcome of one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Records stored
    pub inserted: usize,
    /// Stored records that matched the admin role
    pub admins: usize,
    /// Why lines were skipped
    pub stats: IngestStats,
}

impl IngestReport {
    /// Number of lines dropped as malformed.
    pub fn skipped(&self) -> usize {
        self.stats.total_skips()
    }
}

/// Reads `path`, storing every valid record in `pool`.
///
/// For each stored record whose role matches the admin pattern, `handler`
/// (if any) is called with the record's name and email.
///
/// # Errors
///
/// - [`IngestError::NotFound`] if `path` does not exist
/// - [`IngestError::Io`] if reading fails part-way
/// - [`IngestError::Database`] if an insert fails
pub async fn process_users_stream(
    path: &Path,
    pool: &SqlitePool,
    handler: Option<&dyn AdminHandler>,
) -> Result<IngestReport, IngestError> {
    let mut source = LineSource::open(path).await?;
    let mut report = IngestReport::default();
    let mut line_number = 0usize;

    while let Some(line) = source.next_line().await? {
        line_number += 1;
        let line = match line {
            SourceLine::Text(line) => line,
            SourceLine::InvalidUtf8 => {
                warn!(
                    "{}:{}: line is not valid UTF-8, skipping",
                    path.display(),
                    line_number
                );
                report.stats.record_skip(SkipReason::InvalidUtf8);
                continue;
            }
        };

        let record = match try_parse_line(&line) {
            Ok(record) => record,
            Err(e) => {
                debug!(
                    "{}:{}: skipping malformed line {:?}: {}",
                    path.display(),
                    line_number,
                    line,
                    e
                );
                report.stats.record_skip(SkipReason::from(&e));
                continue;
            }
        };

        insert_user(pool, &record).await?;
        report.inserted += 1;

        if is_admin_role(record.role()) {
            report.admins += 1;
            if let Some(handler) = handler {
                handler.on_admin(record.name(), record.email());
            }
        }
    }

    Ok(report)
}

/// Like [`process_users_stream`], but a missing input file is not an error.
///
/// A missing file is logged as a warning and reported as zero insertions.
///
/// # Errors
///
/// [`IngestError::Io`] and [`IngestError::Database`] are passed through.
pub async fn ingest_users(
    path: &Path,
    pool: &SqlitePool,
    handler: Option<&dyn AdminHandler>,
) -> Result<IngestReport, IngestError> {
    match process_users_stream(path, pool, handler).await {
        Ok(report) => {
            info!(
                "Inserted {} users from {} ({} skipped)",
                report.inserted,
                path.display(),
                report.skipped()
            );
            report.stats.log_summary();
            Ok(report)
        }
        Err(IngestError::NotFound { path }) => {
            warn!("{} not found; skipping user import", path.display());
            Ok(IngestReport::default())
        }
        Err(e) => Err(e),
    }
}
