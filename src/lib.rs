//! user_ingest library: validated user ingestion into SQLite
//!
//! Reads `key=value` user records from a text file, stores the valid ones in a
//! SQLite `users` table using bound parameters only, reports admin records to
//! an optional handler, posts an `{"inserted": N}` summary over HTTPS, and
//! counts lines across a set of files with a bounded pool of tokio tasks.
//!
//! # Example
//!
//! ```no_run
//! use user_ingest::{run, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input_file: std::path::PathBuf::from("users.txt"),
//!     notify: false,
//!     ..Default::default()
//! };
//!
//! let report = run(config).await?;
//! println!("Inserted {} users", report.ingest.inserted);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
pub mod counter;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod notify;
pub mod parse;
pub mod pipeline;
pub mod source;
pub mod storage;

// Re-export public API
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel};
pub use counter::{count_lines, count_lines_parallel, LineCount};
pub use error_handling::{
    DatabaseError, IngestError, IngestStats, NotifyError, ParseError, SkipReason, TaskError,
};
pub use models::{Summary, UserRecord};
pub use notify::Notifier;
pub use parse::{is_admin_role, parse_line, try_parse_line};
pub use pipeline::{
    ingest_users, process_users_stream, AdminHandler, IngestReport, LoggingAdminHandler,
};
pub use run::{run, RunReport};
pub use storage::{count_users, init_db_pool_with_path, init_schema, insert_user, list_users};

// Internal run module (contains the top-level orchestration)
mod run {
    use anyhow::{Context, Result};
    use log::{error, info, warn};
    use reqwest::StatusCode;

    use crate::config::Config;
    use crate::counter::{count_lines_parallel, LineCount};
    use crate::initialization::init_client;
    use crate::models::Summary;
    use crate::notify::Notifier;
    use crate::pipeline::{ingest_users, IngestReport, LoggingAdminHandler};
    use crate::storage::{init_db_pool_with_path, init_schema};

    /// Results of a full run.
    #[derive(Debug)]
    pub struct RunReport {
        /// What the ingestion stage stored and skipped
        pub ingest: IngestReport,
        /// Status returned by the notification endpoint, if the POST succeeded
        pub notify_status: Option<StatusCode>,
        /// Per-file results of the line-count stage, in completion order
        pub line_counts: Vec<LineCount>,
    }

    /// Runs ingestion, notification, and line counting with `config`.
    ///
    /// Stages that hit an expected failure log it and let the run continue:
    /// - a missing input file yields zero insertions
    /// - a failed or rejected notification is logged with its cause
    /// - unreadable files in the line count are reported per file
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, if the database
    /// cannot be opened or written, or if the input file fails part-way
    /// through reading.
    pub async fn run(config: Config) -> Result<RunReport> {
        config.validate().context("Invalid configuration")?;

        let pool = init_db_pool_with_path(&config.db_path)
            .await
            .context("Failed to initialize database pool")?;
        init_schema(&pool)
            .await
            .context("Failed to initialize database schema")?;

        let ingest = ingest_users(&config.input_file, &pool, Some(&LoggingAdminHandler))
            .await
            .with_context(|| format!("Failed to ingest {}", config.input_file.display()))?;

        let notify_status = if config.notify {
            let summary = Summary {
                inserted: ingest.inserted,
            };
            match init_client(&config) {
                Ok(client) => match Notifier::new(client, &config.notify_url) {
                    Ok(notifier) => match notifier.send(&summary).await {
                        Ok(status) => {
                            info!("Send result: {}", status);
                            Some(status)
                        }
                        Err(e) => {
                            error!("Failed to send data: {:#}", anyhow::Error::from(e));
                            None
                        }
                    },
                    Err(e) => {
                        warn!("Skipping notification: {}", e);
                        None
                    }
                },
                Err(e) => {
                    error!("Failed to send data: {:#}", anyhow::Error::from(e));
                    None
                }
            }
        } else {
            info!("Notification disabled; not sending summary");
            None
        };

        let line_counts = count_lines_parallel(&config.count_files, config.workers).await;

        pool.close().await;

        Ok(RunReport {
            ingest,
            notify_status,
            line_counts,
        })
    }
}
