//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `user_ingest` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use user_ingest::initialization::init_logger_with;
use user_ingest::{run, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal; settings then come from flags and the process environment
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run(config).await {
        Ok(report) => {
            let counted = report
                .line_counts
                .iter()
                .filter(|c| c.result.is_ok())
                .count();
            println!(
                "✅ Inserted {} user{} ({} skipped, {} admin{}); counted lines in {}/{} file{}",
                report.ingest.inserted,
                if report.ingest.inserted == 1 { "" } else { "s" },
                report.ingest.skipped(),
                report.ingest.admins,
                if report.ingest.admins == 1 { "" } else { "s" },
                counted,
                report.line_counts.len(),
                if report.line_counts.len() == 1 { "" } else { "s" },
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("user_ingest error: {:#}", e);
            process::exit(1);
        }
    }
}
