//! Error handling and ingestion statistics.
//!
//! This module provides:
//! - Error type definitions for each stage (source, parser, store, notifier, counter)
//! - Skip reasons for lines the pipeline drops
//! - Per-run skip statistics
//!
//! Only [`IngestError::Io`] and [`IngestError::Database`] stop a run. Everything
//! else is logged and the run continues.

mod stats;
mod types;

// Re-export public API
pub use stats::IngestStats;
pub use types::{
    DatabaseError, IngestError, InitializationError, NotifyError, ParseError, SkipReason,
    TaskError,
};
