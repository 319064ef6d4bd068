//! Configuration constants.
//!
//! This module defines the defaults used by [`Config`](super::Config) and the
//! fixed values shared by the pipeline, notifier, and line counter.

/// Input file read by the ingestion pipeline when none is given.
pub const DEFAULT_INPUT_FILE: &str = "users.txt";

/// Database path used when none is given.
///
/// `:memory:` keeps the store in a single in-memory SQLite connection for the
/// lifetime of the run. Pass a file path to keep the rows afterwards.
pub const DEFAULT_DB_PATH: &str = ":memory:";

/// Endpoint that receives the ingestion summary.
pub const DEFAULT_NOTIFY_URL: &str = "https://example.com/ingest";

/// Per-request timeout for the summary POST, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Number of files counted concurrently by the line counter.
pub const DEFAULT_WORKERS: usize = 4;

/// Upper bound accepted for `--workers`.
pub const MAX_WORKERS: usize = 64;

/// Upper bound accepted for `--timeout-seconds`.
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Files counted by the line-count stage when none are given.
pub const DEFAULT_COUNT_FILES: &[&str] = &["input1.txt", "input2.txt"];

/// User-Agent sent with the summary POST.
pub const DEFAULT_USER_AGENT: &str = concat!("user_ingest/", env!("CARGO_PKG_VERSION"));

/// Role assigned to records that don't carry one.
pub const DEFAULT_ROLE: &str = "user";

/// Pattern a role must match for the admin handler to fire.
///
/// Case-insensitive, whole word: `Admin` matches, `administrator` does not.
pub const ADMIN_ROLE_PATTERN: &str = r"(?i)\badmin\b";

/// Path accepted by [`init_db_pool_with_path`](crate::storage::init_db_pool_with_path)
/// for an in-memory database.
pub const IN_MEMORY_DB_PATH: &str = ":memory:";
