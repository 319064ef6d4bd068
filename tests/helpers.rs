// Shared test helpers for database setup and input files.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Write;
use std::path::Path;

use sqlx::SqlitePool;
use tempfile::NamedTempFile;

use user_ingest::{init_db_pool_with_path, init_schema};

/// Creates an in-memory test database with the schema applied.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_pool() -> SqlitePool {
    let pool = init_db_pool_with_path(Path::new(":memory:"))
        .await
        .expect("Failed to create test database pool");
    init_schema(&pool).await.expect("Failed to create schema");
    pool
}

/// Writes `lines` to a temporary file, one per line.
#[allow(dead_code)] // Used by other test files
pub fn write_lines(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write line");
    }
    file.flush().expect("Failed to flush file");
    file
}
