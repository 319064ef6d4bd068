//! Database connection pool management.
//!
//! This module initializes and configures the SQLite connection pool:
//! - `:memory:` gives a single long-lived connection, so every query sees the
//!   same in-memory database
//! - File paths are created if missing and switched to WAL mode

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, error, info};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::config::IN_MEMORY_DB_PATH;
use crate::error_handling::DatabaseError;

/// Initializes and returns a database connection pool for `db_path`.
///
/// # Errors
///
/// Returns `DatabaseError::FileCreationError` if the database file cannot be
/// created, or `DatabaseError::SqlError` if connecting fails.
pub async fn init_db_pool_with_path(db_path: &Path) -> Result<SqlitePool, DatabaseError> {
    if db_path.as_os_str() == IN_MEMORY_DB_PATH {
        return init_in_memory_pool().await;
    }

    let db_path_str = db_path.to_string_lossy().to_string();
    match OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .open(db_path)
    {
        Ok(_) => info!("Database file {} created.", db_path_str),
        Err(ref e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("Database file {} already exists.", db_path_str)
        }
        Err(e) => {
            error!("Failed to create database file {}: {e}", db_path_str);
            return Err(DatabaseError::FileCreationError(e.to_string()));
        }
    }

    let pool = SqlitePool::connect(&format!("sqlite:{}", db_path_str))
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            DatabaseError::SqlError(e)
        })?;

    sqlx::query("PRAGMA journal_mode=WAL")
        .execute(&pool)
        .await
        .map_err(|e| {
            error!("Failed to set WAL mode: {e}");
            DatabaseError::SqlError(e)
        })?;

    Ok(pool)
}

async fn init_in_memory_pool() -> Result<SqlitePool, DatabaseError> {
    // Each SQLite connection to :memory: is its own database, so the pool is
    // pinned to one connection that is never recycled.
    SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .map_err(|e| {
            error!("Failed to open in-memory database: {e}");
            DatabaseError::SqlError(e)
        })
}
