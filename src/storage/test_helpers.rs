//! Shared test helpers for storage module tests.

use sqlx::SqlitePool;

use crate::models::UserRecord;
use crate::storage::{init_db_pool_with_path, init_schema};

/// Creates an in-memory test database with the schema applied.
pub async fn create_test_pool() -> SqlitePool {
    let pool = init_db_pool_with_path(std::path::Path::new(":memory:"))
        .await
        .expect("Failed to create test database pool");
    init_schema(&pool).await.expect("Failed to create schema");
    pool
}

/// Builds a record, panicking on invalid input.
pub fn test_record(name: &str, email: &str, role: Option<String>) -> UserRecord {
    UserRecord::new(name, email, role).expect("Invalid test record")
}
