//! Database insert operations.
//!
//! All inserts use parameterized queries to prevent SQL injection.

use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;
use crate::models::UserRecord;

/// Inserts a user and returns the new row id.
pub async fn insert_user(pool: &SqlitePool, record: &UserRecord) -> Result<i64, DatabaseError> {
    let result = sqlx::query("INSERT INTO users (name, email, role) VALUES (?, ?, ?)")
        .bind(record.name())
        .bind(record.email())
        .bind(record.role())
        .execute(pool)
        .await
        .map_err(DatabaseError::SqlError)?;

    Ok(result.last_insert_rowid())
}
