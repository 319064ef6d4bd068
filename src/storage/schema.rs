//! Schema creation.

use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    role TEXT DEFAULT 'user'
)";

/// Creates the `users` table if it does not exist yet.
///
/// Safe to call any number of times.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::query(CREATE_USERS_TABLE)
        .execute(pool)
        .await
        .map_err(DatabaseError::SqlError)?;
    Ok(())
}
