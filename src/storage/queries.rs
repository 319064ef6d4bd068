//! Read-back queries over the `users` table.

use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

use super::models::StoredUser;

/// Returns every stored user in insertion order.
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<StoredUser>, DatabaseError> {
    sqlx::query_as::<_, StoredUser>(
        "SELECT id, name, email, COALESCE(role, 'user') AS role FROM users ORDER BY id",
    )
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::SqlError)
}

/// Returns the number of stored users.
pub async fn count_users(pool: &SqlitePool) -> Result<i64, DatabaseError> {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .map_err(DatabaseError::SqlError)
}
