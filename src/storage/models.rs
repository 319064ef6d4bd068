//! Database models and types.

use sqlx::FromRow;

/// A row of the `users` table.
///
/// # Database Schema
///
/// `id` is an autoincrementing primary key; `role` defaults to `'user'` at the
/// column level, though inserts always bind it explicitly.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct StoredUser {
    /// Autoincrement primary key
    pub id: i64,
    /// User name
    pub name: String,
    /// User email
    pub email: String,
    /// User role
    pub role: String,
}
