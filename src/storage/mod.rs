//! User store: pool setup, schema, inserts and read-back queries.

pub mod insert;
pub mod models;
pub mod pool;
pub mod queries;
pub mod schema;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export commonly used items
pub use insert::insert_user;
pub use models::StoredUser;
pub use pool::init_db_pool_with_path;
pub use queries::{count_users, list_users};
pub use schema::init_schema;
