//! Input line parsing.
//!
//! Turns one `key=value,key=value` line into a [`UserRecord`](crate::models::UserRecord):
//! - Segments are separated by `,`; empty segments are ignored
//! - Each segment splits on its first `=`
//! - Keys and values are trimmed; a repeated key keeps the last value
//! - `name` and `email` are required, `role` defaults to `"user"`
//!
//! Also hosts the admin-role predicate, compiled once per process.

mod record;
mod role;

// Re-export public API
pub use record::{parse_line, try_parse_line};
pub use role::is_admin_role;
