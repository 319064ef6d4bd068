//! Admin role matching.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::ADMIN_ROLE_PATTERN;

static ADMIN_ROLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ADMIN_ROLE_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile admin role pattern '{}': {}. This is a programming error.",
            ADMIN_ROLE_PATTERN, e
        )
    })
});

/// Returns true when `role` contains the word "admin" in any casing.
///
/// Whole-word only: `Admin` and `admin, ops` match, `administrator` does not.
pub fn is_admin_role(role: &str) -> bool {
    ADMIN_ROLE_RE.is_match(role)
}
