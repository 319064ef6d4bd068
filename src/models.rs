//! User records and the summary payload.

use serde::Serialize;

use crate::config::DEFAULT_ROLE;
use crate::error_handling::ParseError;

/// A validated user entry parsed from one input line.
///
/// Fields are private so a record can only come out of [`UserRecord::new`]
/// (which the line parser goes through), guaranteeing non-empty `name` and
/// `email`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    name: String,
    email: String,
    role: String,
}

impl UserRecord {
    /// Builds a record, trimming each value.
    ///
    /// A missing or blank `role` falls back to `"user"`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: Option<String>,
    ) -> Result<Self, ParseError> {
        let name = name.into().trim().to_string();
        let email = email.into().trim().to_string();
        if name.is_empty() {
            return Err(ParseError::EmptyField("name"));
        }
        if email.is_empty() {
            return Err(ParseError::EmptyField("email"));
        }
        let role = role
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_ROLE.to_string());
        Ok(UserRecord { name, email, role })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address, stored as given.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Role, `"user"` unless the line said otherwise.
    pub fn role(&self) -> &str {
        &self.role
    }
}

/// Summary posted to the notification endpoint after ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Records stored by the run
    pub inserted: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_role() {
        let record = UserRecord::new("Alice", "alice@example.com", None).unwrap();
        assert_eq!(record.name(), "Alice");
        assert_eq!(record.email(), "alice@example.com");
        assert_eq!(record.role(), "user");
    }

    #[test]
    fn test_new_blank_role_falls_back() {
        let record = UserRecord::new("Bob", "bob@example.com", Some("   ".into())).unwrap();
        assert_eq!(record.role(), "user");
    }

    #[test]
    fn test_new_rejects_blank_required_fields() {
        assert_eq!(
            UserRecord::new(" ", "x@example.com", None),
            Err(ParseError::EmptyField("name"))
        );
        assert_eq!(
            UserRecord::new("Carol", "", None),
            Err(ParseError::EmptyField("email"))
        );
    }

    #[test]
    fn test_summary_serializes_as_inserted_count() {
        let body = serde_json::to_value(Summary { inserted: 3 }).unwrap();
        assert_eq!(body, serde_json::json!({ "inserted": 3 }));
    }
}
