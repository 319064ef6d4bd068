//! Record parsing.

use std::collections::HashMap;

use crate::error_handling::ParseError;
use crate::models::UserRecord;

const SEGMENT_SEPARATOR: char = ',';
const KEY_VALUE_SEPARATOR: char = '=';

/// Parses a line into a [`UserRecord`], reporting why it failed.
///
/// # Errors
///
/// - [`ParseError::MissingSeparator`] if a non-empty segment has no `=`
/// - [`ParseError::MissingField`] if `name` or `email` is absent
/// - [`ParseError::EmptyField`] if `name` or `email` is blank
pub fn try_parse_line(line: &str) -> Result<UserRecord, ParseError> {
    let mut fields: HashMap<&str, &str> = HashMap::new();
    for segment in line.split(SEGMENT_SEPARATOR) {
        if segment.is_empty() {
            continue;
        }
        let Some((key, value)) = segment.split_once(KEY_VALUE_SEPARATOR) else {
            return Err(ParseError::MissingSeparator {
                segment: segment.to_string(),
            });
        };
        fields.insert(key.trim(), value.trim());
    }

    let name = fields.get("name").ok_or(ParseError::MissingField("name"))?;
    let email = fields
        .get("email")
        .ok_or(ParseError::MissingField("email"))?;
    let role = fields.get("role").map(|r| r.to_string());

    UserRecord::new(*name, *email, role)
}

/// Parses a line into a [`UserRecord`], or `None` if it is malformed.
///
/// The reason is logged at debug level. Use [`try_parse_line`] to get it
/// back as a value.
pub fn parse_line(line: &str) -> Option<UserRecord> {
    match try_parse_line(line) {
        Ok(record) => Some(record),
        Err(e) => {
            log::debug!("Skipping malformed line {:?}: {}", line, e);
            None
        }
    }
}
