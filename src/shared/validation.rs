//! Request field validation
//!
//! Every route checks its payload with these helpers before touching the
//! database. Messages name the offending field in quotes so the frontend can
//! show them as-is.

use crate::shared::error::SharedError;

/// Username length bounds (characters)
pub const USERNAME_LEN: (usize, usize) = (3, 20);
/// Password length bounds (characters), also applied to `newPassword`
pub const PASSWORD_LEN: (usize, usize) = (6, 20);
/// Topic name length bounds (characters, after trimming)
pub const TOPIC_NAME_LEN: (usize, usize) = (1, 100);

/// Require a field to be present and return it
pub fn required<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, SharedError> {
    value.ok_or_else(|| SharedError::validation(field, format!("\"{}\" is required", field)))
}

/// Check a string's length in characters against inclusive bounds
pub fn length(field: &str, value: &str, (min, max): (usize, usize)) -> Result<(), SharedError> {
    let len = value.chars().count();
    if len < min {
        return Err(SharedError::validation(
            field,
            format!("\"{}\" length must be at least {} characters long", field, min),
        ));
    }
    if len > max {
        return Err(SharedError::validation(
            field,
            format!(
                "\"{}\" length must be less than or equal to {} characters long",
                field, max
            ),
        ));
    }
    Ok(())
}

/// Validate a username (3-20 chars)
pub fn username(field: &str, value: &str) -> Result<(), SharedError> {
    length(field, value, USERNAME_LEN)
}

/// Validate a password (6-20 chars)
pub fn password(field: &str, value: &str) -> Result<(), SharedError> {
    length(field, value, PASSWORD_LEN)
}

/// Validate an email address
///
/// Accepts `local@domain.tld` where the local part is non-empty, the domain
/// has at least one dot with non-empty labels, and the top-level label is
/// alphabetic and at least two characters long.
pub fn email(field: &str, value: &str) -> Result<(), SharedError> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(SharedError::validation(
            field,
            format!("\"{}\" must be a valid email", field),
        ))
    }
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return false;
    }

    match labels.last() {
        Some(tld) => tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()),
        None => false,
    }
}

/// Validate a topic name and return it trimmed
pub fn topic_name<'a>(field: &str, value: &'a str) -> Result<&'a str, SharedError> {
    let trimmed = value.trim();
    length(field, trimmed, TOPIC_NAME_LEN)?;
    Ok(trimmed)
}

/// Reject empty or whitespace-only text
pub fn not_blank(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(
            field,
            format!("\"{}\" is not allowed to be empty", field),
        ));
    }
    Ok(())
}
