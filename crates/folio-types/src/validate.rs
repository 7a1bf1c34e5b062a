//! Input validation shared by every store backend
//!
//! Pure functions with no side effects. Text fields are trimmed before any
//! length check; limits count characters, not bytes.

use thiserror::Error;

/// Maximum length of a guestbook author name, in characters.
pub const MAX_NAME_CHARS: usize = 50;

/// Maximum length of a guestbook message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 500;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("a name is required")]
    EmptyName,

    #[error("name must be at most 50 characters")]
    NameTooLong,

    #[error("a message is required")]
    EmptyMessage,

    #[error("message must be at most 500 characters")]
    MessageTooLong,

    #[error("a visitor id is required")]
    MissingVisitorId,
}

/// Trim both guestbook fields and enforce the length limits.
///
/// Returns the trimmed values so stores persist exactly what was validated.
pub fn validate_entry(name: &str, message: &str) -> Result<(String, String), ValidationError> {
    let name = name.trim();
    let message = message.trim();

    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(ValidationError::NameTooLong);
    }
    if message.is_empty() {
        return Err(ValidationError::EmptyMessage);
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ValidationError::MessageTooLong);
    }

    Ok((name.to_string(), message.to_string()))
}

/// The visitor id is client-asserted and opaque; the only requirement is
/// that it is present.
pub fn validate_visitor_id(visitor_id: &str) -> Result<&str, ValidationError> {
    if visitor_id.is_empty() {
        return Err(ValidationError::MissingVisitorId);
    }
    Ok(visitor_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_before_checking() {
        let (name, message) = validate_entry("  Ann  ", "  hello  ").unwrap();
        assert_eq!(name, "Ann");
        assert_eq!(message, "hello");
    }

    #[test]
    fn rejects_whitespace_only_fields() {
        assert_eq!(validate_entry("   ", "hi"), Err(ValidationError::EmptyName));
        assert_eq!(
            validate_entry("Ann", "   "),
            Err(ValidationError::EmptyMessage)
        );
    }

    #[test]
    fn enforces_length_limits() {
        let long_name = "a".repeat(MAX_NAME_CHARS + 1);
        assert_eq!(
            validate_entry(&long_name, "hi"),
            Err(ValidationError::NameTooLong)
        );

        let long_message = "b".repeat(MAX_MESSAGE_CHARS + 1);
        assert_eq!(
            validate_entry("Ann", &long_message),
            Err(ValidationError::MessageTooLong)
        );

        // Exactly at the limit is fine
        let name = "a".repeat(MAX_NAME_CHARS);
        let message = "b".repeat(MAX_MESSAGE_CHARS);
        assert!(validate_entry(&name, &message).is_ok());
    }

    #[test]
    fn limits_count_characters_not_bytes() {
        // 50 multi-byte characters exceed 50 bytes but pass the check
        let name = "가".repeat(MAX_NAME_CHARS);
        assert!(name.len() > MAX_NAME_CHARS);
        assert!(validate_entry(&name, "hi").is_ok());
    }

    #[test]
    fn visitor_id_must_be_present() {
        assert_eq!(
            validate_visitor_id(""),
            Err(ValidationError::MissingVisitorId)
        );
        assert_eq!(validate_visitor_id("abc"), Ok("abc"));
    }
}
