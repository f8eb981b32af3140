//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: organization name, assignment title
pub const MAX_NAME_LEN: usize = 200;

/// Short labels: department, position
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Usernames and person names
pub const MAX_USERNAME_LEN: usize = 150;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Free text: descriptions, addresses, evaluation comments
pub const MAX_NOTE_LEN: usize = 10_000;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")).with_detail("field", field));
    }
    validate_text(value, field, max_len)
}

/// Validate that a string is within the length limit.
pub fn validate_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        validate_text(v, field, max_len)?;
    }
    Ok(())
}

/// Validate that an optional replacement for a required string is non-empty.
pub fn validate_optional_required_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        validate_required_text(v, field, max_len)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Test Corp", "name", MAX_NAME_LEN).is_ok());
        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.message, "name must not be empty");
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_length_counts_chars() {
        // 100 multi-byte chars fit a 100-char limit
        assert!(validate_text(&"é".repeat(100), "department", MAX_SHORT_TEXT_LEN).is_ok());
        assert!(validate_text(&"é".repeat(101), "department", MAX_SHORT_TEXT_LEN).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "address", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_required_text(&Some(String::new()), "title", MAX_NAME_LEN).is_err());
        assert!(validate_optional_required_text(&None, "title", MAX_NAME_LEN).is_ok());
    }
}
