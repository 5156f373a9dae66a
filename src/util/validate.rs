// src/util/validate.rs
use crate::domain::DomainError;

/// Require a non-empty string field, returning the trimmed value.
///
/// Accepts `None` (missing field) as well as whitespace-only values; both fail
/// with an error naming the field so the caller can surface a 400 with a
/// human-readable message.
///
/// # Examples
///
/// ```
/// use tabforge::util::validate::require_non_empty_string;
///
/// let title = require_non_empty_string(Some("  My Doc  "), "title").unwrap();
/// assert_eq!(title, "My Doc");
///
/// assert!(require_non_empty_string(Some("   "), "title").is_err());
/// assert!(require_non_empty_string(None, "html").is_err());
/// ```
pub fn require_non_empty_string(
    value: Option<&str>,
    field_name: &str,
) -> Result<String, DomainError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(DomainError::FieldRequired(field_name.to_string())),
    }
}
