//! Set naming rules.
//!
//! # Responsibility
//! - Validate the process-wide unique names sets are registered under.
//!
//! # Invariants
//! - A valid set name never collides with the reserved pending-copy
//!   path segment.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static SET_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("valid set name regex"));

/// Path segment reserved for pending-copy locators.
pub const RESERVED_COPIES_SEGMENT: &str = "copies";

/// Set name validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetNameError {
    Empty,
    InvalidFormat(String),
    Reserved(String),
}

impl Display for SetNameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "set name must not be empty"),
            Self::InvalidFormat(value) => write!(
                f,
                "set name `{value}` must start with a letter and contain only letters, digits, `_` or `-`"
            ),
            Self::Reserved(value) => write!(f, "set name `{value}` is reserved"),
        }
    }
}

impl Error for SetNameError {}

/// Validates one set name after trimming.
pub fn validate_set_name(value: &str) -> Result<(), SetNameError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(SetNameError::Empty);
    }
    if !SET_NAME_RE.is_match(normalized) {
        return Err(SetNameError::InvalidFormat(normalized.to_string()));
    }
    if normalized == RESERVED_COPIES_SEGMENT {
        return Err(SetNameError::Reserved(normalized.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_set_name, SetNameError};

    #[test]
    fn accepts_plain_and_mixed_case_names() {
        validate_set_name("forms").expect("plain name should validate");
        validate_set_name("publishedForms").expect("mixed case name should validate");
        validate_set_name("a1_b-2").expect("digits and separators should validate");
    }

    #[test]
    fn rejects_empty_and_blank_names() {
        assert_eq!(validate_set_name(""), Err(SetNameError::Empty));
        assert_eq!(validate_set_name("   "), Err(SetNameError::Empty));
    }

    #[test]
    fn rejects_invalid_shapes() {
        assert!(matches!(
            validate_set_name("9lives"),
            Err(SetNameError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_set_name("with space"),
            Err(SetNameError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_set_name("slash/name"),
            Err(SetNameError::InvalidFormat(_))
        ));
    }

    #[test]
    fn rejects_reserved_copies_segment() {
        assert_eq!(
            validate_set_name("copies"),
            Err(SetNameError::Reserved("copies".to_string()))
        );
    }
}
