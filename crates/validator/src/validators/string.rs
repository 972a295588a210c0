//! String validators
//!
//! Length is measured in Unicode scalar values (chars), never bytes.

use std::borrow::Cow;
use std::sync::LazyLock;

use super::Check;
use crate::foundation::ValidationError;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    ).unwrap()
});

/// Returns `true` if `input` looks like `local@domain.tld`.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}

// ============================================================================
// NOT EMPTY
// ============================================================================

/// Fails on the empty string. Whitespace counts as content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NotEmpty;

impl<P: AsRef<str> + ?Sized> Check<P> for NotEmpty {
    fn check(&self, property: &Cow<'static, str>, value: &P) -> Result<(), ValidationError> {
        if value.as_ref().is_empty() {
            return Err(ValidationError::not_empty(property.clone()));
        }
        Ok(())
    }
}

// ============================================================================
// NOT WHITESPACE
// ============================================================================

/// Fails on strings that are empty or contain only whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NotWhitespace;

impl<P: AsRef<str> + ?Sized> Check<P> for NotWhitespace {
    fn check(&self, property: &Cow<'static, str>, value: &P) -> Result<(), ValidationError> {
        if value.as_ref().trim().is_empty() {
            return Err(ValidationError::not_whitespace(property.clone()));
        }
        Ok(())
    }
}

// ============================================================================
// LENGTH
// ============================================================================

/// Fails when shorter than `min` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinLength {
    pub min: usize,
}

impl MinLength {
    #[must_use]
    pub const fn new(min: usize) -> Self {
        Self { min }
    }
}

impl<P: AsRef<str> + ?Sized> Check<P> for MinLength {
    fn check(&self, property: &Cow<'static, str>, value: &P) -> Result<(), ValidationError> {
        if value.as_ref().chars().count() < self.min {
            return Err(ValidationError::min_length(property.clone(), self.min));
        }
        Ok(())
    }
}

/// Fails when longer than `max` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxLength {
    pub max: usize,
}

impl MaxLength {
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { max }
    }
}

impl<P: AsRef<str> + ?Sized> Check<P> for MaxLength {
    fn check(&self, property: &Cow<'static, str>, value: &P) -> Result<(), ValidationError> {
        if value.as_ref().chars().count() > self.max {
            return Err(ValidationError::max_length(property.clone(), self.max));
        }
        Ok(())
    }
}

// ============================================================================
// EMAIL
// ============================================================================

/// Fails unless the string is a syntactically valid email address.
///
/// The empty string is not a valid address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ValidEmail;

impl<P: AsRef<str> + ?Sized> Check<P> for ValidEmail {
    fn check(&self, property: &Cow<'static, str>, value: &P) -> Result<(), ValidationError> {
        if !is_valid_email(value.as_ref()) {
            return Err(ValidationError::invalid_email(property.clone()));
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
