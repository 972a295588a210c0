//! Error types for validation failures
//!
//! - [`ValidationError`]: one failed check, tagged with the property it read
//! - [`ValidationResult`]: the ordered errors of one validation pass
//! - [`ValidationFailure`]: the fatal signal raised by
//!   [`ValidationResult::throw_if_invalid`]
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static property names and codes.

use std::borrow::Cow;
use std::fmt;

use keel_core::error::MESSAGE_SEPARATOR;
use keel_core::{Error, Outcome};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single failed check.
///
/// # Examples
///
/// ```rust
/// use keel_validator::ValidationError;
///
/// let error = ValidationError::new("email", "email is already registered");
/// assert_eq!(error.property, "email");
/// assert_eq!(error.code, "custom");
///
/// let error = ValidationError::min_length("name", 3);
/// assert_eq!(error.message, "name must be at least 3 characters");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationError {
    /// Name of the property the failing rule read.
    ///
    /// Empty for whole-object rules.
    pub property: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Rule identifier for programmatic handling.
    ///
    /// Examples: "not_empty", "email", "out_of_range"
    pub code: Cow<'static, str>,
}

impl ValidationError {
    /// Creates an error with the `custom` code.
    pub fn new(
        property: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            property: property.into(),
            message: message.into(),
            code: Cow::Borrowed("custom"),
        }
    }

    /// Creates an error for a whole-object rule.
    pub fn object(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("", message).with_code("predicate")
    }

    /// Sets the rule identifier.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }

    /// Returns `true` if the error is not tied to a single property.
    pub fn is_object_level(&self) -> bool {
        self.property.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "not_null" error.
    pub fn not_null(property: impl Into<Cow<'static, str>>) -> Self {
        let property = property.into();
        let message = format!("{property} must not be null");
        Self::new(property, message).with_code("not_null")
    }

    /// Creates a "not_empty" error.
    pub fn not_empty(property: impl Into<Cow<'static, str>>) -> Self {
        let property = property.into();
        let message = format!("{property} must not be empty");
        Self::new(property, message).with_code("not_empty")
    }

    /// Creates a "not_whitespace" error.
    pub fn not_whitespace(property: impl Into<Cow<'static, str>>) -> Self {
        let property = property.into();
        let message = format!("{property} must not be empty or whitespace");
        Self::new(property, message).with_code("not_whitespace")
    }

    /// Creates a "min_length" error.
    pub fn min_length(property: impl Into<Cow<'static, str>>, min: usize) -> Self {
        let property = property.into();
        let message = format!("{property} must be at least {min} characters");
        Self::new(property, message).with_code("min_length")
    }

    /// Creates a "max_length" error.
    pub fn max_length(property: impl Into<Cow<'static, str>>, max: usize) -> Self {
        let property = property.into();
        let message = format!("{property} must be at most {max} characters");
        Self::new(property, message).with_code("max_length")
    }

    /// Creates an "email" error.
    pub fn invalid_email(property: impl Into<Cow<'static, str>>) -> Self {
        let property = property.into();
        let message = format!("{property} must be a valid email address");
        Self::new(property, message).with_code("email")
    }

    /// Creates an "out_of_range" error.
    pub fn out_of_range<B: fmt::Display + ?Sized>(
        property: impl Into<Cow<'static, str>>,
        min: &B,
        max: &B,
    ) -> Self {
        let property = property.into();
        let message = format!("{property} must be between {min} and {max}");
        Self::new(property, message).with_code("out_of_range")
    }

    /// Creates a "greater_than" error.
    pub fn not_greater_than<B: fmt::Display + ?Sized>(
        property: impl Into<Cow<'static, str>>,
        bound: &B,
    ) -> Self {
        let property = property.into();
        let message = format!("{property} must be greater than {bound}");
        Self::new(property, message).with_code("greater_than")
    }

    /// Creates a "less_than" error.
    pub fn not_less_than<B: fmt::Display + ?Sized>(
        property: impl Into<Cow<'static, str>>,
        bound: &B,
    ) -> Self {
        let property = property.into();
        let message = format!("{property} must be less than {bound}");
        Self::new(property, message).with_code("less_than")
    }

    /// Creates a "predicate" error with a caller-supplied message.
    pub fn predicate(
        property: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(property, message).with_code("predicate")
    }
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// The ordered, append-only errors of one validation pass.
///
/// Valid if and only if no error was recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates an empty (valid) result.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends an error.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Appends a `custom` error for `property`.
    pub fn add_error(
        &mut self,
        property: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) {
        self.add(ValidationError::new(property, message));
    }

    /// Appends every error of `other`, keeping its order.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    /// Returns `true` if no error was recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors in the order they were recorded.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes the result and returns its errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Errors recorded for one property.
    pub fn errors_for<'a>(
        &'a self,
        property: &'a str,
    ) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors.iter().filter(move |e| e.property == property)
    }

    /// Every error message, in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.message.as_ref())
    }

    /// Converts to a `Result` whose error carries every validation error.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationFailure {
                errors: self.errors,
            })
        }
    }

    /// Succeeds with `value` when valid; otherwise fails with a
    /// `Validation` error joining every message in order.
    pub fn into_outcome<T>(self, value: T) -> Outcome<T> {
        if self.is_valid() {
            Outcome::success(value)
        } else {
            let joined = self.messages().collect::<Vec<_>>().join(MESSAGE_SEPARATOR);
            Outcome::failure(Error::validation(joined))
        }
    }

    /// Value-less form of [`into_outcome`](Self::into_outcome).
    pub fn to_outcome(&self) -> Outcome {
        self.clone().into_outcome(())
    }

    /// Raises the accumulated errors as a fatal signal.
    ///
    /// Does nothing when valid. Callers that want to stay recoverable, or
    /// need the errors as values, use [`into_result`](Self::into_result)
    /// instead.
    ///
    /// # Panics
    ///
    /// Panics when invalid. The panic message is the [`ValidationFailure`]
    /// summary, which lists every error message in order.
    pub fn throw_if_invalid(&self) {
        if self.is_valid() {
            return;
        }
        let failure = ValidationFailure {
            errors: self.errors.clone(),
        };
        tracing::warn!(errors = failure.errors.len(), "{failure}");
        panic!("{failure}");
    }
}

impl FromIterator<ValidationError> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl Extend<ValidationError> for ValidationResult {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for ValidationResult {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(f, &self.errors)
    }
}

fn write_summary(f: &mut fmt::Formatter<'_>, errors: &[ValidationError]) -> fmt::Result {
    write!(f, "Validation failed with {} error(s):", errors.len())?;
    for (i, error) in errors.iter().enumerate() {
        write!(f, "\n  {}. {}", i + 1, error)?;
    }
    Ok(())
}

// ============================================================================
// VALIDATION FAILURE
// ============================================================================

/// Every error of an invalid [`ValidationResult`], as a single error value.
///
/// Produced by [`ValidationResult::into_result`]. Its `Display` output is
/// the panic message of [`ValidationResult::throw_if_invalid`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", Summary(.errors))]
pub struct ValidationFailure {
    errors: Vec<ValidationError>,
}

impl ValidationFailure {
    /// Returns every error, in order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes the failure and returns its errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

struct Summary<'a>(&'a [ValidationError]);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(f, self.0)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_errors() -> ValidationResult {
        let mut result = ValidationResult::new();
        result.add(ValidationError::not_empty("name"));
        result.add(ValidationError::invalid_email("email"));
        result
    }

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("age", "age is too low");
        assert_eq!(error.property, "age");
        assert_eq!(error.message, "age is too low");
        assert_eq!(error.code, "custom");
        assert_eq!(error.to_string(), "age is too low");
    }

    #[test]
    fn test_object_level_error() {
        let error = ValidationError::object("passwords must match");
        assert!(error.is_object_level());
        assert_eq!(error.code, "predicate");
    }

    #[test]
    fn test_named_constructors() {
        assert_eq!(ValidationError::not_empty("name").message, "name must not be empty");
        assert_eq!(
            ValidationError::out_of_range("age", &18, &65).message,
            "age must be between 18 and 65"
        );
        assert_eq!(
            ValidationError::not_greater_than("price", &0.5).message,
            "price must be greater than 0.5"
        );
        assert_eq!(ValidationError::max_length("bio", 10).code, "max_length");
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("name", "required");
        assert!(matches!(error.property, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_result_starts_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid());
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_result_keeps_order() {
        let result = two_errors();
        assert!(!result.is_valid());
        assert_eq!(result.len(), 2);
        let properties: Vec<&str> = result.errors().iter().map(|e| e.property.as_ref()).collect();
        assert_eq!(properties, vec!["name", "email"]);
        assert_eq!(result.errors_for("email").count(), 1);
    }

    #[test]
    fn test_merge_appends() {
        let mut first = ValidationResult::new();
        first.add_error("a", "first");
        let mut second = ValidationResult::new();
        second.add_error("b", "second");
        first.merge(second);
        assert_eq!(first.messages().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn test_failure_enumerates_messages() {
        let failure = two_errors().into_result().unwrap_err();
        assert_eq!(failure.errors().len(), 2);
        assert_eq!(
            failure.to_string(),
            "Validation failed with 2 error(s):\n  1. name must not be empty\n  2. email must be a valid email address"
        );
    }

    #[test]
    fn test_outcome_conversion() {
        let outcome = two_errors().into_outcome(5);
        assert_eq!(outcome.error().code(), "Validation");
        assert_eq!(
            outcome.error().message(),
            "name must not be empty; email must be a valid email address"
        );
        assert_eq!(ValidationResult::new().into_outcome(5).into_value(), 5);
        assert!(ValidationResult::new().to_outcome().is_success());
    }

    #[test]
    fn test_throw_if_invalid_is_silent_when_valid() {
        ValidationResult::new().throw_if_invalid();
    }

    #[test]
    #[should_panic(expected = "Validation failed with 2 error(s):\n  1. name must not be empty\n  2. email must be a valid email address")]
    fn test_throw_if_invalid_panics_with_summary() {
        two_errors().throw_if_invalid();
    }

    #[test]
    fn test_throw_if_invalid_message_is_a_string() {
        let result = two_errors();
        let payload = std::panic::catch_unwind(|| result.throw_if_invalid()).unwrap_err();
        let message = payload.downcast::<String>().unwrap();
        assert_eq!(*message, result.to_string());
        for error in result.errors() {
            assert!(message.contains(error.message.as_ref()));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(two_errors()).unwrap();
        assert_eq!(json["errors"][0]["property"], "name");
        assert_eq!(json["errors"][1]["code"], "email");
    }
}
