//! The failure payload carried by [`Outcome`](crate::Outcome).
//!
//! An [`Error`] is an immutable `(code, message)` pair. Both fields use
//! `Cow<'static, str>` so the common kinds are zero-allocation constants.
//!
//! # Examples
//!
//! ```rust
//! use keel_core::Error;
//!
//! let error = Error::validation("Name is required");
//! assert_eq!(error.code(), "Validation");
//! assert_eq!(error.message(), "Name is required");
//! assert!(!error.is_none());
//! ```

use std::borrow::Cow;

/// Well-known error codes.
pub mod codes {
    /// Sentinel "no error" code.
    pub const NONE: &str = "";
    /// A required value was absent.
    pub const NULL: &str = "Null";
    /// A looked-up entity does not exist.
    pub const NOT_FOUND: &str = "NotFound";
    /// The caller is not allowed to perform the operation.
    pub const UNAUTHORIZED: &str = "Unauthorized";
    /// Input failed a business rule.
    pub const VALIDATION: &str = "Validation";
    /// Generic failure.
    pub const FAILURE: &str = "Failure";
    /// The operation conflicts with existing state.
    pub const CONFLICT: &str = "Conflict";
    /// Several independent failures joined by `Outcome::combine_all`.
    pub const MULTIPLE: &str = "Multiple";
    /// Several failures joined by `Outcome::aggregate`.
    pub const AGGREGATE: &str = "Aggregate";
}

/// Separator used when several messages are joined into one error.
pub const MESSAGE_SEPARATOR: &str = "; ";

// ============================================================================
// ERROR
// ============================================================================

/// An immutable `(code, message)` pair describing why an operation failed.
///
/// Equality is structural. [`Error::NONE`] is the sentinel for "no error" and
/// is never a legitimate failure payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{code}: {message}")]
pub struct Error {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl Error {
    /// The "no error" sentinel.
    pub const NONE: Self = Self::from_static(codes::NONE, "");

    /// A required value was absent.
    pub const NULL: Self = Self::from_static(codes::NULL, "The specified value is null");

    /// The requested entity was not found.
    pub const NOT_FOUND: Self =
        Self::from_static(codes::NOT_FOUND, "The requested resource was not found");

    /// The caller is not authorized.
    pub const UNAUTHORIZED: Self =
        Self::from_static(codes::UNAUTHORIZED, "The caller is not authorized");

    const fn from_static(code: &'static str, message: &'static str) -> Self {
        Self {
            code: Cow::Borrowed(code),
            message: Cow::Borrowed(message),
        }
    }

    /// Creates an error with an arbitrary code.
    ///
    /// ```rust
    /// use keel_core::Error;
    ///
    /// let error = Error::new("RateLimited", format!("retry in {}s", 30));
    /// assert_eq!(error.to_string(), "RateLimited: retry in 30s");
    /// ```
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a `Validation` error.
    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(codes::VALIDATION, message)
    }

    /// Creates a `Failure` error.
    pub fn failure(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(codes::FAILURE, message)
    }

    /// Creates a `Conflict` error.
    pub fn conflict(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(codes::CONFLICT, message)
    }

    /// Creates a `NotFound` error with a specific message.
    pub fn not_found_with(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(codes::NOT_FOUND, message)
    }

    /// Creates an `Unauthorized` error with a specific message.
    pub fn unauthorized_with(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(codes::UNAUTHORIZED, message)
    }

    /// Joins several messages under the `Multiple` code.
    pub fn multiple<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(codes::MULTIPLE, join_messages(messages))
    }

    /// Joins several messages under the `Aggregate` code.
    pub fn aggregate<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(codes::AGGREGATE, join_messages(messages))
    }

    /// Returns the category code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` for the [`Error::NONE`] sentinel.
    pub fn is_none(&self) -> bool {
        self.code.is_empty() && self.message.is_empty()
    }
}

fn join_messages<I, S>(messages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, message) in messages.into_iter().enumerate() {
        if i > 0 {
            joined.push_str(MESSAGE_SEPARATOR);
        }
        joined.push_str(message.as_ref());
    }
    joined
}

// ============================================================================
// TESTS
// ============================================================================
