//! Built-in checks
//!
//! Every rule the builders offer is a [`Check`] over the property type it
//! reads. Checks are stateless apart from their bounds and are shared
//! between the inline builder and registered property rules.
//!
//! # Categories
//!
//! - **String**: [`NotEmpty`], [`NotWhitespace`], [`MinLength`], [`MaxLength`],
//!   [`ValidEmail`]
//! - **Numeric**: [`InRange`], [`GreaterThan`], [`LessThan`]
//! - **General**: [`NotNull`], [`Predicate`]
//!
//! # Examples
//!
//! ```rust
//! use std::borrow::Cow;
//! use keel_validator::validators::{Check, MinLength};
//!
//! let name = Cow::Borrowed("name");
//! assert!(MinLength::new(3).check(&name, "ada").is_ok());
//!
//! let error = MinLength::new(5).check(&name, "ada").unwrap_err();
//! assert_eq!(error.message, "name must be at least 5 characters");
//! ```

use std::borrow::Cow;

use crate::foundation::ValidationError;

pub mod general;
pub mod numeric;
pub mod string;

pub use general::{NotNull, Predicate};
pub use numeric::{GreaterThan, InRange, LessThan};
pub use string::{MaxLength, MinLength, NotEmpty, NotWhitespace, ValidEmail};

/// A single check over a property value of type `P`.
///
/// `property` is the display name of the member being checked; it only
/// feeds the error that is returned on failure.
pub trait Check<P: ?Sized>: Send + Sync {
    /// Returns `Err` with a fully described error when `value` fails.
    fn check(&self, property: &Cow<'static, str>, value: &P) -> Result<(), ValidationError>;
}

impl<P: ?Sized> Check<P> for Box<dyn Check<P>> {
    fn check(&self, property: &Cow<'static, str>, value: &P) -> Result<(), ValidationError> {
        (**self).check(property, value)
    }
}
