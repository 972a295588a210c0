//! # keel-validator
//!
//! Fluent field validation that collects every failure instead of stopping
//! at the first one.
//!
//! ## Quick Start
//!
//! ```rust
//! use keel_validator::prelude::*;
//!
//! struct User { name: String, email: String }
//!
//! let user = User { name: String::new(), email: "not-an-email".into() };
//!
//! // One-shot checks over a value
//! let result = user
//!     .validate()
//!     .not_empty(field!(User, name))
//!     .valid_email(field!(User, email))
//!     .build();
//! assert_eq!(result.len(), 2);
//!
//! // A reusable validator
//! let validator = create_validator::<User>()
//!     .rule_for(field!(User, name))
//!         .not_whitespace()
//!     .rule_for(field!(User, email))
//!         .valid_email()
//!     .build();
//! assert_eq!(validator.validate(&user).len(), 2);
//! ```
//!
//! ## Property Names
//!
//! Rules attach to a property through an [`Accessor`]. The [`field!`] macro
//! derives its name from the field tokens; closures passed to
//! [`Accessor::unnamed`] report [`UNKNOWN_PROPERTY`].
//!
//! ## Outcomes
//!
//! A [`ValidationResult`] converts into a `keel_core::Outcome` through
//! [`ValidationResult::into_outcome`], into a `Result` through
//! [`ValidationResult::into_result`], or raises a [`ValidationFailure`]
//! through [`ValidationResult::throw_if_invalid`].

pub mod builder;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

pub use builder::{
    PropertyRuleBuilder, RuleBuilder, ValidateExt, ValidationBuilder, create_validator,
};
pub use foundation::{
    Accessor, Rule, UNKNOWN_PROPERTY, ValidationError, ValidationFailure, ValidationResult,
};
