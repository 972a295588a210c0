//! Core validation types and traits
//!
//! This module contains the building blocks every builder is made of:
//!
//! - **Errors**: [`ValidationError`], [`ValidationResult`], [`ValidationFailure`]
//! - **Accessors**: [`Accessor`], the named field reader rules attach to
//! - **Traits**: [`Rule`], a reusable check over a whole target
//!
//! # Examples
//!
//! ```rust
//! use keel_validator::foundation::{ValidationError, ValidationResult};
//!
//! let mut result = ValidationResult::new();
//! result.add(ValidationError::not_empty("name"));
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.errors()[0].property, "name");
//! ```

pub mod accessor;
pub mod error;
pub mod traits;

pub use accessor::{Accessor, UNKNOWN_PROPERTY};
pub use error::{ValidationError, ValidationFailure, ValidationResult};
pub use traits::Rule;
