//! Prelude module for convenient imports.
//!
//! Provides a single `use keel_validator::prelude::*;` import that brings
//! in the builders, the validation model and the [`field!`](crate::field)
//! macro.
//!
//! # Examples
//!
//! ```rust
//! use keel_validator::prelude::*;
//!
//! struct Login { user: String }
//!
//! let result = Login { user: "ada".into() }
//!     .validate()
//!     .min_length(field!(Login, user), 3)
//!     .build();
//! assert!(result.is_valid());
//! ```

// ============================================================================
// FOUNDATION: Errors, accessors, rules
// ============================================================================

pub use crate::foundation::{
    Accessor, Rule, ValidationError, ValidationFailure, ValidationResult,
};

// ============================================================================
// BUILDERS
// ============================================================================

pub use crate::builder::{
    PropertyRuleBuilder, RuleBuilder, ValidateExt, ValidationBuilder, create_validator,
};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::Check;

pub use crate::field;
