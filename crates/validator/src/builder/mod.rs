//! Fluent rule builders
//!
//! - [`ValidationBuilder`]: one-shot checks over a borrowed value, started
//!   with [`ValidateExt::validate`]
//! - [`RuleBuilder`]: reusable validators, started with [`create_validator`]

pub mod inline;
pub mod rules;

pub use inline::{ValidateExt, ValidationBuilder};
pub use rules::{PropertyRuleBuilder, RuleBuilder, create_validator};
