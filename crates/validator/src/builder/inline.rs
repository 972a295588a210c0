//! Inline validation of a single value.
//!
//! Every call on a [`ValidationBuilder`] runs its check immediately against
//! the bound target and records a [`ValidationError`] on failure. Checks
//! never short-circuit: every failure of the chain ends up in the result,
//! in the order the calls were written.

use std::borrow::Cow;
use std::fmt::{self, Display};

use crate::foundation::{Accessor, ValidationError, ValidationResult};
use crate::validators::{
    Check, GreaterThan, InRange, LessThan, MaxLength, MinLength, NotEmpty, NotNull, NotWhitespace,
    ValidEmail,
};

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Starts an inline validation chain on any value.
///
/// # Examples
///
/// ```rust
/// use keel_validator::prelude::*;
///
/// struct User { name: String, email: String }
///
/// let user = User { name: String::new(), email: "nope".into() };
/// let result = user
///     .validate()
///     .not_empty(field!(User, name))
///     .valid_email(field!(User, email))
///     .build();
///
/// assert!(!result.is_valid());
/// assert_eq!(result.len(), 2);
/// ```
pub trait ValidateExt: Sized {
    /// Binds a fresh builder to `self`.
    fn validate(&self) -> ValidationBuilder<'_, Self>;
}

impl<T> ValidateExt for T {
    fn validate(&self) -> ValidationBuilder<'_, Self> {
        ValidationBuilder::new(self)
    }
}

// ============================================================================
// VALIDATION BUILDER
// ============================================================================

/// A validation pass in progress over one borrowed target.
///
/// Obtained through [`ValidateExt::validate`]; finished with
/// [`build`](Self::build).
#[must_use = "call `build` to obtain the validation result"]
pub struct ValidationBuilder<'a, T> {
    target: &'a T,
    result: ValidationResult,
    checks: usize,
}

impl<'a, T> ValidationBuilder<'a, T> {
    /// Creates a builder bound to `target` with an empty result.
    pub fn new(target: &'a T) -> Self {
        Self {
            target,
            result: ValidationResult::new(),
            checks: 0,
        }
    }

    /// Runs any [`Check`] against the property read by `accessor`.
    pub fn check<P, C>(mut self, accessor: Accessor<T, P>, check: C) -> Self
    where
        P: ?Sized,
        C: Check<P>,
    {
        self.checks += 1;
        if let Err(error) = check.check(accessor.name_cow(), accessor.get(self.target)) {
            self.record(error);
        }
        self
    }

    /// Fails when the property is `None`.
    pub fn not_null<P>(self, accessor: Accessor<T, Option<P>>) -> Self {
        self.check(accessor, NotNull)
    }

    /// Fails when the property is the empty string.
    pub fn not_empty<P: AsRef<str> + ?Sized>(self, accessor: Accessor<T, P>) -> Self {
        self.check(accessor, NotEmpty)
    }

    /// Fails when the property is empty or only whitespace.
    pub fn not_whitespace<P: AsRef<str> + ?Sized>(self, accessor: Accessor<T, P>) -> Self {
        self.check(accessor, NotWhitespace)
    }

    /// Fails when the property has fewer than `min` characters.
    pub fn min_length<P: AsRef<str> + ?Sized>(self, accessor: Accessor<T, P>, min: usize) -> Self {
        self.check(accessor, MinLength::new(min))
    }

    /// Fails when the property has more than `max` characters.
    pub fn max_length<P: AsRef<str> + ?Sized>(self, accessor: Accessor<T, P>, max: usize) -> Self {
        self.check(accessor, MaxLength::new(max))
    }

    /// Fails unless the property is a valid email address.
    pub fn valid_email<P: AsRef<str> + ?Sized>(self, accessor: Accessor<T, P>) -> Self {
        self.check(accessor, ValidEmail)
    }

    /// Fails unless `min <= property <= max`.
    pub fn in_range<P>(self, accessor: Accessor<T, P>, min: P, max: P) -> Self
    where
        P: PartialOrd + Display + Send + Sync,
    {
        self.check(accessor, InRange::new(min, max))
    }

    /// Fails unless `property > bound`.
    pub fn greater_than<P>(self, accessor: Accessor<T, P>, bound: P) -> Self
    where
        P: PartialOrd + Display + Send + Sync,
    {
        self.check(accessor, GreaterThan::new(bound))
    }

    /// Fails unless `property < bound`.
    pub fn less_than<P>(self, accessor: Accessor<T, P>, bound: P) -> Self
    where
        P: PartialOrd + Display + Send + Sync,
    {
        self.check(accessor, LessThan::new(bound))
    }

    /// Fails with `message` when `predicate` rejects the property.
    pub fn must<P, F>(
        mut self,
        accessor: Accessor<T, P>,
        predicate: F,
        message: impl Into<Cow<'static, str>>,
    ) -> Self
    where
        P: ?Sized,
        F: FnOnce(&P) -> bool,
    {
        self.checks += 1;
        if !predicate(accessor.get(self.target)) {
            self.record(ValidationError::predicate(
                accessor.name_cow().clone(),
                message,
            ));
        }
        self
    }

    /// Fails with an object-level error when `predicate` rejects the target.
    pub fn must_object<F>(mut self, predicate: F, message: impl Into<Cow<'static, str>>) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        self.checks += 1;
        if !predicate(self.target) {
            self.record(ValidationError::object(message));
        }
        self
    }

    /// Applies `rules` only when `condition` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keel_validator::prelude::*;
    ///
    /// struct Order { express: bool, phone: String }
    ///
    /// let order = Order { express: false, phone: String::new() };
    /// let result = order
    ///     .validate()
    ///     .when(order.express, |rules| rules.not_empty(field!(Order, phone)))
    ///     .build();
    /// assert!(result.is_valid());
    /// ```
    pub fn when<F>(self, condition: bool, rules: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { rules(self) } else { self }
    }

    /// Applies `rules` only when `condition` holds for the target.
    pub fn when_with<C, F>(self, condition: C, rules: F) -> Self
    where
        C: FnOnce(&T) -> bool,
        F: FnOnce(Self) -> Self,
    {
        let holds = condition(self.target);
        self.when(holds, rules)
    }

    /// Finishes the pass and returns every recorded error.
    pub fn build(self) -> ValidationResult {
        tracing::debug!(
            target_type = std::any::type_name::<T>(),
            checks = self.checks,
            errors = self.result.len(),
            "inline validation finished"
        );
        self.result
    }

    fn record(&mut self, error: ValidationError) {
        tracing::trace!(
            property = %error.property,
            code = %error.code,
            "check failed"
        );
        self.result.add(error);
    }
}

impl<T> fmt::Debug for ValidationBuilder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationBuilder")
            .field("target", &std::any::type_name::<T>())
            .field("checks", &self.checks)
            .field("result", &self.result)
            .finish()
    }
}
