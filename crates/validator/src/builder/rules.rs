//! Reusable validators.
//!
//! A [`RuleBuilder`] collects rules once and validates any number of
//! instances afterwards. Rules attach to a property through
//! [`RuleBuilder::rule_for`], which hands out a [`PropertyRuleBuilder`]. That
//! sub-builder has no `validate`; it must be closed with
//! [`build`](PropertyRuleBuilder::build), or implicitly by opening the next
//! property, before the validator can run.

use std::borrow::Cow;
use std::fmt::{self, Display};
use std::sync::Arc;

use crate::foundation::{Accessor, Rule, ValidationResult};
use crate::validators::{
    Check, GreaterThan, InRange, LessThan, MaxLength, MinLength, NotEmpty, NotNull, NotWhitespace,
    Predicate, ValidEmail,
};

/// Creates an empty reusable validator for `T`.
///
/// # Examples
///
/// ```rust
/// use keel_validator::prelude::*;
///
/// struct User { name: String, age: u32 }
///
/// let validator = create_validator::<User>()
///     .rule_for(field!(User, name))
///         .not_empty()
///         .max_length(50)
///     .rule_for(field!(User, age))
///         .in_range(18, 130)
///     .build();
///
/// let result = validator.validate(&User { name: String::new(), age: 7 });
/// assert_eq!(result.len(), 2);
/// assert!(validator.validate(&User { name: "Ada".into(), age: 36 }).is_valid());
/// ```
pub fn create_validator<T>() -> RuleBuilder<T> {
    RuleBuilder::new()
}

type Condition<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

// ============================================================================
// RULE BUILDER
// ============================================================================

/// An ordered collection of rules over `T`.
///
/// Cloning is cheap: rules are shared. A finished builder is `Send + Sync`
/// and every [`validate`](Self::validate) call works on its own result, so
/// one validator can serve many threads.
pub struct RuleBuilder<T> {
    rules: Vec<Arc<dyn Rule<T>>>,
}

impl<T> RuleBuilder<T> {
    /// Creates a builder with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Returns the number of registered rules.
    ///
    /// An open property counts as one rule once it is closed.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Runs every rule in registration order against `target`.
    #[must_use = "validation result must be checked"]
    pub fn validate(&self, target: &T) -> ValidationResult {
        let mut result = ValidationResult::new();
        self.evaluate(target, &mut result);
        tracing::debug!(
            target_type = std::any::type_name::<T>(),
            rules = self.rules.len(),
            errors = result.len(),
            "validation finished"
        );
        result
    }
}

impl<T: 'static> RuleBuilder<T> {
    /// Opens a property rule for the member read by `accessor`.
    pub fn rule_for<P>(self, accessor: Accessor<T, P>) -> PropertyRuleBuilder<T, P>
    where
        P: ?Sized + 'static,
    {
        PropertyRuleBuilder {
            parent: self,
            rule: PropertyRule {
                accessor,
                condition: None,
                checks: Vec::new(),
            },
        }
    }

    /// Registers a whole-object rule.
    ///
    /// Any `Fn(&T, &mut ValidationResult)` closure is a rule, and so is
    /// another `RuleBuilder<T>`.
    pub fn custom<R>(mut self, rule: R) -> Self
    where
        R: Rule<T> + 'static,
    {
        self.rules.push(Arc::new(rule));
        self
    }
}

impl<T> Rule<T> for RuleBuilder<T> {
    fn evaluate(&self, target: &T, result: &mut ValidationResult) {
        for rule in &self.rules {
            rule.evaluate(target, result);
        }
    }
}

impl<T> Default for RuleBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Clone impl - manual because `T` need not be `Clone`
impl<T> Clone for RuleBuilder<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<T> fmt::Debug for RuleBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleBuilder")
            .field("target", &std::any::type_name::<T>())
            .field("rules", &self.rules.len())
            .finish()
    }
}

// ============================================================================
// PROPERTY RULE
// ============================================================================

/// Every check registered for one property, run in order.
struct PropertyRule<T, P: ?Sized> {
    accessor: Accessor<T, P>,
    condition: Option<Condition<T>>,
    checks: Vec<Box<dyn Check<P>>>,
}

impl<T, P: ?Sized> Rule<T> for PropertyRule<T, P> {
    fn evaluate(&self, target: &T, result: &mut ValidationResult) {
        if let Some(condition) = &self.condition
            && !condition(target)
        {
            return;
        }

        let property = self.accessor.name_cow();
        let value = self.accessor.get(target);
        for check in &self.checks {
            if let Err(error) = check.check(property, value) {
                tracing::trace!(
                    property = %error.property,
                    code = %error.code,
                    "check failed"
                );
                result.add(error);
            }
        }
    }
}

// ============================================================================
// PROPERTY RULE BUILDER
// ============================================================================

/// An open property rule.
///
/// Checks added here run in the order they are added. Close it with
/// [`build`](Self::build), [`rule_for`](Self::rule_for) or
/// [`custom`](Self::custom) to get back to the [`RuleBuilder`].
#[must_use = "close the property rule with `build` to get the validator back"]
pub struct PropertyRuleBuilder<T, P: ?Sized> {
    parent: RuleBuilder<T>,
    rule: PropertyRule<T, P>,
}

impl<T: 'static, P: ?Sized + 'static> PropertyRuleBuilder<T, P> {
    /// Returns the display name of the open property.
    pub fn property_name(&self) -> &str {
        self.rule.accessor.name()
    }

    /// Adds any [`Check`] over the property.
    pub fn check<C>(mut self, check: C) -> Self
    where
        C: Check<P> + 'static,
    {
        self.rule.checks.push(Box::new(check));
        self
    }

    /// Fails with `message` when `predicate` rejects the property.
    pub fn must<F>(self, predicate: F, message: impl Into<Cow<'static, str>>) -> Self
    where
        F: Fn(&P) -> bool + Send + Sync + 'static,
    {
        self.check(Predicate::new(predicate, message))
    }

    /// Runs this property's checks only when `condition` holds for the
    /// target. A later call replaces the condition.
    pub fn when<F>(mut self, condition: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.rule.condition = Some(Arc::new(condition));
        self
    }

    /// Fails when the property is the empty string.
    pub fn not_empty(self) -> Self
    where
        P: AsRef<str>,
    {
        self.check(NotEmpty)
    }

    /// Fails when the property is empty or only whitespace.
    pub fn not_whitespace(self) -> Self
    where
        P: AsRef<str>,
    {
        self.check(NotWhitespace)
    }

    /// Fails when the property has fewer than `min` characters.
    pub fn min_length(self, min: usize) -> Self
    where
        P: AsRef<str>,
    {
        self.check(MinLength::new(min))
    }

    /// Fails when the property has more than `max` characters.
    pub fn max_length(self, max: usize) -> Self
    where
        P: AsRef<str>,
    {
        self.check(MaxLength::new(max))
    }

    /// Fails unless the property is a valid email address.
    pub fn valid_email(self) -> Self
    where
        P: AsRef<str>,
    {
        self.check(ValidEmail)
    }

    /// Fails unless `min <= property <= max`.
    pub fn in_range(self, min: P, max: P) -> Self
    where
        P: PartialOrd + Display + Send + Sync + Sized,
    {
        self.check(InRange::new(min, max))
    }

    /// Fails unless `property > bound`.
    pub fn greater_than(self, bound: P) -> Self
    where
        P: PartialOrd + Display + Send + Sync + Sized,
    {
        self.check(GreaterThan::new(bound))
    }

    /// Fails unless `property < bound`.
    pub fn less_than(self, bound: P) -> Self
    where
        P: PartialOrd + Display + Send + Sync + Sized,
    {
        self.check(LessThan::new(bound))
    }

    /// Closes this property and returns the validator.
    pub fn build(self) -> RuleBuilder<T> {
        let Self { mut parent, rule } = self;
        parent.rules.push(Arc::new(rule));
        parent
    }

    /// Closes this property and opens the next one.
    pub fn rule_for<Q>(self, accessor: Accessor<T, Q>) -> PropertyRuleBuilder<T, Q>
    where
        Q: ?Sized + 'static,
    {
        self.build().rule_for(accessor)
    }

    /// Closes this property and registers a whole-object rule.
    pub fn custom<R>(self, rule: R) -> RuleBuilder<T>
    where
        R: Rule<T> + 'static,
    {
        self.build().custom(rule)
    }
}

impl<T: 'static, P: 'static> PropertyRuleBuilder<T, Option<P>> {
    /// Fails when the property is `None`.
    pub fn not_null(self) -> Self {
        self.check(NotNull)
    }
}

impl<T, P: ?Sized> fmt::Debug for PropertyRuleBuilder<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyRuleBuilder")
            .field("property", &self.rule.accessor.name())
            .field("checks", &self.rule.checks.len())
            .field("parent", &self.parent)
            .finish()
    }
}
