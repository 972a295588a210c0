//! Core traits for the rule engine
//!
//! This module defines the trait every registered rule implements.

use crate::foundation::ValidationResult;

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A reusable, instance-independent check over a `T`.
///
/// A rule appends zero or more errors to the result of the current
/// validation pass. Rules must be total over `T`; a panicking rule is not
/// caught by the engine.
///
/// Closures of shape `Fn(&T, &mut ValidationResult)` are rules.
///
/// # Examples
///
/// ```rust
/// use keel_validator::{Rule, ValidationError, ValidationResult};
///
/// struct Range { start: u32, end: u32 }
///
/// struct StartBeforeEnd;
///
/// impl Rule<Range> for StartBeforeEnd {
///     fn evaluate(&self, range: &Range, result: &mut ValidationResult) {
///         if range.start > range.end {
///             result.add(ValidationError::object("start must not exceed end"));
///         }
///     }
/// }
///
/// let mut result = ValidationResult::new();
/// StartBeforeEnd.evaluate(&Range { start: 5, end: 1 }, &mut result);
/// assert_eq!(result.len(), 1);
/// ```
pub trait Rule<T>: Send + Sync {
    /// Checks `target`, recording failures into `result`.
    fn evaluate(&self, target: &T, result: &mut ValidationResult);
}

impl<T, F> Rule<T> for F
where
    F: Fn(&T, &mut ValidationResult) + Send + Sync,
{
    fn evaluate(&self, target: &T, result: &mut ValidationResult) {
        self(target, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;

    struct Pair(i32, i32);

    struct AlwaysFails;

    impl Rule<Pair> for AlwaysFails {
        fn evaluate(&self, _target: &Pair, result: &mut ValidationResult) {
            result.add(ValidationError::object("always fails"));
        }
    }

    #[test]
    fn struct_rules_append_errors() {
        let mut result = ValidationResult::new();
        AlwaysFails.evaluate(&Pair(1, 2), &mut result);
        AlwaysFails.evaluate(&Pair(1, 2), &mut result);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn closures_are_rules() {
        let ordered = |pair: &Pair, result: &mut ValidationResult| {
            if pair.0 > pair.1 {
                result.add_error("0", "first must not exceed second");
            }
        };

        let mut result = ValidationResult::new();
        ordered.evaluate(&Pair(1, 2), &mut result);
        assert!(result.is_valid());
        ordered.evaluate(&Pair(3, 2), &mut result);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn rules_are_object_safe() {
        let rules: Vec<Box<dyn Rule<Pair>>> = vec![
            Box::new(AlwaysFails),
            Box::new(|_: &Pair, _: &mut ValidationResult| {}),
        ];
        let mut result = ValidationResult::new();
        for rule in &rules {
            rule.evaluate(&Pair(0, 0), &mut result);
        }
        assert_eq!(result.len(), 1);
    }
}
