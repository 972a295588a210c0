//! Presence and predicate validators

use std::borrow::Cow;
use std::fmt;

use super::Check;
use crate::foundation::ValidationError;

/// Fails on `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NotNull;

impl<P> Check<Option<P>> for NotNull {
    fn check(&self, property: &Cow<'static, str>, value: &Option<P>) -> Result<(), ValidationError> {
        match value {
            Some(_) => Ok(()),
            None => Err(ValidationError::not_null(property.clone())),
        }
    }
}

/// Fails when a caller-supplied predicate returns `false`.
///
/// The error carries the caller's message verbatim.
pub struct Predicate<F> {
    predicate: F,
    message: Cow<'static, str>,
}

impl<F> Predicate<F> {
    pub fn new(predicate: F, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            predicate,
            message: message.into(),
        }
    }
}

impl<P, F> Check<P> for Predicate<F>
where
    P: ?Sized,
    F: Fn(&P) -> bool + Send + Sync,
{
    fn check(&self, property: &Cow<'static, str>, value: &P) -> Result<(), ValidationError> {
        if (self.predicate)(value) {
            return Ok(());
        }
        Err(ValidationError::predicate(
            property.clone(),
            self.message.clone(),
        ))
    }
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: Cow<'static, str> = Cow::Borrowed("nickname");

    #[test]
    fn test_not_null() {
        assert!(NotNull.check(&FIELD, &Some(0)).is_ok());
        let error = NotNull.check(&FIELD, &None::<String>).unwrap_err();
        assert_eq!(error.message, "nickname must not be null");
    }

    #[test]
    fn test_predicate_uses_caller_message() {
        let even = Predicate::new(|n: &i32| n % 2 == 0, "must be even");
        assert!(even.check(&FIELD, &4).is_ok());

        let error = even.check(&FIELD, &3).unwrap_err();
        assert_eq!(error.property, "nickname");
        assert_eq!(error.message, "must be even");
        assert_eq!(error.code, "predicate");
    }

    #[test]
    fn test_predicate_over_unsized() {
        let upper = Predicate::new(|s: &str| s.chars().all(char::is_uppercase), "shout");
        assert!(upper.check(&FIELD, "ABC").is_ok());
        assert!(upper.check(&FIELD, "AbC").is_err());
    }
}
