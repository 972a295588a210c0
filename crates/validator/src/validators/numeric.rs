//! Numeric validators
//!
//! Bounds work for any `PartialOrd + Display` type. Values that do not
//! compare (such as `NaN`) fail every check.

use std::borrow::Cow;
use std::fmt::Display;

use super::Check;
use crate::foundation::ValidationError;

/// Fails unless `min <= value <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InRange<B> {
    pub min: B,
    pub max: B,
}

impl<B> InRange<B> {
    #[must_use]
    pub const fn new(min: B, max: B) -> Self {
        Self { min, max }
    }
}

impl<B> Check<B> for InRange<B>
where
    B: PartialOrd + Display + Send + Sync,
{
    fn check(&self, property: &Cow<'static, str>, value: &B) -> Result<(), ValidationError> {
        if *value >= self.min && *value <= self.max {
            return Ok(());
        }
        Err(ValidationError::out_of_range(
            property.clone(),
            &self.min,
            &self.max,
        ))
    }
}

/// Fails unless `value > bound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GreaterThan<B> {
    pub bound: B,
}

impl<B> GreaterThan<B> {
    #[must_use]
    pub const fn new(bound: B) -> Self {
        Self { bound }
    }
}

impl<B> Check<B> for GreaterThan<B>
where
    B: PartialOrd + Display + Send + Sync,
{
    fn check(&self, property: &Cow<'static, str>, value: &B) -> Result<(), ValidationError> {
        if *value > self.bound {
            return Ok(());
        }
        Err(ValidationError::not_greater_than(
            property.clone(),
            &self.bound,
        ))
    }
}

/// Fails unless `value < bound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LessThan<B> {
    pub bound: B,
}

impl<B> LessThan<B> {
    #[must_use]
    pub const fn new(bound: B) -> Self {
        Self { bound }
    }
}

impl<B> Check<B> for LessThan<B>
where
    B: PartialOrd + Display + Send + Sync,
{
    fn check(&self, property: &Cow<'static, str>, value: &B) -> Result<(), ValidationError> {
        if *value < self.bound {
            return Ok(());
        }
        Err(ValidationError::not_less_than(property.clone(), &self.bound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const AGE: Cow<'static, str> = Cow::Borrowed("age");

    #[rstest]
    #[case(17, false)]
    #[case(18, true)]
    #[case(40, true)]
    #[case(65, true)]
    #[case(66, false)]
    fn test_in_range_is_inclusive(#[case] age: u32, #[case] ok: bool) {
        assert_eq!(InRange::new(18, 65).check(&AGE, &age).is_ok(), ok);
    }

    #[test]
    fn test_in_range_message() {
        let error = InRange::new(18, 65).check(&AGE, &70).unwrap_err();
        assert_eq!(error.message, "age must be between 18 and 65");
        assert_eq!(error.code, "out_of_range");
    }

    #[test]
    fn test_greater_than_is_strict() {
        let check = GreaterThan::new(5);
        assert!(check.check(&AGE, &6).is_ok());
        assert!(check.check(&AGE, &5).is_err());
        assert!(check.check(&AGE, &4).is_err());
    }

    #[test]
    fn test_less_than_is_strict() {
        let check = LessThan::new(1.5_f64);
        assert!(check.check(&AGE, &1.0).is_ok());
        assert!(check.check(&AGE, &1.5).is_err());
    }

    #[test]
    fn test_nan_fails_every_bound() {
        assert!(InRange::new(0.0, 1.0).check(&AGE, &f64::NAN).is_err());
        assert!(GreaterThan::new(0.0).check(&AGE, &f64::NAN).is_err());
        assert!(LessThan::new(0.0).check(&AGE, &f64::NAN).is_err());
    }
}
