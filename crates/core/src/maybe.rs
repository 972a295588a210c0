//! Optional values.
//!
//! [`Maybe<T>`] is either a present value or the distinguished absent value.
//! It is independent of [`Outcome`](crate::Outcome) and
//! [`Error`](crate::Error); [`to_outcome`](Maybe::to_outcome) is the bridge
//! from "absent" to "typed failure".
//!
//! # Examples
//!
//! ```rust
//! use keel_core::Maybe;
//!
//! let port = Maybe::from(std::env::var("KEEL_UNSET_PORT").ok())
//!     .bind(|raw| Maybe::from(raw.parse::<u16>().ok()))
//!     .filter(|port| *port > 1024)
//!     .value_or(8080);
//! assert_eq!(port, 8080);
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::either::Either;
use crate::error::Error;
use crate::outcome::Outcome;

/// A value that may be absent.
///
/// Two absent values are equal, two present values are equal when their
/// contents are, and a present value never equals an absent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Maybe<T> {
    value: Option<T>,
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> Maybe<T> {
    /// A present value.
    pub const fn some(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// A present value built from a nullable source.
    ///
    /// # Panics
    ///
    /// Panics when `value` is `None`. Use [`Maybe::from`] when absence is a
    /// legitimate input.
    pub fn some_checked(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => panic!("Maybe::some requires a value; use Maybe::from for nullable input"),
        }
    }

    /// The absent value.
    pub const fn none() -> Self {
        Self { value: None }
    }

    /// Returns `true` when a value is present.
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` when no value is present.
    pub const fn has_no_value(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the present value.
    ///
    /// # Panics
    ///
    /// Panics when no value is present.
    pub fn value(&self) -> &T {
        match &self.value {
            Some(value) => value,
            None => panic!("Maybe has no value"),
        }
    }

    /// Borrows the contents.
    pub const fn as_ref(&self) -> Maybe<&T> {
        Maybe {
            value: self.value.as_ref(),
        }
    }

    /// Converts into an `Option`.
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Applies `f` to a present value.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe {
            value: self.value.map(f),
        }
    }

    /// Chains a step that may itself produce no value.
    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self.value {
            Some(value) => f(value),
            None => Maybe::none(),
        }
    }

    /// Keeps the value only if `predicate` holds.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self {
            value: self.value.filter(predicate),
        }
    }

    /// Returns `self` if present, otherwise `alternative`.
    pub fn or(self, alternative: Maybe<T>) -> Self {
        if self.has_value() { self } else { alternative }
    }

    /// Returns `self` if present, otherwise evaluates `alternative`.
    ///
    /// The factory only runs when `self` is absent.
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Maybe<T>,
    {
        if self.has_value() {
            self
        } else {
            alternative()
        }
    }

    /// Returns the value or `default`.
    pub fn value_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Returns the value or evaluates `default`.
    pub fn value_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(default)
    }

    /// Returns the value, panicking with `message` when absent.
    ///
    /// Only for call sites where absence cannot be tolerated.
    ///
    /// # Panics
    ///
    /// Panics when no value is present.
    pub fn value_or_panic(self, message: &str) -> T {
        match self.value {
            Some(value) => value,
            None => panic!("{message}"),
        }
    }

    /// Like [`value_or_panic`](Self::value_or_panic) with a lazily built message.
    ///
    /// # Panics
    ///
    /// Panics when no value is present.
    pub fn value_or_panic_with<F>(self, message: F) -> T
    where
        F: FnOnce() -> String,
    {
        match self.value {
            Some(value) => value,
            None => panic!("{}", message()),
        }
    }

    /// Runs `f` once when a value is present.
    pub fn on_value<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.value {
            f(value);
        }
        self
    }

    /// Reduces to a single value.
    pub fn match_with<R, S, N>(self, some: S, none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self.value {
            Some(value) => some(value),
            None => none(),
        }
    }

    /// Pairs two present values.
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        Maybe {
            value: self.value.zip(other.value),
        }
    }

    /// A present value succeeds; absence fails with `error`.
    ///
    /// # Panics
    ///
    /// Panics when absent and `error` is [`Error::NONE`].
    pub fn to_outcome(self, error: Error) -> Outcome<T> {
        match self.value {
            Some(value) => Outcome::success(value),
            None => Outcome::failure(error),
        }
    }

    /// A present value becomes `Right`, absence becomes `Left(left)`.
    pub fn to_right_or<L>(self, left: L) -> Either<L, T> {
        match self.value {
            Some(value) => Either::Right(value),
            None => Either::Left(left),
        }
    }

    /// A present value becomes `Left`, absence becomes `Right(right)`.
    pub fn to_left_or<R>(self, right: R) -> Either<T, R> {
        match self.value {
            Some(value) => Either::Left(value),
            None => Either::Right(right),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.value
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

// ============================================================================
// COLLECTION BRIDGES
// ============================================================================

/// `Maybe`-returning lookups over iterators.
pub trait MaybeIteratorExt: Iterator + Sized {
    /// The first item, if any.
    fn first_or_none(mut self) -> Maybe<Self::Item> {
        Maybe::from(self.next())
    }

    /// The first item matching `predicate`, if any.
    fn first_or_none_by<P>(mut self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Maybe::from(self.find(predicate))
    }

    /// The only item; absent when there are zero or several.
    fn single_or_none(mut self) -> Maybe<Self::Item> {
        match (self.next(), self.next()) {
            (Some(only), None) => Maybe::some(only),
            _ => Maybe::none(),
        }
    }

    /// The only item matching `predicate`; absent when zero or several match.
    fn single_or_none_by<P>(self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(predicate).single_or_none()
    }
}

impl<I: Iterator> MaybeIteratorExt for I {}

/// Filters a sequence of `Maybe` down to its present values, in order.
pub trait WhereSomeExt<T>: Iterator<Item = Maybe<T>> + Sized {
    /// Yields every present value, in order.
    fn where_some(self) -> std::iter::Flatten<Self> {
        self.flatten()
    }
}

impl<T, I> WhereSomeExt<T> for I where I: Iterator<Item = Maybe<T>> {}

/// Map lookups that return `Maybe` instead of `Option`.
pub trait TryFindExt<K, V> {
    /// Looks up `key`.
    fn try_find<Q>(&self, key: &Q) -> Maybe<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized;
}

impl<K, V, S> TryFindExt<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn try_find<Q>(&self, key: &Q) -> Maybe<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        Maybe::from(self.get(key))
    }
}

impl<K, V> TryFindExt<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    fn try_find<Q>(&self, key: &Q) -> Maybe<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        Maybe::from(self.get(key))
    }
}

// ============================================================================
// TESTS
// ============================================================================
