//! A neutral two-variant union.
//!
//! Neither side of [`Either`] means "success"; callers assign meaning by
//! context. Where one side is conventionally the alternate branch it is
//! `Left`, but nothing here depends on that.

use crate::maybe::Maybe;

/// Either a `Left(L)` or a `Right(R)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left value.
    Left(L),
    /// The right value.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Builds a `Left`.
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Builds a `Right`.
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Returns `true` for a `Left`.
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for a `Right`.
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Borrows both sides.
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Maps a left value; a right passes through.
    pub fn map_left<U, F>(self, f: F) -> Either<U, R>
    where
        F: FnOnce(L) -> U,
    {
        self.bimap(f, |r| r)
    }

    /// Maps a right value; a left passes through.
    pub fn map_right<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        self.bimap(|l| l, f)
    }

    /// Maps whichever side is present.
    pub fn bimap<A, B, FL, FR>(self, left: FL, right: FR) -> Either<A, B>
    where
        FL: FnOnce(L) -> A,
        FR: FnOnce(R) -> B,
    {
        match self {
            Self::Left(l) => Either::Left(left(l)),
            Self::Right(r) => Either::Right(right(r)),
        }
    }

    /// Chains on the left side; a `Right` passes through.
    pub fn bind_left<U, F>(self, f: F) -> Either<U, R>
    where
        F: FnOnce(L) -> Either<U, R>,
    {
        match self {
            Self::Left(l) => f(l),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Chains on the right side; a `Left` passes through.
    pub fn bind_right<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => f(r),
        }
    }

    /// Reduces to a single value.
    pub fn match_with<T, FL, FR>(self, left: FL, right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Self::Left(l) => left(l),
            Self::Right(r) => right(r),
        }
    }

    /// Exchanges the sides.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(l) => Either::Right(l),
            Self::Right(r) => Either::Left(r),
        }
    }

    /// The left value, or `default` for a `Right`.
    pub fn left_or_default(self, default: L) -> L {
        match self {
            Self::Left(l) => l,
            Self::Right(_) => default,
        }
    }

    /// The right value, or `default` for a `Left`.
    pub fn right_or_default(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(r) => r,
        }
    }

    /// The left value, if this is a `Left`.
    pub fn left_to_maybe(self) -> Maybe<L> {
        match self {
            Self::Left(l) => Maybe::some(l),
            Self::Right(_) => Maybe::none(),
        }
    }

    /// The right value, if this is a `Right`.
    pub fn right_to_maybe(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::none(),
            Self::Right(r) => Maybe::some(r),
        }
    }
}

// ============================================================================
// COLLECTION OPERATORS
// ============================================================================

/// Order-preserving operators over sequences of [`Either`].
///
/// ```rust
/// use keel_core::{Either, EitherIteratorExt};
///
/// let parsed = vec![Either::Right(1), Either::Left("err"), Either::Right(3)];
/// assert_eq!(parsed.clone().into_iter().sequence(), Either::Left("err"));
///
/// let (lefts, rights) = parsed.into_iter().partition_eithers();
/// assert_eq!(lefts, vec!["err"]);
/// assert_eq!(rights, vec![1, 3]);
/// ```
pub trait EitherIteratorExt<L, R>: Iterator<Item = Either<L, R>> + Sized {
    /// Every left value, in order.
    fn lefts(self) -> impl Iterator<Item = L> {
        self.filter_map(|e| match e {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        })
    }

    /// Every right value, in order.
    fn rights(self) -> impl Iterator<Item = R> {
        self.filter_map(|e| match e {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        })
    }

    /// Splits into left and right values in a single pass.
    fn partition_eithers(self) -> (Vec<L>, Vec<R>) {
        let mut lefts = Vec::new();
        let mut rights = Vec::new();
        for either in self {
            match either {
                Either::Left(l) => lefts.push(l),
                Either::Right(r) => rights.push(r),
            }
        }
        (lefts, rights)
    }

    /// The first `Left` in input order, or `Right` of every right value.
    ///
    /// Stops consuming the input at the first `Left`.
    fn sequence(self) -> Either<L, Vec<R>> {
        let mut rights = Vec::new();
        for either in self {
            match either {
                Either::Left(l) => return Either::Left(l),
                Either::Right(r) => rights.push(r),
            }
        }
        Either::Right(rights)
    }
}

impl<L, R, I> EitherIteratorExt<L, R> for I where I: Iterator<Item = Either<L, R>> {}

// ============================================================================
// TESTS
// ============================================================================
