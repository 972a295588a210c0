//! The success/failure outcome algebra.
//!
//! [`Outcome<T>`] is either a success carrying a `T` or a failure carrying a
//! non-sentinel [`Error`]. `Outcome<()>` (the default) plays the role of a
//! value-less outcome.
//!
//! Combinators never panic on a domain failure: a failed outcome flows
//! through [`map`](Outcome::map), [`bind`](Outcome::bind) and friends
//! untouched. The only fatal conditions are invariant violations:
//!
//! - constructing a failure with [`Error::NONE`], or a success with a real error
//! - reading [`value`](Outcome::value) on a failure
//!
//! # Examples
//!
//! ```rust
//! use keel_core::{Error, Outcome};
//!
//! let doubled = Outcome::success(10).map(|x| x * 2);
//! assert_eq!(*doubled.value(), 20);
//!
//! let positive = Outcome::success(-10).bind(|x| {
//!     if x > 0 {
//!         Outcome::success(x * 2)
//!     } else {
//!         Outcome::failure(Error::failure("negative"))
//!     }
//! });
//! assert!(positive.is_failure());
//! ```

use std::borrow::Borrow;
use std::future::Future;

use crate::error::Error;
use crate::maybe::Maybe;

static NO_ERROR: Error = Error::NONE;

// ============================================================================
// OUTCOME
// ============================================================================

/// Outcome of an operation: a success value or a failure [`Error`].
///
/// Invariant: `is_success() == error().is_none()`. The representation is
/// private so the invariant can only be established by the constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "an outcome may be a failure that must be handled"]
pub struct Outcome<T = ()> {
    inner: Result<T, Error>,
}

impl Outcome<()> {
    /// A value-less success.
    pub fn ok() -> Self {
        Self { inner: Ok(()) }
    }

    /// Checked constructor for a value-less outcome.
    ///
    /// # Panics
    ///
    /// Panics when `is_success` disagrees with `error` being [`Error::NONE`].
    pub fn new(is_success: bool, error: Error) -> Self {
        Self::from_parts(is_success, error, is_success.then_some(()))
    }

    /// Succeeds when `condition` holds, otherwise fails with `error`.
    pub fn create(condition: bool, error: Error) -> Self {
        if condition {
            Self::ok()
        } else {
            Self::failure(error)
        }
    }

    /// Returns the first failure among `results`, or a success.
    ///
    /// Accepts value-less outcomes by value or by reference. Outcomes of
    /// different value types are combined through [`as_unit`](Outcome::as_unit).
    ///
    /// ```rust
    /// use keel_core::{Error, Outcome};
    ///
    /// let name = Outcome::success("ada".to_string());
    /// let age = Outcome::<u32>::failure(Error::validation("age is required"));
    /// let limit = Outcome::<f64>::failure(Error::failure("later"));
    ///
    /// let combined = Outcome::combine([name.as_unit(), age.as_unit(), limit.as_unit()]);
    /// assert_eq!(combined.error(), &Error::validation("age is required"));
    /// ```
    pub fn combine<I>(results: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Outcome>,
    {
        results
            .into_iter()
            .find_map(|result| {
                let result: &Outcome = result.borrow();
                result.is_failure().then(|| result.error().clone())
            })
            .map_or_else(Self::ok, Self::failure)
    }

    /// Like [`combine`](Self::combine) but reports every failure, joining
    /// their messages under the `Multiple` code.
    pub fn combine_all<I>(results: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Outcome>,
    {
        let messages: Vec<String> = results
            .into_iter()
            .filter_map(|result| {
                let result: &Outcome = result.borrow();
                result.is_failure().then(|| result.error().message().to_owned())
            })
            .collect();

        if messages.is_empty() {
            Self::ok()
        } else {
            tracing::trace!(failures = messages.len(), "combine_all joined failures");
            Self::failure(Error::multiple(messages))
        }
    }
}

impl<T> Outcome<Vec<T>> {
    /// Collects every success value in order, or fails with an `Aggregate`
    /// error joining every failure message in order.
    ///
    /// ```rust
    /// use keel_core::{Error, Outcome};
    ///
    /// let all = Outcome::aggregate([Outcome::success(1), Outcome::success(2)]);
    /// assert_eq!(all.into_value(), vec![1, 2]);
    ///
    /// let some = Outcome::aggregate([
    ///     Outcome::success(1),
    ///     Outcome::failure(Error::failure("e1")),
    ///     Outcome::failure(Error::failure("e2")),
    /// ]);
    /// assert_eq!(some.error().message(), "e1; e2");
    /// ```
    pub fn aggregate<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T>>,
    {
        let mut values = Vec::new();
        let mut failures = Vec::new();

        for result in results {
            match result.inner {
                Ok(value) => values.push(value),
                Err(error) => failures.push(error),
            }
        }

        if failures.is_empty() {
            Self::success(values)
        } else {
            tracing::trace!(
                successes = values.len(),
                failures = failures.len(),
                "aggregate collected failures"
            );
            Self::failure(Error::aggregate(failures.iter().map(Error::message)))
        }
    }
}

impl<T> Outcome<T> {
    /// A success carrying `value`.
    pub fn success(value: T) -> Self {
        Self { inner: Ok(value) }
    }

    /// A failure carrying `error`.
    ///
    /// # Panics
    ///
    /// Panics when `error` is [`Error::NONE`]; the sentinel is never a
    /// failure payload.
    pub fn failure(error: Error) -> Self {
        assert!(
            !error.is_none(),
            "a failed outcome requires an error other than Error::NONE"
        );
        Self { inner: Err(error) }
    }

    /// Checked constructor from raw parts.
    ///
    /// # Panics
    ///
    /// Panics when the parts disagree: a success with a real error, a
    /// failure with [`Error::NONE`], or a success without a value.
    pub fn from_parts(is_success: bool, error: Error, value: Option<T>) -> Self {
        match (is_success, error.is_none()) {
            (true, true) => match value {
                Some(value) => Self::success(value),
                None => panic!("a successful outcome requires a value"),
            },
            (true, false) => panic!("a successful outcome cannot carry an error: {error}"),
            (false, true) => panic!("a failed outcome requires an error other than Error::NONE"),
            (false, false) => Self::failure(error),
        }
    }

    /// Succeeds with the contained value, or fails with [`Error::NULL`].
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::success(value),
            None => Self::failure(Error::NULL),
        }
    }

    /// Runs a fallible closure, mapping its error into a `Failure` error.
    pub fn try_from_fn<E, F>(f: F) -> Self
    where
        E: std::fmt::Display,
        F: FnOnce() -> Result<T, E>,
    {
        match f() {
            Ok(value) => Self::success(value),
            Err(e) => Self::failure(Error::failure(e.to_string())),
        }
    }

    /// Returns `true` on success.
    pub fn is_success(&self) -> bool {
        self.inner.is_ok()
    }

    /// Returns `true` on failure.
    pub fn is_failure(&self) -> bool {
        self.inner.is_err()
    }

    /// Returns the failure error, or [`Error::NONE`] on success.
    pub fn error(&self) -> &Error {
        match &self.inner {
            Ok(_) => &NO_ERROR,
            Err(error) => error,
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on a failure. Reading the value of a failed outcome is a
    /// programmer error, not a domain failure.
    pub fn value(&self) -> &T {
        match &self.inner {
            Ok(value) => value,
            Err(error) => panic!("cannot access the value of a failed outcome: {error}"),
        }
    }

    /// Consumes the outcome and returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on a failure, like [`value`](Self::value).
    pub fn into_value(self) -> T {
        match self.inner {
            Ok(value) => value,
            Err(error) => panic!("cannot access the value of a failed outcome: {error}"),
        }
    }

    /// Returns the success value or `default`.
    pub fn value_or(self, default: T) -> T {
        self.inner.unwrap_or(default)
    }

    /// Borrows the success value.
    pub fn as_ref(&self) -> Outcome<&T> {
        Outcome {
            inner: self.inner.as_ref().map_err(Clone::clone),
        }
    }

    /// Forgets the value, keeping only success or the failure error.
    pub fn as_unit(&self) -> Outcome {
        Outcome {
            inner: self.inner.as_ref().map(|_| ()).map_err(Clone::clone),
        }
    }

    /// Applies `f` to a success value; a failure passes through untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        Outcome {
            inner: self.inner.map(f),
        }
    }

    /// Delegates to `f` on success; short-circuits on failure.
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.inner {
            Ok(value) => f(value),
            Err(error) => Outcome { inner: Err(error) },
        }
    }

    /// Keeps the second outcome when the first succeeded.
    pub fn and<U>(self, next: Outcome<U>) -> Outcome<U> {
        self.bind(|_| next)
    }

    /// Turns a success into a failure with `error` when `predicate` does not hold.
    ///
    /// # Panics
    ///
    /// Panics when the predicate fails and `error` is [`Error::NONE`].
    pub fn ensure<P>(self, predicate: P, error: Error) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let holds = match &self.inner {
            Ok(value) => predicate(value),
            Err(_) => true,
        };
        if holds { self } else { Self::failure(error) }
    }

    /// Rewrites the failure error; a success passes through.
    ///
    /// # Panics
    ///
    /// Panics when `f` returns [`Error::NONE`].
    pub fn map_error<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Error,
    {
        match self.inner {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(f(error)),
        }
    }

    /// Runs `f` once on success. The outcome is returned unchanged.
    pub fn on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Ok(value) = &self.inner {
            f(value);
        }
        self
    }

    /// Runs `f` once on failure. The outcome is returned unchanged.
    pub fn on_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let Err(error) = &self.inner {
            f(error);
        }
        self
    }

    /// Reduces the outcome to a single value.
    pub fn match_with<R, S, E>(self, on_success: S, on_failure: E) -> R
    where
        S: FnOnce(T) -> R,
        E: FnOnce(Error) -> R,
    {
        match self.inner {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }

    /// Drops the error: a success becomes `Some`, a failure `None`.
    pub fn to_maybe(self) -> Maybe<T> {
        Maybe::from(self.inner.ok())
    }

    /// Converts into a standard library `Result`.
    pub fn into_result(self) -> Result<T, Error> {
        self.inner
    }

    /// Awaits `f` on success; a failure returns without starting it.
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.inner {
            Ok(value) => Outcome::success(f(value).await),
            Err(error) => Outcome { inner: Err(error) },
        }
    }

    /// Awaits the outcome produced by `f` on success; a failure returns
    /// without starting it.
    pub async fn bind_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self.inner {
            Ok(value) => f(value).await,
            Err(error) => Outcome { inner: Err(error) },
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.inner
    }
}

/// # Panics
///
/// Panics on `Err(Error::NONE)`.
impl<T> From<Result<T, Error>> for Outcome<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T> FromIterator<Outcome<T>> for Outcome<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        Self::aggregate(iter)
    }
}

// ============================================================================
// ASYNC BRIDGING
// ============================================================================

/// Continuations over a pending [`Outcome`].
///
/// Every method awaits the antecedent first and starts the continuation only
/// if it succeeded, so exactly one step of the chain runs at a time.
///
/// ```rust
/// use keel_core::{Outcome, OutcomeFutureExt};
///
/// # futures::executor::block_on(async {
/// let fetched = async { Outcome::success(21) };
/// let doubled = fetched.map_async(|x| async move { x * 2 }).await;
/// assert_eq!(doubled.into_value(), 42);
/// # });
/// ```
pub trait OutcomeFutureExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Maps the success value with an asynchronous function.
    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(f).await }
    }

    /// Chains an asynchronous step that produces its own outcome.
    fn bind_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        async move { self.await.bind_async(f).await }
    }

    /// Re-checks the success value with an asynchronous predicate.
    fn ensure_async<P, Fut>(self, predicate: P, error: Error) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        async move {
            let outcome = self.await;
            let holds = match &outcome.inner {
                Ok(value) => predicate(value).await,
                Err(_) => true,
            };
            if holds { outcome } else { Outcome::failure(error) }
        }
    }

    /// Awaits an asynchronous side effect on success.
    fn on_success_async<F, Fut>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            let outcome = self.await;
            if let Ok(value) = &outcome.inner {
                f(value).await;
            }
            outcome
        }
    }
}

impl<T, F> OutcomeFutureExt<T> for F where F: Future<Output = Outcome<T>> {}

// ============================================================================
// TESTS
// ============================================================================
