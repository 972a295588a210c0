//! # Keel Core
//!
//! Value algebras for expressing outcomes without exceptions.
//!
//! ## Key Components
//!
//! - **[`Error`]**: immutable `(code, message)` failure payload with named kinds
//! - **[`Outcome`]**: success value or failure [`Error`], with `map` / `bind` /
//!   `ensure` combinators, aggregation and async bridging
//! - **[`Maybe`]**: optional value with collection and map lookups
//! - **[`Either`]**: neutral two-variant union with order-preserving
//!   sequence operators
//!
//! Nothing in this crate performs I/O or depends on an async runtime. The
//! async combinators only await the future they are given.
//!
//! ## Usage
//!
//! ```rust
//! use keel_core::prelude::*;
//!
//! fn find_user(id: u32) -> Maybe<&'static str> {
//!     if id == 1 { Maybe::some("ada") } else { Maybe::none() }
//! }
//!
//! let name = find_user(1)
//!     .to_outcome(Error::NOT_FOUND)
//!     .ensure(|name| !name.is_empty(), Error::validation("empty name"))
//!     .map(str::to_uppercase);
//! assert_eq!(name.into_value(), "ADA");
//!
//! assert_eq!(find_user(2).to_outcome(Error::NOT_FOUND).error(), &Error::NOT_FOUND);
//! ```

pub mod either;
pub mod error;
pub mod maybe;
pub mod outcome;

pub use either::{Either, EitherIteratorExt};
pub use error::{Error, codes};
pub use maybe::{Maybe, MaybeIteratorExt, TryFindExt, WhereSomeExt};
pub use outcome::{Outcome, OutcomeFutureExt};

/// Common prelude for Keel crates
pub mod prelude {
    pub use super::{
        Either, EitherIteratorExt, Error, Maybe, MaybeIteratorExt, Outcome, OutcomeFutureExt,
        TryFindExt, WhereSomeExt,
    };
}
