//! Named field readers.
//!
//! An [`Accessor`] is a function `&T -> &P` paired with the name of the
//! member it reads. The name is fixed when the accessor is built, so error
//! messages never require invoking the target. Use the [`field!`] macro to
//! derive the name from the field token at compile time.
//!
//! [`field!`]: crate::field

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Display name used when an accessor was built without one.
pub const UNKNOWN_PROPERTY: &str = "Unknown";

/// Reads a `P` out of a `T` and knows the name of what it reads.
///
/// # Type Parameters
///
/// * `T` - The target type
/// * `P` - The property type (can be `?Sized`)
///
/// # Examples
///
/// ```rust
/// use keel_validator::{Accessor, field};
///
/// struct User { email: String }
///
/// let email = field!(User, email);
/// assert_eq!(email.name(), "email");
///
/// let user = User { email: "ada@example.com".into() };
/// assert_eq!(email.get(&user), "ada@example.com");
///
/// let opaque = Accessor::unnamed(|u: &User| u.email.as_str());
/// assert_eq!(opaque.name(), "Unknown");
/// ```
pub struct Accessor<T, P: ?Sized> {
    name: Cow<'static, str>,
    read: Arc<dyn Fn(&T) -> &P + Send + Sync>,
}

impl<T, P: ?Sized> Accessor<T, P> {
    /// Creates an accessor with an explicit name.
    ///
    /// # Panics
    ///
    /// Panics when `name` is empty. An accessor without a name is a
    /// construction error, not a validation failure.
    pub fn named<F>(name: impl Into<Cow<'static, str>>, read: F) -> Self
    where
        F: Fn(&T) -> &P + Send + Sync + 'static,
    {
        let name = name.into();
        assert!(!name.is_empty(), "accessor name must not be empty");
        Self {
            name,
            read: Arc::new(read),
        }
    }

    /// Creates an accessor whose name cannot be derived.
    ///
    /// Errors produced through it are tagged [`UNKNOWN_PROPERTY`].
    pub fn unnamed<F>(read: F) -> Self
    where
        F: Fn(&T) -> &P + Send + Sync + 'static,
    {
        Self {
            name: Cow::Borrowed(UNKNOWN_PROPERTY),
            read: Arc::new(read),
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_cow(&self) -> &Cow<'static, str> {
        &self.name
    }

    /// Reads the property out of `target`.
    pub fn get<'t>(&self, target: &'t T) -> &'t P {
        (self.read)(target)
    }
}

// Clone impl - manual because `T` and `P` need not be `Clone`
impl<T, P: ?Sized> Clone for Accessor<T, P> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            read: Arc::clone(&self.read),
        }
    }
}

impl<T, P: ?Sized> fmt::Debug for Accessor<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("name", &self.name)
            .field("read", &"<function>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Account {
        owner: String,
        balance: i64,
    }

    fn account() -> Account {
        Account {
            owner: "ada".to_string(),
            balance: 10,
        }
    }

    #[test]
    fn named_accessor_reads_and_names() {
        let owner = Accessor::named("owner", |a: &Account| &a.owner);
        assert_eq!(owner.name(), "owner");
        assert_eq!(owner.get(&account()), "ada");
    }

    #[test]
    fn unnamed_accessor_falls_back() {
        let balance = Accessor::unnamed(|a: &Account| &a.balance);
        assert_eq!(balance.name(), UNKNOWN_PROPERTY);
        assert_eq!(*balance.get(&account()), 10);
    }

    #[test]
    fn naming_does_not_invoke_reader() {
        fn explode(_: &Account) -> &String {
            panic!("reader must not run while naming")
        }

        let reader = Accessor::named("owner", explode);
        assert_eq!(reader.name(), "owner");
        assert_eq!(reader.clone().name(), "owner");
    }

    #[test]
    fn unsized_properties() {
        let owner = Accessor::named("owner", |a: &Account| a.owner.as_str());
        let binding = account();
        let value: &str = owner.get(&binding);
        assert_eq!(value, "ada");
    }

    #[test]
    #[should_panic(expected = "accessor name must not be empty")]
    fn empty_name_is_rejected() {
        let _ = Accessor::named("", |a: &Account| &a.owner);
    }

    #[test]
    fn macro_derives_the_field_name() {
        let balance = crate::field!(Account, balance);
        assert_eq!(balance.name(), "balance");

        let renamed = crate::field!(Account, owner as "Owner");
        assert_eq!(renamed.name(), "Owner");
        assert_eq!(renamed.get(&account()), "ada");
    }
}
