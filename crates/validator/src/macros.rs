//! Macros for building accessors with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`field!`]: build an [`Accessor`](crate::Accessor) whose name is the
//!   field path it reads

// ============================================================================
// FIELD MACRO
// ============================================================================

/// Creates an [`Accessor`](crate::Accessor) for a field of a struct.
///
/// The name is taken from the field tokens at compile time, so the target
/// is never touched while rules are declared. Nested paths are joined with
/// `.`. Append `as "Name"` to report a different name.
///
/// # Examples
///
/// ```rust
/// use keel_validator::field;
///
/// struct Address { city: String }
/// struct Customer { name: String, address: Address }
///
/// assert_eq!(field!(Customer, name).name(), "name");
/// assert_eq!(field!(Customer, address.city).name(), "address.city");
/// assert_eq!(field!(Customer, name as "Name").name(), "Name");
///
/// let customer = Customer {
///     name: "Ada".into(),
///     address: Address { city: "London".into() },
/// };
/// assert_eq!(field!(Customer, address.city).get(&customer), "London");
/// ```
#[macro_export]
macro_rules! field {
    ($target:ty, $first:ident $(. $rest:ident)* as $name:literal) => {
        $crate::Accessor::named($name, |target: &$target| &target.$first $(.$rest)*)
    };

    ($target:ty, $first:ident $(. $rest:ident)*) => {
        $crate::Accessor::named(
            concat!(stringify!($first) $(, ".", stringify!($rest))*),
            |target: &$target| &target.$first $(.$rest)*,
        )
    };
}
