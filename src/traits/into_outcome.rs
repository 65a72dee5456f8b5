//! Extension traits for bringing `Result` and `Option` into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use terminus_outcome::traits::{IntoOutcome, OptionExt};
//! use terminus_outcome::Outcome;
//!
//! let parsed: Outcome<u8, _> = "12".parse::<u8>().into_outcome();
//! assert_eq!(*parsed.value(), 12);
//!
//! let missing: Outcome<&str, &str> = None.ok_or_fail("no such key");
//! assert_eq!(*missing.error(), "no such key");
//! ```
use crate::Outcome;

/// Conversion of a standard `Result` into an [`Outcome`] under any policy.
pub trait IntoOutcome<V, E> {
    /// Maps `Ok` to a value-holding and `Err` to an error-holding outcome.
    fn into_outcome<P>(self) -> Outcome<V, E, P>;
}

impl<V, E> IntoOutcome<V, E> for Result<V, E> {
    #[inline]
    fn into_outcome<P>(self) -> Outcome<V, E, P> {
        match self {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(error),
        }
    }
}

/// Conversion of an `Option` into an [`Outcome`], naming the error for `None`.
pub trait OptionExt<V> {
    /// Uses `error` when the option is empty.
    fn ok_or_fail<E, P>(self, error: E) -> Outcome<V, E, P>;

    /// Builds the error lazily when the option is empty.
    fn ok_or_else_fail<E, P, F>(self, f: F) -> Outcome<V, E, P>
    where
        F: FnOnce() -> E;
}

impl<V> OptionExt<V> for Option<V> {
    #[inline]
    fn ok_or_fail<E, P>(self, error: E) -> Outcome<V, E, P> {
        match self {
            Some(value) => Outcome::success(value),
            None => Outcome::failure(error),
        }
    }

    #[inline]
    fn ok_or_else_fail<E, P, F>(self, f: F) -> Outcome<V, E, P>
    where
        F: FnOnce() -> E,
    {
        match self {
            Some(value) => Outcome::success(value),
            None => Outcome::failure(f()),
        }
    }
}
