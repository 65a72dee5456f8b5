//! Explicit side tags and factory functions.
//!
//! [`Success`] and [`Failure`] name the side at the construction site and
//! convert into any outcome whose payload type accepts them. This keeps
//! construction unambiguous even when `V` and `E` are built from the same
//! source type.
//!
//! # Examples
//!
//! ```
//! use terminus_outcome::{failure, success, Outcome};
//!
//! // Both sides are `String`; the tag decides which one is populated.
//! let ok: Outcome<String, String> = success("loaded").into();
//! let err: Outcome<String, String> = failure("missing").into();
//!
//! assert!(ok.has_value());
//! assert!(err.has_error());
//! ```
use crate::Outcome;

/// Tag marking a payload as the success side.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Success<V>(pub V);

/// Tag marking a payload as the error side.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Failure<E>(pub E);

impl<V> Success<V> {
    /// Unwraps the tagged payload.
    #[inline]
    pub fn into_inner(self) -> V {
        self.0
    }
}

impl<E> Failure<E> {
    /// Unwraps the tagged payload.
    #[inline]
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<V, E, P, V2> From<Success<V2>> for Outcome<V, E, P>
where
    V: From<V2>,
{
    #[inline]
    fn from(tag: Success<V2>) -> Self {
        Outcome::success(V::from(tag.0))
    }
}

impl<V, E, P, E2> From<Failure<E2>> for Outcome<V, E, P>
where
    E: From<E2>,
{
    #[inline]
    fn from(tag: Failure<E2>) -> Self {
        Outcome::failure(E::from(tag.0))
    }
}

/// Tags `value` as a success.
#[inline]
pub fn success<V>(value: V) -> Success<V> {
    Success(value)
}

/// Tags `error` as a failure.
#[inline]
pub fn failure<E>(error: E) -> Failure<E> {
    Failure(error)
}

/// Builds a value-holding outcome directly.
///
/// # Examples
///
/// ```
/// use terminus_outcome::{ok, Outcome};
///
/// fn answer() -> Outcome<i32, String> {
///     ok(42)
/// }
///
/// assert_eq!(*answer().value(), 42);
/// ```
#[inline]
pub fn ok<V, E, P>(value: V) -> Outcome<V, E, P> {
    Outcome::success(value)
}

/// Builds an error-holding outcome directly.
#[inline]
pub fn fail<V, E, P>(error: E) -> Outcome<V, E, P> {
    Outcome::failure(error)
}
