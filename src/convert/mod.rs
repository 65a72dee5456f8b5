//! Conversion helpers between `Result`, `Option`, and [`Outcome`].
//!
//! These adapters make it straightforward to adopt outcomes incrementally:
//! wrap results coming from the standard library or other crates, and hand
//! plain results back to APIs that expect them.
//!
//! # Examples
//!
//! ```
//! use terminus_outcome::convert::*;
//! use terminus_outcome::Outcome;
//!
//! let outcome: Outcome<i32, &str> = result_to_outcome(Ok(42));
//! assert!(outcome.has_value());
//!
//! let result = outcome_to_result(outcome);
//! assert_eq!(result, Ok(42));
//! ```

use crate::types::Chained;
use crate::Outcome;

impl<V, E, P> From<Result<V, E>> for Outcome<V, E, P> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        result_to_outcome(result)
    }
}

impl<V, E, P> From<Outcome<V, E, P>> for Result<V, E> {
    #[inline]
    fn from(outcome: Outcome<V, E, P>) -> Self {
        outcome.into_result()
    }
}

/// Converts a `Result` into an `Outcome`, keeping the populated side.
///
/// # Examples
///
/// ```
/// use terminus_outcome::convert::result_to_outcome;
/// use terminus_outcome::Outcome;
///
/// let outcome: Outcome<i32, &str> = result_to_outcome(Err("failed"));
/// assert_eq!(*outcome.error(), "failed");
/// ```
#[inline]
pub fn result_to_outcome<V, E, P>(result: Result<V, E>) -> Outcome<V, E, P> {
    match result {
        Ok(value) => Outcome::success(value),
        Err(error) => Outcome::failure(error),
    }
}

/// Converts an `Outcome` into a `Result`.
#[inline]
pub fn outcome_to_result<V, E, P>(outcome: Outcome<V, E, P>) -> Result<V, E> {
    outcome.into_result()
}

/// Converts an `Option` into an `Outcome`, using `error` for `None`.
///
/// # Examples
///
/// ```
/// use terminus_outcome::convert::option_to_outcome;
/// use terminus_outcome::Outcome;
///
/// let outcome: Outcome<i32, &str> = option_to_outcome(None, "missing");
/// assert!(outcome.has_error());
/// ```
#[inline]
pub fn option_to_outcome<V, E, P>(option: Option<V>, error: E) -> Outcome<V, E, P> {
    match option {
        Some(value) => Outcome::success(value),
        None => Outcome::failure(error),
    }
}

/// Drops the causes of a chained error, keeping only its head.
///
/// # Examples
///
/// ```
/// use terminus_outcome::convert::flatten_chained_outcome;
/// use terminus_outcome::Outcome;
///
/// let chained = Outcome::<(), &str>::failure("root").chained().wrap_error("outer");
/// let flat = flatten_chained_outcome(chained);
/// assert_eq!(*flat.error(), "outer");
/// ```
#[inline]
pub fn flatten_chained_outcome<V, E, P>(outcome: Outcome<V, Chained<E>, P>) -> Outcome<V, E, P> {
    outcome.map_error(Chained::into_inner)
}

/// Replaces a chained error with its root cause.
#[inline]
pub fn root_cause_outcome<V, E, P>(outcome: Outcome<V, Chained<E>, P>) -> Outcome<V, E, P> {
    outcome.map_error(|chain| {
        let (head, mut cause) = chain.into_parts();
        let mut root = head;
        while let Some(link) = cause {
            let (error, next) = link.into_parts();
            root = error;
            cause = next;
        }
        root
    })
}
