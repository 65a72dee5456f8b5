//! Diagnostics raised when an [`Outcome`](crate::Outcome) is read on the wrong side.
//!
//! A [`ContractViolation`] is never a domain error: it reports a programming
//! mistake (reading a value that is not there) and is delivered through the
//! outcome's [`AccessPolicy`](crate::policy::AccessPolicy) rather than returned
//! to the caller. The only place it shows up as a plain value is the
//! always-checked accessors such as [`Outcome::try_value`](crate::Outcome::try_value).
//!
//! # Examples
//!
//! ```
//! use terminus_outcome::types::{ContractViolation, Side};
//!
//! let violation = ContractViolation::new(Side::Error, Side::Value);
//! assert_eq!(
//!     violation.to_string(),
//!     "attempted error-access on value-holding outcome"
//! );
//! ```
use crate::types::alloc_type::String;
use core::any::Any;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the two sides of an outcome.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    /// The success payload.
    Value,
    /// The failure payload.
    Error,
}

impl Side {
    /// Returns the lowercase name used in diagnostics.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Value => "value",
            Side::Error => "error",
        }
    }

    /// Returns the opposite side.
    #[inline]
    pub const fn other(self) -> Side {
        match self {
            Side::Value => Side::Error,
            Side::Error => Side::Value,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report of an access that did not match the held side.
///
/// Carries which access was attempted and which side the outcome actually
/// held. Policies raise it as its static [`message`](Self::message), so an
/// uncaught violation is readable in the panic report; callers that catch
/// the unwind recover the structured form with [`from_panic`](Self::from_panic).
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractViolation {
    attempted: Side,
    held: Side,
}

impl ContractViolation {
    /// Creates a violation for an `attempted` access on an outcome holding `held`.
    #[inline]
    pub const fn new(attempted: Side, held: Side) -> Self {
        Self { attempted, held }
    }

    /// Violation for reading the value of an error-holding outcome.
    #[inline]
    pub const fn value_access() -> Self {
        Self::new(Side::Value, Side::Error)
    }

    /// Violation for reading the error of a value-holding outcome.
    #[inline]
    pub const fn error_access() -> Self {
        Self::new(Side::Error, Side::Value)
    }

    /// The side the caller tried to read.
    #[inline]
    pub const fn attempted(&self) -> Side {
        self.attempted
    }

    /// The side the outcome actually held.
    #[inline]
    pub const fn held(&self) -> Side {
        self.held
    }

    /// Static diagnostic text, available without allocation or formatting.
    pub const fn message(&self) -> &'static str {
        match (self.attempted, self.held) {
            (Side::Value, Side::Error) => "attempted value-access on error-holding outcome",
            (Side::Error, Side::Value) => "attempted error-access on value-holding outcome",
            (Side::Value, Side::Value) => "attempted value-access on value-holding outcome",
            (Side::Error, Side::Error) => "attempted error-access on error-holding outcome",
        }
    }

    /// Parses one of the static diagnostic messages back into a violation.
    pub fn from_message(message: &str) -> Option<Self> {
        [
            Self::value_access(),
            Self::error_access(),
            Self::new(Side::Value, Side::Value),
            Self::new(Side::Error, Side::Error),
        ]
        .into_iter()
        .find(|violation| violation.message() == message)
    }

    /// Recovers a violation from a caught panic payload.
    ///
    /// Accepts both `&'static str` and `String` payloads, so it works for the
    /// [`Wide`](crate::policy::Wide) policy as well as a debug-build
    /// [`Narrow`](crate::policy::Narrow) panic. Returns `None` for any other
    /// panic.
    ///
    /// # Examples
    ///
    /// ```
    /// use terminus_outcome::types::ContractViolation;
    /// use terminus_outcome::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::success(1);
    /// let payload = std::panic::catch_unwind(|| *outcome.error()).unwrap_err();
    /// assert_eq!(
    ///     ContractViolation::from_panic(payload.as_ref()),
    ///     Some(ContractViolation::error_access())
    /// );
    /// ```
    pub fn from_panic(payload: &(dyn Any + Send)) -> Option<Self> {
        let message = if let Some(message) = payload.downcast_ref::<&'static str>() {
            *message
        } else {
            payload.downcast_ref::<String>()?.as_str()
        };
        Self::from_message(message)
    }
}

impl Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for ContractViolation {}
