use crate::policy::{AccessPolicy, Wide};
use crate::types::{ContractViolation, Side};
use core::fmt;
use core::marker::PhantomData;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Storage for the one populated side.
///
/// Variant order matters: the derived ordering places value-holding
/// outcomes before error-holding ones.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Repr<V, E> {
    Value(V),
    Error(E),
}

/// Either a success value of type `V` or an error of type `E`, never both.
///
/// `Outcome` is a function's return type in place of panicking or signaling
/// out of band. Exactly one side is populated for the whole lifetime of the
/// value; combinators consume it and build a new outcome.
///
/// The access policy `P` decides what happens when a caller reads a side that
/// is not there (see [`policy`](crate::policy)). It defaults to [`Wide`].
///
/// There is deliberately no `From<V>` or `From<E>`: the side is always named
/// at the construction site, through [`Outcome::success`] /
/// [`Outcome::failure`] or the [`Success`](crate::Success) /
/// [`Failure`](crate::Failure) tags, so an outcome whose `V` and `E` accept
/// the same input can never be built on the wrong side.
///
/// # Serde Support
///
/// With the `serde` feature, outcomes serialize as `{"value": ..}` or
/// `{"error": ..}`. The policy is not part of the representation.
///
/// # Type Parameters
///
/// * `V` - The success payload
/// * `E` - The failure payload
/// * `P` - The [`AccessPolicy`]
///
/// # Examples
///
/// ```
/// use terminus_outcome::Outcome;
///
/// fn parse_port(raw: &str) -> Outcome<u16, String> {
///     match raw.parse() {
///         Ok(port) => Outcome::success(port),
///         Err(_) => Outcome::failure(format!("invalid port: {raw}")),
///     }
/// }
///
/// let port = parse_port("8080");
/// assert!(port.has_value());
/// assert_eq!(*port.value(), 8080);
///
/// let bad = parse_port("http");
/// assert_eq!(bad.error(), "invalid port: http");
/// assert_eq!(bad.value_or(80), 80);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Outcome<V, E, P = Wide> {
    pub(crate) repr: Repr<V, E>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) policy: PhantomData<fn() -> P>,
}

/// Outcome under the [`Wide`] policy.
pub type Checked<V, E> = Outcome<V, E, Wide>;

/// Outcome under the [`Narrow`](crate::policy::Narrow) policy.
pub type Unchecked<V, E> = Outcome<V, E, crate::policy::Narrow>;

impl<V, E, P> Outcome<V, E, P> {
    #[inline]
    pub(crate) const fn from_repr(repr: Repr<V, E>) -> Self {
        Self { repr, policy: PhantomData }
    }

    /// Creates a value-holding outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use terminus_outcome::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::success(42);
    /// assert!(outcome.has_value());
    /// ```
    #[inline]
    pub const fn success(value: V) -> Self {
        Self::from_repr(Repr::Value(value))
    }

    /// Creates an error-holding outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use terminus_outcome::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::failure("not found");
    /// assert!(outcome.has_error());
    /// ```
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::from_repr(Repr::Error(error))
    }

    /// Returns `true` if a value is held.
    #[must_use]
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self.repr, Repr::Value(_))
    }

    /// Returns `true` if an error is held.
    #[must_use]
    #[inline]
    pub const fn has_error(&self) -> bool {
        !self.has_value()
    }

    /// Returns the populated side.
    #[must_use]
    #[inline]
    pub const fn side(&self) -> Side {
        match self.repr {
            Repr::Value(_) => Side::Value,
            Repr::Error(_) => Side::Error,
        }
    }

    /// Borrows the value, or reports which side was held instead.
    ///
    /// Always checked, whatever the policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use terminus_outcome::types::Side;
    /// use terminus_outcome::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::failure("boom");
    /// let violation = outcome.try_value().unwrap_err();
    /// assert_eq!(violation.held(), Side::Error);
    /// ```
    #[inline]
    pub fn try_value(&self) -> Result<&V, ContractViolation> {
        match &self.repr {
            Repr::Value(value) => Ok(value),
            Repr::Error(_) => Err(ContractViolation::value_access()),
        }
    }

    /// Borrows the error, or reports which side was held instead.
    #[inline]
    pub fn try_error(&self) -> Result<&E, ContractViolation> {
        match &self.repr {
            Repr::Value(_) => Err(ContractViolation::error_access()),
            Repr::Error(error) => Ok(error),
        }
    }

    /// Returns a reference to the value, if any.
    #[must_use]
    #[inline]
    pub fn value_opt(&self) -> Option<&V> {
        self.try_value().ok()
    }

    /// Returns a reference to the error, if any.
    #[must_use]
    #[inline]
    pub fn error_opt(&self) -> Option<&E> {
        self.try_error().ok()
    }

    /// Consumes the outcome, keeping only the value.
    #[must_use]
    #[inline]
    pub fn ok(self) -> Option<V> {
        match self.repr {
            Repr::Value(value) => Some(value),
            Repr::Error(_) => None,
        }
    }

    /// Consumes the outcome, keeping only the error.
    #[must_use]
    #[inline]
    pub fn err(self) -> Option<E> {
        match self.repr {
            Repr::Value(_) => None,
            Repr::Error(error) => Some(error),
        }
    }

    /// Returns the held value or `default`. Never panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use terminus_outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(7).value_or(0), 7);
    /// assert_eq!(Outcome::<i32, &str>::failure("x").value_or(0), 0);
    /// ```
    #[inline]
    pub fn value_or(self, default: V) -> V {
        match self.repr {
            Repr::Value(value) => value,
            Repr::Error(_) => default,
        }
    }

    /// Returns the held value or computes one from the error. Never panics on its own.
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self.repr {
            Repr::Value(value) => value,
            Repr::Error(error) => f(error),
        }
    }

    /// Returns the held value or `V::default()`.
    #[inline]
    pub fn value_or_default(self) -> V
    where
        V: Default,
    {
        self.value_or_else(|_| V::default())
    }

    /// Converts into a standard `Result`, so `?` can forward the error.
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        match self.repr {
            Repr::Value(value) => Ok(value),
            Repr::Error(error) => Err(error),
        }
    }

    /// Borrows both sides, producing an outcome of references.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&V, &E, P> {
        Outcome::from_repr(match &self.repr {
            Repr::Value(value) => Repr::Value(value),
            Repr::Error(error) => Repr::Error(error),
        })
    }

    /// Mutably borrows both sides. The discriminant itself stays fixed.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut V, &mut E, P> {
        Outcome::from_repr(match &mut self.repr {
            Repr::Value(value) => Repr::Value(value),
            Repr::Error(error) => Repr::Error(error),
        })
    }

    /// Borrows the value without checking the discriminant.
    ///
    /// Debug builds still assert the precondition.
    ///
    /// # Safety
    ///
    /// The outcome must hold a value. Calling this on an error-holding outcome
    /// is undefined behavior.
    #[inline]
    pub unsafe fn assume_value(&self) -> &V {
        debug_assert!(self.has_value(), "{}", ContractViolation::value_access());
        match &self.repr {
            Repr::Value(value) => value,
            // SAFETY: the caller guarantees a value is held.
            Repr::Error(_) => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    /// Borrows the error without checking the discriminant.
    ///
    /// Debug builds still assert the precondition.
    ///
    /// # Safety
    ///
    /// The outcome must hold an error. Calling this on a value-holding outcome
    /// is undefined behavior.
    #[inline]
    pub unsafe fn assume_error(&self) -> &E {
        debug_assert!(self.has_error(), "{}", ContractViolation::error_access());
        match &self.repr {
            // SAFETY: the caller guarantees an error is held.
            Repr::Value(_) => unsafe { core::hint::unreachable_unchecked() },
            Repr::Error(error) => error,
        }
    }
}

impl<V, E, P: AccessPolicy> Outcome<V, E, P> {
    /// Borrows the value.
    ///
    /// # Panics
    ///
    /// Reading an error-holding outcome is a contract violation handled by `P`:
    /// a catchable panic carrying the [`ContractViolation`] message under
    /// [`Wide`], a fail-fast under [`Narrow`](crate::policy::Narrow).
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &V {
        match &self.repr {
            Repr::Value(value) => value,
            Repr::Error(_) => P::violated(ContractViolation::value_access()),
        }
    }

    /// Borrows the error.
    ///
    /// # Panics
    ///
    /// Reading a value-holding outcome is a contract violation handled by `P`.
    ///
    /// # Examples
    ///
    /// ```
    /// use terminus_outcome::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::failure("not found");
    /// assert_eq!(*outcome.error(), "not found");
    /// ```
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &E {
        match &self.repr {
            Repr::Value(_) => P::violated(ContractViolation::error_access()),
            Repr::Error(error) => error,
        }
    }

    /// Mutably borrows the value under the same contract as [`value`](Self::value).
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut V {
        match &mut self.repr {
            Repr::Value(value) => value,
            Repr::Error(_) => P::violated(ContractViolation::value_access()),
        }
    }

    /// Mutably borrows the error under the same contract as [`error`](Self::error).
    #[inline]
    #[track_caller]
    pub fn error_mut(&mut self) -> &mut E {
        match &mut self.repr {
            Repr::Value(_) => P::violated(ContractViolation::error_access()),
            Repr::Error(error) => error,
        }
    }

    /// Consumes the outcome and returns the value under the policy's contract.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> V {
        match self.repr {
            Repr::Value(value) => value,
            Repr::Error(_) => P::violated(ContractViolation::value_access()),
        }
    }

    /// Consumes the outcome and returns the error under the policy's contract.
    #[inline]
    #[track_caller]
    pub fn into_error(self) -> E {
        match self.repr {
            Repr::Value(_) => P::violated(ContractViolation::error_access()),
            Repr::Error(error) => error,
        }
    }
}

impl<E, P> Outcome<(), E, P> {
    /// Success that carries nothing meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// use terminus_outcome::Outcome;
    ///
    /// let done = Outcome::<(), &str>::void();
    /// assert!(done.has_value());
    /// ```
    #[inline]
    pub const fn void() -> Self {
        Self::success(())
    }
}

impl<E, P> Default for Outcome<(), E, P> {
    #[inline]
    fn default() -> Self {
        Self::void()
    }
}

impl<V: Clone, E: Clone, P> Clone for Outcome<V, E, P> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_repr(self.repr.clone())
    }
}

impl<V: Copy, E: Copy, P> Copy for Outcome<V, E, P> {}

impl<V: fmt::Debug, E: fmt::Debug, P> fmt::Debug for Outcome<V, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Value(value) => f.debug_tuple("Success").field(value).finish(),
            Repr::Error(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}
