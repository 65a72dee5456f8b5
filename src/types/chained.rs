//! Errors that carry the error that caused them.
//!
//! [`Chained`] owns its error and, optionally, the previous link of the chain.
//! Links are owned through a `Box`, so a chain is a finite singly linked list:
//! no link can refer back to itself and a walk from the head always ends at
//! the root cause.
//!
//! # Examples
//!
//! ```
//! use terminus_outcome::types::Chained;
//!
//! let chain = Chained::new("connection refused")
//!     .wrap("fetching tile index")
//!     .wrap("loading map");
//!
//! assert_eq!(chain.depth(), 3);
//! assert_eq!(*chain.root_cause(), "connection refused");
//! assert_eq!(
//!     chain.to_string(),
//!     "loading map -> fetching tile index -> connection refused"
//! );
//! ```
use crate::traits::Diagnostic;
use crate::types::alloc_type::{Box, String};
use crate::Outcome;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An error plus the owned link to its cause.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chained<E> {
    error: E,
    cause: Option<Box<Chained<E>>>,
}

impl<E> Chained<E> {
    /// Starts a chain with a root error.
    #[inline]
    pub fn new(error: E) -> Self {
        Self { error, cause: None }
    }

    /// Makes `outer` the new head, with the current chain as its cause.
    #[inline]
    pub fn wrap(self, outer: E) -> Self {
        Self { error: outer, cause: Some(Box::new(self)) }
    }

    /// The most recent error.
    #[inline]
    pub fn error(&self) -> &E {
        &self.error
    }

    /// The next link, if any.
    #[inline]
    pub fn cause(&self) -> Option<&Chained<E>> {
        self.cause.as_deref()
    }

    /// Iterates from the head to the root cause.
    #[inline]
    pub fn links(&self) -> Links<'_, E> {
        Links { next: Some(self) }
    }

    /// The innermost error.
    #[inline]
    pub fn root_cause(&self) -> &E {
        let mut link = self;
        while let Some(cause) = link.cause() {
            link = cause;
        }
        &link.error
    }

    /// Number of links, including the head.
    #[inline]
    pub fn depth(&self) -> usize {
        self.links().count()
    }

    /// Discards the causes and returns the head error.
    #[inline]
    pub fn into_inner(self) -> E {
        self.error
    }

    /// Splits off the head error from the rest of the chain.
    #[inline]
    pub fn into_parts(self) -> (E, Option<Chained<E>>) {
        (self.error, self.cause.map(|cause| *cause))
    }
}

impl<E> From<E> for Chained<E> {
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

/// Iterator over the errors of a chain, head first.
#[derive(Debug, Clone)]
pub struct Links<'a, E> {
    next: Option<&'a Chained<E>>,
}

impl<'a, E> Iterator for Links<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next?;
        self.next = link.cause();
        Some(&link.error)
    }
}

impl<E> core::iter::FusedIterator for Links<'_, E> {}

impl<E: Display> Display for Chained<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.links().enumerate() {
            if index > 0 {
                f.write_str(" -> ")?;
            }
            Display::fmt(error, f)?;
        }
        Ok(())
    }
}

impl<E> core::error::Error for Chained<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause().map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}

impl<E: Diagnostic> Diagnostic for Chained<E> {
    fn message(&self) -> String {
        self.error.message()
    }

    fn code(&self) -> Option<i32> {
        self.error.code()
    }

    fn cause(&self) -> Option<&dyn Diagnostic> {
        self.cause.as_deref().map(|cause| cause as &dyn Diagnostic)
    }
}

impl<V, E, P> Outcome<V, E, P> {
    /// Starts an error chain from the held error.
    #[inline]
    pub fn chained(self) -> Outcome<V, Chained<E>, P> {
        self.map_error(Chained::new)
    }
}

impl<V, E, P> Outcome<V, Chained<E>, P> {
    /// Pushes `outer` onto the held error chain. Value-holding outcomes are untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use terminus_outcome::Outcome;
    ///
    /// let outcome = Outcome::<u32, &str>::failure("checksum mismatch")
    ///     .chained()
    ///     .wrap_error("reading header");
    ///
    /// let chain = outcome.error();
    /// assert_eq!(*chain.error(), "reading header");
    /// assert_eq!(*chain.root_cause(), "checksum mismatch");
    /// ```
    #[inline]
    pub fn wrap_error(self, outer: E) -> Self {
        self.map_error(|chain| chain.wrap(outer))
    }
}
