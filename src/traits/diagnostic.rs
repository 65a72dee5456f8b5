use crate::types::alloc_type::String;
use crate::types::ContractViolation;

/// Capability set an error payload may offer for diagnostics.
///
/// [`Outcome`](crate::Outcome) does not require its error type to implement
/// this trait; it is the common vocabulary for describing an error, reading
/// its machine code, and walking to the error that caused it.
///
/// # Examples
///
/// ```
/// use terminus_outcome::traits::Diagnostic;
///
/// struct Timeout {
///     millis: u64,
/// }
///
/// impl Diagnostic for Timeout {
///     fn message(&self) -> String {
///         format!("timed out after {}ms", self.millis)
///     }
///
///     fn code(&self) -> Option<i32> {
///         Some(408)
///     }
/// }
///
/// let error = Timeout { millis: 250 };
/// assert_eq!(error.message(), "timed out after 250ms");
/// assert_eq!(error.code(), Some(408));
/// assert_eq!(error.causes().count(), 0);
/// ```
pub trait Diagnostic {
    /// Human-readable description.
    fn message(&self) -> String;

    /// Machine-checkable code, if the error carries one.
    fn code(&self) -> Option<i32> {
        None
    }

    /// The error that caused this one.
    fn cause(&self) -> Option<&dyn Diagnostic> {
        None
    }

    /// Walks the causes, starting after `self`.
    fn causes(&self) -> Causes<'_> {
        Causes { next: self.cause() }
    }
}

/// Iterator returned by [`Diagnostic::causes`].
pub struct Causes<'a> {
    next: Option<&'a dyn Diagnostic>,
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a dyn Diagnostic;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl Diagnostic for str {
    fn message(&self) -> String {
        self.into()
    }
}

impl Diagnostic for &str {
    fn message(&self) -> String {
        (*self).into()
    }
}

impl Diagnostic for String {
    fn message(&self) -> String {
        self.clone()
    }
}

impl Diagnostic for ContractViolation {
    fn message(&self) -> String {
        ContractViolation::message(self).into()
    }
}
