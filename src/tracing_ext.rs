//! Tracing integration for outcome diagnostics.
//!
//! With the `tracing` feature enabled, wide-contract violations are emitted as
//! `error` events before the panic is raised, and
//! [`Outcome::trace_error`](crate::Outcome::trace_error) logs failures that
//! pass through a call site. Without the feature every hook compiles to
//! nothing.
//!
//! ```toml
//! [dependencies]
//! terminus-outcome = { version = "1", features = ["tracing"] }
//! ```
use crate::types::ContractViolation;
#[cfg(feature = "tracing")]
use crate::Outcome;

#[cfg(feature = "tracing")]
pub(crate) fn report_violation(violation: &ContractViolation, policy: &'static str) {
    tracing::error!(
        attempted = %violation.attempted(),
        held = %violation.held(),
        policy,
        "{}",
        violation.message()
    );
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn report_violation(_violation: &ContractViolation, _policy: &'static str) {}

#[cfg(feature = "tracing")]
impl<V, E: core::fmt::Debug, P> Outcome<V, E, P> {
    /// Logs the held error at `warn` level and passes the outcome through unchanged.
    ///
    /// Value-holding outcomes are not logged.
    ///
    /// # Examples
    ///
    /// ```
    /// use terminus_outcome::Outcome;
    ///
    /// let outcome: Outcome<u8, &str> = Outcome::failure("disk full");
    /// let outcome = outcome.trace_error("writing snapshot");
    /// assert!(outcome.has_error());
    /// ```
    pub fn trace_error(self, operation: &str) -> Self {
        if let Some(error) = self.error_opt() {
            tracing::warn!(operation, error = ?error, "outcome holds an error");
        }
        self
    }
}
