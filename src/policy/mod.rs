//! Access policies selecting what happens when an outcome is read on the wrong side.
//!
//! The policy is the third type parameter of [`Outcome`](crate::Outcome). It is
//! resolved at instantiation and cannot change for the lifetime of a value;
//! [`Outcome::into_policy`](crate::Outcome::into_policy) produces a *new*
//! outcome under another policy.
//!
//! - [`Wide`] (the default): every wrong-side access raises a catchable panic
//!   carrying the violation's static message, which
//!   [`ContractViolation::from_panic`] turns back into a [`ContractViolation`].
//! - [`Narrow`]: wrong-side access is a precondition violation. Debug builds
//!   panic with the diagnostic; optimized builds abort without formatting.
//!
//! Both policies are zero-sized markers, so checked and unchecked outcomes of
//! the same payload types coexist without any dispatch cost.
//!
//! # Examples
//!
//! ```
//! use terminus_outcome::policy::{Narrow, Wide};
//! use terminus_outcome::Outcome;
//!
//! let checked: Outcome<i32, &str, Wide> = Outcome::success(1);
//! let unchecked: Outcome<i32, &str, Narrow> = checked.into_policy();
//! assert_eq!(*unchecked.value(), 1);
//! ```
use crate::types::ContractViolation;

/// Strategy invoked when an accessor's precondition does not hold.
///
/// Implementors never return: the access has no value to hand back.
pub trait AccessPolicy {
    /// Short name used in diagnostics.
    const NAME: &'static str;

    /// Handles a wrong-side access.
    fn violated(violation: ContractViolation) -> !;
}

/// Narrow contract: wrong-side access is a programming error.
///
/// With debug assertions enabled the access panics with the diagnostic
/// message. That panic unwinds like any other, but it is a debugging aid and
/// not an error channel: optimized builds abort the process instead (or,
/// without `std`, panic with the static message). Never rely on catching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Narrow;

/// Wide contract: every wrong-side access is reported deterministically.
///
/// The panic payload is the violation's static message (`&'static str`), so
/// the default panic hook prints it. Recover the structured violation with
/// [`ContractViolation::from_panic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Wide;

impl AccessPolicy for Narrow {
    const NAME: &'static str = "narrow";

    #[cold]
    #[inline(never)]
    #[track_caller]
    fn violated(violation: ContractViolation) -> ! {
        if cfg!(debug_assertions) {
            panic!("{}", violation.message());
        }
        fail_fast(violation)
    }
}

impl AccessPolicy for Wide {
    const NAME: &'static str = "wide";

    #[cold]
    #[inline(never)]
    #[track_caller]
    fn violated(violation: ContractViolation) -> ! {
        crate::tracing_ext::report_violation(&violation, Self::NAME);
        raise(violation)
    }
}

#[cfg(feature = "std")]
fn fail_fast(_violation: ContractViolation) -> ! {
    std::process::abort()
}

#[cfg(not(feature = "std"))]
#[track_caller]
fn fail_fast(violation: ContractViolation) -> ! {
    panic!("{}", violation.message())
}

#[cfg(feature = "std")]
#[track_caller]
fn raise(violation: ContractViolation) -> ! {
    std::panic::panic_any(violation.message())
}

#[cfg(not(feature = "std"))]
#[track_caller]
fn raise(violation: ContractViolation) -> ! {
    panic!("{}", violation.message())
}
