//! Predictable, policy-checked error handling built around [`Outcome`].
//!
//! An [`Outcome<V, E, P>`](Outcome) holds either a success value `V` or an
//! error `E`, never both. Errors are ordinary values: they are inspected,
//! mapped, or forwarded explicitly and are never raised on their own. What
//! happens when a caller reads a side that is not there is decided by the
//! access policy `P`, fixed when the type is instantiated.
//!
//! # Examples
//!
//! ## Construction and access
//!
//! ```
//! use terminus_outcome::Outcome;
//!
//! let a = Outcome::<i32, String>::success(42);
//! assert!(a.has_value());
//! assert_eq!(a.map(|x| x + 1).value_or(0), 43);
//! ```
//!
//! ## Chaining fallible steps
//!
//! ```
//! use terminus_outcome::Outcome;
//!
//! let b = Outcome::<i32, String>::failure("not found".into());
//! let mut calls = 0;
//! let chained = b.and_then(|x| {
//!     calls += 1;
//!     Outcome::success(x * 2)
//! });
//!
//! assert_eq!(chained.error(), "not found");
//! assert_eq!(calls, 0);
//! ```
//!
//! ## Choosing a contract
//!
//! ```
//! use terminus_outcome::{Checked, ContractViolation, Unchecked};
//!
//! let checked = Checked::<i32, &str>::success(1);
//! let payload = std::panic::catch_unwind(|| *checked.error()).unwrap_err();
//! assert_eq!(
//!     payload.downcast_ref::<&str>(),
//!     Some(&"attempted error-access on value-holding outcome")
//! );
//! assert_eq!(
//!     ContractViolation::from_panic(payload.as_ref()),
//!     Some(ContractViolation::error_access())
//! );
//!
//! // Zero-cost access once the caller has branched.
//! let unchecked = Unchecked::<i32, &str>::success(1);
//! if unchecked.has_value() {
//!     assert_eq!(*unchecked.value(), 1);
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Build metadata for the compiled library
pub mod build_info;
/// Conversions between `Result`, `Option`, and `Outcome`
pub mod convert;
/// Macros for error codes and early returns
pub mod macros;
/// The outcome type, its combinators, and comparisons
pub mod outcome;
/// Access policies for wrong-side reads
pub mod policy;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Diagnostic, error-code, and conversion traits
pub mod traits;
/// Contract violations, construction tags, error chains, and status codes
pub mod types;

mod tracing_ext;

pub use outcome::{Checked, Outcome, Unchecked};
pub use policy::{AccessPolicy, Narrow, Wide};
pub use traits::*;
pub use types::{
    fail, failure, ok, success, Chained, ContractViolation, Failure, Side, StatusCode,
    StatusOutcome, Success,
};
