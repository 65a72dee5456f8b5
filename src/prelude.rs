//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use terminus_outcome::prelude::*;
//!
//! fn lookup(key: &str) -> Outcome<u32, StatusCode> {
//!     match key {
//!         "answer" => ok(42),
//!         _ => fail(StatusCode::NotFound),
//!     }
//! }
//!
//! fn doubled(key: &str) -> Outcome<u32, StatusCode> {
//!     let value = attempt!(lookup(key));
//!     ok(value * 2)
//! }
//!
//! assert_eq!(*doubled("answer").value(), 84);
//! assert_eq!(*doubled("question").error(), StatusCode::NotFound);
//! ```

// Macros
pub use crate::{attempt, error_code};

// Core types
pub use crate::outcome::{Checked, Outcome, Unchecked};
pub use crate::policy::{AccessPolicy, Narrow, Wide};
pub use crate::types::{
    fail, failure, ok, success, Chained, ContractViolation, Failure, Side, StatusCode,
    StatusOutcome, Success,
};

// Traits
pub use crate::traits::{Diagnostic, ErrorCategory, ErrorCode, IntoOutcome, OptionExt, WithError};
