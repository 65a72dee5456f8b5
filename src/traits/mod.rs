//! Core traits around the outcome type.
//!
//! - [`Diagnostic`]: capability set of an error payload (message, code, cause)
//! - [`ErrorCategory`] / [`ErrorCode`]: integer error codes grouped by category
//! - [`IntoOutcome`] / [`OptionExt`]: bring `Result` and `Option` into [`Outcome`](crate::Outcome)
//! - [`WithError`]: abstraction over `Result` and `Outcome` for remapping errors
//!
//! # Examples
//!
//! ```
//! use terminus_outcome::traits::{Diagnostic, ErrorCode};
//! use terminus_outcome::types::StatusCode;
//!
//! let code = StatusCode::NotFound;
//! assert_eq!(code.describe(), "NOT_FOUND");
//! assert_eq!(Diagnostic::code(&code), Some(18));
//! ```

pub mod diagnostic;
pub mod error_category;
pub mod into_outcome;
pub mod with_error;

pub use diagnostic::{Causes, Diagnostic};
pub use error_category::{ErrorCategory, ErrorCode};
pub use into_outcome::{IntoOutcome, OptionExt};
pub use with_error::WithError;
