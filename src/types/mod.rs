//! Supporting types for outcomes.
//!
//! - [`ContractViolation`] / [`Side`] - diagnostics for wrong-side access
//! - [`Success`] / [`Failure`] - explicit construction tags
//! - [`Chained`] - errors owning the error that caused them
//! - [`StatusCode`] - general-purpose error codes
//!
//! # Examples
//!
//! ```
//! use terminus_outcome::types::{Chained, StatusCode};
//! use terminus_outcome::Outcome;
//!
//! let outcome = Outcome::<(), StatusCode>::failure(StatusCode::FileNotFound)
//!     .chained()
//!     .wrap_error(StatusCode::InvalidConfiguration);
//!
//! let chain: &Chained<StatusCode> = outcome.error();
//! assert_eq!(chain.to_string(), "Error: INVALID_CONFIGURATION -> Error: FILE_NOT_FOUND");
//! ```
pub mod alloc_type;
pub mod chained;
pub mod contract_violation;
pub mod status_code;
pub mod tags;

pub use chained::{Chained, Links};
pub use contract_violation::{ContractViolation, Side};
pub use status_code::{StatusCategory, StatusCode, StatusOutcome};
pub use tags::{fail, failure, ok, success, Failure, Success};
