//! The [`Outcome`] type: a success value or an explicit error.
//!
//! - [`core`](self::core) - representation, construction and policy-checked access
//! - `ops` - the combinator protocol (`map`, `map_error`, `and_then`, `or_else`, ...)
//! - `cmp` - equality, ordering and hashing
//! - `iter` - iteration over the value side and collection of outcomes
//!
//! # Examples
//!
//! ```
//! use terminus_outcome::Outcome;
//!
//! let b = Outcome::<i32, String>::failure("not found".to_string());
//! let doubled = b.and_then(|x| Outcome::success(x * 2));
//! assert_eq!(doubled.error(), "not found");
//! ```
pub mod core;
mod cmp;
mod iter;
mod ops;

pub use self::core::{Checked, Outcome, Unchecked};
