//! Declarative helpers for error codes and early returns.
//!
//! - [`macro@crate::error_code`] - Declares an error-code enum together with its
//!   [`ErrorCategory`](crate::traits::ErrorCategory), wiring up
//!   [`ErrorCode`](crate::traits::ErrorCode), [`Diagnostic`](crate::traits::Diagnostic)
//!   and `Display`.
//! - [`macro@crate::attempt`] - Unwraps a `Result` or [`Outcome`](crate::Outcome),
//!   returning a converted failure from the enclosing function on error.
//!
//! # Examples
//!
//! ```
//! use terminus_outcome::{attempt, error_code, Outcome};
//!
//! error_code! {
//!     /// I/O failures.
//!     pub enum IoErrorCode in IoErrorCategory("IoError") {
//!         Success = 0 => "success",
//!         BadRead = 1 => "bad read",
//!         BadWrite = 2 => "bad write",
//!         NotFound = 3 => "not found",
//!     }
//! }
//!
//! fn open(name: &str) -> Outcome<u32, IoErrorCode> {
//!     if name.is_empty() {
//!         Outcome::failure(IoErrorCode::NotFound)
//!     } else {
//!         Outcome::success(3)
//!     }
//! }
//!
//! fn open_both(a: &str, b: &str) -> Outcome<u32, IoErrorCode> {
//!     let first = attempt!(open(a));
//!     let second = attempt!(open(b));
//!     Outcome::success(first + second)
//! }
//!
//! assert_eq!(*open_both("a", "b").value(), 6);
//! assert_eq!(*open_both("a", "").error(), IoErrorCode::NotFound);
//! assert_eq!(IoErrorCode::BadRead.to_string(), "IoError: bad read");
//! ```

/// Declares an error-code enum and its category.
///
/// Generates:
///
/// - the enum, `#[repr(i32)]`, deriving `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`;
/// - a unit struct for the category implementing
///   [`ErrorCategory`](crate::traits::ErrorCategory), whose `message` falls back
///   to `"unknown"` (or the given `fallback`) for integers that are not part
///   of the enum;
/// - [`ErrorCode`](crate::traits::ErrorCode), [`Diagnostic`](crate::traits::Diagnostic),
///   `Display` (`"<category>: <message>"`) and `Error` for the enum.
///
/// Variant values must be non-negative integer literals.
///
/// # Syntax
///
/// ```text
/// error_code! {
///     pub enum Name in CategoryName("display name") {
///         Variant = 0 => "message",
///         ...
///     }
/// }
///
/// error_code! {
///     pub enum Name in CategoryName("display name", fallback = "UNKNOWN") {
///         ...
///     }
/// }
/// ```
#[macro_export]
macro_rules! error_code {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $category:ident($category_name:literal) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal => $message:literal
            ),+ $(,)?
        }
    ) => {
        $crate::error_code! {
            $(#[$meta])*
            $vis enum $name in $category($category_name, fallback = "unknown") {
                $(
                    $(#[$variant_meta])*
                    $variant = $value => $message
                ),+
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $category:ident(
            $category_name:literal, fallback = $fallback:literal $(,)?
        ) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal => $message:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )+
        }

        #[doc = concat!("Error category for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $category;

        impl $crate::traits::ErrorCategory for $category {
            fn name(&self) -> &'static str {
                $category_name
            }

            fn message(&self, code: i32) -> $crate::types::alloc_type::String {
                match code {
                    $( $value => $message.into(), )+
                    _ => $fallback.into(),
                }
            }
        }

        impl $crate::traits::ErrorCode for $name {
            type Category = $category;

            #[inline]
            fn value(self) -> i32 {
                self as i32
            }

            fn from_value(value: i32) -> ::core::option::Option<Self> {
                match value {
                    $( $value => ::core::option::Option::Some(Self::$variant), )+
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl $crate::traits::Diagnostic for $name {
            fn message(&self) -> $crate::types::alloc_type::String {
                $crate::traits::ErrorCode::describe(*self)
            }

            fn code(&self) -> ::core::option::Option<i32> {
                ::core::option::Option::Some($crate::traits::ErrorCode::value(*self))
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let category = <Self as $crate::traits::ErrorCode>::category();
                ::core::write!(
                    f,
                    "{}: {}",
                    $crate::traits::ErrorCategory::name(&category),
                    $crate::traits::ErrorCode::describe(*self)
                )
            }
        }

        impl ::core::error::Error for $name {}
    };
}

/// Unwraps a `Result` or [`Outcome`](crate::Outcome), or returns its error early.
///
/// On failure the enclosing function returns `Outcome::failure(From::from(error))`,
/// so the error may be converted into the function's error type. This is the
/// explicit forwarding form; nothing is propagated without it.
///
/// # Examples
///
/// ```
/// use terminus_outcome::{attempt, Outcome};
///
/// fn parse_sum(a: &str, b: &str) -> Outcome<i64, String> {
///     let a: i64 = attempt!(a.parse::<i64>().map_err(|e| e.to_string()));
///     let b: i64 = attempt!(b.parse::<i64>().map_err(|e| e.to_string()));
///     Outcome::success(a + b)
/// }
///
/// assert_eq!(*parse_sum("2", "40").value(), 42);
/// assert!(parse_sum("2", "forty").has_error());
/// ```
#[macro_export]
macro_rules! attempt {
    ($expr:expr $(,)?) => {
        match $crate::traits::WithError::to_result($expr) {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(error) => {
                return $crate::Outcome::failure(::core::convert::From::from(error));
            }
        }
    };
}
