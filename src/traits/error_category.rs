//! Integer error codes grouped under named categories.
//!
//! An [`ErrorCode`] is a fieldless enum with an `i32` representation. Its
//! [`ErrorCategory`] names the family of codes and turns each integer into a
//! message. The [`error_code!`](crate::error_code) macro declares all three
//! pieces (the enum, its category, and their wiring) in one place.
use crate::types::alloc_type::String;

/// Named family of integer error codes.
pub trait ErrorCategory {
    /// Category name, e.g. `"IoError"`.
    fn name(&self) -> &'static str;

    /// Message for the integer `code`. Unknown codes still produce a message.
    fn message(&self, code: i32) -> String;
}

/// Fieldless enum usable as a machine-checkable error code.
///
/// By convention the value `0` means success.
pub trait ErrorCode: Copy + Eq + 'static {
    /// Category interpreting this code's integers.
    type Category: ErrorCategory + Default;

    /// Integer representation.
    fn value(self) -> i32;

    /// Looks a code up by its integer representation.
    fn from_value(value: i32) -> Option<Self>;

    /// The category instance.
    #[inline]
    fn category() -> Self::Category {
        Self::Category::default()
    }

    /// Message for this code, as given by its category.
    #[inline]
    fn describe(self) -> String {
        Self::category().message(self.value())
    }

    /// Returns `true` for the success code `0`.
    #[inline]
    fn is_success(self) -> bool {
        self.value() == 0
    }
}
