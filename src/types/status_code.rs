//! General-purpose status codes shared across projects.
//!
//! [`StatusCode`] covers the failure kinds most libraries need (bad input,
//! missing resources, unsupported features, I/O). Its category is named
//! `"Error"` and its messages are the upper-case code names. Integers outside
//! the enum describe as `"UNKNOWN"`.
//!
//! # Examples
//!
//! ```
//! use terminus_outcome::types::{StatusCode, StatusOutcome};
//!
//! fn find(id: u32) -> StatusOutcome<&'static str> {
//!     match id {
//!         1 => StatusOutcome::success("first"),
//!         _ => StatusOutcome::failure(StatusCode::NotFound),
//!     }
//! }
//!
//! assert_eq!(*find(1).value(), "first");
//! assert_eq!(find(2).error().to_string(), "Error: NOT_FOUND");
//! ```
use crate::error_code;
use crate::Outcome;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

error_code! {
    /// Status codes for common failure kinds. `Success` is `0`.
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub enum StatusCode in StatusCategory("Error", fallback = "UNKNOWN") {
        Success = 0 => "SUCCESS",
        Unknown = 1 => "UNKNOWN",
        Aborted = 2 => "ABORTED",
        ConversionError = 3 => "CONVERSION_ERROR",
        DriverNotFound = 4 => "DRIVER_NOT_FOUND",
        /// Catch-all for failures reported by external libraries.
        DriverFailure = 5 => "DRIVER_FAILURE",
        DuplicateFound = 6 => "DUPLICATE_FOUND",
        FeatureNotSupported = 7 => "FEATURE_NOT_SUPPORTED",
        FileIoError = 8 => "FILE_IO_ERROR",
        FileNotFound = 9 => "FILE_NOT_FOUND",
        GdalFailure = 10 => "GDAL_FAILURE",
        IncorrectSize = 11 => "INCORRECT_SIZE",
        InvalidChannelType = 12 => "INVALID_CHANNEL_TYPE",
        InvalidConfiguration = 13 => "INVALID_CONFIGURATION",
        InvalidInput = 14 => "INVALID_INPUT",
        InvalidPixelType = 15 => "INVALID_PIXEL_TYPE",
        InvalidSize = 16 => "INVALID_SIZE",
        IsisError = 17 => "ISIS_ERROR",
        NotFound = 18 => "NOT_FOUND",
        NotImplemented = 19 => "NOT_IMPLEMENTED",
        NotSupported = 20 => "NOT_SUPPORTED",
        /// Catch-all for failures reported by the OpenJPEG API.
        OpenjpegFailure = 21 => "OPENJPEG_FAILURE",
        OutOfBounds = 22 => "OUT_OF_BOUNDS",
        OutOfMemory = 23 => "OUT_OF_MEMORY",
        ParsingError = 24 => "PARSING_ERROR",
        SchemaNotFound = 25 => "SCHEMA_NOT_FOUND",
        TypeMismatch = 26 => "TYPE_MISMATCH",
        Undefined = 27 => "UNDEFINED",
        Uninitialized = 28 => "UNINITIALIZED",
    }
}

/// Outcome whose error is a [`StatusCode`].
pub type StatusOutcome<V, P = crate::policy::Wide> = Outcome<V, StatusCode, P>;
