//! # Error Types
//!
//! The single error enum for the scalar adaptation layer. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Validation failures are explicit values returned to the immediate
//!   caller. Nothing is logged, retried, or silently corrected.
//! - Failures raised by the native decoders (hex, arbitrary-precision
//!   decimal) are wrapped and propagated unchanged.

use thiserror::Error;

/// Top-level error type for the DML scalar layer.
#[derive(Error, Debug)]
pub enum DmlError {
    /// A named timestamp sub-field could not be read as a base-10 integer.
    #[error("timestamp {0} is not a valid number")]
    TimestampField(&'static str),

    /// The timestamp fields do not name a valid local instant.
    #[error("timestamp fields do not form a valid local instant")]
    InvalidTimestamp,

    /// The stored millisecond value falls outside the representable
    /// date-time range.
    #[error("timestamp out of range: {0} milliseconds")]
    TimestampOutOfRange(i64),

    /// Decimal text does not match the decimal grammar.
    #[error("not a valid decimal string")]
    InvalidDecimal,

    /// GUID text or byte slice fails length/character validation.
    #[error("not a valid guid")]
    InvalidGuid,

    /// The native arbitrary-precision decimal parser rejected the text.
    #[error("decimal parse error: {0}")]
    DecimalParse(#[from] bigdecimal::ParseBigDecimalError),

    /// The hex decoder rejected the input.
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}
