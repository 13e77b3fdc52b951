//! # dml-core — Canonical Scalar Carriers for the DML Extension Layer
//!
//! This crate defines the canonical in-memory forms of three domain scalar
//! types and the conversions between those forms, human-readable text,
//! native platform values, and a one-way JSON rendering:
//!
//! - [`Timestamp`] — epoch milliseconds at second resolution, converted to
//!   and from `chrono` date-time values and fixed-width local-time text.
//! - [`Decimal`] — a validated plaintext decimal literal, converted to and
//!   from `bigdecimal::BigDecimal`; the carrier itself does no arithmetic.
//! - [`Guid`] — the 16 raw bytes of a UUID, converted to and from
//!   `uuid::Uuid`, 32-character hex text, and raw byte slices.
//!
//! ## Key Design Principles
//!
//! 1. **Immutable value carriers.** Each type holds exactly one canonical
//!    field and is never mutated after construction.
//!
//! 2. **Stateless pure conversions.** The same input always yields the
//!    same output; the only entropy consumer is [`Guid::generate()`].
//!
//! 3. **Explicit failure values.** Every validation failure returns a
//!    [`DmlError`] to the immediate caller. Nothing is logged, retried,
//!    or silently corrected, apart from the documented lenient fallback
//!    for wrong-length timestamp text.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No I/O, no shared mutable state; all values are safely shared across
//!   threads without synchronization.

pub mod decimal;
pub mod error;
pub mod guid;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use decimal::Decimal;
pub use error::DmlError;
pub use guid::{Guid, GuidDisplay};
pub use temporal::{Timestamp, TimestampDisplay};
