//! # Decimal Carrier — Validated Plaintext Literals
//!
//! Defines `Decimal`, the canonical carrier for arbitrary-precision
//! decimal values. The carrier holds the exact literal as validated text
//! and performs no arithmetic and no normalization; numeric work happens
//! in `bigdecimal` after conversion.
//!
//! Grammar: optional sign, one or more ASCII digits, optional fraction —
//! `[+-]?[0-9]+(\.[0-9]+)?`.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::DmlError;

// Compiled once at first use.
// ASCII digit classes only: `\d` matches Unicode digits, which the
// native parser refuses.
static VALID_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?$").expect("decimal pattern is valid"));

/// Canonical decimal carrier: the validated literal, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    text: String,
}

impl Decimal {
    /// Validate a decimal literal and wrap it.
    ///
    /// # Errors
    ///
    /// [`DmlError::InvalidDecimal`] if the text does not match the
    /// decimal grammar.
    pub fn parse(s: &str) -> Result<Self, DmlError> {
        if !VALID_DECIMAL.is_match(s) {
            return Err(DmlError::InvalidDecimal);
        }
        Ok(Self {
            text: s.to_owned(),
        })
    }

    /// The stored literal, unchanged.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Re-parse the literal through the native arbitrary-precision
    /// parser.
    ///
    /// The native parser is a separate validator from the grammar check
    /// in [`Decimal::parse()`]; its rejection propagates unchanged.
    ///
    /// # Errors
    ///
    /// [`DmlError::DecimalParse`] if `bigdecimal` rejects the text.
    pub fn to_bigdecimal(&self) -> Result<BigDecimal, DmlError> {
        Ok(BigDecimal::from_str(&self.text)?)
    }

    /// Wrap a native decimal's canonical string form. No validation —
    /// the source is well-formed by construction.
    pub fn from_bigdecimal(d: &BigDecimal) -> Self {
        Self {
            text: d.to_string(),
        }
    }
}

impl From<BigDecimal> for Decimal {
    fn from(d: BigDecimal) -> Self {
        Self::from_bigdecimal(&d)
    }
}

impl std::fmt::Display for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
