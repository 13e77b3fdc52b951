//! # Identifier Carrier — 16-Byte GUIDs
//!
//! Defines `Guid`, the canonical carrier for globally unique identifiers:
//! the 16 raw bytes of a UUID. The fixed-size array makes the length
//! invariant a compile-time property; the textual form is 32 hex
//! characters with no dashes, case-insensitive on input and lowercase on
//! output.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::error::DmlError;

// Compiled once at first use.
static VALID_GUID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{32}$").expect("guid pattern is valid"));

/// Canonical identifier carrier: the binary encoding of a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guid {
    bytes: [u8; 16],
}

/// One-way display rendering of a [`Guid`]: the lowercase hex encoding.
/// Not re-parseable through the UUID text forms that carry dashes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuidDisplay {
    /// 32 lowercase hex characters, no dashes.
    pub guid: String,
}

impl Guid {
    /// Parse an identifier from its 32-character hex form.
    ///
    /// Case-insensitive; dashes and other separators are rejected.
    ///
    /// # Errors
    ///
    /// [`DmlError::InvalidGuid`] if the text is not exactly 32 hex
    /// characters.
    pub fn parse_hex(s: &str) -> Result<Self, DmlError> {
        if !VALID_GUID.is_match(s) {
            return Err(DmlError::InvalidGuid);
        }
        let decoded = hex::decode(s)?;
        Self::from_bytes(&decoded)
    }

    /// Wrap a raw 16-byte sequence.
    ///
    /// # Errors
    ///
    /// [`DmlError::InvalidGuid`] if the slice is not exactly 16 bytes.
    pub fn from_bytes(b: &[u8]) -> Result<Self, DmlError> {
        let bytes: [u8; 16] = b.try_into().map_err(|_| DmlError::InvalidGuid)?;
        Ok(Self { bytes })
    }

    /// Generate a fresh random (version 4) identifier.
    pub fn generate() -> Self {
        Self::from_uuid(&Uuid::new_v4())
    }

    /// Wrap a native UUID's 16 raw bytes.
    pub fn from_uuid(u: &Uuid) -> Self {
        Self {
            bytes: *u.as_bytes(),
        }
    }

    /// The raw 16-byte value.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.bytes
    }

    /// Reinterpret the bytes as a native UUID. Infallible: the carrier's
    /// byte count is fixed by its type.
    pub fn to_uuid(&self) -> Uuid {
        Uuid::from_bytes(self.bytes)
    }

    /// Lowercase hex encoding, no dashes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Render the one-way display form.
    pub fn display(&self) -> GuidDisplay {
        GuidDisplay {
            guid: self.to_hex(),
        }
    }
}

impl From<Uuid> for Guid {
    fn from(u: Uuid) -> Self {
        Self::from_uuid(&u)
    }
}

impl Serialize for Guid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.display().serialize(serializer)
    }
}

impl std::fmt::Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
