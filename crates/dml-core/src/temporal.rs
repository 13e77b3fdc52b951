//! # Temporal Carrier — Epoch-Millisecond Timestamps
//!
//! Defines `Timestamp`, the canonical carrier for date-time values: a
//! signed epoch-millisecond count, always a whole multiple of 1000.
//! Sub-second precision is never represented.
//!
//! ## Text Forms
//!
//! Two fixed-width local-time layouts are accepted, selected by byte
//! length:
//!
//! ```text
//! YYYY-MM-DD              (10 bytes, time-of-day defaults to 12:00:00)
//! YYYY-MM-DD HH:MM:SS     (19 bytes)
//! ```
//!
//! Any other length yields the zero timestamp rather than an error. This
//! lenient fallback is contract: callers feed loosely-validated column
//! text through this path and expect a zero value, not a failure.
//!
//! The noon default for date-only input is deliberate — it keeps the
//! value on the same calendar date when later reduced to a date in a
//! neighboring timezone.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Serialize, Serializer};

use crate::error::DmlError;

/// Layout for the human-readable display string, Unix `date(1)` style.
const DISPLAY_LAYOUT: &str = "%a %b %e %H:%M:%S UTC %Y";

/// Canonical date-time carrier: Unix epoch milliseconds at second
/// resolution.
///
/// # Construction
///
/// - [`Timestamp::parse()`] — from fixed-width local-time text.
/// - [`Timestamp::from_datetime()`] — from a native `chrono` value,
///   truncating to whole seconds.
/// - [`Timestamp::from_milliseconds()`] — from a stored raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    milliseconds: i64,
}

/// One-way display rendering of a [`Timestamp`]: the formatted UTC
/// instant plus the raw millisecond count. Not re-parseable input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimestampDisplay {
    /// The reconstructed instant in `Mon Jan  2 15:04:05 UTC 2006` layout.
    pub timestamp: String,
    /// The raw canonical millisecond value.
    pub milliseconds: i64,
}

impl Timestamp {
    /// Wrap a stored raw millisecond value.
    pub fn from_milliseconds(milliseconds: i64) -> Self {
        Self { milliseconds }
    }

    /// The canonical millisecond value.
    pub fn milliseconds(&self) -> i64 {
        self.milliseconds
    }

    /// Parse a timestamp from fixed-width local-time text.
    ///
    /// Accepts the 10-byte `YYYY-MM-DD` and 19-byte `YYYY-MM-DD HH:MM:SS`
    /// layouts; every other length returns the zero timestamp. Sub-fields
    /// are read from fixed byte offsets — separator bytes are not
    /// inspected.
    ///
    /// # Errors
    ///
    /// - [`DmlError::TimestampField`] if a sub-field is not a base-10
    ///   integer.
    /// - [`DmlError::InvalidTimestamp`] if the fields do not name a valid
    ///   local instant.
    pub fn parse(s: &str) -> Result<Self, DmlError> {
        if s.len() != 10 && s.len() != 19 {
            return Ok(Self { milliseconds: 0 });
        }

        let year: i32 = sub_field(s, 0..4, "year")?;
        let month: u32 = sub_field(s, 5..7, "month")?;
        let day: u32 = sub_field(s, 8..10, "day")?;

        let (hour, minute, second): (u32, u32, u32) = if s.len() == 19 {
            (
                sub_field(s, 11..13, "hour")?,
                sub_field(s, 14..16, "minute")?,
                sub_field(s, 17..19, "second")?,
            )
        } else {
            // Noon, not midnight: a date-only value must stay on its
            // calendar date when rendered in a nearby timezone.
            (12, 0, 0)
        };

        let instant = Local
            .with_ymd_and_hms(year, month, day, hour, minute, second)
            .earliest()
            .ok_or(DmlError::InvalidTimestamp)?;

        Ok(Self {
            milliseconds: instant.timestamp() * 1000,
        })
    }

    /// Create a timestamp from a native date-time value, truncating to
    /// whole seconds. Lossy: the sub-second component is discarded.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            milliseconds: dt.timestamp() * 1000,
        }
    }

    /// Reconstruct the native date-time value at `milliseconds / 1000`
    /// epoch seconds, anchored at UTC.
    ///
    /// # Errors
    ///
    /// [`DmlError::TimestampOutOfRange`] if the seconds value falls
    /// outside the representable date-time range.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>, DmlError> {
        let secs = self.milliseconds / 1000;
        DateTime::from_timestamp(secs, 0)
            .ok_or(DmlError::TimestampOutOfRange(self.milliseconds))
    }

    /// Render the one-way display form.
    ///
    /// # Errors
    ///
    /// [`DmlError::TimestampOutOfRange`] if the instant cannot be
    /// reconstructed.
    pub fn display(&self) -> Result<TimestampDisplay, DmlError> {
        let dt = self.to_datetime()?;
        Ok(TimestampDisplay {
            timestamp: dt.format(DISPLAY_LAYOUT).to_string(),
            milliseconds: self.milliseconds,
        })
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.display()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

/// Read one fixed-offset sub-field as a base-10 integer.
fn sub_field<T: std::str::FromStr>(
    s: &str,
    range: std::ops::Range<usize>,
    name: &'static str,
) -> Result<T, DmlError> {
    s.get(range)
        .and_then(|raw| raw.parse().ok())
        .ok_or(DmlError::TimestampField(name))
}
