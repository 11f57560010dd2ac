// File: crates/chart-labels/src/date.rs
// Summary: Date formatter for values holding milliseconds since the Unix epoch.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::error::{LabelError, Result};

/// Pattern used by [`DateFormat::short`], e.g. `3/9/24 2:05 PM`.
pub const SHORT_DATE_PATTERN: &str = "%-m/%-d/%y %-I:%M %p";

/// Formats epoch-millisecond values with a strftime pattern at a fixed offset.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateFormat {
    pattern: String,
    #[cfg_attr(feature = "serde", serde(with = "offset_seconds"))]
    offset: FixedOffset,
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::short()
    }
}

impl DateFormat {
    /// Build from a strftime pattern, rendered in UTC.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LabelError::invalid_argument(format!("invalid date pattern {pattern:?}")));
        }
        Ok(Self { pattern, offset: Utc.fix() })
    }

    /// Numeric date and 12-hour time.
    pub fn short() -> Self {
        Self { pattern: SHORT_DATE_PATTERN.to_string(), offset: Utc.fix() }
    }

    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Offset east of UTC in seconds; fails outside +/- 24h.
    pub fn with_offset_seconds(self, seconds: i32) -> Result<Self> {
        let offset = FixedOffset::east_opt(seconds)
            .ok_or_else(|| LabelError::invalid_argument(format!("utc offset {seconds}s out of range")))?;
        Ok(self.with_offset(offset))
    }

    pub fn pattern(&self) -> &str { &self.pattern }
    pub fn offset(&self) -> FixedOffset { self.offset }

    /// Render `value` as a date. The value is truncated to whole milliseconds.
    pub fn format(&self, value: f64) -> Result<String> {
        // saturating, NaN -> 0
        let millis = value as i64;
        let utc = DateTime::<Utc>::from_timestamp_millis(millis).ok_or(LabelError::DateOutOfRange(millis))?;
        let local = utc.with_timezone(&self.offset);
        let mut out = String::new();
        write!(out, "{}", local.format(&self.pattern))
            .map_err(|_| LabelError::invalid_argument(format!("cannot render date pattern {:?}", self.pattern)))?;
        Ok(out)
    }
}

/// The offset travels as whole seconds east of UTC.
#[cfg(feature = "serde")]
mod offset_seconds {
    use chrono::FixedOffset;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(offset: &FixedOffset, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(offset.local_minus_utc())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FixedOffset, D::Error> {
        let seconds = i32::deserialize(deserializer)?;
        FixedOffset::east_opt(seconds).ok_or_else(|| de::Error::custom(format!("utc offset {seconds}s out of range")))
    }
}
