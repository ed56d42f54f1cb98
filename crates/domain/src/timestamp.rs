// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timestamp normalization.
//!
//! Records arrive with heterogeneous timestamp representations: an RFC 3339
//! string, epoch milliseconds, or the document store's server-timestamp
//! wrapper (`{seconds, nanoseconds}`). Every comparison and display path
//! must go through [`normalize_timestamp`] so the three forms are
//! interchangeable. Unparsable input normalizes to `None`, never to a
//! panicking or NaN-derived value.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label shown when a timestamp cannot be normalized.
pub const UNKNOWN_DATE_LABEL: &str = "Unknown date";

/// A timestamp as it appears on the wire, before normalization.
///
/// The untagged representation mirrors what the document store hands back:
/// a JSON object for server timestamps, a number for epoch milliseconds,
/// or a string for ISO-8601 values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    /// Server-timestamp wrapper: seconds since the epoch plus nanoseconds.
    Epoch {
        /// Whole seconds since the Unix epoch.
        seconds: i64,
        /// Nanosecond remainder.
        nanoseconds: u32,
    },
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// An ISO-8601 / RFC 3339 string.
    Text(String),
}

impl RawTimestamp {
    /// Builds a `RawTimestamp` carrying the given instant as RFC 3339 text.
    ///
    /// This is the form the persistence layer writes.
    #[must_use]
    pub fn from_datetime(value: DateTime<Utc>) -> Self {
        Self::Text(value.to_rfc3339())
    }

    /// Normalizes this value, shorthand for [`normalize_timestamp`].
    #[must_use]
    pub fn normalized(&self) -> Option<DateTime<Utc>> {
        normalize_timestamp(self)
    }
}

/// Converts a raw timestamp into a single comparable UTC datetime.
///
/// Detection order: the server-timestamp wrapper is unwrapped first,
/// numeric values are read as epoch milliseconds, and strings are parsed
/// as RFC 3339 with a naive
/// `YYYY-MM-DDTHH:MM:SS` fallback interpreted as UTC.
///
/// Returns `None` for anything unparsable; callers displaying dates must
/// fall back to [`UNKNOWN_DATE_LABEL`] rather than propagate the failure.
#[must_use]
pub fn normalize_timestamp(value: &RawTimestamp) -> Option<DateTime<Utc>> {
    match value {
        RawTimestamp::Epoch {
            seconds,
            nanoseconds,
        } => DateTime::from_timestamp(*seconds, *nanoseconds),
        RawTimestamp::Millis(ms) => DateTime::from_timestamp_millis(*ms),
        RawTimestamp::Text(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|naive| naive.and_utc())
            }),
    }
}

/// Renders a normalized timestamp for display.
///
/// `None` (a malformed source value) renders as [`UNKNOWN_DATE_LABEL`].
#[must_use]
pub fn display_date(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(
        || UNKNOWN_DATE_LABEL.to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M").to_string(),
    )
}
