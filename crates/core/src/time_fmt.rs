// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Epoch to ISO-8601 instant formatting.
//!
//! The dashboard renders instants the way JavaScript's `toISOString()`
//! does: millisecond precision, `Z` suffix.

use chrono::{DateTime, Utc};

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Format seconds since the Unix epoch, e.g. `2023-10-08T21:20:00.000Z`.
///
/// `None` when the value is outside chrono's representable range.
pub fn iso_instant_secs(secs: u64) -> Option<String> {
    let secs = i64::try_from(secs).ok()?;
    let dt = DateTime::<Utc>::from_timestamp(secs, 0)?;
    Some(dt.format(ISO_FORMAT).to_string())
}

/// Format milliseconds since the Unix epoch.
pub fn iso_instant_ms(ms: u64) -> Option<String> {
    let ms = i64::try_from(ms).ok()?;
    let dt = DateTime::<Utc>::from_timestamp_millis(ms)?;
    Some(dt.format(ISO_FORMAT).to_string())
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
