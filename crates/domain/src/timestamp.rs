// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timestamp formatting shared by every persisted entity.
//!
//! All stored instants use one fixed-width UTC layout,
//! `YYYY-MM-DDTHH:MM:SS.mmmZ`, so that comparing the stored strings
//! lexically gives the same answer as comparing the instants.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

use crate::error::DomainError;

/// Formats an instant in the canonical stored layout.
#[must_use]
pub fn format_timestamp(moment: OffsetDateTime) -> String {
    let utc: OffsetDateTime = moment.to_offset(UtcOffset::UTC);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        utc.year(),
        u8::from(utc.month()),
        utc.day(),
        utc.hour(),
        utc.minute(),
        utc.second(),
        utc.millisecond()
    )
}

/// Returns the current instant in the canonical stored layout.
#[must_use]
pub fn now_timestamp() -> String {
    format_timestamp(OffsetDateTime::now_utc())
}

/// Formats an instant with separators removed, e.g. `20260118T101010123Z`.
///
/// Used to prefix stored file names.
#[must_use]
pub fn compact_timestamp(moment: OffsetDateTime) -> String {
    format_timestamp(moment)
        .chars()
        .filter(|c| !matches!(c, '-' | ':' | '.'))
        .collect()
}

/// Parses an RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
///
/// Bare dates are interpreted as midnight UTC.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the value matches neither form.
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, DomainError> {
    if let Ok(moment) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(moment);
    }

    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map(|date| date.midnight().assume_utc())
        .map_err(|e| DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        })
}

/// Parses a timestamp and re-renders it in the canonical stored layout.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the value cannot be parsed.
pub fn normalize_timestamp(value: &str) -> Result<String, DomainError> {
    parse_timestamp(value).map(format_timestamp)
}
