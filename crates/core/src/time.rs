//! Show start times.
//!
//! Start times are stored as text in a single canonical format,
//! `%Y-%m-%d %H:%M:%S`. Writes are validated against it, so every stored
//! value parses back; a value that does not is reported as
//! [`BookingError::Parse`] instead of being skipped.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

/// Canonical storage format for `shows.start_time`.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const MEDIUM_DISPLAY_FORMAT: &str = "%a %m, %d, %Y %-I:%M%p";
const FULL_DISPLAY_FORMAT: &str = "%A %B, %-d, %Y at %-I:%M%p";

/// Parses `value` with an explicit chrono format string.
pub fn parse_with_format(value: &str, format: &str) -> BookingResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, format).map_err(|e| {
        BookingError::Parse(format!(
            "start time {:?} does not match format {:?}: {}",
            value, format, e
        ))
    })
}

/// Parses a stored start time in the canonical format.
pub fn parse_start_time(value: &str) -> BookingResult<NaiveDateTime> {
    parse_with_format(value, START_TIME_FORMAT)
}

/// Renders an instant in the canonical storage format.
pub fn format_start_time(value: NaiveDateTime) -> String {
    value.format(START_TIME_FORMAT).to_string()
}

/// The reference instant used to split past and upcoming shows.
///
/// Stored times carry no offset and are interpreted as local wall-clock time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    #[default]
    Medium,
    Full,
}

/// Formats a stored start time for display, e.g. `Tue 05, 21, 2019 9:30PM`
/// (medium) or `Tuesday May, 21, 2019 at 9:30PM` (full).
pub fn display_start_time(value: &str, style: DisplayStyle) -> BookingResult<String> {
    let parsed = parse_start_time(value)?;
    let format = match style {
        DisplayStyle::Medium => MEDIUM_DISPLAY_FORMAT,
        DisplayStyle::Full => FULL_DISPLAY_FORMAT,
    };
    Ok(parsed.format(format).to_string())
}
