//! UTC instant helpers shared by the booking engine and query layer.
//!
//! # Responsibility
//! - Build `DateTime<Utc>` instants from calendar date + wall-clock strings.
//! - Decide interval relationships (range validity, half-open overlap,
//!   same UTC calendar day).
//!
//! # Invariants
//! - Every function is pure; no clocks are read here.
//! - Overlap is half-open: `[s, e)` ranges that touch do not overlap.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Parse failure for date/time input strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeFormatError {
    /// Input did not parse as a `YYYY-MM-DD` calendar date.
    Date(String),
    /// Input did not parse as a `HH:MM` wall-clock time.
    Time(String),
}

impl Display for TimeFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(input) => write!(f, "invalid calendar date `{input}`, expected YYYY-MM-DD"),
            Self::Time(input) => write!(f, "invalid wall-clock time `{input}`, expected HH:MM"),
        }
    }
}

impl Error for TimeFormatError {}

/// Composes a calendar date and a wall-clock time into one UTC instant.
///
/// Rejects strings that are not integer date/time pairs as well as
/// impossible calendar values (`2025-13-40`, `25:61`).
pub fn combine_date_time(date: &str, time: &str) -> Result<DateTime<Utc>, TimeFormatError> {
    let day = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| TimeFormatError::Date(date.to_string()))?;
    let clock = NaiveTime::parse_from_str(time, TIME_FORMAT)
        .map_err(|_| TimeFormatError::Time(time.to_string()))?;
    Ok(NaiveDateTime::new(day, clock).and_utc())
}

/// Returns whether `[start, end)` is a usable booking range.
///
/// Instant validity is carried by the type; only strict ordering is checked.
pub fn is_valid_range(start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    start < end
}

/// Half-open interval overlap test.
///
/// `[a_start, a_end)` and `[b_start, b_end)` overlap iff
/// `a_start < b_end && b_start < a_end`. Ranges that merely touch at a
/// boundary (`a_end == b_start`) do not overlap.
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Returns whether both instants fall on the same UTC calendar day.
pub fn same_calendar_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}
