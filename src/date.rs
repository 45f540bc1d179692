//! date.rs
//!
//! Parsing of `YYYY-MM-DD` birthdays into chrono calendar dates.
//!
//! Shape is checked by hand (signed year, two literal `-` separators, digit
//! fields); calendar validity is left to `NaiveDate::from_ymd_opt`, which
//! already knows month lengths and Gregorian leap years.

use std::ops::RangeInclusive;

use chrono::NaiveDate;

use crate::error::DateParseError;

/// Accepted birthday years. Keeps any birthday plus a sane lifetime well
/// inside chrono's representable range.
pub const YEAR_RANGE: RangeInclusive<i32> = -32767..=32767;

/// Birthday used when none is given or the given one is rejected.
pub const DEFAULT_BIRTHDAY: (i32, u32, u32) = (1978, 10, 9);

/// Returns [`DEFAULT_BIRTHDAY`] as a date.
pub fn default_birthday() -> NaiveDate {
    let (y, m, d) = DEFAULT_BIRTHDAY;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Parse `text` as `YYYY-MM-DD`.
///
/// Field widths are not fixed (`2000-1-1` is accepted) and the year may carry
/// a sign. Anything else around the three fields is rejected.
pub fn parse_birthday(text: &str) -> Result<NaiveDate, DateParseError> {
    let malformed = || DateParseError::Malformed(text.to_string());
    let trimmed = text.trim();

    // A leading sign belongs to the year, not to the first separator.
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1i64, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let mut fields = rest.split('-');
    let (Some(y), Some(m), Some(d), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed());
    };

    let year = digits(y).ok_or_else(malformed)?;
    let month = digits(m).ok_or_else(malformed)?;
    let day = digits(d).ok_or_else(malformed)?;

    let year = i32::try_from(sign * year).map_err(|_| malformed())?;
    let month = u32::try_from(month).map_err(|_| malformed())?;
    let day = u32::try_from(day).map_err(|_| malformed())?;

    if !YEAR_RANGE.contains(&year) {
        return Err(DateParseError::YearOutOfRange(year));
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(DateParseError::InvalidDate { year, month, day })
}

/// Non-empty run of ASCII digits as a number.
fn digits(field: &str) -> Option<i64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
