//! error.rs
//!
//! Error types for the three places user input can go wrong: the birthday
//! text, the lifespan arithmetic, and the command-line values as a whole.

use chrono::NaiveDate;
use thiserror::Error;

/// Failure to turn `YYYY-MM-DD` text into a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    /// Text does not have the `integer-integer-integer` shape
    #[error("expected YYYY-MM-DD, got {0:?}")]
    Malformed(String),

    /// Year outside what the calendar display supports
    #[error("year {0} is outside -32767..=32767")]
    YearOutOfRange(i32),

    /// Well-formed text naming a day that does not exist (e.g. 2023-02-30)
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Failure of calendar year addition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifespanError {
    #[error("{birth} plus {years} years is outside the supported calendar range")]
    OutOfRange { birth: NaiveDate, years: i32 },
}

/// Recoverable command-line input problems. The `Display` text is the
/// warning shown to the user before the default is substituted.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid value for years_to_life ({input:?}), using default: {default}")]
    InvalidYearsToLife { input: String, default: i32 },

    #[error("Invalid birthday {input:?} ({source}, use YYYY-MM-DD), using default: {default}")]
    InvalidBirthday {
        input: String,
        #[source]
        source: DateParseError,
        default: NaiveDate,
    },
}
