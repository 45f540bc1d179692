//! lifespan.rs
//!
//! Birth and death dates for a given average lifetime.
//!
//! The death date is the birthday moved `years_to_life` calendar years, not a
//! fixed count of 365-day blocks. Chrono's month arithmetic already clamps to
//! the last day of the target month, which is exactly what a Feb 29 birthday
//! needs when the target year is not a leap year:
//!
//!   2000-02-29 + 1 year  -> 2001-02-28
//!   2000-02-29 + 4 years -> 2004-02-29

use chrono::{DateTime, Months, NaiveDate, NaiveTime, Utc};

use crate::date::default_birthday;
use crate::error::LifespanError;

/// Lifetime used when none is given or the given one is rejected.
pub const DEFAULT_YEARS_TO_LIFE: i32 = 125;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifespan {
    pub years_to_life: i32,
    pub birth_date: NaiveDate,
    pub death_date: NaiveDate,
}

impl Lifespan {
    /// Zero and negative lifetimes are allowed; they put the death date on or
    /// before the birth date.
    pub fn compute(birth_date: NaiveDate, years_to_life: i32) -> Result<Self, LifespanError> {
        let death_date = add_years(birth_date, years_to_life).ok_or(LifespanError::OutOfRange {
            birth: birth_date,
            years: years_to_life,
        })?;

        Ok(Self {
            years_to_life,
            birth_date,
            death_date,
        })
    }

    /// Midnight UTC on the birth date.
    pub fn birth_point(&self) -> DateTime<Utc> {
        midnight(self.birth_date)
    }

    /// Midnight UTC on the death date.
    pub fn death_point(&self) -> DateTime<Utc> {
        midnight(self.death_date)
    }
}

impl Default for Lifespan {
    /// 125 years from 1978-10-09.
    fn default() -> Self {
        let birth_date = default_birthday();
        Self {
            years_to_life: DEFAULT_YEARS_TO_LIFE,
            birth_date,
            death_date: add_years(birth_date, DEFAULT_YEARS_TO_LIFE).unwrap_or(birth_date),
        }
    }
}

fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let months = Months::new(years.unsigned_abs().checked_mul(12)?);
    if years >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
