//! report.rs
//!
//! The text shown on every refresh: current time, birth/death dates and the
//! span between now and the death date in nine units.
//!
//! Each unit is the *whole* span divided by that unit's average length, not
//! the remainder left after the larger units (so one mean year is also
//! ~12 months, ~365.2425 days, ...).

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

use crate::lifespan::Lifespan;
use crate::zone::HostZone;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Width of the right-aligned magnitude column.
const VALUE_WIDTH: usize = 48;
/// Width of the right-aligned unit name column.
const UNIT_WIDTH: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl Unit {
    /// Display order, largest first.
    pub const ALL: [Unit; 9] = [
        Unit::Years,
        Unit::Months,
        Unit::Days,
        Unit::Hours,
        Unit::Minutes,
        Unit::Seconds,
        Unit::Milliseconds,
        Unit::Microseconds,
        Unit::Nanoseconds,
    ];

    /// Average length of one unit.
    pub const fn nanos(self) -> i128 {
        match self {
            // mean Gregorian year, 365.2425 days
            Unit::Years => 31_556_952 * NANOS_PER_SECOND,
            // a twelfth of that
            Unit::Months => 2_629_746 * NANOS_PER_SECOND,
            Unit::Days => 86_400 * NANOS_PER_SECOND,
            Unit::Hours => 3_600 * NANOS_PER_SECOND,
            Unit::Minutes => 60 * NANOS_PER_SECOND,
            Unit::Seconds => NANOS_PER_SECOND,
            Unit::Milliseconds => 1_000_000,
            Unit::Microseconds => 1_000,
            Unit::Nanoseconds => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Unit::Years => "years",
            Unit::Months => "months",
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
            Unit::Milliseconds => "milliseconds",
            Unit::Microseconds => "microseconds",
            Unit::Nanoseconds => "nanoseconds",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Death date still ahead.
    Alive,
    /// Death date reached or passed.
    Dead,
}

impl Status {
    /// Alive only while at least one whole second is left, so a span of
    /// exactly zero counts as dead.
    pub fn of(delta: TimeDelta) -> Self {
        if delta.num_seconds() > 0 {
            Status::Alive
        } else {
            Status::Dead
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Status::Alive => "You are alive! Time to life left:",
            Status::Dead => "You are dead! Time since death:",
        }
    }
}

/// One signed span shown as nine non-negative magnitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationBreakdown {
    pub status: Status,
    /// Indexed like [`Unit::ALL`].
    pub magnitudes: [f64; 9],
}

impl DurationBreakdown {
    /// Breakdown of `death - now`.
    pub fn between(now: DateTime<Utc>, death: DateTime<Utc>) -> Self {
        Self::of(death.signed_duration_since(now))
    }

    pub fn of(delta: TimeDelta) -> Self {
        // i128 so spans over ~292 years do not overflow
        let nanos = (i128::from(delta.num_seconds()) * NANOS_PER_SECOND
            + i128::from(delta.subsec_nanos()))
        .unsigned_abs() as f64;

        Self {
            status: Status::of(delta),
            magnitudes: Unit::ALL.map(|unit| nanos / unit.nanos() as f64),
        }
    }

    pub fn get(&self, unit: Unit) -> f64 {
        self.magnitudes[unit as usize]
    }
}

impl fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in Unit::ALL {
            writeln!(
                f,
                "{value:>VALUE_WIDTH$.6}{name:>UNIT_WIDTH$}",
                value = self.get(unit),
                name = unit.name()
            )?;
        }
        Ok(())
    }
}

/// A full frame for one instant.
pub struct Report<'a> {
    pub lifespan: &'a Lifespan,
    pub now: DateTime<Utc>,
    pub zone: HostZone,
}

impl Report<'_> {
    pub fn breakdown(&self) -> DurationBreakdown {
        DurationBreakdown::between(self.now, self.lifespan.death_point())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = self.lifespan;
        let breakdown = self.breakdown();

        writeln!(f, " System time: {}", self.now.format("%A %F %T%.9f %Z"))?;
        writeln!(
            f,
            "  Local time: {}",
            self.zone.localize(self.now).format("%A %F %T%.9f %Z")
        )?;

        writeln!(f)?;
        writeln!(f, " Average lifetime (as of 2025): {} years", span.years_to_life)?;
        write_date_line(f, "Your Birthday", span.birth_date, span.birth_point(), self.zone)?;
        write_date_line(f, "Your Deathday", span.death_date, span.death_point(), self.zone)?;

        writeln!(f)?;
        writeln!(f, " {}", breakdown.status.headline())?;
        writeln!(f)?;
        write!(f, "{breakdown}")
    }
}

/// Weekday of the calendar date itself, timestamp in the host zone.
fn write_date_line(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    date: chrono::NaiveDate,
    point: DateTime<Utc>,
    zone: HostZone,
) -> fmt::Result {
    let weekday = date.format("%A").to_string();
    writeln!(
        f,
        "{label:>22}: {weekday:>8} {}",
        zone.localize(point).format("%F %T %Z")
    )
}
