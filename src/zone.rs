//! zone.rs
//!
//! Host time zone lookup and display of instants in that zone.
//!
//! chrono's `Local` only knows the numeric offset, so wherever the host zone
//! has an IANA name we resolve it through chrono-tz to get abbreviations
//! like `CEST`. The lookup is repeated by the caller on every refresh so a
//! zone change on the host shows up on the next frame.
//!
//! chrono-tz only carries explicit transitions up to a fixed year. Past that,
//! the zone's current rules are applied by looking the instant up in an
//! earlier year with the same calendar (same weekday on Jan 1, same leap
//! status), so "last Sunday of October" style rules land on the same day.

use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::{Tz, TzOffset};

/// Last year chrono-tz has transitions for in every zone.
const LAST_TABLE_YEAR: i32 = 2037;

/// Years searched for a calendar twin. 28 consecutive years without a
/// century in between contain every Jan-1-weekday/leap combination.
const TWIN_YEARS: RangeInclusive<i32> = 2010..=LAST_TABLE_YEAR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostZone {
    /// IANA zone known to chrono-tz.
    Named(Tz),
    /// Whatever the platform reports through `Local`; shown as an offset.
    System,
}

impl HostZone {
    /// Resolve the zone the host is configured with right now.
    ///
    /// A `TZ` naming an IANA zone wins, as it does for the platform's own
    /// `localtime`. Otherwise the OS setting is used.
    pub fn detect() -> Self {
        match std::env::var("TZ") {
            Ok(tz) if !tz.is_empty() => Self::from_name(&tz).unwrap_or(Self::System),
            _ => iana_time_zone::get_timezone()
                .ok()
                .and_then(|name| Self::from_name(&name))
                .unwrap_or(Self::System),
        }
    }

    /// `name` may carry the POSIX `:` prefix (`:Europe/Berlin`).
    pub fn from_name(name: &str) -> Option<Self> {
        name.trim_start_matches(':').parse::<Tz>().ok().map(Self::Named)
    }

    pub fn localize(self, instant: DateTime<Utc>) -> LocalizedTimePoint {
        LocalizedTimePoint {
            instant,
            zone: self,
        }
    }
}

/// An instant paired with the zone it should be shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedTimePoint {
    pub instant: DateTime<Utc>,
    pub zone: HostZone,
}

impl LocalizedTimePoint {
    /// Format with chrono `strftime` specifiers; `%Z` becomes the zone
    /// abbreviation for named zones and the offset otherwise.
    pub fn format(&self, fmt: &str) -> String {
        match self.zone {
            HostZone::Named(tz) => {
                let utc = self.instant.naive_utc();
                DateTime::<Tz>::from_naive_utc_and_offset(utc, offset_at(tz, utc))
                    .format(fmt)
                    .to_string()
            }
            HostZone::System => self.instant.with_timezone(&Local).format(fmt).to_string(),
        }
    }
}

fn offset_at(tz: Tz, utc: NaiveDateTime) -> TzOffset {
    if utc.year() > LAST_TABLE_YEAR {
        if let Some(twin) = calendar_twin(utc.year()).and_then(|year| utc.with_year(year)) {
            return tz.offset_from_utc_datetime(&twin);
        }
    }
    tz.offset_from_utc_datetime(&utc)
}

/// A year in [`TWIN_YEARS`] laid out exactly like `year`.
fn calendar_twin(year: i32) -> Option<i32> {
    let shape = |y: i32| {
        let jan1 = NaiveDate::from_ymd_opt(y, 1, 1)?;
        Some((jan1.weekday(), NaiveDate::from_ymd_opt(y, 2, 29).is_some()))
    };
    let wanted = shape(year)?;
    TWIN_YEARS.rev().find(|&y| shape(y) == Some(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_iana_names() {
        assert_eq!(
            HostZone::from_name("Europe/Berlin"),
            Some(HostZone::Named(chrono_tz::Europe::Berlin))
        );
        assert_eq!(
            HostZone::from_name(":UTC"),
            Some(HostZone::Named(chrono_tz::UTC))
        );
        assert_eq!(HostZone::from_name("Not/AZone"), None);
    }

    #[test]
    fn named_zones_show_abbreviations() {
        let zone = HostZone::Named(chrono_tz::Europe::Berlin);

        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(
            zone.localize(winter).format("%F %T %Z"),
            "2024-01-15 13:00:00 CET"
        );

        let summer = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
        assert_eq!(
            zone.localize(summer).format("%F %T %Z"),
            "2024-07-15 14:00:00 CEST"
        );
    }

    #[test]
    fn current_rules_apply_past_the_transition_table() {
        let berlin = HostZone::Named(chrono_tz::Europe::Berlin);

        let deathday = Utc.with_ymd_and_hms(2103, 10, 9, 0, 0, 0).unwrap();
        assert_eq!(
            berlin.localize(deathday).format("%A %F %T %Z"),
            "Tuesday 2103-10-09 02:00:00 CEST"
        );

        let winter = Utc.with_ymd_and_hms(2103, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(
            berlin.localize(winter).format("%F %T %Z"),
            "2103-01-15 01:00:00 CET"
        );

        let new_york = HostZone::Named(chrono_tz::America::New_York);
        let summer = Utc.with_ymd_and_hms(2150, 7, 4, 12, 0, 0).unwrap();
        assert_eq!(
            new_york.localize(summer).format("%F %T %Z"),
            "2150-07-04 08:00:00 EDT"
        );
    }

    #[test]
    fn calendar_twins_share_weekdays_and_leap_days() {
        for year in [2038, 2100, 2103, 2400, 10_000] {
            let twin = calendar_twin(year).unwrap();
            assert!(TWIN_YEARS.contains(&twin));
            let jan1 = |y| NaiveDate::from_ymd_opt(y, 1, 1).unwrap().weekday();
            assert_eq!(jan1(twin), jan1(year), "{year}");
            assert_eq!(
                NaiveDate::from_ymd_opt(twin, 2, 29).is_some(),
                NaiveDate::from_ymd_opt(year, 2, 29).is_some(),
                "{year}"
            );
        }
    }

    #[test]
    fn localizing_can_change_the_calendar_day() {
        let zone = HostZone::Named(chrono_tz::America::New_York);
        let midnight = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            zone.localize(midnight).format("%A %F %T %Z"),
            "Friday 1999-12-31 19:00:00 EST"
        );
    }
}
