//! Calendar breakdown of a timestamp
//!
//! Proleptic Gregorian calendar, UTC, years from 1970 on. The day-count
//! conversions are Howard Hinnant's `days_from_civil`/`civil_from_days`.

use super::timestamp::{Timestamp, SECONDS_PER_DAY};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays, Monday first
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Weekday of a day count since the epoch (1970-01-01 was a Thursday)
    pub const fn from_days_since_epoch(days: u64) -> Self {
        Self::ALL[((days + 3) % 7) as usize]
    }

    /// Three-letter upper-case name, as shown on the watch
    pub const fn short_name(self) -> &'static str {
        match self {
            Weekday::Monday => "MON",
            Weekday::Tuesday => "TUE",
            Weekday::Wednesday => "WED",
            Weekday::Thursday => "THU",
            Weekday::Friday => "FRI",
            Weekday::Saturday => "SAT",
            Weekday::Sunday => "SUN",
        }
    }

    /// The following day
    pub const fn succ(self) -> Self {
        match self {
            Weekday::Monday => Weekday::Tuesday,
            Weekday::Tuesday => Weekday::Wednesday,
            Weekday::Wednesday => Weekday::Thursday,
            Weekday::Thursday => Weekday::Friday,
            Weekday::Friday => Weekday::Saturday,
            Weekday::Saturday => Weekday::Sunday,
            Weekday::Sunday => Weekday::Monday,
        }
    }
}

/// Decomposed wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateTime {
    /// Full year, e.g. 2024
    pub year: u16,
    /// Month (1-12)
    pub month: u8,
    /// Day of month (1-31)
    pub day: u8,
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
    /// Day of the week
    pub weekday: Weekday,
}

impl DateTime {
    /// Build a date-time from its fields
    ///
    /// Returns `None` if any field is out of range or the date is before 1970.
    pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Option<Self> {
        if year < 1970 || !(1..=12).contains(&month) {
            return None;
        }
        if day == 0 || day > days_in_month(year, month) {
            return None;
        }
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }

        let days = days_from_civil(year, month, day);
        Some(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            weekday: Weekday::from_days_since_epoch(days),
        })
    }

    /// Break a timestamp down into calendar fields
    pub fn from_timestamp(ts: Timestamp) -> Self {
        let days = ts.days();
        let secs_of_day = ts.as_secs() % SECONDS_PER_DAY;
        let (year, month, day) = civil_from_days(days);

        Self {
            year,
            month,
            day,
            hour: (secs_of_day / 3600) as u8,
            minute: (secs_of_day / 60 % 60) as u8,
            second: (secs_of_day % 60) as u8,
            weekday: Weekday::from_days_since_epoch(days),
        }
    }

    /// Seconds since the epoch
    pub fn to_timestamp(&self) -> Timestamp {
        let days = days_from_civil(self.year, self.month, self.day);
        Timestamp(
            days * SECONDS_PER_DAY
                + self.hour as u64 * 3600
                + self.minute as u64 * 60
                + self.second as u64,
        )
    }
}

/// Check for a Gregorian leap year
pub const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (1-12)
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days since the epoch for a civil date (year >= 1970)
fn days_from_civil(year: u16, month: u8, day: u8) -> u64 {
    let y = year as i64 - (month <= 2) as i64;
    let m = month as i64;
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    (era * 146_097 + doe - 719_468) as u64
}

/// Civil date for a day count since the epoch
fn civil_from_days(days: u64) -> (u16, u8, u8) {
    let z = days as i64 + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + (month <= 2) as i64;
    (year as u16, month as u8, day as u8)
}
