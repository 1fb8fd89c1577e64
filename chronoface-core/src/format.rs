//! Display text formatting
//!
//! Pure functions from sample fields to label text. Every output fits a
//! small fixed buffer, so no allocation is involved.

use core::fmt::Write;

use heapless::String;

use crate::time::DateTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capacity of a two-digit field buffer
pub const FIELD_LEN: usize = 2;

/// Capacity of a date text buffer ("MON 01")
pub const DATE_LEN: usize = 6;

/// Capacity of a time text buffer ("12:05")
pub const TIME_LEN: usize = 5;

/// Clock format setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockType {
    /// 12-hour clock
    H12,
    /// 24-hour clock
    #[default]
    H24,
}

impl ClockType {
    /// Configuration name ("12h" / "24h")
    pub const fn name(self) -> &'static str {
        match self {
            ClockType::H12 => "12h",
            ClockType::H24 => "24h",
        }
    }

    /// Parse a configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "12h" => Some(ClockType::H12),
            "24h" => Some(ClockType::H24),
            _ => None,
        }
    }

    /// The other format
    pub const fn toggled(self) -> Self {
        match self {
            ClockType::H12 => ClockType::H24,
            ClockType::H24 => ClockType::H12,
        }
    }
}

/// Hour value shown for a raw 0-23 hour
///
/// In 12-hour mode midnight shows as 12 and afternoon hours drop by 12.
/// Noon stays 12.
pub const fn display_hour(raw: u8, clock_type: ClockType) -> u8 {
    match clock_type {
        ClockType::H24 => raw,
        ClockType::H12 => match raw {
            0 => 12,
            13..=23 => raw - 12,
            _ => raw,
        },
    }
}

/// Zero-padded two-digit hour
pub fn format_hour(raw: u8, clock_type: ClockType) -> String<FIELD_LEN> {
    two_digits(display_hour(raw, clock_type))
}

/// Zero-padded two-digit minute
pub fn format_minute(minute: u8) -> String<FIELD_LEN> {
    two_digits(minute)
}

/// "HH:MM" with the hour formatted per the clock type
pub fn format_time(dt: &DateTime, clock_type: ClockType) -> String<TIME_LEN> {
    let mut s = String::new();
    let _ = write!(
        s,
        "{:02}:{:02}",
        display_hour(dt.hour, clock_type) % 100,
        dt.minute % 100
    );
    s
}

/// Short weekday name, a space and a zero-padded day of month ("MON 01")
pub fn format_date(dt: &DateTime) -> String<DATE_LEN> {
    let mut s = String::new();
    let _ = write!(s, "{} {:02}", dt.weekday.short_name(), dt.day % 100);
    s
}

fn two_digits(value: u8) -> String<FIELD_LEN> {
    let mut s = String::new();
    // Fits FIELD_LEN only for values below 100
    let _ = write!(s, "{:02}", value % 100);
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hour_formatting_table() {
        assert_eq!(format_hour(0, ClockType::H12).as_str(), "12");
        assert_eq!(format_hour(13, ClockType::H12).as_str(), "01");
        assert_eq!(format_hour(13, ClockType::H24).as_str(), "13");
        assert_eq!(format_hour(0, ClockType::H24).as_str(), "00");
        assert_eq!(format_hour(12, ClockType::H12).as_str(), "12");
        assert_eq!(format_hour(23, ClockType::H12).as_str(), "11");
        assert_eq!(format_hour(9, ClockType::H12).as_str(), "09");
    }

    #[test]
    fn test_minute_formatting() {
        assert_eq!(format_minute(0).as_str(), "00");
        assert_eq!(format_minute(5).as_str(), "05");
        assert_eq!(format_minute(59).as_str(), "59");
    }

    #[test]
    fn test_date_formatting() {
        let dt = DateTime::new(2024, 1, 1, 0, 5, 0).unwrap();
        assert_eq!(format_date(&dt).as_str(), "MON 01");

        let dt = DateTime::new(2024, 1, 31, 0, 5, 0).unwrap();
        assert_eq!(format_date(&dt).as_str(), "WED 31");
    }

    #[test]
    fn test_time_formatting() {
        let dt = DateTime::new(2024, 1, 1, 0, 5, 0).unwrap();
        assert_eq!(format_time(&dt, ClockType::H12).as_str(), "12:05");
        assert_eq!(format_time(&dt, ClockType::H24).as_str(), "00:05");
    }

    #[test]
    fn test_clock_type_names() {
        assert_eq!(ClockType::from_name("12h"), Some(ClockType::H12));
        assert_eq!(ClockType::from_name("24h"), Some(ClockType::H24));
        assert_eq!(ClockType::from_name("am/pm"), None);
        assert_eq!(ClockType::H12.toggled(), ClockType::H24);
        assert_eq!(ClockType::H24.name(), "24h");
    }

    proptest! {
        #[test]
        fn prop_24h_is_identity(raw in 0u8..24) {
            prop_assert_eq!(display_hour(raw, ClockType::H24), raw);
        }

        #[test]
        fn prop_12h_stays_in_1_to_12(raw in 0u8..24) {
            let h = display_hour(raw, ClockType::H12);
            prop_assert!((1..=12).contains(&h));
            prop_assert_eq!(h % 12, raw % 12);
        }

        #[test]
        fn prop_hour_text_is_two_digits(raw in 0u8..24, h12 in any::<bool>()) {
            let clock_type = if h12 { ClockType::H12 } else { ClockType::H24 };
            let text = format_hour(raw, clock_type);
            prop_assert_eq!(text.len(), 2);
            prop_assert!(text.bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
