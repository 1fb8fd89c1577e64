//! Wall-clock time
//!
//! Timestamps and their coarsened samples, plus the calendar breakdown the
//! faces format from.

pub mod datetime;
pub mod timestamp;

pub use datetime::{DateTime, Weekday};
pub use timestamp::{Timestamp, SECONDS_PER_DAY, SECONDS_PER_MINUTE};
