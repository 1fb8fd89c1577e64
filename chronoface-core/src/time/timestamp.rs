//! Timestamp type and coarsening
//!
//! Coarsening truncates a timestamp to a coarser resolution. Two timestamps
//! with equal coarsened values are indistinguishable to anything that only
//! displays that resolution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seconds in one minute
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Seconds in one day
pub const SECONDS_PER_DAY: u64 = 24 * 60 * SECONDS_PER_MINUTE;

/// Seconds since 1970-01-01 00:00:00 UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// The epoch itself
    pub const EPOCH: Self = Self(0);

    /// Create from seconds since the epoch
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Seconds since the epoch
    pub const fn as_secs(self) -> u64 {
        self.0
    }

    /// Truncate to the start of the minute
    pub const fn floor_minutes(self) -> Self {
        Self(self.0 - self.0 % SECONDS_PER_MINUTE)
    }

    /// Truncate to the start of the day
    pub const fn floor_days(self) -> Self {
        Self(self.0 - self.0 % SECONDS_PER_DAY)
    }

    /// Whole days since the epoch
    pub const fn days(self) -> u64 {
        self.0 / SECONDS_PER_DAY
    }

    /// Add seconds, saturating at the end of the range
    pub const fn saturating_add_secs(self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}
