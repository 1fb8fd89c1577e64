//! Configuration type definitions

use crate::faces::WatchFaceId;
use crate::format::ClockType;
use crate::trigger::{RefreshTrigger, DEFAULT_PERIOD_MS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Refresh cycle configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RefreshConfig {
    /// Period between face refreshes (ms)
    pub period_ms: u32,
}

impl RefreshConfig {
    /// Build the trigger a face refreshes on
    pub const fn trigger(&self) -> RefreshTrigger {
        RefreshTrigger::new(self.period_ms)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_PERIOD_MS,
        }
    }
}

/// Complete watch configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WatchConfig {
    /// Refresh cycle timing
    pub refresh: RefreshConfig,
    /// Face shown at boot (falls back to the default face if unavailable)
    pub face: WatchFaceId,
    /// Initial clock format
    pub clock_type: ClockType,
}
