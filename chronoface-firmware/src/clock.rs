//! Uptime source and boot time
//!
//! The board has no battery-backed RTC, so the wall clock starts at a
//! fixed timestamp and is advanced from the embassy time driver.

use chronoface_core::Timestamp;
use chronoface_hal::Monotonic;
use embassy_time::Instant;

/// Wall clock at boot: 2024-01-01 00:00:00 UTC
pub const BOOT_TIMESTAMP: Timestamp = Timestamp::from_secs(1_704_067_200);

/// Milliseconds since boot from the embassy time driver
pub struct EmbassyUptime;

impl Monotonic for EmbassyUptime {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
