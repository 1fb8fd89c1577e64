//! Software real-time clock
//!
//! Wall-clock time derived from a base timestamp plus the uptime elapsed
//! since it was set. State lives in atomics so the clock can sit in a
//! `static` and be set from one task while faces read it from another.

use chronoface_core::traits::Clock;
use chronoface_core::Timestamp;
use chronoface_hal::Monotonic;
use portable_atomic::{AtomicU64, Ordering};

pub struct SoftRtc<M> {
    monotonic: M,
    /// Wall clock at `base_uptime_ms` (seconds since epoch)
    base_secs: AtomicU64,
    /// Uptime when the clock was last set (ms)
    base_uptime_ms: AtomicU64,
}

impl<M: Monotonic> SoftRtc<M> {
    /// Create a clock reading `start` at uptime zero
    pub const fn new(monotonic: M, start: Timestamp) -> Self {
        Self {
            monotonic,
            base_secs: AtomicU64::new(start.0),
            base_uptime_ms: AtomicU64::new(0),
        }
    }

    /// Set the wall clock to `now`
    ///
    /// Takes effect on the next read; may move the clock backwards.
    pub fn set(&self, now: Timestamp) {
        self.base_uptime_ms
            .store(self.monotonic.now_ms(), Ordering::Relaxed);
        self.base_secs.store(now.0, Ordering::Release);

        #[cfg(feature = "defmt")]
        defmt::info!("clock set to {}", now.0);
    }

    /// Underlying uptime source
    pub fn monotonic(&self) -> &M {
        &self.monotonic
    }
}

impl<M: Monotonic> Clock for SoftRtc<M> {
    fn timestamp(&self) -> Timestamp {
        let base = self.base_secs.load(Ordering::Acquire);
        let since = self.base_uptime_ms.load(Ordering::Relaxed);
        let elapsed_ms = self.monotonic.now_ms().saturating_sub(since);
        Timestamp(base).saturating_add_secs(elapsed_ms / 1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronoface_core::DateTime;
    use std::cell::Cell;

    struct ManualUptime(Cell<u64>);

    impl Monotonic for ManualUptime {
        fn now_ms(&self) -> u64 {
            self.0.get()
        }
    }

    fn start() -> Timestamp {
        DateTime::new(2024, 1, 1, 23, 59, 30).unwrap().to_timestamp()
    }

    #[test]
    fn test_advances_with_uptime() {
        let rtc = SoftRtc::new(ManualUptime(Cell::new(0)), start());
        assert_eq!(rtc.timestamp(), start());

        rtc.monotonic().0.set(999);
        assert_eq!(rtc.timestamp(), start());

        rtc.monotonic().0.set(30_000);
        let now = rtc.date_time();
        assert_eq!((now.day, now.hour, now.minute, now.second), (2, 0, 0, 0));
    }

    #[test]
    fn test_set_rebases() {
        let rtc = SoftRtc::new(ManualUptime(Cell::new(5_000)), Timestamp::EPOCH);
        rtc.set(start());
        assert_eq!(rtc.timestamp(), start());

        rtc.monotonic().0.set(65_000);
        assert_eq!(rtc.timestamp(), start().saturating_add_secs(60));
    }

    #[test]
    fn test_set_backwards() {
        let rtc = SoftRtc::new(ManualUptime(Cell::new(0)), start());
        rtc.monotonic().0.set(120_000);
        rtc.set(Timestamp::from_secs(1_000));
        assert_eq!(rtc.timestamp(), Timestamp(1_000));
    }
}
