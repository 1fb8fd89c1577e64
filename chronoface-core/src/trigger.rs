//! Periodic refresh trigger
//!
//! Each face owns one trigger. The surface polls it with the current uptime
//! and refreshes the face when it fires. A late poll fires once and the next
//! deadline is counted from that poll, so missed periods never pile up.

/// Default refresh period in milliseconds
pub const DEFAULT_PERIOD_MS: u32 = 20;

/// Recurring refresh trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshTrigger {
    period_ms: u32,
    /// Next deadline; `None` until the first poll arms the trigger
    next_due_ms: Option<u64>,
    cancelled: bool,
}

impl RefreshTrigger {
    /// Create a trigger firing every `period_ms` (at least 1 ms)
    pub const fn new(period_ms: u32) -> Self {
        Self {
            period_ms: if period_ms == 0 { 1 } else { period_ms },
            next_due_ms: None,
            cancelled: false,
        }
    }

    /// Refresh period in milliseconds
    pub const fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Check whether the trigger fires at `now_ms`
    ///
    /// The first poll only arms the trigger. A cancelled trigger never fires.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if self.cancelled {
            return false;
        }

        match self.next_due_ms {
            Some(due) if now_ms < due => false,
            Some(_) => {
                self.next_due_ms = Some(now_ms.saturating_add(self.period_ms as u64));
                true
            }
            None => {
                self.next_due_ms = Some(now_ms.saturating_add(self.period_ms as u64));
                false
            }
        }
    }

    /// Stop the trigger for good
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.next_due_ms = None;
    }

    /// Check if the trigger has been cancelled
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl Default for RefreshTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_poll_arms() {
        let mut trigger = RefreshTrigger::new(20);
        assert!(!trigger.poll(1_000));
        assert!(!trigger.poll(1_019));
        assert!(trigger.poll(1_020));
    }

    #[test]
    fn test_fires_every_period() {
        let mut trigger = RefreshTrigger::new(20);
        trigger.poll(0);
        let fired = (1..=100).filter(|ms| trigger.poll(*ms)).count();
        assert_eq!(fired, 5);
    }

    #[test]
    fn test_late_poll_fires_once() {
        let mut trigger = RefreshTrigger::new(20);
        trigger.poll(0);
        // Ten periods late: one refresh, no backlog
        assert!(trigger.poll(200));
        assert!(!trigger.poll(201));
        assert!(!trigger.poll(219));
        assert!(trigger.poll(220));
    }

    #[test]
    fn test_cancelled_never_fires() {
        let mut trigger = RefreshTrigger::new(20);
        trigger.poll(0);
        trigger.cancel();
        assert!(trigger.is_cancelled());
        assert!(!trigger.poll(20));
        assert!(!trigger.poll(10_000));
    }

    #[test]
    fn test_zero_period_clamped() {
        let trigger = RefreshTrigger::new(0);
        assert_eq!(trigger.period_ms(), 1);
    }

    #[test]
    fn test_deadline_saturates_near_end_of_uptime() {
        let mut trigger = RefreshTrigger::new(20);
        assert!(!trigger.poll(u64::MAX - 5));
        assert!(!trigger.poll(u64::MAX - 1));
        assert!(trigger.poll(u64::MAX));
    }
}
