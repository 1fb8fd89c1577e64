//! Refresh cycle change detection
//!
//! Each tick the clock is coarsened to a minute sample. Only a new minute
//! sample leads to a day sample, and the day sample is derived from the
//! minute sample rather than read from the clock again. Faces redraw the
//! time labels on a [`Update::time`] and the date label on
//! [`Update::date_changed`].

use crate::change::ChangeTracked;
use crate::time::{DateTime, Timestamp};

/// What changed on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Update {
    /// Calendar fields of the new minute sample
    pub time: DateTime,
    /// The day sample changed along with the minute
    pub date_changed: bool,
}

/// Minute and day samples of the wall clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshCycle {
    time: ChangeTracked<Timestamp>,
    date: ChangeTracked<Timestamp>,
}

impl Default for RefreshCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshCycle {
    /// Create a cycle whose first sample always reports a full change
    pub const fn new() -> Self {
        Self {
            time: ChangeTracked::new(Timestamp::EPOCH),
            date: ChangeTracked::new(Timestamp::EPOCH),
        }
    }

    /// Feed the current clock reading
    ///
    /// Returns `None` when the minute did not change since the last sample.
    pub fn sample(&mut self, now: Timestamp) -> Option<Update> {
        self.time.set(now.floor_minutes());
        if !self.time.take_changed() {
            return None;
        }

        let minute = *self.time.get();
        self.date.set(minute.floor_days());

        Some(Update {
            time: DateTime::from_timestamp(minute),
            date_changed: self.date.take_changed(),
        })
    }

    /// Current minute sample
    pub fn time_sample(&self) -> Timestamp {
        *self.time.get()
    }

    /// Current day sample
    pub fn date_sample(&self) -> Timestamp {
        *self.date.get()
    }

    /// Make the next sample report a full change
    pub fn invalidate(&mut self) {
        self.time.mark_changed();
        self.date.mark_changed();
    }
}
