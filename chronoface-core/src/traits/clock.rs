//! Wall-clock source trait

use crate::time::{DateTime, Timestamp};

/// Authoritative wall-clock time
///
/// Read-only from the faces' point of view; whoever owns the clock may set
/// or advance it at any time. Reads are treated as infallible.
pub trait Clock {
    /// Current wall-clock time
    fn timestamp(&self) -> Timestamp;

    /// Current time broken down into calendar fields
    ///
    /// Derived from a single `timestamp()` read, so the fields always agree
    /// with each other.
    fn date_time(&self) -> DateTime {
        DateTime::from_timestamp(self.timestamp())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn timestamp(&self) -> Timestamp {
        (**self).timestamp()
    }
}
