//! Time source abstractions

/// Monotonic uptime source
///
/// Counts milliseconds since boot. Never goes backwards, unlike the wall
/// clock which the user can set.
pub trait Monotonic {
    /// Milliseconds elapsed since boot
    fn now_ms(&self) -> u64;
}

impl<M: Monotonic + ?Sized> Monotonic for &M {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
