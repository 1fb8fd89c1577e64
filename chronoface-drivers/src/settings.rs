//! Shared user settings
//!
//! Written by the button task, read by the face on every refresh.

use chronoface_core::traits::ClockSettings;
use chronoface_core::ClockType;
use portable_atomic::{AtomicU8, Ordering};

const H12: u8 = 0;
const H24: u8 = 1;

const fn encode(clock_type: ClockType) -> u8 {
    match clock_type {
        ClockType::H12 => H12,
        ClockType::H24 => H24,
    }
}

const fn decode(raw: u8) -> ClockType {
    match raw {
        H12 => ClockType::H12,
        _ => ClockType::H24,
    }
}

/// Clock format setting readable from any task
pub struct SharedSettings {
    clock_type: AtomicU8,
}

impl SharedSettings {
    pub const fn new(clock_type: ClockType) -> Self {
        Self {
            clock_type: AtomicU8::new(encode(clock_type)),
        }
    }

    pub fn set_clock_type(&self, clock_type: ClockType) {
        self.clock_type.store(encode(clock_type), Ordering::Relaxed);
    }

    /// Switch between 12h and 24h, returning the new value
    pub fn toggle(&self) -> ClockType {
        let previous = self.clock_type.fetch_xor(1, Ordering::Relaxed);
        decode(previous).toggled()
    }
}

impl Default for SharedSettings {
    fn default() -> Self {
        Self::new(ClockType::default())
    }
}

impl ClockSettings for SharedSettings {
    fn clock_type(&self) -> ClockType {
        decode(self.clock_type.load(Ordering::Relaxed))
    }
}
