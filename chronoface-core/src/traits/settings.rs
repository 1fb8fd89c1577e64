//! Settings source trait

use crate::format::ClockType;

/// Externally owned user settings
///
/// A settings screen may change these between two refreshes; faces simply
/// read the current value every time they format.
pub trait ClockSettings {
    /// 12-hour or 24-hour display
    fn clock_type(&self) -> ClockType;
}

/// A fixed clock type is a valid (if immutable) settings source
impl ClockSettings for ClockType {
    fn clock_type(&self) -> ClockType {
        *self
    }
}

impl<S: ClockSettings + ?Sized> ClockSettings for &S {
    fn clock_type(&self) -> ClockType {
        (**self).clock_type()
    }
}
