//! Inter-task communication channels
//!
//! Defines the static signals used for communication between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Switch to the next face in selection order (set by the button task)
pub static NEXT_FACE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
