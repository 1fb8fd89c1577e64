//! Board-agnostic core logic for Chronoface watch faces
//!
//! This crate contains all watch face logic that does not depend on
//! specific hardware implementations:
//!
//! - Change tracking for coarsened samples and the refresh cycle
//! - Wall-clock time coarsening and calendar conversion
//! - Hour/minute/date formatting
//! - Collaborator traits (clock, settings, widget toolkit)
//! - Asset availability probing
//! - Watch faces, the face registry and the display surface
//! - Configuration type definitions

// no_std on target; tests need std for the harness and proptest
#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod assets;
pub mod change;
pub mod config;
pub mod faces;
pub mod format;
pub mod refresh;
pub mod surface;
pub mod time;
pub mod traits;
pub mod trigger;

pub use change::ChangeTracked;
pub use faces::{ActiveFace, FaceContext, WatchFace, WatchFaceId};
pub use format::ClockType;
pub use refresh::RefreshCycle;
pub use surface::Surface;
pub use time::{DateTime, Timestamp, Weekday};
pub use trigger::RefreshTrigger;

#[cfg(test)]
pub(crate) mod testing;
