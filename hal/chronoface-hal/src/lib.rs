//! Chronoface Hardware Abstraction Layer
//!
//! This crate defines the traits the watch face core reads its outside world
//! through. Boards and host test doubles implement them; the core never
//! touches a filesystem or a timer peripheral directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Firmware (chronoface-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  chronoface-core (faces, refresh cycle) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  chronoface-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  chronoface-  │       │ board-specific│
//! │    drivers    │       │    storage    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`assets::AssetStore`] - Read-only asset storage (fonts, images)
//! - [`time::Monotonic`] - Uptime source

#![no_std]
#![deny(unsafe_code)]

pub mod assets;
pub mod time;

// Re-export key traits at crate root for convenience
pub use assets::{AssetError, AssetStore};
pub use time::Monotonic;
