//! Collaborator implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in chronoface-hal and chronoface-core:
//!
//! - In-memory asset store (flash-resident asset table)
//! - Software RTC on top of a monotonic uptime source
//! - Shared clock format settings

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod assets;
pub mod clock;
pub mod settings;

pub use assets::MemoryAssetStore;
pub use clock::SoftRtc;
pub use settings::SharedSettings;
