//! Widget toolkit and display abstraction for Chronoface
//!
//! This crate provides:
//! - `RetainedToolkit`, a fixed-capacity implementation of the core
//!   `Toolkit` trait that keeps a widget table and tracks what changed
//! - Layout resolution for widget placements
//! - `DisplayBackend` trait that dirty widgets are rendered to
//!
//! # Architecture
//!
//! Faces only talk to the `Toolkit` trait. The firmware periodically
//! flushes the toolkit into a `DisplayBackend`, which only sees widgets
//! whose text or position changed since the last flush.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod layout;
pub mod toolkit;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use layout::{Rect, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use toolkit::{FontId, FontMetrics, RetainedToolkit, Widget, WidgetKind};
