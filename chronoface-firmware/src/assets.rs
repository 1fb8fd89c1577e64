//! Bundled asset table
//!
//! Assets flashed alongside the firmware image. Removing a path here makes
//! the faces that need it unavailable; the registry then falls back to the
//! digital face.

use chronoface_core::faces::neon;
use chronoface_drivers::MemoryAssetStore;

/// Asset store capacity
pub const MAX_ASSETS: usize = 8;

pub type WatchAssets = MemoryAssetStore<MAX_ASSETS>;

/// Paths present in flash
pub const BUNDLED: [&str; 3] = [
    neon::FONT_LARGE.path,
    neon::FONT_SMALL.path,
    neon::SUN_IMAGE.path,
];

/// Build the asset store from the bundled table
pub fn bundled() -> WatchAssets {
    MemoryAssetStore::with_paths(&BUNDLED)
}
