//! Asset availability probing and acquisition
//!
//! Probing only checks that an asset can be opened; every handle is closed
//! again before returning. Acquisition re-checks each asset on its own and
//! degrades to `None` instead of failing.

use heapless::String;

use crate::traits::{AssetStore, Placement, Toolkit, WidgetId};

/// Drive letter the toolkit uses for the asset store
pub const DRIVE_PREFIX: &str = "F:";

/// Maximum length of a drive-qualified asset path
pub const MAX_PATH_LEN: usize = 48;

/// A named asset in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AssetRef {
    /// Absolute path inside the store, e.g. `/fonts/bebas_110.bin`
    pub path: &'static str,
}

impl AssetRef {
    pub const fn new(path: &'static str) -> Self {
        Self { path }
    }

    /// Path as the toolkit expects it, e.g. `F:/fonts/bebas_110.bin`
    ///
    /// `None` if the qualified path exceeds [`MAX_PATH_LEN`].
    pub fn toolkit_path(&self) -> Option<String<MAX_PATH_LEN>> {
        let mut s = String::new();
        s.push_str(DRIVE_PREFIX).ok()?;
        s.push_str(self.path).ok()?;
        Some(s)
    }
}

/// Check that a single asset can be opened
pub fn probe<A: AssetStore>(store: &mut A, asset: &AssetRef) -> bool {
    match store.open(asset.path) {
        Ok(handle) => {
            store.close(handle);
            true
        }
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::debug!("asset {} not available: {}", asset.path, _e);
            false
        }
    }
}

/// Check that every asset can be opened
///
/// Stops at the first missing asset. Nothing stays open afterwards.
pub fn probe_all<A: AssetStore>(store: &mut A, assets: &[AssetRef]) -> bool {
    assets.iter().all(|asset| probe(store, asset))
}

/// Load a font if it exists in the store
///
/// Re-verifies the asset rather than trusting an earlier probe, since the
/// store may have changed in between. Returns `None` (toolkit default font)
/// if the asset is missing or the toolkit fails to load it.
pub fn load_font<A: AssetStore, T: Toolkit>(
    store: &mut A,
    toolkit: &mut T,
    asset: &AssetRef,
) -> Option<T::Font> {
    if !probe(store, asset) {
        #[cfg(feature = "defmt")]
        defmt::warn!("font {} missing, using default font", asset.path);
        return None;
    }

    let Some(path) = asset.toolkit_path() else {
        #[cfg(feature = "defmt")]
        defmt::warn!("font path {} too long, using default font", asset.path);
        return None;
    };

    match toolkit.load_font(path.as_str()) {
        Some(font) => Some(font),
        None => {
            #[cfg(feature = "defmt")]
            defmt::warn!("font {} failed to load, using default font", asset.path);
            None
        }
    }
}

/// Create an image widget showing `asset`
///
/// Returns [`WidgetId::INVALID`] and creates nothing if the asset path cannot
/// be qualified for the toolkit.
pub fn create_image<T: Toolkit>(
    toolkit: &mut T,
    asset: &AssetRef,
    placement: Placement,
) -> WidgetId {
    match asset.toolkit_path() {
        Some(path) => toolkit.create_image(path.as_str(), placement),
        None => {
            #[cfg(feature = "defmt")]
            defmt::warn!("image path {} too long, skipping image", asset.path);
            WidgetId::INVALID
        }
    }
}
