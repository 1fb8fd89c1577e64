//! In-memory asset store
//!
//! Holds the set of asset paths present on the device. Opening a present
//! path hands out a handle; the store counts open handles so tests and the
//! firmware can check that probing leaves nothing open.

use chronoface_hal::{AssetError, AssetStore};
use heapless::Vec;

/// Maximum number of handles open at once
pub const MAX_OPEN: usize = 4;

/// Handle to an open asset
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MemoryHandle {
    index: u8,
}

impl MemoryHandle {
    /// Index of the asset in the store
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

/// Fixed-capacity asset store
pub struct MemoryAssetStore<const N: usize> {
    paths: Vec<&'static str, N>,
    open_handles: usize,
    open_count: usize,
}

impl<const N: usize> Default for MemoryAssetStore<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> MemoryAssetStore<N> {
    /// Create an empty store
    pub const fn new() -> Self {
        Self {
            paths: Vec::new(),
            open_handles: 0,
            open_count: 0,
        }
    }

    /// Build a store from a list of present paths
    ///
    /// Paths beyond the capacity are dropped.
    pub fn with_paths(paths: &[&'static str]) -> Self {
        let mut store = Self::new();
        for path in paths {
            if !store.insert(path) {
                break;
            }
        }
        store
    }

    /// Add a path; returns `false` if the store is full
    pub fn insert(&mut self, path: &'static str) -> bool {
        if self.contains(path) {
            return true;
        }
        self.paths.push(path).is_ok()
    }

    /// Remove a path; returns `false` if it was not present
    pub fn remove(&mut self, path: &str) -> bool {
        match self.position(path) {
            Some(index) => {
                self.paths.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.position(path).is_some()
    }

    /// Number of present assets
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Handles currently open
    pub fn open_handles(&self) -> usize {
        self.open_handles
    }

    /// Successful opens since creation
    pub fn open_count(&self) -> usize {
        self.open_count
    }

    fn position(&self, path: &str) -> Option<usize> {
        self.paths.iter().position(|p| *p == path)
    }
}

impl<const N: usize> AssetStore for MemoryAssetStore<N> {
    type Handle = MemoryHandle;

    fn open(&mut self, path: &str) -> Result<MemoryHandle, AssetError> {
        let index = self.position(path).ok_or(AssetError::NotFound)?;
        if self.open_handles >= MAX_OPEN {
            return Err(AssetError::TooManyOpen);
        }
        let index = u8::try_from(index).map_err(|_| AssetError::Io)?;

        self.open_handles += 1;
        self.open_count += 1;
        Ok(MemoryHandle { index })
    }

    fn close(&mut self, _handle: MemoryHandle) {
        self.open_handles = self.open_handles.saturating_sub(1);
    }
}
