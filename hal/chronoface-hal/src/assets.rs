//! Asset storage abstractions
//!
//! Watch faces ship optional resources (fonts, images) in a small
//! filesystem. The core only ever asks whether an asset can be opened; it
//! never reads content itself.

/// Errors from asset storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssetError {
    /// No asset exists at the given path
    NotFound,
    /// Storage operation failed (corrupt filesystem, bus error)
    Io,
    /// Too many assets open at the same time
    TooManyOpen,
}

/// Read-only asset store keyed by path-like names
///
/// Paths are absolute within the store, e.g. `/fonts/bebas_110.bin`.
/// Implementations do their own open/close bookkeeping; `close` consumes the
/// handle so a closed handle cannot be used again.
pub trait AssetStore {
    /// Open file handle
    type Handle;

    /// Open an asset for reading
    ///
    /// # Arguments
    /// * `path` - Absolute path of the asset inside the store
    ///
    /// # Returns
    /// A handle to the open asset, or an error if it cannot be opened.
    fn open(&mut self, path: &str) -> Result<Self::Handle, AssetError>;

    /// Close a previously opened asset
    fn close(&mut self, handle: Self::Handle);

    /// Check whether an asset can be opened, closing it again straight away
    fn exists(&mut self, path: &str) -> bool {
        match self.open(path) {
            Ok(handle) => {
                self.close(handle);
                true
            }
            Err(_) => false,
        }
    }
}
