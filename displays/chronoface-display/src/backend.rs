//! Display backend trait
//!
//! Defines the interface a panel driver implements to receive widgets from
//! the toolkit.

use crate::toolkit::Widget;
use chronoface_core::traits::WidgetId;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Widget lies outside the drawable area
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for rendering widgets. The
/// toolkit only hands over widgets that changed since the last flush.
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw (or redraw) a single widget
    fn draw(&mut self, id: WidgetId, widget: &Widget) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    ///
    /// For displays with internal buffers, this sends the buffer to the hardware.
    fn flush(&mut self) -> Result<(), DisplayError>;
}
