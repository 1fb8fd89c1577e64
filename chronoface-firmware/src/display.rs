//! Logging display backend
//!
//! Stands in for a panel driver: every widget the toolkit flushes is
//! written to the defmt log instead of a framebuffer.

use defmt::*;

use chronoface_core::traits::WidgetId;
use chronoface_display::{DisplayBackend, DisplayError, Widget, WidgetKind};

#[derive(Default)]
pub struct LogBackend {
    frames: u32,
}

impl DisplayBackend for LogBackend {
    fn clear(&mut self) -> Result<(), DisplayError> {
        debug!("display: clear");
        Ok(())
    }

    fn draw(&mut self, id: WidgetId, widget: &Widget) -> Result<(), DisplayError> {
        let area = widget.area();
        match widget.kind() {
            WidgetKind::Label => debug!(
                "display: label {} '{}' at ({}, {})",
                id.0,
                widget.text(),
                area.x,
                area.y
            ),
            WidgetKind::Image { src } => {
                debug!("display: image {} {} at ({}, {})", id.0, src.as_str(), area.x, area.y)
            }
            WidgetKind::Background { color, radius } => {
                debug!("display: background {:x} radius {}", color.0, radius)
            }
            WidgetKind::Container => trace!("display: container {}", id.0),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.frames = self.frames.wrapping_add(1);
        trace!("display: frame {}", self.frames);
        Ok(())
    }
}
