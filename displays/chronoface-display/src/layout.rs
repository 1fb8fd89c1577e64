//! Widget layout
//!
//! Resolves a [`Placement`] against its anchor's area into an absolute
//! on-screen rectangle.

use chronoface_core::traits::{Align, Placement};

/// Screen width (px)
pub const SCREEN_WIDTH: u16 = 240;

/// Screen height (px)
pub const SCREEN_HEIGHT: u16 = 240;

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: i16,
    pub y: i16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// The whole screen
    pub const SCREEN: Self = Self::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT);

    pub const fn new(x: i16, y: i16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point
    pub const fn center(&self) -> (i16, i16) {
        (
            self.x + (self.width / 2) as i16,
            self.y + (self.height / 2) as i16,
        )
    }
}

/// Place a `width` x `height` box relative to `parent`
pub fn resolve(parent: Rect, width: u16, height: u16, placement: &Placement) -> Rect {
    let centered_x = parent.x + centered_offset(parent.width, width);
    let centered_y = parent.y + centered_offset(parent.height, height);

    let (x, y) = match placement.align {
        Align::Center => (centered_x, centered_y),
        Align::InTopLeft => (parent.x, parent.y),
        Align::InTopMid => (centered_x, parent.y),
        Align::InBottomMid => (
            centered_x,
            parent.y + parent.height as i16 - height as i16,
        ),
    };

    Rect::new(
        x.saturating_add(placement.x),
        y.saturating_add(placement.y),
        width,
        height,
    )
}

// Negative when the child is larger than the parent
fn centered_offset(outer: u16, inner: u16) -> i16 {
    (outer as i16 - inner as i16) / 2
}
