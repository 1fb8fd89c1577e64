//! Retained-mode widget toolkit trait
//!
//! Faces create their widgets once, then only push new label text when a
//! sample changed. Layout, styling and rasterization belong to the toolkit.

/// Handle to a widget created by the toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WidgetId(pub u8);

impl WidgetId {
    /// Returned when the toolkit could not create a widget; operations on it are ignored
    pub const INVALID: Self = Self(u8::MAX);

    /// Whether this handle refers to a created widget
    pub const fn is_valid(self) -> bool {
        self.0 != u8::MAX
    }
}

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Self = Self(0xFF_FF_FF);
    pub const BLACK: Self = Self(0x00_00_00);

    /// Create from a `0xRRGGBB` value
    pub const fn from_hex(rgb: u32) -> Self {
        Self(rgb & 0xFF_FF_FF)
    }

    /// Red, green and blue components
    pub const fn components(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

/// Alignment of a widget relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Align {
    /// Centered on the anchor
    Center,
    /// Inside the anchor, top-left corner
    InTopLeft,
    /// Inside the anchor, horizontally centered at the top edge
    InTopMid,
    /// Inside the anchor, horizontally centered at the bottom edge
    InBottomMid,
}

/// Where a widget sits: alignment to an anchor plus an offset in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Placement {
    pub align: Align,
    /// Anchor widget; `None` anchors to the screen
    pub anchor: Option<WidgetId>,
    pub x: i16,
    pub y: i16,
}

impl Placement {
    /// Top-left corner of the screen
    pub const ORIGIN: Self = Self::on_screen(Align::InTopLeft, 0, 0);

    /// Align relative to the screen
    pub const fn on_screen(align: Align, x: i16, y: i16) -> Self {
        Self {
            align,
            anchor: None,
            x,
            y,
        }
    }

    /// Align relative to another widget
    pub const fn within(anchor: WidgetId, align: Align, x: i16, y: i16) -> Self {
        Self {
            align,
            anchor: Some(anchor),
            x,
            y,
        }
    }
}

/// Text style for a label
///
/// `None` fields use the toolkit defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelStyle<F> {
    pub font: Option<F>,
    pub color: Option<Color>,
}

impl<F> Default for LabelStyle<F> {
    fn default() -> Self {
        Self {
            font: None,
            color: None,
        }
    }
}

/// Retained-mode widget toolkit
///
/// All widgets belong to the active screen; `clean` deletes every one of
/// them. Operations are infallible from the caller's point of view.
pub trait Toolkit {
    /// Handle to a loaded font
    type Font: Copy;

    /// Load a font from a drive-qualified path (e.g. `F:/fonts/x.bin`)
    ///
    /// Returns `None` if the font could not be loaded.
    fn load_font(&mut self, path: &str) -> Option<Self::Font>;

    /// Full-screen background rectangle
    fn create_background(&mut self, color: Color, radius: u8) -> WidgetId;

    /// Image widget showing a drive-qualified image asset
    fn create_image(&mut self, src: &str, placement: Placement) -> WidgetId;

    /// Transparent container used as a layout anchor
    fn create_container(&mut self, width: u16, height: u16, placement: Placement) -> WidgetId;

    /// Text label
    fn create_label(
        &mut self,
        text: &str,
        style: LabelStyle<Self::Font>,
        placement: Placement,
    ) -> WidgetId;

    /// Replace a label's text
    fn set_text(&mut self, label: WidgetId, text: &str);

    /// Re-run alignment of a widget after its size changed
    fn realign(&mut self, widget: WidgetId);

    /// Delete every widget on the active screen
    fn clean(&mut self);
}
