//! Retained-mode widget toolkit
//!
//! Keeps a fixed-capacity widget table for the active screen. Every
//! mutation marks the widget dirty; [`RetainedToolkit::render`] pushes only
//! dirty widgets to a [`DisplayBackend`]. Per-widget counters record how
//! often a label's text was replaced or realigned.

use chronoface_core::assets::MAX_PATH_LEN;
use chronoface_core::traits::{Color, LabelStyle, Placement, Toolkit, WidgetId};
use heapless::{String, Vec};

use crate::backend::{DisplayBackend, DisplayError};
use crate::layout::{self, Rect};

/// Maximum label text length (bytes)
pub const TEXT_LEN: usize = 16;

/// Maximum number of registered fonts
pub const MAX_FONTS: usize = 4;

/// Widgets addressable by a `WidgetId`; the last id is reserved for
/// [`WidgetId::INVALID`]
pub const MAX_WIDGET_IDS: usize = u8::MAX as usize;

/// Handle to a registered font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FontId(pub u8);

/// Glyph box used to size labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FontMetrics {
    /// Horizontal advance per character (px)
    pub advance: u8,
    /// Line height (px)
    pub line_height: u8,
}

impl FontMetrics {
    /// Built-in font
    pub const DEFAULT: Self = Self {
        advance: 12,
        line_height: 20,
    };
}

struct FontEntry {
    path: String<MAX_PATH_LEN>,
    metrics: FontMetrics,
}

/// What a widget is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetKind {
    Background { color: Color, radius: u8 },
    Image { src: String<MAX_PATH_LEN> },
    Container,
    Label,
}

/// A widget on the active screen
#[derive(Debug, Clone)]
pub struct Widget {
    kind: WidgetKind,
    text: String<TEXT_LEN>,
    font: Option<FontId>,
    color: Option<Color>,
    placement: Placement,
    area: Rect,
    text_updates: u16,
    realigns: u16,
    dirty: bool,
}

impl Widget {
    fn new(kind: WidgetKind, placement: Placement, area: Rect) -> Self {
        Self {
            kind,
            text: String::new(),
            font: None,
            color: None,
            placement,
            area,
            text_updates: 0,
            realigns: 0,
            dirty: true,
        }
    }

    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    /// Label text; empty for other widgets
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn font(&self) -> Option<FontId> {
        self.font
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// On-screen area as of the last layout
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Number of `set_text` calls since creation
    pub fn text_updates(&self) -> u16 {
        self.text_updates
    }

    /// Number of `realign` calls since creation
    pub fn realigns(&self) -> u16 {
        self.realigns
    }

    /// Changed since the last flush
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// Fixed-capacity retained toolkit for up to `N` widgets
///
/// At most [`MAX_WIDGET_IDS`] widgets are kept whatever `N` is.
pub struct RetainedToolkit<const N: usize> {
    widgets: Vec<Widget, N>,
    fonts: Vec<FontEntry, MAX_FONTS>,
    /// Screen was cleaned since the last flush
    cleared: bool,
}

impl<const N: usize> Default for RetainedToolkit<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RetainedToolkit<N> {
    pub const fn new() -> Self {
        Self {
            widgets: Vec::new(),
            fonts: Vec::new(),
            cleared: false,
        }
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(id.0 as usize)
    }

    /// Widgets on the active screen, in creation order
    pub fn widgets(&self) -> impl Iterator<Item = (WidgetId, &Widget)> {
        self.widgets
            .iter()
            .enumerate()
            .map(|(i, w)| (WidgetId(i as u8), w))
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    /// Path a font was loaded from
    pub fn font_path(&self, font: FontId) -> Option<&str> {
        self.fonts.get(font.0 as usize).map(|f| f.path.as_str())
    }

    /// Register a font ahead of time with known metrics
    ///
    /// A later `load_font` of the same path returns this font.
    pub fn register_font(&mut self, path: &str, metrics: FontMetrics) -> Option<FontId> {
        let font = self.load_font(path)?;
        self.set_font_metrics(font, metrics);
        Some(font)
    }

    /// Override the glyph box of a loaded font
    pub fn set_font_metrics(&mut self, font: FontId, metrics: FontMetrics) {
        if let Some(entry) = self.fonts.get_mut(font.0 as usize) {
            entry.metrics = metrics;
        }
    }

    /// Collect widgets changed since the last call and mark them clean
    pub fn take_dirty(&mut self) -> Vec<WidgetId, N> {
        let mut dirty = Vec::new();
        for (i, widget) in self.widgets.iter_mut().enumerate() {
            if widget.dirty {
                widget.dirty = false;
                // Cannot overflow, both hold at most N
                let _ = dirty.push(WidgetId(i as u8));
            }
        }
        dirty
    }

    /// Draw every dirty widget to `backend` and flush it
    ///
    /// Clears the display first if the screen was cleaned. Returns the
    /// number of widgets drawn. On error, undrawn widgets stay dirty.
    pub fn render<B: DisplayBackend>(&mut self, backend: &mut B) -> Result<usize, DisplayError> {
        if self.cleared {
            backend.clear()?;
            self.cleared = false;
        }

        let mut drawn = 0;
        for (i, widget) in self.widgets.iter_mut().enumerate() {
            if !widget.dirty {
                continue;
            }
            backend.draw(WidgetId(i as u8), widget)?;
            widget.dirty = false;
            drawn += 1;
        }

        backend.flush()?;
        Ok(drawn)
    }

    fn metrics(&self, font: Option<FontId>) -> FontMetrics {
        font.and_then(|f| self.fonts.get(f.0 as usize))
            .map(|f| f.metrics)
            .unwrap_or(FontMetrics::DEFAULT)
    }

    fn text_size(&self, text: &str, font: Option<FontId>) -> (u16, u16) {
        let metrics = self.metrics(font);
        let chars = text.chars().count() as u16;
        (
            chars.saturating_mul(metrics.advance as u16),
            metrics.line_height as u16,
        )
    }

    fn parent_area(&self, placement: &Placement) -> Rect {
        placement
            .anchor
            .and_then(|anchor| self.widget(anchor))
            .map(|w| w.area)
            .unwrap_or(Rect::SCREEN)
    }

    fn push(&mut self, widget: Widget) -> WidgetId {
        let len = self.widgets.len();
        if len >= MAX_WIDGET_IDS {
            #[cfg(feature = "defmt")]
            defmt::warn!("widget ids exhausted, dropping widget");
            return WidgetId::INVALID;
        }

        let id = WidgetId(len as u8);
        match self.widgets.push(widget) {
            Ok(()) => id,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("widget table full, dropping widget");
                WidgetId::INVALID
            }
        }
    }
}

/// Copy as much of `text` as fits
fn truncated(text: &str) -> String<TEXT_LEN> {
    let mut s = String::new();
    for c in text.chars() {
        if s.push(c).is_err() {
            break;
        }
    }
    s
}

impl<const N: usize> Toolkit for RetainedToolkit<N> {
    type Font = FontId;

    fn load_font(&mut self, path: &str) -> Option<FontId> {
        if let Some(index) = self.fonts.iter().position(|f| f.path.as_str() == path) {
            return Some(FontId(index as u8));
        }

        let mut stored = String::new();
        stored.push_str(path).ok()?;
        let id = FontId(self.fonts.len() as u8);
        self.fonts
            .push(FontEntry {
                path: stored,
                metrics: FontMetrics::DEFAULT,
            })
            .ok()?;
        Some(id)
    }

    fn create_background(&mut self, color: Color, radius: u8) -> WidgetId {
        let mut widget = Widget::new(
            WidgetKind::Background { color, radius },
            Placement::ORIGIN,
            Rect::SCREEN,
        );
        widget.color = Some(color);
        self.push(widget)
    }

    fn create_image(&mut self, src: &str, placement: Placement) -> WidgetId {
        let mut path = String::new();
        if path.push_str(src).is_err() {
            return WidgetId::INVALID;
        }
        // Image size is only known to the backend
        let area = layout::resolve(self.parent_area(&placement), 0, 0, &placement);
        self.push(Widget::new(WidgetKind::Image { src: path }, placement, area))
    }

    fn create_container(&mut self, width: u16, height: u16, placement: Placement) -> WidgetId {
        let area = layout::resolve(self.parent_area(&placement), width, height, &placement);
        self.push(Widget::new(WidgetKind::Container, placement, area))
    }

    fn create_label(
        &mut self,
        text: &str,
        style: LabelStyle<FontId>,
        placement: Placement,
    ) -> WidgetId {
        let text = truncated(text);
        let (width, height) = self.text_size(&text, style.font);
        let area = layout::resolve(self.parent_area(&placement), width, height, &placement);

        let mut widget = Widget::new(WidgetKind::Label, placement, area);
        widget.text = text;
        widget.font = style.font;
        widget.color = style.color;
        self.push(widget)
    }

    fn set_text(&mut self, label: WidgetId, text: &str) {
        let Some(font) = self
            .widget(label)
            .filter(|w| w.kind == WidgetKind::Label)
            .map(|w| w.font)
        else {
            return;
        };
        let text = truncated(text);
        let (width, height) = self.text_size(&text, font);

        if let Some(widget) = self.widgets.get_mut(label.0 as usize) {
            widget.text = text;
            // Position stays until the next realign
            widget.area.width = width;
            widget.area.height = height;
            widget.text_updates = widget.text_updates.saturating_add(1);
            widget.dirty = true;
        }
    }

    fn realign(&mut self, id: WidgetId) {
        let Some(widget) = self.widget(id) else {
            return;
        };
        let parent = self.parent_area(&widget.placement);
        let area = layout::resolve(parent, widget.area.width, widget.area.height, &widget.placement);

        if let Some(widget) = self.widgets.get_mut(id.0 as usize) {
            widget.area = area;
            widget.realigns = widget.realigns.saturating_add(1);
            widget.dirty = true;
        }
    }

    fn clean(&mut self) {
        self.widgets.clear();
        self.cleared = true;
    }
}
