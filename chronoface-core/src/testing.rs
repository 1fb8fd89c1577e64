//! Test doubles for the collaborator traits

use std::cell::Cell;
use std::string::{String, ToString};
use std::vec::Vec;

use crate::format::ClockType;
use crate::time::{DateTime, Timestamp};
use crate::traits::{
    AssetError, AssetStore, Clock, ClockSettings, Color, LabelStyle, Placement, Toolkit, WidgetId,
};

/// Asset store backed by a list of present paths
#[derive(Default)]
pub struct FakeStore {
    pub present: Vec<String>,
    pub open_handles: usize,
    pub opens: usize,
}

impl FakeStore {
    pub fn with(paths: &[&str]) -> Self {
        Self {
            present: paths.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }
}

impl AssetStore for FakeStore {
    type Handle = usize;

    fn open(&mut self, path: &str) -> Result<usize, AssetError> {
        self.opens += 1;
        match self.present.iter().position(|p| p == path) {
            Some(index) => {
                self.open_handles += 1;
                Ok(index)
            }
            None => Err(AssetError::NotFound),
        }
    }

    fn close(&mut self, _handle: usize) {
        self.open_handles -= 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeKind {
    Background,
    Image(String),
    Container,
    Label,
}

#[derive(Debug, Clone)]
pub struct FakeWidget {
    pub kind: FakeKind,
    pub text: String,
    pub font: Option<u8>,
    pub color: Option<Color>,
    pub placement: Option<Placement>,
}

/// Toolkit that records every call
#[derive(Default)]
pub struct FakeToolkit {
    pub widgets: Vec<FakeWidget>,
    pub loaded_fonts: Vec<String>,
    pub set_text_calls: Vec<(WidgetId, String)>,
    pub realign_calls: Vec<WidgetId>,
    pub cleans: usize,
    pub fail_font_loads: bool,
}

impl FakeToolkit {
    pub fn text(&self, id: WidgetId) -> &str {
        &self.widgets[id.0 as usize].text
    }

    pub fn widget(&self, id: WidgetId) -> &FakeWidget {
        &self.widgets[id.0 as usize]
    }

    fn push(&mut self, widget: FakeWidget) -> WidgetId {
        self.widgets.push(widget);
        WidgetId((self.widgets.len() - 1) as u8)
    }
}

impl Toolkit for FakeToolkit {
    type Font = u8;

    fn load_font(&mut self, path: &str) -> Option<u8> {
        if self.fail_font_loads {
            return None;
        }
        self.loaded_fonts.push(path.to_string());
        Some((self.loaded_fonts.len() - 1) as u8)
    }

    fn create_background(&mut self, color: Color, _radius: u8) -> WidgetId {
        self.push(FakeWidget {
            kind: FakeKind::Background,
            text: String::new(),
            font: None,
            color: Some(color),
            placement: None,
        })
    }

    fn create_image(&mut self, src: &str, placement: Placement) -> WidgetId {
        self.push(FakeWidget {
            kind: FakeKind::Image(src.to_string()),
            text: String::new(),
            font: None,
            color: None,
            placement: Some(placement),
        })
    }

    fn create_container(&mut self, _width: u16, _height: u16, placement: Placement) -> WidgetId {
        self.push(FakeWidget {
            kind: FakeKind::Container,
            text: String::new(),
            font: None,
            color: None,
            placement: Some(placement),
        })
    }

    fn create_label(&mut self, text: &str, style: LabelStyle<u8>, placement: Placement) -> WidgetId {
        self.push(FakeWidget {
            kind: FakeKind::Label,
            text: text.to_string(),
            font: style.font,
            color: style.color,
            placement: Some(placement),
        })
    }

    fn set_text(&mut self, label: WidgetId, text: &str) {
        self.widgets[label.0 as usize].text = text.to_string();
        self.set_text_calls.push((label, text.to_string()));
    }

    fn realign(&mut self, widget: WidgetId) {
        self.realign_calls.push(widget);
    }

    fn clean(&mut self) {
        self.widgets.clear();
        self.cleans += 1;
    }
}

/// Manually advanced wall clock
pub struct FakeClock(pub Cell<Timestamp>);

impl FakeClock {
    pub fn at(dt: DateTime) -> Self {
        Self(Cell::new(dt.to_timestamp()))
    }

    pub fn set(&self, dt: DateTime) {
        self.0.set(dt.to_timestamp());
    }

    pub fn advance_secs(&self, secs: u64) {
        self.0.set(self.0.get().saturating_add_secs(secs));
    }
}

impl Clock for FakeClock {
    fn timestamp(&self) -> Timestamp {
        self.0.get()
    }
}

/// Mutable clock type setting
pub struct FakeSettings(pub Cell<ClockType>);

impl FakeSettings {
    pub fn new(clock_type: ClockType) -> Self {
        Self(Cell::new(clock_type))
    }
}

impl ClockSettings for FakeSettings {
    fn clock_type(&self) -> ClockType {
        self.0.get()
    }
}

/// Date-time shorthand for tests
pub fn dt(year: u16, month: u8, day: u8, hour: u8, minute: u8) -> DateTime {
    DateTime::new(year, month, day, hour, minute, 0).unwrap()
}
