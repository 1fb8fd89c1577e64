//! Collaborator traits
//!
//! These traits define the interface between watch faces and the rest of
//! the system: where time comes from, who owns the settings, and the
//! retained-mode toolkit that draws the widgets. The asset store trait lives
//! in `chronoface-hal` and is re-exported here.

pub mod clock;
pub mod settings;
pub mod toolkit;

pub use chronoface_hal::{AssetError, AssetStore};
pub use clock::Clock;
pub use settings::ClockSettings;
pub use toolkit::{Align, Color, LabelStyle, Placement, Toolkit, WidgetId};
