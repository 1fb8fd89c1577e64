//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod button;
pub mod face;

pub use button::button_task;
pub use face::face_task;
