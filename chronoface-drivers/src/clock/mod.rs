//! Wall clock implementations

pub mod soft_rtc;

pub use soft_rtc::SoftRtc;
