//! Chronoface - Watch Face Firmware
//!
//! Main firmware binary for RP2040-based watches. Shows one watch face at a
//! time and redraws only the labels whose minute or day actually changed.
//!
//! Button on GPIO15: short press toggles 12h/24h, long press switches face.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use chronoface_core::config::WatchConfig;
use chronoface_core::ClockType;
use chronoface_drivers::{SharedSettings, SoftRtc};

mod assets;
mod channels;
mod clock;
mod config;
mod display;
mod tasks;

use crate::assets::WatchAssets;
use crate::clock::{EmbassyUptime, BOOT_TIMESTAMP};

/// Embedded configuration (compiled into firmware)
/// Edit watch.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../watch.toml");

/// Wall clock shared by all tasks
pub static RTC: SoftRtc<EmbassyUptime> = SoftRtc::new(EmbassyUptime, BOOT_TIMESTAMP);

/// User settings shared by all tasks
pub static SETTINGS: SharedSettings = SharedSettings::new(ClockType::H24);

// Static cells for task-owned state (must live forever)
static CONFIG: StaticCell<WatchConfig> = StaticCell::new();
static ASSETS: StaticCell<WatchAssets> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Chronoface firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = CONFIG.init(config::load(EMBEDDED_CONFIG));
    SETTINGS.set_clock_type(config.clock_type);
    info!(
        "Configuration loaded: face={}, clock={}, period={}ms",
        config.face.name(),
        config.clock_type.name(),
        config.refresh.period_ms
    );

    let store = ASSETS.init(assets::bundled());
    info!("Asset store ready ({} assets)", store.len());

    // Pin assignment is board-specific
    let button = Input::new(p.PIN_15, Pull::Up);

    // Spawn tasks
    spawner.spawn(tasks::face_task(store, config)).unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
