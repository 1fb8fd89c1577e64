//! Button task
//!
//! Short press toggles the clock format, long press switches face.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{with_timeout, Duration, Instant, Timer};

use crate::channels::NEXT_FACE;
use crate::SETTINGS;

/// Hold time that turns a press into a long press
const LONG_PRESS_MS: u64 = 500;

/// Shortest press that counts
const MIN_PRESS_MS: u64 = 50;

#[embassy_executor::task]
pub async fn button_task(mut btn: Input<'static>) {
    info!("Button task started");

    loop {
        btn.wait_for_falling_edge().await;
        let press_start = Instant::now();

        // Debounce
        Timer::after(Duration::from_millis(20)).await;

        if btn.is_high() {
            continue;
        }

        // Wait for release or long press timeout
        match with_timeout(Duration::from_millis(LONG_PRESS_MS), btn.wait_for_rising_edge()).await {
            Ok(()) => {
                if press_start.elapsed().as_millis() > MIN_PRESS_MS {
                    let clock_type = SETTINGS.toggle();
                    info!("Button: clock format {}", clock_type.name());
                }
            }
            Err(_) => {
                NEXT_FACE.signal(());
                debug!("Button: next face");
                // Wait for actual release
                btn.wait_for_rising_edge().await;
            }
        }

        // Debounce after release
        Timer::after(Duration::from_millis(50)).await;
    }
}
