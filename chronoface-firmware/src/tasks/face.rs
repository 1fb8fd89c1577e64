//! Face task
//!
//! Owns the display surface. Polls the face's refresh trigger at a frame
//! interval shorter than the refresh period and flushes changed widgets to
//! the display after every refresh.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Instant, Ticker};

use chronoface_core::config::WatchConfig;
use chronoface_core::assets::AssetRef;
use chronoface_core::faces::neon;
use chronoface_core::{FaceContext, Surface, WatchFaceId};
use chronoface_display::{FontMetrics, RetainedToolkit};

use crate::assets::WatchAssets;
use crate::channels::NEXT_FACE;
use crate::display::LogBackend;
use crate::{RTC, SETTINGS};

/// Interval between trigger polls (ms)
pub const FRAME_INTERVAL_MS: u64 = 10;

/// Widget table capacity
const MAX_WIDGETS: usize = 16;

/// Glyph boxes of the bundled fonts
const FONT_METRICS: [(AssetRef, FontMetrics); 2] = [
    (
        neon::FONT_LARGE,
        FontMetrics {
            advance: 50,
            line_height: 110,
        },
    ),
    (
        neon::FONT_SMALL,
        FontMetrics {
            advance: 18,
            line_height: 40,
        },
    ),
];

#[embassy_executor::task]
pub async fn face_task(store: &'static mut WatchAssets, config: &'static WatchConfig) {
    info!("Face task started");

    let mut toolkit: RetainedToolkit<MAX_WIDGETS> = RetainedToolkit::new();
    for (asset, metrics) in FONT_METRICS {
        let Some(path) = asset.toolkit_path() else {
            warn!("Font path {} too long, skipping metrics", asset.path);
            continue;
        };
        if toolkit.register_font(path.as_str(), metrics).is_none() {
            warn!("Font registry full, {} uses default metrics", asset.path);
        }
    }

    let mut surface = Surface::new(toolkit, FaceContext::new(&RTC, &SETTINGS), config.refresh);
    let mut backend = LogBackend::default();

    let shown = surface.show(config.face, store);
    info!("Face {} shown", shown.name());
    flush(&mut surface, &mut backend);

    let mut ticker = Ticker::every(Duration::from_millis(FRAME_INTERVAL_MS));
    let start = Instant::now();

    loop {
        match select(ticker.next(), NEXT_FACE.wait()).await {
            Either::First(()) => {
                let now_ms = start.elapsed().as_millis();
                if surface.tick(now_ms) {
                    flush(&mut surface, &mut backend);
                }
            }
            Either::Second(()) => {
                let requested = surface
                    .current_id()
                    .unwrap_or(WatchFaceId::DEFAULT)
                    .next();
                let shown = surface.show(requested, store);
                info!("Face {} shown (requested {})", shown.name(), requested.name());
                flush(&mut surface, &mut backend);
            }
        }
    }
}

type WatchSurface = Surface<
    'static,
    chronoface_drivers::SoftRtc<crate::clock::EmbassyUptime>,
    chronoface_drivers::SharedSettings,
    RetainedToolkit<MAX_WIDGETS>,
>;

fn flush(surface: &mut WatchSurface, backend: &mut LogBackend) {
    match surface.toolkit_mut().render(backend) {
        Ok(0) => {}
        Ok(drawn) => debug!("Flushed {} widgets", drawn),
        Err(e) => warn!("Display flush failed: {}", e),
    }
}
