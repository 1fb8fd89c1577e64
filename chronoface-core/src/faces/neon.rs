//! Neon watch face
//!
//! Large two-line hour/minute display over a magenta background with a sun
//! image, plus a weekday/day label. Needs two custom fonts and one image
//! from the asset store.
//!
//! ```text
//! ┌──────────────────────┐
//! │ ☀         ┌──────┐   │
//! │           │  13  │   │
//! │           │  05  │   │
//! │           └──────┘   │
//! │            MON 01    │
//! └──────────────────────┘
//! ```

use crate::assets::{self, AssetRef};
use crate::config::RefreshConfig;
use crate::format::{format_date, format_hour, format_minute};
use crate::refresh::RefreshCycle;
use crate::traits::{
    Align, AssetStore, Clock, ClockSettings, Color, LabelStyle, Placement, Toolkit, WidgetId,
};
use crate::trigger::RefreshTrigger;

use super::{FaceContext, WatchFace, WatchFaceId};

/// Large font for hour and minute digits
pub const FONT_LARGE: AssetRef = AssetRef::new("/fonts/bebas_110.bin");

/// Small font for the date
pub const FONT_SMALL: AssetRef = AssetRef::new("/fonts/bebas_40.bin");

/// Sun image in the top-left corner
pub const SUN_IMAGE: AssetRef = AssetRef::new("/images/neon_sun_small.bin");

/// Every asset the face needs to be offered
pub const REQUIRED_ASSETS: [AssetRef; 3] = [FONT_LARGE, FONT_SMALL, SUN_IMAGE];

/// Background color
pub const BACKGROUND_COLOR: Color = Color::from_hex(0xCF2AAD);

/// Background corner radius (px)
pub const BACKGROUND_RADIUS: u8 = 30;

/// Label texts shown until the first refresh
const INITIAL_HOUR: &str = "01";
const INITIAL_MINUTE: &str = "00";
const INITIAL_DATE: &str = "MON 01";

/// Check that both fonts and the sun image are present
pub fn is_available<A: AssetStore>(store: &mut A) -> bool {
    assets::probe_all(store, &REQUIRED_ASSETS)
}

/// Fonts loaded at construction; `None` means the toolkit default font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeonFonts<F> {
    pub large: Option<F>,
    pub small: Option<F>,
}

/// Widgets owned by the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NeonWidgets {
    background: WidgetId,
    sun: WidgetId,
    time_container: WidgetId,
    hour: WidgetId,
    minutes: WidgetId,
    date_container: WidgetId,
    date: WidgetId,
}

/// Neon watch face
pub struct NeonFace<'a, C, S, T: Toolkit> {
    ctx: FaceContext<'a, C, S>,
    cycle: RefreshCycle,
    fonts: NeonFonts<T::Font>,
    widgets: NeonWidgets,
    trigger: RefreshTrigger,
}

impl<'a, C, S, T> NeonFace<'a, C, S, T>
where
    C: Clock,
    S: ClockSettings,
    T: Toolkit,
{
    /// Fonts in use
    pub fn fonts(&self) -> NeonFonts<T::Font> {
        self.fonts
    }

    /// Hour label widget
    pub fn hour_label(&self) -> WidgetId {
        self.widgets.hour
    }

    /// Minute label widget
    pub fn minute_label(&self) -> WidgetId {
        self.widgets.minutes
    }

    /// Date label widget
    pub fn date_label(&self) -> WidgetId {
        self.widgets.date
    }

    /// Background and image widgets, in creation order
    pub fn decoration(&self) -> [WidgetId; 4] {
        [
            self.widgets.background,
            self.widgets.sun,
            self.widgets.time_container,
            self.widgets.date_container,
        ]
    }

    fn build_widgets(toolkit: &mut T, fonts: &NeonFonts<T::Font>) -> NeonWidgets {
        let background = toolkit.create_background(BACKGROUND_COLOR, BACKGROUND_RADIUS);

        let sun = assets::create_image(toolkit, &SUN_IMAGE, Placement::ORIGIN);

        let time_container =
            toolkit.create_container(175, 175, Placement::on_screen(Align::Center, 60, -24));

        let hour = toolkit.create_label(
            INITIAL_HOUR,
            LabelStyle {
                font: fonts.large,
                color: None,
            },
            Placement::within(time_container, Align::InTopMid, 0, 0),
        );

        let minutes = toolkit.create_label(
            INITIAL_MINUTE,
            LabelStyle {
                font: fonts.large,
                color: None,
            },
            Placement::within(time_container, Align::InBottomMid, 0, 0),
        );

        let date_container =
            toolkit.create_container(60, 30, Placement::on_screen(Align::Center, 55, 90));

        let date = toolkit.create_label(
            INITIAL_DATE,
            LabelStyle {
                font: fonts.small,
                color: Some(Color::WHITE),
            },
            Placement::within(date_container, Align::InTopMid, 0, 0),
        );

        NeonWidgets {
            background,
            sun,
            time_container,
            hour,
            minutes,
            date_container,
            date,
        }
    }
}

impl<'a, C, S, T> WatchFace<'a, C, S, T> for NeonFace<'a, C, S, T>
where
    C: Clock,
    S: ClockSettings,
    T: Toolkit,
{
    const ID: WatchFaceId = WatchFaceId::Neon;

    fn is_available<A: AssetStore>(store: &mut A) -> bool {
        is_available(store)
    }

    fn create<A: AssetStore>(
        ctx: FaceContext<'a, C, S>,
        store: &mut A,
        toolkit: &mut T,
        config: &RefreshConfig,
    ) -> Self {
        let fonts = NeonFonts {
            large: assets::load_font(store, toolkit, &FONT_LARGE),
            small: assets::load_font(store, toolkit, &FONT_SMALL),
        };
        let widgets = Self::build_widgets(toolkit, &fonts);

        let mut face = Self {
            ctx,
            cycle: RefreshCycle::new(),
            fonts,
            widgets,
            trigger: config.trigger(),
        };
        face.refresh(toolkit);
        face
    }

    fn refresh(&mut self, toolkit: &mut T) {
        let Some(update) = self.cycle.sample(self.ctx.clock.timestamp()) else {
            return;
        };

        let clock_type = self.ctx.settings.clock_type();
        toolkit.set_text(
            self.widgets.hour,
            format_hour(update.time.hour, clock_type).as_str(),
        );
        toolkit.realign(self.widgets.hour);
        toolkit.set_text(
            self.widgets.minutes,
            format_minute(update.time.minute).as_str(),
        );
        toolkit.realign(self.widgets.minutes);

        if update.date_changed {
            toolkit.set_text(self.widgets.date, format_date(&update.time).as_str());
            toolkit.realign(self.widgets.date);
        }
    }

    fn trigger_mut(&mut self) -> &mut RefreshTrigger {
        &mut self.trigger
    }

    fn teardown(mut self, toolkit: &mut T) {
        self.trigger.cancel();
        toolkit.clean();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ClockType;
    use crate::testing::{dt, FakeClock, FakeKind, FakeSettings, FakeStore, FakeToolkit};

    const ALL_PATHS: [&str; 3] = [
        "/fonts/bebas_110.bin",
        "/fonts/bebas_40.bin",
        "/images/neon_sun_small.bin",
    ];

    fn create<'a>(
        clock: &'a FakeClock,
        settings: &'a FakeSettings,
        store: &mut FakeStore,
        toolkit: &mut FakeToolkit,
    ) -> NeonFace<'a, FakeClock, FakeSettings, FakeToolkit> {
        NeonFace::create(
            FaceContext::new(clock, settings),
            store,
            toolkit,
            &RefreshConfig::default(),
        )
    }

    #[test]
    fn test_available_only_with_all_assets() {
        let mut store = FakeStore::with(&ALL_PATHS);
        assert!(is_available(&mut store));
        assert_eq!(store.open_handles, 0);

        for missing in ALL_PATHS {
            let present: Vec<&str> = ALL_PATHS.iter().copied().filter(|p| *p != missing).collect();
            let mut store = FakeStore::with(&present);
            assert!(!is_available(&mut store), "{missing} missing");
            assert_eq!(store.open_handles, 0);
        }
    }

    #[test]
    fn test_availability_is_idempotent() {
        let mut store = FakeStore::with(&ALL_PATHS);
        assert!(is_available(&mut store));
        assert!(is_available(&mut store));
        assert_eq!(store.opens, 6);
    }

    #[test]
    fn test_construction_renders_current_time() {
        let clock = FakeClock::at(dt(2024, 1, 1, 0, 5));
        let settings = FakeSettings::new(ClockType::H12);
        let mut store = FakeStore::with(&ALL_PATHS);
        let mut toolkit = FakeToolkit::default();

        let face = create(&clock, &settings, &mut store, &mut toolkit);

        assert_eq!(toolkit.text(face.hour_label()), "12");
        assert_eq!(toolkit.text(face.minute_label()), "05");
        assert_eq!(toolkit.text(face.date_label()), "MON 01");
        assert_eq!(store.open_handles, 0);
    }

    #[test]
    fn test_layout() {
        let clock = FakeClock::at(dt(2024, 1, 1, 0, 5));
        let settings = FakeSettings::new(ClockType::H24);
        let mut store = FakeStore::with(&ALL_PATHS);
        let mut toolkit = FakeToolkit::default();

        let face = create(&clock, &settings, &mut store, &mut toolkit);
        let [background, sun, time_container, date_container] = face.decoration();

        assert_eq!(toolkit.widget(background).color, Some(BACKGROUND_COLOR));
        assert_eq!(
            toolkit.widget(sun).kind,
            FakeKind::Image("F:/images/neon_sun_small.bin".to_string())
        );
        assert_eq!(
            toolkit.widget(face.hour_label()).placement,
            Some(Placement::within(time_container, Align::InTopMid, 0, 0))
        );
        assert_eq!(
            toolkit.widget(face.minute_label()).placement,
            Some(Placement::within(time_container, Align::InBottomMid, 0, 0))
        );
        assert_eq!(
            toolkit.widget(face.date_label()).placement,
            Some(Placement::within(date_container, Align::InTopMid, 0, 0))
        );
        assert_eq!(toolkit.widget(face.date_label()).color, Some(Color::WHITE));
    }

    #[test]
    fn test_fonts_loaded_when_present() {
        let clock = FakeClock::at(dt(2024, 1, 1, 0, 5));
        let settings = FakeSettings::new(ClockType::H24);
        let mut store = FakeStore::with(&ALL_PATHS);
        let mut toolkit = FakeToolkit::default();

        let face = create(&clock, &settings, &mut store, &mut toolkit);

        assert_eq!(
            toolkit.loaded_fonts,
            vec!["F:/fonts/bebas_110.bin".to_string(), "F:/fonts/bebas_40.bin".to_string()]
        );
        let fonts = face.fonts();
        assert_eq!(toolkit.widget(face.hour_label()).font, fonts.large);
        assert_eq!(toolkit.widget(face.date_label()).font, fonts.small);
        assert!(fonts.large.is_some() && fonts.small.is_some());
    }

    #[test]
    fn test_missing_fonts_fall_back() {
        let clock = FakeClock::at(dt(2024, 1, 1, 0, 5));
        let settings = FakeSettings::new(ClockType::H24);
        let mut store = FakeStore::with(&["/images/neon_sun_small.bin"]);
        let mut toolkit = FakeToolkit::default();

        let face = create(&clock, &settings, &mut store, &mut toolkit);

        assert_eq!(face.fonts(), NeonFonts { large: None, small: None });
        assert_eq!(toolkit.widget(face.hour_label()).font, None);
        assert_eq!(toolkit.widget(face.minute_label()).font, None);
        assert_eq!(toolkit.widget(face.date_label()).font, None);
        assert_eq!(toolkit.text(face.hour_label()), "00");
    }

    #[test]
    fn test_partial_fonts() {
        let clock = FakeClock::at(dt(2024, 1, 1, 0, 5));
        let settings = FakeSettings::new(ClockType::H24);
        let mut store = FakeStore::with(&["/fonts/bebas_40.bin"]);
        let mut toolkit = FakeToolkit::default();

        let face = create(&clock, &settings, &mut store, &mut toolkit);

        assert!(face.fonts().large.is_none());
        assert!(face.fonts().small.is_some());
    }

    #[test]
    fn test_no_redraw_within_minute() {
        let clock = FakeClock::at(dt(2024, 1, 1, 13, 5));
        let settings = FakeSettings::new(ClockType::H24);
        let mut store = FakeStore::with(&ALL_PATHS);
        let mut toolkit = FakeToolkit::default();

        let mut face = create(&clock, &settings, &mut store, &mut toolkit);
        let calls = toolkit.set_text_calls.len();
        let realigns = toolkit.realign_calls.len();

        for _ in 0..59 {
            clock.advance_secs(1);
            face.refresh(&mut toolkit);
        }

        assert_eq!(toolkit.set_text_calls.len(), calls);
        assert_eq!(toolkit.realign_calls.len(), realigns);
    }

    #[test]
    fn test_minute_rollover_leaves_date() {
        let clock = FakeClock::at(dt(2024, 1, 1, 13, 5));
        let settings = FakeSettings::new(ClockType::H24);
        let mut store = FakeStore::with(&ALL_PATHS);
        let mut toolkit = FakeToolkit::default();

        let mut face = create(&clock, &settings, &mut store, &mut toolkit);
        toolkit.set_text_calls.clear();

        clock.set(dt(2024, 1, 1, 13, 6));
        face.refresh(&mut toolkit);

        let touched: Vec<WidgetId> = toolkit.set_text_calls.iter().map(|(id, _)| *id).collect();
        assert_eq!(touched, vec![face.hour_label(), face.minute_label()]);
        assert_eq!(toolkit.text(face.minute_label()), "06");
        assert_eq!(toolkit.text(face.date_label()), "MON 01");
    }

    #[test]
    fn test_day_rollover_updates_date() {
        let clock = FakeClock::at(dt(2024, 1, 1, 23, 59));
        let settings = FakeSettings::new(ClockType::H12);
        let mut store = FakeStore::with(&ALL_PATHS);
        let mut toolkit = FakeToolkit::default();

        let mut face = create(&clock, &settings, &mut store, &mut toolkit);
        assert_eq!(toolkit.text(face.hour_label()), "11");

        clock.set(dt(2024, 1, 2, 0, 0));
        face.refresh(&mut toolkit);

        assert_eq!(toolkit.text(face.hour_label()), "12");
        assert_eq!(toolkit.text(face.minute_label()), "00");
        assert_eq!(toolkit.text(face.date_label()), "TUE 02");
        assert_eq!(toolkit.realign_calls.last(), Some(&face.date_label()));
    }

    #[test]
    fn test_monday_through_tuesday() {
        let clock = FakeClock::at(dt(2024, 1, 1, 0, 5));
        let settings = FakeSettings::new(ClockType::H12);
        let mut store = FakeStore::with(&ALL_PATHS);
        let mut toolkit = FakeToolkit::default();

        let mut face = create(&clock, &settings, &mut store, &mut toolkit);
        assert_eq!(toolkit.text(face.hour_label()), "12");
        assert_eq!(toolkit.text(face.minute_label()), "05");
        assert_eq!(toolkit.text(face.date_label()), "MON 01");

        settings.0.set(ClockType::H24);
        clock.set(dt(2024, 1, 1, 13, 5));
        toolkit.set_text_calls.clear();
        face.refresh(&mut toolkit);
        assert_eq!(toolkit.text(face.hour_label()), "13");
        assert_eq!(toolkit.text(face.minute_label()), "05");
        assert_eq!(toolkit.text(face.date_label()), "MON 01");
        assert!(toolkit
            .set_text_calls
            .iter()
            .all(|(id, _)| *id != face.date_label()));

        clock.set(dt(2024, 1, 2, 0, 0));
        face.refresh(&mut toolkit);
        assert_eq!(toolkit.text(face.hour_label()), "00");
        assert_eq!(toolkit.text(face.minute_label()), "00");
        assert_eq!(toolkit.text(face.date_label()), "TUE 02");
    }

    #[test]
    fn test_clock_type_applies_on_next_minute() {
        let clock = FakeClock::at(dt(2024, 1, 1, 13, 5));
        let settings = FakeSettings::new(ClockType::H24);
        let mut store = FakeStore::with(&ALL_PATHS);
        let mut toolkit = FakeToolkit::default();

        let mut face = create(&clock, &settings, &mut store, &mut toolkit);
        assert_eq!(toolkit.text(face.hour_label()), "13");

        settings.0.set(ClockType::H12);
        face.refresh(&mut toolkit);
        assert_eq!(toolkit.text(face.hour_label()), "13");

        clock.advance_secs(60);
        face.refresh(&mut toolkit);
        assert_eq!(toolkit.text(face.hour_label()), "01");
    }

    #[test]
    fn test_teardown_cancels_and_cleans() {
        let clock = FakeClock::at(dt(2024, 1, 1, 13, 5));
        let settings = FakeSettings::new(ClockType::H24);
        let mut store = FakeStore::with(&ALL_PATHS);
        let mut toolkit = FakeToolkit::default();

        let mut face = create(&clock, &settings, &mut store, &mut toolkit);
        face.trigger_mut().poll(0);
        face.teardown(&mut toolkit);

        assert_eq!(toolkit.cleans, 1);
        assert!(toolkit.widgets.is_empty());
    }
}
