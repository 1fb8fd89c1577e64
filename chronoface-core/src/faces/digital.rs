//! Digital watch face
//!
//! `HH:MM` and the date in the toolkit default font. Needs no assets, so it
//! is always available and serves as the fallback face.

use crate::config::RefreshConfig;
use crate::format::{format_date, format_time};
use crate::refresh::RefreshCycle;
use crate::traits::{
    Align, AssetStore, Clock, ClockSettings, Color, LabelStyle, Placement, Toolkit, WidgetId,
};
use crate::trigger::RefreshTrigger;

use super::{FaceContext, WatchFace, WatchFaceId};

pub struct DigitalFace<'a, C, S> {
    ctx: FaceContext<'a, C, S>,
    cycle: RefreshCycle,
    time: WidgetId,
    date: WidgetId,
    trigger: RefreshTrigger,
}

impl<C, S> DigitalFace<'_, C, S> {
    pub fn time_label(&self) -> WidgetId {
        self.time
    }

    pub fn date_label(&self) -> WidgetId {
        self.date
    }
}

impl<'a, C, S, T> WatchFace<'a, C, S, T> for DigitalFace<'a, C, S>
where
    C: Clock,
    S: ClockSettings,
    T: Toolkit,
{
    const ID: WatchFaceId = WatchFaceId::Digital;

    fn is_available<A: AssetStore>(_store: &mut A) -> bool {
        true
    }

    fn create<A: AssetStore>(
        ctx: FaceContext<'a, C, S>,
        _store: &mut A,
        toolkit: &mut T,
        config: &RefreshConfig,
    ) -> Self {
        toolkit.create_background(Color::BLACK, 0);
        let time = toolkit.create_label(
            "00:00",
            LabelStyle {
                font: None,
                color: Some(Color::WHITE),
            },
            Placement::on_screen(Align::Center, 0, -20),
        );
        let date = toolkit.create_label(
            "MON 01",
            LabelStyle {
                font: None,
                color: Some(Color::WHITE),
            },
            Placement::within(time, Align::InBottomMid, 0, 40),
        );

        let mut face = Self {
            ctx,
            cycle: RefreshCycle::new(),
            time,
            date,
            trigger: config.trigger(),
        };
        face.refresh(toolkit);
        face
    }

    fn refresh(&mut self, toolkit: &mut T) {
        let Some(update) = self.cycle.sample(self.ctx.clock.timestamp()) else {
            return;
        };

        let text = format_time(&update.time, self.ctx.settings.clock_type());
        toolkit.set_text(self.time, text.as_str());
        toolkit.realign(self.time);

        if update.date_changed {
            toolkit.set_text(self.date, format_date(&update.time).as_str());
            toolkit.realign(self.date);
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
