//! Face registry
//!
//! Closed set of faces. The surface holds at most one [`ActiveFace`] and
//! dispatches to it without dynamic allocation.

use crate::config::RefreshConfig;
use crate::traits::{AssetStore, Clock, ClockSettings, Toolkit};
use crate::trigger::RefreshTrigger;

use super::{neon, DigitalFace, FaceContext, NeonFace, WatchFace, WatchFaceId};

/// Check whether a face can be shown with the assets in the store
pub fn is_available<A: AssetStore>(id: WatchFaceId, store: &mut A) -> bool {
    match id {
        WatchFaceId::Digital => true,
        WatchFaceId::Neon => neon::is_available(store),
    }
}

/// Pick the requested face, or the default face if it is unavailable
pub fn resolve<A: AssetStore>(requested: WatchFaceId, store: &mut A) -> WatchFaceId {
    if is_available(requested, store) {
        return requested;
    }

    #[cfg(feature = "defmt")]
    defmt::warn!(
        "face {} unavailable, falling back to {}",
        requested,
        WatchFaceId::DEFAULT
    );
    WatchFaceId::DEFAULT
}

/// The face currently on screen
pub enum ActiveFace<'a, C, S, T: Toolkit> {
    Digital(DigitalFace<'a, C, S>),
    Neon(NeonFace<'a, C, S, T>),
}

impl<'a, C, S, T> ActiveFace<'a, C, S, T>
where
    C: Clock,
    S: ClockSettings,
    T: Toolkit,
{
    /// Construct a face by identifier
    ///
    /// Does not check availability; see [`resolve`].
    pub fn create<A: AssetStore>(
        id: WatchFaceId,
        ctx: FaceContext<'a, C, S>,
        store: &mut A,
        toolkit: &mut T,
        config: &RefreshConfig,
    ) -> Self {
        match id {
            WatchFaceId::Digital => {
                ActiveFace::Digital(WatchFace::create(ctx, store, toolkit, config))
            }
            WatchFaceId::Neon => ActiveFace::Neon(WatchFace::create(ctx, store, toolkit, config)),
        }
    }

    pub fn id(&self) -> WatchFaceId {
        match self {
            ActiveFace::Digital(_) => WatchFaceId::Digital,
            ActiveFace::Neon(_) => WatchFaceId::Neon,
        }
    }

    pub fn refresh(&mut self, toolkit: &mut T) {
        match self {
            ActiveFace::Digital(face) => face.refresh(toolkit),
            ActiveFace::Neon(face) => face.refresh(toolkit),
        }
    }

    pub fn trigger_mut(&mut self) -> &mut RefreshTrigger {
        match self {
            ActiveFace::Digital(face) => WatchFace::<C, S, T>::trigger_mut(face),
            ActiveFace::Neon(face) => face.trigger_mut(),
        }
    }

    pub fn teardown(self, toolkit: &mut T) {
        match self {
            ActiveFace::Digital(face) => face.teardown(toolkit),
            ActiveFace::Neon(face) => face.teardown(toolkit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ClockType;
    use crate::testing::{dt, FakeClock, FakeSettings, FakeStore, FakeToolkit};

    const NEON_ASSETS: [&str; 3] = [
        "/fonts/bebas_110.bin",
        "/fonts/bebas_40.bin",
        "/images/neon_sun_small.bin",
    ];

    #[test]
    fn test_availability_needs_only_a_store() {
        let mut empty = FakeStore::with(&[]);
        assert!(is_available(WatchFaceId::Digital, &mut empty));
        assert!(!is_available(WatchFaceId::Neon, &mut empty));
        assert_eq!(empty.opens, 1);

        let mut store = FakeStore::with(&NEON_ASSETS);
        assert!(is_available(WatchFaceId::Neon, &mut store));
        assert_eq!(store.open_handles, 0);
    }

    #[test]
    fn test_resolve_keeps_available_face() {
        let mut store = FakeStore::with(&NEON_ASSETS);
        assert_eq!(resolve(WatchFaceId::Neon, &mut store), WatchFaceId::Neon);
        assert_eq!(resolve(WatchFaceId::Digital, &mut store), WatchFaceId::Digital);
    }

    #[test]
    fn test_resolve_falls_back_when_assets_missing() {
        let mut store = FakeStore::with(&NEON_ASSETS[..2]);
        assert_eq!(resolve(WatchFaceId::Neon, &mut store), WatchFaceId::DEFAULT);
        assert_eq!(store.open_handles, 0);
    }

    #[test]
    fn test_active_face_dispatch() {
        let clock = FakeClock::at(dt(2024, 1, 1, 13, 5));
        let settings = FakeSettings::new(ClockType::H24);
        let mut store = FakeStore::with(&NEON_ASSETS);
        let mut toolkit = FakeToolkit::default();
        let ctx = FaceContext::new(&clock, &settings);
        let config = RefreshConfig::default();

        for id in WatchFaceId::ALL {
            let mut face = ActiveFace::create(id, ctx, &mut store, &mut toolkit, &config);
            assert_eq!(face.id(), id);
            assert_eq!(face.trigger_mut().period_ms(), config.period_ms);
            face.teardown(&mut toolkit);
            assert!(toolkit.widgets.is_empty());
        }
        assert_eq!(toolkit.cleans, 2);
    }
}
