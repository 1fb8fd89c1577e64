//! Display surface
//!
//! Owns the toolkit and the face on screen. Switching faces always tears
//! down the old one before the new one creates its widgets, so at most one
//! face is active at a time.

use crate::config::RefreshConfig;
use crate::faces::{registry, ActiveFace, FaceContext, WatchFaceId};
use crate::traits::{AssetStore, Clock, ClockSettings, Toolkit};

pub struct Surface<'a, C, S, T: Toolkit> {
    toolkit: T,
    current: Option<ActiveFace<'a, C, S, T>>,
    ctx: FaceContext<'a, C, S>,
    config: RefreshConfig,
}

impl<'a, C, S, T> Surface<'a, C, S, T>
where
    C: Clock,
    S: ClockSettings,
    T: Toolkit,
{
    /// Create an empty surface
    pub fn new(toolkit: T, ctx: FaceContext<'a, C, S>, config: RefreshConfig) -> Self {
        Self {
            toolkit,
            current: None,
            ctx,
            config,
        }
    }

    /// Show a face, replacing the current one
    ///
    /// Falls back to the default face if the requested one is unavailable.
    /// Returns the face actually shown.
    pub fn show<A: AssetStore>(&mut self, requested: WatchFaceId, store: &mut A) -> WatchFaceId {
        self.release();

        let id = registry::resolve(requested, store);
        let face = ActiveFace::create(id, self.ctx, store, &mut self.toolkit, &self.config);

        #[cfg(feature = "defmt")]
        defmt::info!("showing face {}", id);

        self.current = Some(face);
        id
    }

    /// Tear down the current face
    ///
    /// Returns `false` if no face was shown.
    pub fn release(&mut self) -> bool {
        match self.current.take() {
            Some(face) => {
                face.teardown(&mut self.toolkit);
                true
            }
            None => false,
        }
    }

    /// Refresh the current face if its trigger is due
    ///
    /// Returns `true` if the face was refreshed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(face) = self.current.as_mut() else {
            return false;
        };
        if !face.trigger_mut().poll(now_ms) {
            return false;
        }
        face.refresh(&mut self.toolkit);
        true
    }

    pub fn current(&self) -> Option<&ActiveFace<'a, C, S, T>> {
        self.current.as_ref()
    }

    pub fn current_id(&self) -> Option<WatchFaceId> {
        self.current.as_ref().map(ActiveFace::id)
    }

    pub fn config(&self) -> &RefreshConfig {
        &self.config
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    pub fn toolkit_mut(&mut self) -> &mut T {
        &mut self.toolkit
    }

    /// Release the current face and return the toolkit
    pub fn into_toolkit(mut self) -> T {
        self.release();
        self.toolkit
    }
}
