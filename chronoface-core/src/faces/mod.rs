//! Watch faces
//!
//! Every face implements the same capability interface: a static
//! availability check, construction, refresh and teardown. The registry
//! picks a face by [`WatchFaceId`] and falls back to the default face when
//! the requested one is missing assets.

pub mod digital;
pub mod neon;
pub mod registry;

pub use digital::DigitalFace;
pub use neon::NeonFace;
pub use registry::{is_available, resolve, ActiveFace};

use crate::config::RefreshConfig;
use crate::traits::{AssetStore, Clock, ClockSettings, Toolkit};
use crate::trigger::RefreshTrigger;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Watch face variant identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WatchFaceId {
    /// Default digital face, needs no optional assets
    #[default]
    Digital,
    /// Neon face with custom fonts and a sun image
    Neon,
}

impl WatchFaceId {
    /// Face used when the requested one is unavailable
    pub const DEFAULT: Self = WatchFaceId::Digital;

    /// All faces in selection order
    pub const ALL: [WatchFaceId; 2] = [WatchFaceId::Digital, WatchFaceId::Neon];

    /// Configuration name
    pub const fn name(self) -> &'static str {
        match self {
            WatchFaceId::Digital => "digital",
            WatchFaceId::Neon => "neon",
        }
    }

    /// Parse a configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    /// Next face in selection order, wrapping around
    pub fn next(self) -> Self {
        match self {
            WatchFaceId::Digital => WatchFaceId::Neon,
            WatchFaceId::Neon => WatchFaceId::Digital,
        }
    }
}

/// Borrowed collaborators a face reads from
///
/// Both outlive the face. The face never mutates them.
pub struct FaceContext<'a, C, S> {
    pub clock: &'a C,
    pub settings: &'a S,
}

impl<'a, C, S> FaceContext<'a, C, S> {
    pub const fn new(clock: &'a C, settings: &'a S) -> Self {
        Self { clock, settings }
    }
}

impl<C, S> Clone for FaceContext<'_, C, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, S> Copy for FaceContext<'_, C, S> {}

/// Capability interface shared by all watch faces
pub trait WatchFace<'a, C, S, T>: Sized
where
    C: Clock,
    S: ClockSettings,
    T: Toolkit,
{
    /// Variant identifier
    const ID: WatchFaceId;

    /// Check that every asset the face needs is present
    ///
    /// Callable before construction; leaves no asset open.
    fn is_available<A: AssetStore>(store: &mut A) -> bool;

    /// Build the face's widgets and render the current time
    ///
    /// Never fails: missing optional assets degrade to toolkit defaults.
    fn create<A: AssetStore>(
        ctx: FaceContext<'a, C, S>,
        store: &mut A,
        toolkit: &mut T,
        config: &RefreshConfig,
    ) -> Self;

    /// Sample the clock and redraw whatever changed
    fn refresh(&mut self, toolkit: &mut T);

    /// The face's refresh trigger
    fn trigger_mut(&mut self) -> &mut RefreshTrigger;

    /// Cancel the trigger and delete the face's widgets
    fn teardown(self, toolkit: &mut T);
}
