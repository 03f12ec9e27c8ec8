//! Extension point for overlays drawn after the built-in layers.

use crate::bodies::BodyVector;
use crate::ephemeris::BodyPositions;
use crate::frame::FrameState;
use crate::projector::SkyProjector;
use crate::surface::DrawSurface;
use crate::trace::RenderStats;

/// What an overlay may read while drawing.
pub struct HookContext<'a> {
    pub frame: &'a FrameState,
    /// `None` when no projection is available; overlays then draw nothing.
    pub projector: Option<&'a dyn SkyProjector>,
    pub positions: &'a BodyPositions,
    pub bodies: &'a [BodyVector],
}

/// An overlay drawn after the sky, in registration order.
pub trait DrawHook {
    fn name(&self) -> &str;

    fn draw(&mut self, ctx: &HookContext<'_>, surface: &mut dyn DrawSurface, stats: &mut RenderStats);
}
