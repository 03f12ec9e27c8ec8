//! The Moon's mean orbital plane as a great circle.

use sphere_chart::{DEFAULT_ORBIT_STEP_DEG, OrbitPoint, SkyPoint, lunar_orbit_points};
use sphere_time::Instant;

use crate::hook::{DrawHook, HookContext};
use crate::memo::Memo;
use crate::surface::{DrawSurface, Stroke};
use crate::trace::{RenderStats, stroke_curve};

pub const LUNAR_ORBIT_STROKE: Stroke = Stroke::new("#c0c0ff", 1.0).with_alpha(0.7);

/// Draws the lunar orbit when its layer is enabled. The sampled orbit is
/// cached per instant.
#[derive(Debug, Default)]
pub struct LunarOrbitLayer {
    points: Memo<Instant, Vec<OrbitPoint>>,
}

impl LunarOrbitLayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawHook for LunarOrbitLayer {
    fn name(&self) -> &str {
        "lunar-orbit"
    }

    fn draw(&mut self, ctx: &HookContext<'_>, surface: &mut dyn DrawSurface, stats: &mut RenderStats) {
        let Some(projector) = ctx.projector else {
            return;
        };
        if !ctx.frame.layers.lunar_orbit {
            return;
        }
        let instant = ctx.frame.instant;
        let points = self
            .points
            .get_or_compute(instant, || lunar_orbit_points(instant, DEFAULT_ORBIT_STEP_DEG));
        let steps = points.len().saturating_sub(1);
        stroke_curve(projector, surface, steps, &LUNAR_ORBIT_STROKE, stats, |i| {
            points.get(i).map(|p| SkyPoint::Equatorial {
                ra_rad: p.ra_rad,
                dec_rad: p.dec_rad,
            })
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayerVisibility;
    use crate::ephemeris::BodyPositions;
    use crate::frame::FrameState;
    use crate::projector::{FrameProjector, SkyProjector};
    use crate::surface::RecordingSurface;

    fn draw(frame: &FrameState) -> (RecordingSurface, RenderStats) {
        let projector = FrameProjector::new(frame);
        let positions = BodyPositions::new();
        let ctx = HookContext {
            frame,
            projector: Some(&projector as &dyn SkyProjector),
            positions: &positions,
            bodies: &[],
        };
        let mut s = RecordingSurface::new(frame.width, frame.height);
        let mut stats = RenderStats::default();
        LunarOrbitLayer::new().draw(&ctx, &mut s, &mut stats);
        (s, stats)
    }

    #[test]
    fn off_by_default() {
        let (s, _) = draw(&FrameState::new(Instant::J2000, 800.0, 800.0));
        assert!(s.commands().is_empty());
    }

    #[test]
    fn traces_seventy_three_samples() {
        let frame = FrameState {
            layers: LayerVisibility {
                lunar_orbit: true,
                ..LayerVisibility::default()
            },
            ..FrameState::new(Instant::J2000, 800.0, 800.0)
        };
        let (s, stats) = draw(&frame);
        assert_eq!(stats.samples, 73);
        assert!(s.stroked_sub_paths() >= 1);
    }
}
