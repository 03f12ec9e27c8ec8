//! Aspect rays between bodies on the sphere.

use sphere_chart::{Aspect, find_aspects, ray_style};

use crate::bodies::{BodyVector, project_body};
use crate::ephemeris::BodyPositions;
use crate::hook::{DrawHook, HookContext};
use crate::projector::SkyProjector;
use crate::surface::{DrawSurface, Stroke};
use crate::trace::RenderStats;

/// Draw a straight ray for each aspect whose two bodies are both projected.
///
/// Returns the number of rays drawn.
pub fn draw_aspect_rays<P, S>(
    p: &P,
    s: &mut S,
    aspects: &[Aspect],
    bodies: &[BodyVector],
    stats: &mut RenderStats,
) -> usize
where
    P: SkyProjector + ?Sized,
    S: DrawSurface + ?Sized,
{
    let screen = |body| {
        bodies
            .iter()
            .find(|v| v.body == body)
            .and_then(|v| project_body(p, v))
    };
    let mut drawn = 0;
    for aspect in aspects {
        let (Some(a), Some(b)) = (screen(aspect.first), screen(aspect.second)) else {
            continue;
        };
        let style = ray_style(&aspect.matched, a.back_side || b.back_side);
        s.move_to(a.sx, a.sy);
        s.line_to(b.sx, b.sy);
        s.stroke(&Stroke::new(style.color, style.width).with_alpha(style.alpha));
        stats.sub_paths += 1;
        drawn += 1;
    }
    drawn
}

/// Aspects among the bodies with known positions.
pub fn aspects_for(positions: &BodyPositions) -> Vec<Aspect> {
    find_aspects(&positions.ecliptic_longitudes())
}

/// Draws aspect rays when the aspect layer is enabled.
#[derive(Debug, Default)]
pub struct AspectLayer {
    last_count: usize,
}

impl AspectLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rays drawn in the most recent frame.
    pub fn last_count(&self) -> usize {
        self.last_count
    }
}

impl DrawHook for AspectLayer {
    fn name(&self) -> &str {
        "aspects"
    }

    fn draw(&mut self, ctx: &HookContext<'_>, surface: &mut dyn DrawSurface, stats: &mut RenderStats) {
        self.last_count = 0;
        let Some(projector) = ctx.projector else {
            return;
        };
        if !ctx.frame.layers.aspects {
            return;
        }
        let aspects = aspects_for(ctx.positions);
        self.last_count = draw_aspect_rays(projector, surface, &aspects, ctx.bodies, stats);
    }
}
