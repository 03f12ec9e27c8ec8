//! House boundary curves and house numbers.

use sphere_chart::{HouseLayout, HouseSystem, compute_houses};

use crate::hook::{DrawHook, HookContext};
use crate::memo::Memo;
use crate::projector::SkyProjector;
use crate::surface::{DrawSurface, Stroke, TextStyle};
use crate::trace::{RenderStats, stroke_curve};

pub const HOUSE_STROKE: Stroke = Stroke::new("#00ffff", 1.0).with_alpha(0.4);
pub const HOUSE_LABEL_STYLE: TextStyle = TextStyle::new("#00ffff", 14.0).bold();

/// Stroke every curve of a layout and place its house numbers.
pub fn draw_house_layout<P, S>(p: &P, s: &mut S, layout: &HouseLayout, stats: &mut RenderStats)
where
    P: SkyProjector + ?Sized,
    S: DrawSurface + ?Sized,
{
    for curve in &layout.curves {
        let steps = curve.geometry.sample_count().saturating_sub(1);
        stroke_curve(p, s, steps, &HOUSE_STROKE, stats, |i| curve.geometry.sample(i));
    }
    for (house, point) in layout.label_points() {
        let Some(pt) = p.project_sky(point) else {
            continue;
        };
        s.fill_text(&house.to_string(), pt.sx, pt.sy, &HOUSE_LABEL_STYLE);
        stats.labels += 1;
    }
}

type LayoutKey = (HouseSystem, u64, u64);

/// Draws the frame's selected house system. Layouts are recomputed only
/// when the system, sidereal angle or latitude changes.
#[derive(Debug, Default)]
pub struct HouseLayer {
    layouts: Memo<LayoutKey, HouseLayout>,
}

impl HouseLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(&mut self, system: HouseSystem, lst_rad: f64, latitude_rad: f64) -> &HouseLayout {
        let key = (system, lst_rad.to_bits(), latitude_rad.to_bits());
        self.layouts
            .get_or_compute(key, || compute_houses(system, lst_rad, latitude_rad))
    }

    pub fn recomputations(&self) -> u64 {
        self.layouts.misses()
    }
}

impl DrawHook for HouseLayer {
    fn name(&self) -> &str {
        "houses"
    }

    fn draw(&mut self, ctx: &HookContext<'_>, surface: &mut dyn DrawSurface, stats: &mut RenderStats) {
        let (Some(system), Some(projector)) = (ctx.frame.house_system, ctx.projector) else {
            return;
        };
        let layout = self.layout(
            system,
            ctx.frame.sidereal_angle_rad(),
            ctx.frame.observer.latitude_rad(),
        );
        draw_house_layout(projector, surface, layout, stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::BodyPositions;
    use crate::frame::FrameState;
    use crate::projector::FrameProjector;
    use crate::surface::RecordingSurface;
    use sphere_time::Instant;

    fn run(frame: &FrameState, layer: &mut HouseLayer, with_projector: bool) -> RecordingSurface {
        let projector = FrameProjector::new(frame);
        let positions = BodyPositions::new();
        let ctx = HookContext {
            frame,
            projector: with_projector.then_some(&projector as &dyn SkyProjector),
            positions: &positions,
            bodies: &[],
        };
        let mut s = RecordingSurface::new(frame.width, frame.height);
        layer.draw(&ctx, &mut s, &mut RenderStats::default());
        s
    }

    #[test]
    fn no_system_draws_nothing() {
        let frame = FrameState::new(Instant::J2000, 800.0, 800.0);
        let s = run(&frame, &mut HouseLayer::new(), true);
        assert!(s.commands().is_empty());
    }

    #[test]
    fn missing_projector_draws_nothing() {
        let frame = FrameState {
            house_system: Some(HouseSystem::Equal),
            ..FrameState::new(Instant::J2000, 800.0, 800.0)
        };
        let s = run(&frame, &mut HouseLayer::new(), false);
        assert!(s.commands().is_empty());
    }

    #[test]
    fn each_system_draws_curves_and_numbers() {
        for &system in HouseSystem::all() {
            let frame = FrameState {
                house_system: Some(system),
                ..FrameState::new(Instant::J2000, 800.0, 800.0)
            };
            let s = run(&frame, &mut HouseLayer::new(), true);
            assert!(s.stroked_sub_paths() > 0, "{system}");
            assert!(!s.texts().is_empty(), "{system}");
            assert!(s.texts().iter().all(|t| t.parse::<u8>().is_ok_and(|n| (1..=12).contains(&n))));
        }
    }

    #[test]
    fn layout_is_reused_for_same_frame() {
        let frame = FrameState {
            house_system: Some(HouseSystem::Placidus),
            ..FrameState::new(Instant::J2000, 800.0, 800.0)
        };
        let mut layer = HouseLayer::new();
        run(&frame, &mut layer, true);
        run(&frame, &mut layer, true);
        assert_eq!(layer.recomputations(), 1);
    }
}
