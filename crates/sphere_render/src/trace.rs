//! Parametric curve tracing with pen-up on culled samples.

use sphere_chart::SkyPoint;
use sphere_frames::ScreenPoint;

use crate::projector::SkyProjector;
use crate::surface::{DrawSurface, Stroke};

/// Counters accumulated while drawing a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Sub-paths stroked.
    pub sub_paths: usize,
    /// Curve samples evaluated.
    pub samples: usize,
    /// Curve samples that were culled or undefined.
    pub culled: usize,
    pub bodies_visible: usize,
    pub stars_drawn: usize,
    pub labels: usize,
}

impl RenderStats {
    pub fn merge(&mut self, other: &Self) {
        self.sub_paths += other.sub_paths;
        self.samples += other.samples;
        self.culled += other.culled;
        self.bodies_visible += other.bodies_visible;
        self.stars_drawn += other.stars_drawn;
        self.labels += other.labels;
    }
}

/// Projected samples of one curve; `None` marks a culled sample.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TracedCurve {
    pub points: Vec<Option<ScreenPoint>>,
}

impl TracedCurve {
    pub fn point(&self, i: usize) -> Option<ScreenPoint> {
        self.points.get(i).copied().flatten()
    }

    pub fn culled(&self) -> usize {
        self.points.iter().filter(|p| p.is_none()).count()
    }

    /// Maximal runs of consecutive visible samples.
    pub fn runs(&self) -> Vec<Vec<ScreenPoint>> {
        let mut runs = Vec::new();
        let mut current = Vec::new();
        for p in &self.points {
            match p {
                Some(p) => current.push(*p),
                None => {
                    if !current.is_empty() {
                        runs.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }
}

/// Sample `steps + 1` points, `sample(0)` to `sample(steps)`, and project them.
///
/// A sampler returning `None` marks the parameter as undefined, which
/// breaks the curve the same way a culled sample does.
pub fn trace_curve<P, F>(projector: &P, steps: usize, mut sample: F) -> TracedCurve
where
    P: SkyProjector + ?Sized,
    F: FnMut(usize) -> Option<SkyPoint>,
{
    let points = (0..=steps)
        .map(|i| sample(i).and_then(|p| projector.project_sky(p)))
        .collect();
    TracedCurve { points }
}

/// Parameter `i` of `steps`, spread uniformly over `[start, end]`.
pub fn lerp_param(i: usize, steps: usize, start: f64, end: f64) -> f64 {
    if steps == 0 {
        return start;
    }
    start + (end - start) * i as f64 / steps as f64
}

/// Add a traced curve to the current path as one sub-path per visible run.
/// Runs with fewer than two points are dropped.
pub fn append_runs<S: DrawSurface + ?Sized>(
    surface: &mut S,
    curve: &TracedCurve,
    stats: &mut RenderStats,
) {
    stats.samples += curve.points.len();
    stats.culled += curve.culled();
    for run in curve.runs() {
        if run.len() < 2 {
            continue;
        }
        surface.move_to(run[0].sx, run[0].sy);
        for p in &run[1..] {
            surface.line_to(p.sx, p.sy);
        }
        stats.sub_paths += 1;
    }
}

/// Trace and stroke one curve.
pub fn stroke_curve<P, S, F>(
    projector: &P,
    surface: &mut S,
    steps: usize,
    stroke: &Stroke,
    stats: &mut RenderStats,
    sample: F,
) where
    P: SkyProjector + ?Sized,
    S: DrawSurface + ?Sized,
    F: FnMut(usize) -> Option<SkyPoint>,
{
    let curve = trace_curve(projector, steps, sample);
    append_runs(surface, &curve, stats);
    surface.stroke(stroke);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameState;
    use crate::projector::FrameProjector;
    use crate::surface::RecordingSurface;
    use sphere_time::Instant;
    use std::f64::consts::TAU;

    fn projector() -> FrameProjector {
        FrameProjector::new(&FrameState::new(Instant::J2000, 800.0, 800.0))
    }

    #[test]
    fn half_hidden_circle_breaks_into_one_arc() {
        // Horizon circle starting due north: the eastern half is visible.
        let p = projector();
        let curve = trace_curve(&p, 360, |i| {
            let az = lerp_param(i, 360, 0.0, TAU);
            Some(SkyPoint::Horizontal([az.sin(), -az.cos(), 0.0]))
        });
        assert_eq!(curve.points.len(), 361);
        let runs = curve.runs();
        assert_eq!(runs.len(), 1);
        assert!((180..=181).contains(&runs[0].len()), "{}", runs[0].len());
    }

    #[test]
    fn undefined_samples_split_runs() {
        let p = projector();
        let curve = trace_curve(&p, 10, |i| {
            (i != 5).then_some(SkyPoint::Horizontal([1.0, 0.0, i as f64 * 0.01]))
        });
        assert_eq!(curve.runs().len(), 2);
        assert_eq!(curve.culled(), 1);
    }

    #[test]
    fn stroke_counts_sub_paths() {
        let p = projector();
        let mut s = RecordingSurface::new(800.0, 800.0);
        let mut stats = RenderStats::default();
        stroke_curve(&p, &mut s, 4, &Stroke::new("red", 1.0), &mut stats, |i| {
            Some(SkyPoint::Horizontal([1.0, 0.1 * i as f64, 0.0]))
        });
        assert_eq!(stats.sub_paths, 1);
        assert_eq!(stats.samples, 5);
        assert_eq!(s.stroked_sub_paths(), 1);
    }

    #[test]
    fn lone_points_are_not_stroked() {
        let p = projector();
        let mut s = RecordingSurface::new(800.0, 800.0);
        let mut stats = RenderStats::default();
        stroke_curve(&p, &mut s, 2, &Stroke::new("red", 1.0), &mut stats, |i| {
            (i == 1).then_some(SkyPoint::Horizontal([1.0, 0.0, 0.0]))
        });
        assert_eq!(stats.sub_paths, 0);
        assert!(s.commands().is_empty());
    }
}
