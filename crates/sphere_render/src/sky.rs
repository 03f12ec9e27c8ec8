//! Reference curves and markers: horizon, grids, great circles, zodiac,
//! cardinal directions and zenith/nadir.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use sphere_chart::{ALL_SIGNS, SkyPoint};
use sphere_frames::{ecliptic_to_equatorial, horizon_point};

use crate::frame::RenderQuality;
use crate::projector::SkyProjector;
use crate::surface::{DrawSurface, Stroke, TextStyle};
use crate::trace::{RenderStats, append_runs, lerp_param, stroke_curve, trace_curve};

pub const GREAT_CIRCLE_STEPS: usize = 360;
/// Half-width of the ecliptic band, degrees.
pub const ECLIPTIC_BAND_HALF_WIDTH_DEG: f64 = 8.0;

pub const HORIZON_STROKE: Stroke = Stroke::new("#008000", 2.0);
pub const ALT_GRID_STROKE: Stroke = Stroke::new("#ffffff", 0.5).with_alpha(0.5);
pub const MERIDIAN_STROKE: Stroke = Stroke::new("#4097E8", 2.0);
pub const EQUATOR_STROKE: Stroke = Stroke::new("#ff0000", 2.0);
pub const ECLIPTIC_STROKE: Stroke = Stroke::new("#ffa500", 2.0);
pub const BAND_STROKE: Stroke = Stroke::new("#ffa500", 1.0);
pub const RA_LINE_STROKE: Stroke = Stroke::new("#3232ff", 1.0).with_alpha(0.8);
pub const DEC_LINE_STROKE: Stroke = Stroke::new("#ff0000", 0.5).with_alpha(0.7);
const ZODIAC_SYMBOL_COLOR: &str = "#ffa500";
const ZENITH_COLOR: &str = "#ff0000";
const ZENITH_MARKER_RADIUS: f64 = 2.5;
const ZENITH_LABEL_OFFSET: f64 = 12.0;

/// Grid altitudes/declinations: -80 to 80 every 10 degrees.
fn grid_degrees() -> impl Iterator<Item = f64> {
    (-8..=8).map(|k| k as f64 * 10.0)
}

fn equatorial(ra_rad: f64, dec_rad: f64) -> Option<SkyPoint> {
    Some(SkyPoint::Equatorial { ra_rad, dec_rad })
}

fn ecliptic(lon_rad: f64, lat_rad: f64) -> Option<SkyPoint> {
    let (ra_rad, dec_rad) = ecliptic_to_equatorial(lon_rad, lat_rad);
    equatorial(ra_rad, dec_rad)
}

pub fn draw_horizon<P, S>(p: &P, s: &mut S, stats: &mut RenderStats)
where
    P: SkyProjector + ?Sized,
    S: DrawSurface + ?Sized,
{
    let n = GREAT_CIRCLE_STEPS;
    stroke_curve(p, s, n, &HORIZON_STROKE, stats, |i| {
        Some(SkyPoint::Horizontal(horizon_point(0.0, lerp_param(i, n, 0.0, TAU))))
    });
}

/// Altitude circles at ±10 to ±80 degrees.
pub fn draw_alt_grid<P, S>(p: &P, s: &mut S, quality: RenderQuality, stats: &mut RenderStats)
where
    P: SkyProjector + ?Sized,
    S: DrawSurface + ?Sized,
{
    let n = quality.pick(144, 72);
    for alt in grid_degrees().filter(|a| *a != 0.0) {
        let alt = alt.to_radians();
        let curve = trace_curve(p, n, |i| {
            Some(SkyPoint::Horizontal(horizon_point(alt, lerp_param(i, n, 0.0, TAU))))
        });
        append_runs(s, &curve, stats);
    }
    s.stroke(&ALT_GRID_STROKE);
}

/// The local meridian: the hour circle at RA = LST, declination swept
/// through the full turn so both halves are traced.
pub fn draw_meridian<P, S>(p: &P, s: &mut S, lst_rad: f64, stats: &mut RenderStats)
where
    P: SkyProjector + ?Sized,
    S: DrawSurface + ?Sized,
{
    let n = GREAT_CIRCLE_STEPS;
    stroke_curve(p, s, n, &MERIDIAN_STROKE, stats, |i| {
        equatorial(lst_rad, lerp_param(i, n, 0.0, TAU) - PI)
    });
}

pub fn draw_prime_vertical<P, S>(p: &P, s: &mut S, stats: &mut RenderStats)
where
    P: SkyProjector + ?Sized,
    S: DrawSurface + ?Sized,
{
    let n = GREAT_CIRCLE_STEPS;
    stroke_curve(p, s, n, &MERIDIAN_STROKE, stats, |i| {
        let (sin_t, cos_t) = lerp_param(i, n, 0.0, TAU).sin_cos();
        Some(SkyPoint::Horizontal([cos_t, 0.0, sin_t]))
    });
}

pub fn draw_equator<P, S>(p: &P, s: &mut S, stats: &mut RenderStats)
where
    P: SkyProjector + ?Sized,
    S: DrawSurface + ?Sized,
{
    let n = GREAT_CIRCLE_STEPS;
    stroke_curve(p, s, n, &EQUATOR_STROKE, stats, |i| {
        equatorial(lerp_param(i, n, 0.0, TAU), 0.0)
    });
}

pub fn draw_ecliptic<P, S>(p: &P, s: &mut S, stats: &mut RenderStats)
where
    P: SkyProjector + ?Sized,
    S: DrawSurface + ?Sized,
{
    let n = GREAT_CIRCLE_STEPS;
    stroke_curve(p, s, n, &ECLIPTIC_STROKE, stats, |i| {
        ecliptic(lerp_param(i, n, 0.0, TAU), 0.0)
    });
}

/// Parallels of ecliptic latitude ±8° bounding the zodiac band.
pub fn draw_ecliptic_band<P, S>(p: &P, s: &mut S, quality: RenderQuality, stats: &mut RenderStats)
where
    P: SkyProjector + ?Sized,
    S: DrawSurface + ?Sized,
{
    let n = quality.pick(180, 90);
    for sign in [1.0, -1.0] {
        let beta = (sign * ECLIPTIC_BAND_HALF_WIDTH_DEG).to_radians();
        stroke_curve(p, s, n, &BAND_STROKE, stats, |i| {
            ecliptic(lerp_param(i, n, 0.0, TAU), beta)
        });
    }
}

/// Twelve sign boundaries across the band, stroked as one path.
pub fn draw_zodiac_divisions<P, S>(
    p: &P,
    s: &mut S,
    quality: RenderQuality,
    stats: &mut RenderStats,
) where
    P: SkyProjector + ?Sized,
    S: DrawSurface + ?Sized,
{
    let n = quality.pick(20, 12);
    let half = ECLIPTIC_BAND_HALF_WIDTH_DEG.to_radians();
    for k in 0..12 {
        let lambda = (k as f64 * 30.0).to_radians();
        let curve = trace_curve(p, n, |i| ecliptic(lambda, lerp_param(i, n, -half, half)));
        append_runs(s, &curve, stats);
    }
    s.stroke(&BAND_STROKE);
}

/// Sign glyphs at the middle of each sign on the ecliptic.
pub fn draw_zodiac_symbols<P, S>(
    p: &P,
    s: &mut S,
    quality: RenderQuality,
    stats: &mut RenderStats,
) where
    P: SkyProjector + ?Sized,
    S: DrawSurface + ?Sized,
{
    let style = TextStyle::new(ZODIAC_SYMBOL_COLOR, quality.pick(40, 30) as f64);
    for sign in ALL_SIGNS {
        let lambda = (sign.start_deg() + 15.0).to_radians();
        let Some(point) = ecliptic(lambda, 0.0).and_then(|sp| p.project_sky(sp)) else {
            continue;
        };
        s.fill_text(sign.glyph(), point.sx, point.sy, &style);
        stats.labels += 1;
    }
}

/// Twelve hour circles, every 2h of right ascension.
pub fn draw_ra_lines<P, S>(p: &P, s: &mut S, quality: RenderQuality, stats: &mut RenderStats)
where
    P: SkyProjector + ?Sized,
    S: DrawSurface + ?Sized,
{
    let n = quality.pick(40, 25);
    for k in 0..12 {
        let ra = (k as f64 * 30.0).to_radians();
        let curve = trace_curve(p, n, |i| equatorial(ra, lerp_param(i, n, -FRAC_PI_2, FRAC_PI_2)));
        append_runs(s, &curve, stats);
    }
    s.stroke(&RA_LINE_STROKE);
}

/// Declination parallels from -80 to 80 degrees.
pub fn draw_dec_lines<P, S>(p: &P, s: &mut S, quality: RenderQuality, stats: &mut RenderStats)
where
    P: SkyProjector + ?Sized,
    S: DrawSurface + ?Sized,
{
    let n = quality.pick(48, 24);
    for dec in grid_degrees() {
        let dec = dec.to_radians();
        let curve = trace_curve(p, n, |i| equatorial(lerp_param(i, n, 0.0, TAU), dec));
        append_runs(s, &curve, stats);
    }
    s.stroke(&DEC_LINE_STROKE);
}

/// N/E/S/W on the horizon, pushed outward from the sphere center.
pub fn draw_directions<P, S>(p: &P, s: &mut S, style: &TextStyle, stats: &mut RenderStats)
where
    P: SkyProjector + ?Sized,
    S: DrawSurface + ?Sized,
{
    let (cx, cy) = p.center();
    for (label, az_deg) in [("N", 0.0_f64), ("E", 90.0), ("S", 180.0), ("W", 270.0)] {
        let az = az_deg.to_radians();
        let Some(pt) = p.project_horizontal(&[az.sin(), -az.cos(), 0.0]) else {
            continue;
        };
        let (dx, dy) = (pt.sx - cx, pt.sy - cy);
        let len = dx.hypot(dy);
        let push = style.size_px * 0.7;
        let (x, y) = if len > 1e-9 {
            (pt.sx + dx / len * push, pt.sy + dy / len * push)
        } else {
            (pt.sx, pt.sy)
        };
        s.fill_text(label, x, y, style);
        stats.labels += 1;
    }
}

pub fn draw_zenith_nadir<P, S>(p: &P, s: &mut S, stats: &mut RenderStats)
where
    P: SkyProjector + ?Sized,
    S: DrawSurface + ?Sized,
{
    let style = TextStyle::new(ZENITH_COLOR, 12.0).bold();
    for (label, z, offset) in [("Z", 1.0, -ZENITH_LABEL_OFFSET), ("N", -1.0, ZENITH_LABEL_OFFSET)] {
        let Some(pt) = p.project_horizontal(&[0.0, 0.0, z]) else {
            continue;
        };
        s.fill_circle(pt.sx, pt.sy, ZENITH_MARKER_RADIUS, ZENITH_COLOR);
        s.fill_text(label, pt.sx, pt.sy + offset, &style);
        stats.labels += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameState;
    use crate::projector::FrameProjector;
    use crate::surface::RecordingSurface;
    use sphere_time::Instant;

    fn setup() -> (FrameProjector, RecordingSurface) {
        let frame = FrameState::new(Instant::J2000, 800.0, 800.0);
        (FrameProjector::new(&frame), RecordingSurface::new(800.0, 800.0))
    }

    #[test]
    fn horizon_is_one_arc_from_default_view() {
        let (p, mut s) = setup();
        let mut stats = RenderStats::default();
        draw_horizon(&p, &mut s, &mut stats);
        assert_eq!(stats.samples, 361);
        assert_eq!(s.stroked_sub_paths(), 1);
    }

    #[test]
    fn interactive_quality_halves_grid_samples() {
        let (p, mut s) = setup();
        let mut full = RenderStats::default();
        let mut fast = RenderStats::default();
        draw_dec_lines(&p, &mut s, RenderQuality::Full, &mut full);
        draw_dec_lines(&p, &mut s, RenderQuality::Interactive, &mut fast);
        assert_eq!(full.samples, 17 * 49);
        assert_eq!(fast.samples, 17 * 25);
    }

    #[test]
    fn east_label_lies_right_of_center() {
        let (p, mut s) = setup();
        let mut stats = RenderStats::default();
        draw_directions(&p, &mut s, &TextStyle::new("#ffffff", 20.0), &mut stats);
        // Facing east, W is on the far hemisphere.
        let texts = s.texts();
        assert!(texts.contains(&"E"));
        assert!(!texts.contains(&"W"));
    }

    #[test]
    fn zenith_marker_with_label_above() {
        let (p, mut s) = setup();
        let mut stats = RenderStats::default();
        draw_zenith_nadir(&p, &mut s, &mut stats);
        assert_eq!(s.texts(), vec!["Z", "N"]);
        assert_eq!(stats.labels, 2);
    }

    #[test]
    fn zodiac_symbols_only_where_visible() {
        let (p, mut s) = setup();
        let mut stats = RenderStats::default();
        draw_zodiac_symbols(&p, &mut s, RenderQuality::Full, &mut stats);
        assert!(stats.labels > 0 && stats.labels < 12);
    }
}
