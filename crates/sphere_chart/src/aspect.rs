//! Aspects between bodies from their ecliptic longitudes.
//!
//! Two bodies are in aspect when their separation falls within the
//! combined orb of one of the five classical aspect angles. The orb of a
//! pair is the mean of the two bodies' moieties. Aspect angles are tried
//! in a fixed priority order and the first match wins.

use crate::body::Body;
use crate::util::{normalize_360, separation_deg};

/// The five classical aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

/// Aspects in matching priority order.
pub const ASPECT_PRIORITY: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
];

/// Character of an aspect, used for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectNature {
    Conjunction,
    /// Trine and sextile.
    Harmonic,
    /// Opposition and square.
    Dynamic,
}

impl AspectNature {
    pub const fn color(self) -> &'static str {
        match self {
            Self::Conjunction => "#ffff00",
            Self::Harmonic => "#00ffff",
            Self::Dynamic => "#ff3333",
        }
    }
}

impl AspectKind {
    /// Exact aspect angle in degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Opposition => 180.0,
            Self::Trine => 120.0,
            Self::Square => 90.0,
            Self::Sextile => 60.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Opposition => "Opposition",
            Self::Trine => "Trine",
            Self::Square => "Square",
            Self::Sextile => "Sextile",
        }
    }

    pub const fn nature(self) -> AspectNature {
        match self {
            Self::Conjunction => AspectNature::Conjunction,
            Self::Trine | Self::Sextile => AspectNature::Harmonic,
            Self::Opposition | Self::Square => AspectNature::Dynamic,
        }
    }
}

/// A matched aspect angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectMatch {
    pub kind: AspectKind,
    /// Separation of the two longitudes, [0, 180] degrees.
    pub separation_deg: f64,
    /// Distance from exact, degrees.
    pub delta_deg: f64,
    /// Orb that was allowed, degrees.
    pub orb_deg: f64,
    /// `max(0, 1 - delta/orb)`, in [0, 1].
    pub intensity: f64,
}

/// An aspect between two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aspect {
    pub first: Body,
    pub second: Body,
    pub matched: AspectMatch,
}

/// Stroke parameters of an aspect ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayStyle {
    pub color: &'static str,
    /// Opacity in [0, 1].
    pub alpha: f64,
    pub width: f64,
}

/// Overall ray opacity before depth dimming.
pub const RAY_FADE_OPACITY: f64 = 0.9;
/// Opacity factor when either endpoint is on the far hemisphere.
pub const RAY_BACK_SIDE_DIM: f64 = 0.5;

/// Combined orb of a pair, or `None` if either body has no moiety.
pub fn combined_orb_deg(a: Body, b: Body) -> Option<f64> {
    Some((a.moiety_deg()? + b.moiety_deg()?) / 2.0)
}

/// Match two longitudes (degrees) against the aspect table with `orb_deg`.
pub fn match_aspect(lon_a_deg: f64, lon_b_deg: f64, orb_deg: f64) -> Option<AspectMatch> {
    if !lon_a_deg.is_finite() || !lon_b_deg.is_finite() || !(orb_deg > 0.0) {
        return None;
    }
    let separation = separation_deg(normalize_360(lon_a_deg), normalize_360(lon_b_deg));
    ASPECT_PRIORITY.iter().find_map(|&kind| {
        let delta = (separation - kind.angle_deg()).abs();
        (delta <= orb_deg).then(|| AspectMatch {
            kind,
            separation_deg: separation,
            delta_deg: delta,
            orb_deg,
            intensity: (1.0 - delta / orb_deg).max(0.0),
        })
    })
}

/// All aspects among `positions` (body, ecliptic longitude in degrees).
///
/// Each unordered pair is tested once, in input order. Bodies without a
/// moiety are skipped.
pub fn find_aspects(positions: &[(Body, f64)]) -> Vec<Aspect> {
    let mut out = Vec::new();
    for (i, &(first, lon_a)) in positions.iter().enumerate() {
        for &(second, lon_b) in &positions[i + 1..] {
            let Some(orb) = combined_orb_deg(first, second) else {
                continue;
            };
            if let Some(matched) = match_aspect(lon_a, lon_b, orb) {
                out.push(Aspect {
                    first,
                    second,
                    matched,
                });
            }
        }
    }
    out
}

/// Ray styling for a matched aspect.
///
/// `alpha = (0.3 + 0.7 i) * depth * 0.9`, with `depth = 0.5` when either
/// endpoint is on the back side, and `width = 1.2 + 1.5 i`.
pub fn ray_style(matched: &AspectMatch, back_side: bool) -> RayStyle {
    let i = matched.intensity;
    let depth = if back_side { RAY_BACK_SIDE_DIM } else { 1.0 };
    RayStyle {
        color: matched.kind.nature().color(),
        alpha: ((0.3 + 0.7 * i) * depth * RAY_FADE_OPACITY).min(1.0),
        width: 1.2 + 1.5 * i,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trine_across_zero() {
        let m = match_aspect(10.0, 130.0, 10.0);
        assert_eq!(m.map(|m| m.kind), Some(AspectKind::Trine));
        let m = match_aspect(350.0, 110.0, 5.0);
        assert_eq!(m.map(|m| m.kind), Some(AspectKind::Trine));
    }

    #[test]
    fn outside_orb_is_none() {
        assert!(match_aspect(0.0, 45.0, 7.0).is_none());
    }

    #[test]
    fn priority_first_match_wins() {
        // With a 40 deg orb a 30 deg separation matches both conjunction and sextile.
        let m = match_aspect(0.0, 30.0, 40.0);
        assert_eq!(m.map(|m| m.kind), Some(AspectKind::Conjunction));
    }

    #[test]
    fn intensity_bounds() {
        let exact = match_aspect(0.0, 90.0, 8.0).map(|m| m.intensity);
        assert_eq!(exact, Some(1.0));
        let edge = match_aspect(0.0, 98.0, 8.0).map(|m| m.intensity);
        assert!(edge.is_some_and(|i| i.abs() < 1e-12));
    }

    #[test]
    fn sun_moon_orb() {
        assert_eq!(combined_orb_deg(Body::Sun, Body::Moon), Some(14.0));
        assert_eq!(combined_orb_deg(Body::Sun, Body::Uranus), None);
    }

    #[test]
    fn find_skips_outer_planets() {
        let positions = [(Body::Sun, 0.0), (Body::Uranus, 0.0), (Body::Moon, 1.0)];
        let found = find_aspects(&positions);
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].first, found[0].second), (Body::Sun, Body::Moon));
        assert_eq!(found[0].matched.kind, AspectKind::Conjunction);
    }

    #[test]
    fn ray_style_dims_back_side() {
        let Some(m) = match_aspect(0.0, 180.0, 10.0) else {
            panic!("opposition expected");
        };
        let front = ray_style(&m, false);
        let back = ray_style(&m, true);
        assert!((front.alpha - 0.9).abs() < 1e-12);
        assert!((back.alpha - 0.45).abs() < 1e-12);
        assert!((front.width - 2.7).abs() < 1e-12);
        assert_eq!(front.color, "#ff3333");
    }

    #[test]
    fn non_finite_longitude_has_no_aspect() {
        assert!(match_aspect(f64::NAN, 0.0, 10.0).is_none());
    }
}
