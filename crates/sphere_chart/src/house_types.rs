//! Types for house system computation.
//!
//! A house layout is a set of great circles (or, for Placidus, sampled
//! curves) on the celestial sphere, each carrying the numbers of the
//! houses it bounds. The layout is pure geometry: rendering it means
//! sampling each curve, converting to the horizontal frame and projecting.

use std::f64::consts::TAU;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use sphere_frames::ecliptic_to_equatorial;

use crate::error::ChartError;

/// Samples per full circle for horizontal- and ecliptic-mode curves.
pub const HOUSE_CURVE_STEPS: usize = 90;
/// Label sample indices for horizontal-mode circles (front, back).
pub const HORIZONTAL_LABEL_INDICES: (usize, usize) = (23, 68);
/// Label sample indices for ecliptic-mode circles (front, back).
pub const ECLIPTIC_LABEL_INDICES: (usize, usize) = (5, 40);

/// The supported house division systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HouseSystem {
    /// Equal houses: 30 degrees of longitude each, starting at the Ascendant.
    Equal,
    /// Whole-sign houses: house 1 is the whole sign holding the Ascendant.
    WholeSign,
    /// Campanus: 30-degree arcs of the prime vertical.
    Campanus,
    /// Regiomontanus: 30-degree arcs of the equator, projected by latitude.
    Regiomontanus,
    /// Placidus: trisected diurnal and nocturnal semi-arcs.
    Placidus,
}

/// All house systems in menu order.
pub const ALL_HOUSE_SYSTEMS: [HouseSystem; 5] = [
    HouseSystem::Equal,
    HouseSystem::WholeSign,
    HouseSystem::Campanus,
    HouseSystem::Regiomontanus,
    HouseSystem::Placidus,
];

impl HouseSystem {
    pub const fn all() -> &'static [HouseSystem] {
        &ALL_HOUSE_SYSTEMS
    }

    /// Selector string accepted by [`parse_house_selector`].
    pub const fn key(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::WholeSign => "whole-sign",
            Self::Campanus => "campanus",
            Self::Regiomontanus => "regiomontanus",
            Self::Placidus => "placidus",
        }
    }

    /// Which sampling mode the system's curves use.
    pub const fn mode(self) -> HouseMode {
        match self {
            Self::Equal | Self::WholeSign => HouseMode::Ecliptic,
            Self::Campanus | Self::Regiomontanus => HouseMode::Horizontal,
            Self::Placidus => HouseMode::Equatorial,
        }
    }

    /// Whether the cusps depend on the observer's latitude.
    pub const fn latitude_dependent(self) -> bool {
        matches!(self, Self::Regiomontanus | Self::Placidus)
    }
}

impl Display for HouseSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for HouseSystem {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "equal" => Ok(Self::Equal),
            "whole-sign" | "wholesign" | "whole_sign" | "whole" => Ok(Self::WholeSign),
            "campanus" => Ok(Self::Campanus),
            "regiomontanus" => Ok(Self::Regiomontanus),
            "placidus" => Ok(Self::Placidus),
            _ => Err(ChartError::UnknownHouseSystem(s.to_string())),
        }
    }
}

/// Parse a house selector, where `none` (or an empty string) turns the
/// house layer off.
pub fn parse_house_selector(s: &str) -> Result<Option<HouseSystem>, ChartError> {
    let t = s.trim();
    if t.is_empty() || t.eq_ignore_ascii_case("none") {
        Ok(None)
    } else {
        t.parse().map(Some)
    }
}

/// Sampling mode of a house system's curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HouseMode {
    /// Great circles through the north and south points of the horizon.
    Horizontal,
    /// Great circles through the ecliptic poles.
    Ecliptic,
    /// Curves sampled in right ascension and declination.
    Equatorial,
}

/// A point on the sphere in the frame it was generated in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkyPoint {
    /// Unit vector in the horizontal frame (+x east, +y south, +z zenith).
    Horizontal([f64; 3]),
    /// Right ascension and declination, radians.
    Equatorial { ra_rad: f64, dec_rad: f64 },
}

/// Geometry of one house boundary curve.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveGeometry {
    /// Circle through the north and south points, tilted `tilt_rad` from
    /// the horizon toward the zenith on the east side:
    /// `x = sin t cos h, y = -cos t, z = sin t sin h`.
    HorizonTilt { tilt_rad: f64 },
    /// Circle of fixed ecliptic longitude, latitude swept over the full turn.
    EclipticMeridian { longitude_rad: f64 },
    /// Sampled equatorial polyline. `None` marks a skipped band and
    /// breaks the stroke.
    Equatorial { samples: Vec<Option<(f64, f64)>> },
}

impl CurveGeometry {
    /// Number of samples along the curve.
    pub fn sample_count(&self) -> usize {
        match self {
            Self::HorizonTilt { .. } | Self::EclipticMeridian { .. } => HOUSE_CURVE_STEPS + 1,
            Self::Equatorial { samples } => samples.len(),
        }
    }

    /// The `i`th sample, or `None` for a gap or an index past the end.
    pub fn sample(&self, i: usize) -> Option<SkyPoint> {
        match self {
            Self::HorizonTilt { tilt_rad } => {
                if i > HOUSE_CURVE_STEPS {
                    return None;
                }
                let t = i as f64 * TAU / HOUSE_CURVE_STEPS as f64;
                let (sin_t, cos_t) = t.sin_cos();
                let (sin_h, cos_h) = tilt_rad.sin_cos();
                Some(SkyPoint::Horizontal([sin_t * cos_h, -cos_t, sin_t * sin_h]))
            }
            Self::EclipticMeridian { longitude_rad } => {
                if i > HOUSE_CURVE_STEPS {
                    return None;
                }
                let beta = i as f64 * TAU / HOUSE_CURVE_STEPS as f64;
                let (ra_rad, dec_rad) = ecliptic_to_equatorial(*longitude_rad, beta);
                Some(SkyPoint::Equatorial { ra_rad, dec_rad })
            }
            Self::Equatorial { samples } => samples
                .get(i)
                .copied()
                .flatten()
                .map(|(ra_rad, dec_rad)| SkyPoint::Equatorial { ra_rad, dec_rad }),
        }
    }
}

/// A house number drawn at a sample of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveLabel {
    /// House number, 1-12.
    pub house: u8,
    pub sample_index: usize,
}

/// One boundary curve with its labels.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseCurve {
    pub geometry: CurveGeometry,
    pub labels: Vec<CurveLabel>,
}

/// A house number drawn at a fixed equatorial position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLabel {
    pub house: u8,
    pub ra_rad: f64,
    pub dec_rad: f64,
}

/// A single house cusp.
///
/// `angle_rad` is in the frame of the system's [`HouseMode`]: ecliptic
/// longitude for ecliptic mode, tilt from the horizon for horizontal mode
/// and right ascension on the equator for equatorial mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusp {
    /// House number, 1-12.
    pub number: u8,
    /// Cusp angle in radians, [0, 2π).
    pub angle_rad: f64,
}

impl HouseCusp {
    pub fn angle_deg(&self) -> f64 {
        self.angle_rad.to_degrees()
    }
}

/// Complete geometry of a house system for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseLayout {
    pub system: HouseSystem,
    /// Ascendant ecliptic longitude, radians in [0, 2π).
    pub ascendant_rad: f64,
    /// The 12 cusps ordered by house number.
    pub cusps: [HouseCusp; 12],
    pub curves: Vec<HouseCurve>,
    pub fixed_labels: Vec<FixedLabel>,
}

impl HouseLayout {
    pub fn mode(&self) -> HouseMode {
        self.system.mode()
    }

    /// Cusp for a house number (1-12).
    pub fn cusp(&self, number: u8) -> Option<&HouseCusp> {
        self.cusps.iter().find(|c| c.number == number)
    }

    /// Every label, as `(house, point)`, in drawing order: curve labels
    /// first, then fixed labels. Labels landing on a gap are skipped.
    pub fn label_points(&self) -> Vec<(u8, SkyPoint)> {
        let mut out = Vec::new();
        for curve in &self.curves {
            for label in &curve.labels {
                if let Some(p) = curve.geometry.sample(label.sample_index) {
                    out.push((label.house, p));
                }
            }
        }
        out.extend(self.fixed_labels.iter().map(|l| {
            (
                l.house,
                SkyPoint::Equatorial {
                    ra_rad: l.ra_rad,
                    dec_rad: l.dec_rad,
                },
            )
        }));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_none_disables() {
        assert_eq!(parse_house_selector("none"), Ok(None));
        assert_eq!(parse_house_selector(""), Ok(None));
        assert_eq!(parse_house_selector("Placidus"), Ok(Some(HouseSystem::Placidus)));
        assert!(parse_house_selector("koch").is_err());
    }

    #[test]
    fn keys_roundtrip() {
        for &s in HouseSystem::all() {
            assert_eq!(s.key().parse::<HouseSystem>(), Ok(s));
        }
    }

    #[test]
    fn modes() {
        assert_eq!(HouseSystem::Equal.mode(), HouseMode::Ecliptic);
        assert_eq!(HouseSystem::Campanus.mode(), HouseMode::Horizontal);
        assert_eq!(HouseSystem::Placidus.mode(), HouseMode::Equatorial);
    }

    #[test]
    fn untilted_circle_is_horizon() {
        let g = CurveGeometry::HorizonTilt { tilt_rad: 0.0 };
        assert_eq!(g.sample_count(), HOUSE_CURVE_STEPS + 1);
        for i in 0..g.sample_count() {
            match g.sample(i) {
                Some(SkyPoint::Horizontal(v)) => assert!(v[2].abs() < 1e-15),
                other => panic!("unexpected sample {other:?}"),
            }
        }
        assert!(g.sample(HOUSE_CURVE_STEPS + 1).is_none());
    }

    #[test]
    fn equatorial_gap_is_none() {
        let g = CurveGeometry::Equatorial {
            samples: vec![Some((0.0, 0.1)), None, Some((0.2, 0.3))],
        };
        assert!(g.sample(0).is_some());
        assert!(g.sample(1).is_none());
        assert!(g.sample(3).is_none());
    }
}
