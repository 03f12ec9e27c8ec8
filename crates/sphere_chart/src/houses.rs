//! House cusp and boundary-curve computation.
//!
//! Equal and whole-sign houses are great circles through the ecliptic
//! poles. Campanus and Regiomontanus houses are great circles through the
//! north and south points of the horizon. Placidus boundaries are not
//! great circles and are sampled band by band in declination.
//!
//! Sources: standard spherical astronomy (Montenbruck & Pfleger);
//! Holden, "A History of Horoscopic Astrology", for the division rules.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::ascendant::ascendant_rad;
use crate::house_types::{
    CurveGeometry, CurveLabel, ECLIPTIC_LABEL_INDICES, FixedLabel, HORIZONTAL_LABEL_INDICES,
    HouseCurve, HouseCusp, HouseLayout, HouseSystem,
};
use crate::util::normalize_tau;

/// Tilt offsets of the six horizontal-mode circles, degrees. Index `k`
/// bounds house `k + 1` in front and `k + 7` behind.
const BASE_OFFSETS_DEG: [f64; 6] = [0.0, -30.0, -60.0, -90.0, -120.0, -150.0];

/// Declination spacing of Placidus sample bands, degrees.
pub const PLACIDUS_BAND_STEP_DEG: f64 = 2.0;
/// Gap kept between the last band and the circumpolar limit, degrees.
pub const PLACIDUS_POLE_MARGIN_DEG: f64 = 0.5;

/// `(fraction of semi-arc, front house, antipodal house)`.
const PLACIDUS_TRISECTIONS: [(f64, u8, u8); 4] = [
    (1.0 / 3.0, 11, 5),
    (2.0 / 3.0, 12, 6),
    (-1.0 / 3.0, 9, 3),
    (-2.0 / 3.0, 8, 2),
];

/// Compute the house layout for a sidereal angle and latitude (radians).
pub fn compute_houses(system: HouseSystem, lst_rad: f64, latitude_rad: f64) -> HouseLayout {
    let asc = ascendant_rad(lst_rad, latitude_rad);
    match system {
        HouseSystem::Equal => ecliptic_layout(system, asc, asc),
        HouseSystem::WholeSign => ecliptic_layout(system, asc, whole_sign_start_rad(asc)),
        HouseSystem::Campanus => horizontal_layout(system, asc, campanus_offsets_rad()),
        HouseSystem::Regiomontanus => {
            horizontal_layout(system, asc, regiomontanus_offsets_rad(latitude_rad))
        }
        HouseSystem::Placidus => placidus_layout(asc, lst_rad, latitude_rad),
    }
}

/// Start of the sign holding the Ascendant, radians.
pub fn whole_sign_start_rad(asc_rad: f64) -> f64 {
    let asc_deg = asc_rad.to_degrees();
    ((asc_deg / 30.0).floor() * 30.0).to_radians()
}

/// Campanus tilt offsets: the prime vertical divided into 30-degree arcs.
pub fn campanus_offsets_rad() -> [f64; 6] {
    BASE_OFFSETS_DEG.map(f64::to_radians)
}

/// Regiomontanus tilt offsets: `atan(tan(a) cos(lat))`, with ±90 kept and
/// offsets past -90 moved into the lower quadrant.
pub fn regiomontanus_offsets_rad(latitude_rad: f64) -> [f64; 6] {
    let cos_phi = latitude_rad.cos();
    BASE_OFFSETS_DEG.map(|a| {
        if a.abs() == 90.0 {
            return a.signum() * FRAC_PI_2;
        }
        let h = (a.to_radians().tan() * cos_phi).atan();
        if a < -90.0 { h - PI } else { h }
    })
}

/// Declinations of the Placidus sample bands, degrees.
///
/// Bands run from `-limit` to `+limit` in 2-degree steps, where
/// `limit = 90 - |lat| - 0.5`. Beyond the limit the bands are circumpolar.
pub fn placidus_bands_deg(latitude_deg: f64) -> Vec<f64> {
    let limit = 90.0 - latitude_deg.abs() - PLACIDUS_POLE_MARGIN_DEG;
    if limit < 0.0 {
        return Vec::new();
    }
    let n = (2.0 * limit / PLACIDUS_BAND_STEP_DEG).floor() as usize;
    (0..=n)
        .map(|i| -limit + i as f64 * PLACIDUS_BAND_STEP_DEG)
        .collect()
}

/// Semi-arc `H = acos(-tan(lat) tan(dec))`, or `None` where the band
/// never crosses the horizon.
pub fn semi_arc_rad(latitude_rad: f64, dec_rad: f64) -> Option<f64> {
    let arg = -latitude_rad.tan() * dec_rad.tan();
    if !arg.is_finite() || arg.abs() >= 1.0 {
        None
    } else {
        Some(arg.acos())
    }
}

fn ecliptic_layout(system: HouseSystem, asc: f64, start: f64) -> HouseLayout {
    let (front, back) = ECLIPTIC_LABEL_INDICES;
    let curves = (0..6)
        .map(|k| HouseCurve {
            geometry: CurveGeometry::EclipticMeridian {
                longitude_rad: (start + k as f64 * 30.0_f64.to_radians()).rem_euclid(TAU),
            },
            labels: vec![
                CurveLabel {
                    house: k as u8 + 1,
                    sample_index: front,
                },
                CurveLabel {
                    house: k as u8 + 7,
                    sample_index: back,
                },
            ],
        })
        .collect();
    HouseLayout {
        system,
        ascendant_rad: asc,
        cusps: cusps_from(|n| start + (n - 1) as f64 * 30.0_f64.to_radians()),
        curves,
        fixed_labels: Vec::new(),
    }
}

fn horizontal_layout(system: HouseSystem, asc: f64, offsets: [f64; 6]) -> HouseLayout {
    let (front, back) = HORIZONTAL_LABEL_INDICES;
    let curves = offsets
        .iter()
        .enumerate()
        .map(|(k, &tilt_rad)| HouseCurve {
            geometry: CurveGeometry::HorizonTilt { tilt_rad },
            labels: vec![
                CurveLabel {
                    house: k as u8 + 1,
                    sample_index: front,
                },
                CurveLabel {
                    house: k as u8 + 7,
                    sample_index: back,
                },
            ],
        })
        .collect();
    HouseLayout {
        system,
        ascendant_rad: asc,
        cusps: cusps_from(|n| {
            let k = ((n - 1) % 6) as usize;
            if n <= 6 { offsets[k] } else { offsets[k] + PI }
        }),
        curves,
        fixed_labels: Vec::new(),
    }
}

fn placidus_layout(asc: f64, lst: f64, latitude_rad: f64) -> HouseLayout {
    let bands = placidus_bands_deg(latitude_rad.to_degrees());

    let mut curves = Vec::with_capacity(PLACIDUS_TRISECTIONS.len() * 2 + 2);
    for &(fraction, front_house, back_house) in &PLACIDUS_TRISECTIONS {
        let front: Vec<Option<(f64, f64)>> = bands
            .iter()
            .map(|&dec_deg| {
                let dec = dec_deg.to_radians();
                semi_arc_rad(latitude_rad, dec)
                    .map(|h| ((lst + fraction * h).rem_euclid(TAU), dec))
            })
            .collect();
        let back: Vec<Option<(f64, f64)>> = front
            .iter()
            .map(|s| s.map(|(ra, dec)| ((ra + PI).rem_euclid(TAU), -dec)))
            .collect();
        curves.push(labelled_at_middle(front, front_house));
        curves.push(labelled_at_middle(back, back_house));
    }
    // The angle houses are bounded by the horizon and the meridian.
    curves.push(HouseCurve {
        geometry: CurveGeometry::HorizonTilt { tilt_rad: 0.0 },
        labels: Vec::new(),
    });
    curves.push(HouseCurve {
        geometry: CurveGeometry::HorizonTilt {
            tilt_rad: -FRAC_PI_2,
        },
        labels: Vec::new(),
    });

    let fixed_labels = [(1, lst + FRAC_PI_2), (10, lst), (7, lst - FRAC_PI_2), (4, lst + PI)]
        .into_iter()
        .map(|(house, ra)| FixedLabel {
            house,
            ra_rad: ra.rem_euclid(TAU),
            dec_rad: 0.0,
        })
        .collect();

    HouseLayout {
        system: HouseSystem::Placidus,
        ascendant_rad: asc,
        // On the equator the semi-arc is always 90 degrees, so the cusps
        // cross it every 30 degrees of RA counted from the meridian.
        cusps: cusps_from(|n| lst + (n as f64 - 10.0) * 30.0_f64.to_radians()),
        curves,
        fixed_labels,
    }
}

fn labelled_at_middle(samples: Vec<Option<(f64, f64)>>, house: u8) -> HouseCurve {
    let sample_index = samples.len() / 2;
    HouseCurve {
        geometry: CurveGeometry::Equatorial { samples },
        labels: vec![CurveLabel {
            house,
            sample_index,
        }],
    }
}

fn cusps_from(angle: impl Fn(u8) -> f64) -> [HouseCusp; 12] {
    std::array::from_fn(|i| {
        let number = i as u8 + 1;
        HouseCusp {
            number,
            angle_rad: normalize_tau(angle(number)),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::house_types::SkyPoint;

    const LAT: f64 = 0.618_4; // ~35.43 deg

    #[test]
    fn equal_cusps_thirty_apart() {
        let l = compute_houses(HouseSystem::Equal, 1.3, LAT);
        assert!((l.cusps[0].angle_rad - l.ascendant_rad).abs() < 1e-12);
        for w in l.cusps.windows(2) {
            let d = (w[1].angle_rad - w[0].angle_rad).rem_euclid(TAU);
            assert!((d.to_degrees() - 30.0).abs() < 1e-9);
        }
        assert_eq!(l.curves.len(), 6);
    }

    #[test]
    fn campanus_offsets_are_base_offsets() {
        let o = campanus_offsets_rad();
        assert!((o[3] + FRAC_PI_2).abs() < 1e-15);
        assert!((o[5].to_degrees() + 150.0).abs() < 1e-12);
    }

    #[test]
    fn regiomontanus_keeps_quadrants() {
        let o = regiomontanus_offsets_rad(LAT);
        assert_eq!(o[0], 0.0);
        assert_eq!(o[3], -FRAC_PI_2);
        assert!(o[1] < 0.0 && o[1] > o[2] && o[2] > o[3]);
        assert!(o[4] < o[3] && o[5] < o[4] && o[5] > -PI);
    }

    #[test]
    fn regiomontanus_equals_campanus_on_equator() {
        let r = regiomontanus_offsets_rad(0.0);
        let c = campanus_offsets_rad();
        for (a, b) in r.iter().zip(c.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn horizontal_cusps_pair_with_antipodes() {
        let l = compute_houses(HouseSystem::Campanus, 0.4, LAT);
        for n in 1..=6u8 {
            let a = l.cusp(n).map(|c| c.angle_rad);
            let b = l.cusp(n + 6).map(|c| c.angle_rad);
            let (Some(a), Some(b)) = (a, b) else {
                panic!("missing cusp {n}");
            };
            assert!(((b - a).rem_euclid(TAU) - PI).abs() < 1e-12);
        }
    }

    #[test]
    fn placidus_bands_stop_short_of_circumpolar() {
        let bands = placidus_bands_deg(35.4);
        let limit = 90.0 - 35.4 - 0.5;
        assert!((bands[0] + limit).abs() < 1e-12);
        assert!(*bands.last().unwrap_or(&0.0) <= limit + 1e-9);
        assert!(placidus_bands_deg(89.9999).is_empty());
    }

    #[test]
    fn placidus_skips_circumpolar_bands() {
        // At 70 deg the limit is 19.5 deg, so every band still crosses the horizon.
        let lat = 70.0_f64.to_radians();
        assert!(semi_arc_rad(lat, 19.5_f64.to_radians()).is_some());
        assert!(semi_arc_rad(lat, 25.0_f64.to_radians()).is_none());
    }

    #[test]
    fn placidus_has_angle_labels() {
        let l = compute_houses(HouseSystem::Placidus, 2.0, LAT);
        let houses: Vec<u8> = l.fixed_labels.iter().map(|f| f.house).collect();
        assert_eq!(houses, vec![1, 10, 7, 4]);
        assert_eq!(l.curves.len(), 10);
        let labelled: usize = l.curves.iter().map(|c| c.labels.len()).sum();
        assert_eq!(labelled, 8);
    }

    #[test]
    fn placidus_back_curve_is_antipodal() {
        let l = compute_houses(HouseSystem::Placidus, 2.0, LAT);
        let (CurveGeometry::Equatorial { samples: f }, CurveGeometry::Equatorial { samples: b }) =
            (&l.curves[0].geometry, &l.curves[1].geometry)
        else {
            panic!("placidus curves should be equatorial");
        };
        for (p, q) in f.iter().zip(b.iter()) {
            if let (Some((ra1, d1)), Some((ra2, d2))) = (p, q) {
                assert!(((ra2 - ra1).rem_euclid(TAU) - PI).abs() < 1e-12);
                assert!((d1 + d2).abs() < 1e-15);
            }
        }
    }

    #[test]
    fn label_points_cover_all_houses() {
        for &system in HouseSystem::all() {
            let l = compute_houses(system, 1.0, LAT);
            let mut houses: Vec<u8> = l.label_points().iter().map(|(h, _)| *h).collect();
            houses.sort_unstable();
            assert_eq!(houses, (1..=12).collect::<Vec<u8>>(), "{system}");
        }
    }

    #[test]
    fn ecliptic_label_lies_on_cusp_meridian() {
        let l = compute_houses(HouseSystem::WholeSign, 1.0, LAT);
        let Some(SkyPoint::Equatorial { ra_rad, dec_rad }) = l.curves[0].geometry.sample(0) else {
            panic!("ecliptic-mode sample should be equatorial");
        };
        let (lon, lat) = sphere_frames::equatorial_to_ecliptic(ra_rad, dec_rad);
        assert!((lon - l.cusps[0].angle_rad).abs() < 1e-9);
        assert!(lat.abs() < 1e-12);
    }
}
