//! Sidereal time: the rotation angle that turns right ascension into a
//! local hour angle.
//!
//! UTC Julian Dates stand in for UT1 here; the sub-second difference is
//! far below what a rendered sphere can show.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15. Public domain.
//! - GMST polynomial: Capitaine et al. 2003, Table 2. Public domain.

use std::f64::consts::{PI, TAU};

use crate::instant::Instant;
use crate::julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle, radians in [0, 2π).
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × Du), Du = JD − 2451545.0.
pub fn earth_rotation_angle_rad(jd: f64) -> f64 {
    let du = jd - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time, radians in [0, 2π).
///
/// GMST = ERA + (0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
/// − 0.000029956·T⁴ − 0.0000000368·T⁵) arcseconds.
pub fn gmst_rad(jd: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd);
    let t = (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in hours, [0, 24).
pub fn gmst_hours(jd: f64) -> f64 {
    gmst_rad(jd) * 12.0 / PI
}

/// Local Sidereal Time from GMST and observer east longitude, [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}

/// Sidereal angle for an instant and an east longitude in degrees.
///
/// `lst = gmst_hours + lon/15` hours, scaled by 15°/h into radians and
/// wrapped into [0, 2π).
pub fn sidereal_angle_rad(instant: Instant, longitude_deg: f64) -> f64 {
    let lst_hours = gmst_hours(instant.jd_utc()) + longitude_deg / 15.0;
    (lst_hours * 15.0).to_radians().rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000_noon() {
        let theta_deg = earth_rotation_angle_rad(J2000_JD).to_degrees();
        assert!(
            (theta_deg - 280.46).abs() < 0.1,
            "ERA at J2000 = {theta_deg}°, expected ~280.46°"
        );
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT: GMST ≈ 6h 39m 51.17s ≈ 99.97°
        let gmst_deg = gmst_rad(2_451_544.5).to_degrees();
        assert!(
            (gmst_deg - 99.97).abs() < 0.1,
            "GMST at J2000 midnight = {gmst_deg}°, expected ~99.97°"
        );
        assert!((gmst_hours(2_451_544.5) - 6.6642).abs() < 0.01);
    }

    #[test]
    fn gmst_range() {
        for &jd in &[2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5] {
            let g = gmst_rad(jd);
            assert!((0.0..TAU).contains(&g), "GMST out of range: {g}");
        }
    }

    #[test]
    fn lst_east_offset() {
        let lst = local_sidereal_time_rad(1.0, PI / 2.0);
        assert!((lst - (1.0 + PI / 2.0)).abs() < 1e-15);
    }

    #[test]
    fn sidereal_angle_matches_gmst_at_greenwich() {
        let t = Instant::J2000;
        let a = sidereal_angle_rad(t, 0.0);
        assert!((a - gmst_rad(t.jd_utc())).abs() < 1e-12);
    }

    #[test]
    fn fifteen_degrees_east_adds_one_hour() {
        let t = Instant::from_unix_ms(1_700_000_000_000);
        let base = sidereal_angle_rad(t, 0.0);
        let east = sidereal_angle_rad(t, 15.0);
        let diff = (east - base).rem_euclid(TAU);
        assert!((diff - 15.0_f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn sidereal_angle_wraps() {
        let t = Instant::from_unix_ms(1_700_000_000_000);
        for lon in [-180.0, -45.0, 0.0, 139.65, 180.0] {
            let a = sidereal_angle_rad(t, lon);
            assert!((0.0..TAU).contains(&a), "lon {lon}: {a}");
        }
    }

    #[test]
    fn one_sidereal_day_returns_to_same_angle() {
        let t = Instant::from_unix_ms(1_700_000_000_000);
        // 23h 56m 4.0905s
        let later = t.offset_ms(86_164_091);
        let d = (sidereal_angle_rad(later, 139.65) - sidereal_angle_rad(t, 139.65)).abs();
        let d = d.min(TAU - d);
        assert!(d < 1e-5, "drift {d} rad");
    }
}
