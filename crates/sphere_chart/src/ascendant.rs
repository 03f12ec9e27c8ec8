//! Ascendant and Midheaven from the local sidereal angle.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13;
//! standard spherical astronomy (Montenbruck & Pfleger).

use sphere_frames::{COS_OBL, SIN_OBL};
use sphere_time::{Instant, sidereal_angle_rad};

use crate::observer::Observer;
use crate::util::normalize_tau;

/// Ecliptic longitude of the Ascendant in radians.
///
/// Formula: `Asc = atan2(cos(LST), -(sin(LST)*cos(eps) + tan(phi)*sin(eps)))`,
/// which picks the eastern intersection of the ecliptic and the horizon.
///
/// Returns a value in [0, 2*pi).
pub fn ascendant_rad(lst_rad: f64, latitude_rad: f64) -> f64 {
    let asc = f64::atan2(
        lst_rad.cos(),
        -(lst_rad.sin() * COS_OBL + latitude_rad.tan() * SIN_OBL),
    );
    normalize_tau(asc)
}

/// Ecliptic longitude of the Midheaven (MC) in radians.
///
/// Formula: `MC = atan2(sin(LST), cos(LST)*cos(eps))`
///
/// Returns a value in [0, 2*pi).
pub fn midheaven_rad(lst_rad: f64) -> f64 {
    normalize_tau(f64::atan2(lst_rad.sin(), lst_rad.cos() * COS_OBL))
}

/// Ascendant and MC for an observer at an instant.
///
/// Returns `(asc_rad, mc_rad)`, both in [0, 2*pi).
pub fn ascendant_and_mc_rad(observer: &Observer, instant: Instant) -> (f64, f64) {
    let lst = sidereal_angle_rad(instant, observer.longitude_deg);
    (
        ascendant_rad(lst, observer.latitude_rad()),
        midheaven_rad(lst),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sphere_frames::{ecliptic_to_equatorial, to_horizontal};
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn equator_at_zero_lst_rises_cancer() {
        let asc = ascendant_rad(0.0, 0.0);
        assert!((asc - FRAC_PI_2).abs() < 1e-12, "asc = {}", asc.to_degrees());
    }

    #[test]
    fn mc_follows_lst_at_equinoxes() {
        assert!(midheaven_rad(0.0).abs() < 1e-12);
        assert!((midheaven_rad(PI) - PI).abs() < 1e-12);
    }

    #[test]
    fn ascendant_is_on_eastern_horizon() {
        let lat = 35.4333_f64.to_radians();
        for i in 0..24 {
            let lst = i as f64 * TAU / 24.0 + 0.01;
            let asc = ascendant_rad(lst, lat);
            let (ra, dec) = ecliptic_to_equatorial(asc, 0.0);
            let v = to_horizontal(ra, dec, lst, lat);
            assert!(v[2].abs() < 1e-9, "lst {lst}: altitude z = {}", v[2]);
            assert!(v[0] > 0.0, "lst {lst}: ascendant not east, x = {}", v[0]);
        }
    }

    #[test]
    fn ascendant_in_range() {
        for lat in [-60.0_f64, -20.0, 0.0, 35.0, 66.0] {
            for i in 0..36 {
                let a = ascendant_rad(i as f64 * 0.17, lat.to_radians());
                assert!((0.0..TAU).contains(&a));
            }
        }
    }

    #[test]
    fn three_quarter_turn_wraps_to_zero() {
        // atan2 lands a hair below zero here at lat 51.5
        let lst = 75.0 * TAU / 100.0;
        let asc = ascendant_rad(lst, 51.5_f64.to_radians());
        assert!((0.0..TAU).contains(&asc), "asc = {asc}");
        for i in 0..400 {
            let mc = midheaven_rad(i as f64 * TAU / 400.0);
            assert!((0.0..TAU).contains(&mc), "mc = {mc}");
        }
    }
}
