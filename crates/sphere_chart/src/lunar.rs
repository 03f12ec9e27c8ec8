//! Mean ascending node of the Moon and the lunar orbit on the sky.
//!
//! The orbit is modelled as a great circle inclined 5.145 degrees to the
//! ecliptic whose ascending node regresses with an 18.6-year period.
//! Short-period perturbations are ignored.

use std::f64::consts::TAU;

use sphere_frames::ecliptic_to_equatorial;
use sphere_time::Instant;

use crate::util::normalize_360;

/// Inclination of the lunar orbit to the ecliptic, degrees.
pub const LUNAR_INCLINATION_DEG: f64 = 5.145;
/// Ascending node longitude at J2000.0, degrees.
pub const NODE_AT_J2000_DEG: f64 = 125.045;
/// Node regression rate, degrees per day.
pub const NODE_RATE_DEG_PER_DAY: f64 = 0.052_992_1;
/// Default longitude step when sampling the orbit, degrees.
pub const DEFAULT_ORBIT_STEP_DEG: f64 = 5.0;

/// Mean ascending node longitude, degrees in [0, 360).
///
/// `Ω = 125.045 - 0.0529921 × D`, D = days since J2000.0.
pub fn ascending_node_deg(days_since_j2000: f64) -> f64 {
    normalize_360(NODE_AT_J2000_DEG - NODE_RATE_DEG_PER_DAY * days_since_j2000)
}

/// Ecliptic latitude of the lunar orbit at ecliptic longitude `lon_rad`.
///
/// `β = asin(sin i × sin(λ - Ω))`.
pub fn orbit_latitude_rad(lon_rad: f64, node_rad: f64) -> f64 {
    (LUNAR_INCLINATION_DEG.to_radians().sin() * (lon_rad - node_rad).sin()).asin()
}

/// One sample of the lunar orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPoint {
    pub lon_rad: f64,
    pub lat_rad: f64,
    pub ra_rad: f64,
    pub dec_rad: f64,
}

/// Sample the lunar orbit from longitude 0 to 360 inclusive every
/// `step_deg` degrees. A non-positive or non-finite step falls back to
/// [`DEFAULT_ORBIT_STEP_DEG`].
pub fn lunar_orbit_points(instant: Instant, step_deg: f64) -> Vec<OrbitPoint> {
    let step = if step_deg.is_finite() && step_deg > 0.0 {
        step_deg
    } else {
        DEFAULT_ORBIT_STEP_DEG
    };
    let node = ascending_node_deg(instant.days_since_j2000()).to_radians();
    let n = (360.0 / step).floor() as usize;
    (0..=n)
        .map(|i| {
            let lon_rad = (i as f64 * step).to_radians().min(TAU);
            let lat_rad = orbit_latitude_rad(lon_rad, node);
            let (ra_rad, dec_rad) = ecliptic_to_equatorial(lon_rad, lat_rad);
            OrbitPoint {
                lon_rad,
                lat_rad,
                ra_rad,
                dec_rad,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_at_j2000() {
        assert!((ascending_node_deg(0.0) - 125.045).abs() < 1e-12);
    }

    #[test]
    fn node_regresses_full_circle_in_18_6_years() {
        let days = 360.0 / NODE_RATE_DEG_PER_DAY;
        assert!((days / 365.25 - 18.6).abs() < 0.05);
        let back = ascending_node_deg(days);
        assert!((back - 125.045).abs() < 1e-6 || (back - 125.045).abs() > 359.99);
    }

    #[test]
    fn latitude_zero_at_node_and_max_between() {
        let node = 1.0;
        assert!(orbit_latitude_rad(node, node).abs() < 1e-15);
        let top = orbit_latitude_rad(node + std::f64::consts::FRAC_PI_2, node);
        assert!((top.to_degrees() - LUNAR_INCLINATION_DEG).abs() < 1e-12);
    }

    #[test]
    fn orbit_sample_count() {
        let pts = lunar_orbit_points(Instant::J2000, 5.0);
        assert_eq!(pts.len(), 73);
        assert!(pts.iter().all(|p| p.lat_rad.abs() <= LUNAR_INCLINATION_DEG.to_radians() + 1e-12));
        assert_eq!(lunar_orbit_points(Instant::J2000, -1.0).len(), 73);
    }
}
