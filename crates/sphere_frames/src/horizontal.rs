//! Equatorial → horizontal conversion.
//!
//! The horizontal frame used throughout the renderer is a right-handed
//! unit sphere with +x toward the east point, +y toward the south point
//! and +z toward the zenith. Azimuth is measured from north through east.

use std::f64::consts::TAU;

/// Below this value of `cos(lat) * cos(alt)` the azimuth formula is
/// treated as singular (observer at a pole or target at the zenith/nadir).
const SINGULAR_DENOM: f64 = 1e-12;

/// Altitude and azimuth in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltAz {
    /// Altitude above the horizon, [-π/2, π/2].
    pub altitude_rad: f64,
    /// Azimuth from north through east, [0, 2π).
    pub azimuth_rad: f64,
}

impl AltAz {
    /// Unit vector in the horizontal frame.
    pub fn to_vector(&self) -> [f64; 3] {
        horizon_point(self.altitude_rad, self.azimuth_rad)
    }
}

/// Unit vector for a direction given by altitude and azimuth (radians).
pub fn horizon_point(altitude_rad: f64, azimuth_rad: f64) -> [f64; 3] {
    let (sin_alt, cos_alt) = altitude_rad.sin_cos();
    let (sin_az, cos_az) = azimuth_rad.sin_cos();
    [cos_alt * sin_az, -cos_alt * cos_az, sin_alt]
}

/// Altitude/azimuth of an equatorial direction.
///
/// `ra_rad`, `dec_rad`: equatorial coordinates. `lst_rad`: local sidereal
/// time. `lat_rad`: observer latitude.
///
/// Azimuth comes from `acos` of the standard formula, mirrored into the
/// western half when `sin(H) > 0`. Where `cos(lat)·cos(alt)` vanishes the
/// azimuth is taken from the north/east components directly, so the result
/// never carries NaN.
pub fn horizontal_coords(ra_rad: f64, dec_rad: f64, lst_rad: f64, lat_rad: f64) -> AltAz {
    let hour_angle = lst_rad - ra_rad;
    let (sin_dec, cos_dec) = dec_rad.sin_cos();
    let (sin_lat, cos_lat) = lat_rad.sin_cos();
    let (sin_h, cos_h) = hour_angle.sin_cos();

    let sin_alt = (sin_dec * sin_lat + cos_dec * cos_lat * cos_h).clamp(-1.0, 1.0);
    let altitude_rad = sin_alt.asin();

    let denom = cos_lat * altitude_rad.cos();
    let azimuth_rad = if denom.abs() < SINGULAR_DENOM {
        let north = sin_dec * cos_lat - cos_dec * sin_lat * cos_h;
        let east = -cos_dec * sin_h;
        if north == 0.0 && east == 0.0 {
            0.0
        } else {
            east.atan2(north).rem_euclid(TAU)
        }
    } else {
        let cos_az = ((sin_dec - sin_lat * sin_alt) / denom).clamp(-1.0, 1.0);
        let az = cos_az.acos();
        if sin_h > 0.0 { TAU - az } else { az }
    };

    AltAz {
        altitude_rad,
        azimuth_rad,
    }
}

/// Unit vector in the horizontal frame for an equatorial direction.
pub fn to_horizontal(ra_rad: f64, dec_rad: f64, lst_rad: f64, lat_rad: f64) -> [f64; 3] {
    horizontal_coords(ra_rad, dec_rad, lst_rad, lat_rad).to_vector()
}
