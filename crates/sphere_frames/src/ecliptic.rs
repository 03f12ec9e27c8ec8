//! Ecliptic ↔ equatorial conversion at the fixed obliquity.
//!
//! All angles are radians. Right ascension and ecliptic longitude are
//! returned in [0, 2π).

use std::f64::consts::TAU;

use crate::obliquity::{COS_OBL, SIN_OBL};

/// Ecliptic `(lon, lat)` → equatorial `(ra, dec)`.
pub fn ecliptic_to_equatorial(lon_rad: f64, lat_rad: f64) -> (f64, f64) {
    let (sin_lon, cos_lon) = lon_rad.sin_cos();
    let (sin_lat, cos_lat) = lat_rad.sin_cos();
    let dec = (sin_lat * COS_OBL + cos_lat * SIN_OBL * sin_lon)
        .clamp(-1.0, 1.0)
        .asin();
    let ra = (cos_lat * COS_OBL * sin_lon - sin_lat * SIN_OBL).atan2(cos_lat * cos_lon);
    (ra.rem_euclid(TAU), dec)
}

/// Equatorial `(ra, dec)` → ecliptic `(lon, lat)`.
pub fn equatorial_to_ecliptic(ra_rad: f64, dec_rad: f64) -> (f64, f64) {
    let (sin_ra, cos_ra) = ra_rad.sin_cos();
    let (sin_dec, cos_dec) = dec_rad.sin_cos();
    let lat = (sin_dec * COS_OBL - cos_dec * SIN_OBL * sin_ra)
        .clamp(-1.0, 1.0)
        .asin();
    let lon = (cos_dec * sin_ra * COS_OBL + sin_dec * SIN_OBL).atan2(cos_dec * cos_ra);
    (lon.rem_euclid(TAU), lat)
}
