//! Cartesian ↔ spherical coordinate conversion.

use std::f64::consts::TAU;

/// Spherical coordinates: longitude, latitude, radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360).
    /// Measured in the x-y plane from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    /// Elevation above the x-y plane.
    pub lat_deg: f64,
    /// Distance from origin (unit sphere unless stated otherwise).
    pub radius: f64,
}

/// Convert Cartesian `[x, y, z]` to spherical coordinates.
///
/// Longitude is measured in the x-y plane from +x toward +y.
/// Latitude is elevation above the x-y plane.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();

    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            radius: 0.0,
        };
    }

    let lon = y.atan2(x).rem_euclid(TAU);
    let lat = (z / r).clamp(-1.0, 1.0).asin();

    SphericalCoords {
        lon_deg: lon.to_degrees(),
        lat_deg: lat.to_degrees(),
        radius: r,
    }
}

/// Convert spherical coordinates back to Cartesian `[x, y, z]`.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let lon_rad = s.lon_deg.to_radians();
    let lat_rad = s.lat_deg.to_radians();
    let cos_lat = lat_rad.cos();
    [
        s.radius * cos_lat * lon_rad.cos(),
        s.radius * cos_lat * lon_rad.sin(),
        s.radius * lat_rad.sin(),
    ]
}

/// Unit vector for an equatorial direction (radians).
pub fn equatorial_to_cartesian(ra_rad: f64, dec_rad: f64) -> [f64; 3] {
    let (sin_dec, cos_dec) = dec_rad.sin_cos();
    let (sin_ra, cos_ra) = ra_rad.sin_cos();
    [cos_dec * cos_ra, cos_dec * sin_ra, sin_dec]
}

/// Equatorial `(ra_rad, dec_rad)` of a vector; RA in [0, 2π).
pub fn cartesian_to_equatorial(v: &[f64; 3]) -> (f64, f64) {
    let r = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if r == 0.0 {
        return (0.0, 0.0);
    }
    let ra = v[1].atan2(v[0]).rem_euclid(TAU);
    let dec = (v[2] / r).clamp(-1.0, 1.0).asin();
    (ra, dec)
}
