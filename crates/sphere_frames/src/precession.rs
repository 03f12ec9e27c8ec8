//! IAU 1976 precession from the J2000.0 mean equator to the mean equator
//! of date.
//!
//! Source: Lieske et al. 1977, _Astronomy & Astrophysics_ 58, 1-16.
//! The three equatorial precession angles ζ_A, z_A, θ_A are cubic
//! polynomials in Julian centuries since J2000.0, and the rotation is
//! `R = Rz(-z_A) · Ry(θ_A) · Rz(-ζ_A)`.

use crate::spherical::{cartesian_to_equatorial, equatorial_to_cartesian};

/// Row-major 3×3 matrix.
pub type Matrix3 = [[f64; 3]; 3];

const ARCSEC_TO_RAD: f64 = std::f64::consts::PI / 180.0 / 3600.0;

/// Precession angles `(zeta, z, theta)` in arcseconds.
///
/// # Arguments
/// * `t`: Julian centuries since J2000.0, `(JD - 2451545.0) / 36525.0`
pub fn precession_angles_arcsec(t: f64) -> (f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let zeta = 2306.2181 * t + 0.30188 * t2 + 0.017998 * t3;
    let z = 2306.2181 * t + 1.09468 * t2 + 0.018203 * t3;
    let theta = 2004.3109 * t - 0.42665 * t2 - 0.041833 * t3;
    (zeta, z, theta)
}

/// Precession matrix J2000.0 → mean equator of date.
///
/// The closed-form product keeps the exact entry ordering of the
/// reference reduction so a given `t` always yields the same matrix.
pub fn precession_matrix(t: f64) -> Matrix3 {
    let (zeta, z, theta) = precession_angles_arcsec(t);
    let zeta = zeta * ARCSEC_TO_RAD;
    let z = z * ARCSEC_TO_RAD;
    let theta = theta * ARCSEC_TO_RAD;

    let (sz, cz) = (zeta.sin(), zeta.cos());
    let (s_z, c_z) = (z.sin(), z.cos());
    let (st, ct) = (theta.sin(), theta.cos());

    [
        [
            c_z * ct * cz - s_z * sz,
            -c_z * ct * sz - s_z * cz,
            -c_z * st,
        ],
        [
            s_z * ct * cz + c_z * sz,
            -s_z * ct * sz + c_z * cz,
            -s_z * st,
        ],
        [st * cz, -st * sz, ct],
    ]
}

/// Multiply `m · v`.
pub fn apply_matrix(m: &Matrix3, v: &[f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Precess a J2000 equatorial direction `(ra, dec)` (radians) with `m`.
///
/// Returns RA in [0, 2π) and Dec in [-π/2, π/2].
pub fn precess_equatorial(m: &Matrix3, ra_rad: f64, dec_rad: f64) -> (f64, f64) {
    let v = apply_matrix(m, &equatorial_to_cartesian(ra_rad, dec_rad));
    cartesian_to_equatorial(&v)
}
