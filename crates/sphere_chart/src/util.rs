//! Angle helpers shared by the chart modules.

use std::f64::consts::TAU;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // a tiny negative input rounds up to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to [0, 2π) radians.
pub fn normalize_tau(rad: f64) -> f64 {
    let r = rad.rem_euclid(TAU);
    if r >= TAU { 0.0 } else { r }
}

/// Separation of two longitudes, reflected into [0, 180] degrees.
pub fn separation_deg(a_deg: f64, b_deg: f64) -> f64 {
    let d = (a_deg - b_deg).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_positive() {
        assert!((normalize_360(45.0) - 45.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(720.5) - 0.5).abs() < 1e-10);
    }

    #[test]
    fn normalize_tau_wraps() {
        assert!((normalize_tau(-1.0) - (TAU - 1.0)).abs() < 1e-12);
        assert!(normalize_tau(TAU) < 1e-12);
    }

    #[test]
    fn tiny_negative_folds_to_zero() {
        assert_eq!(normalize_tau(-1e-17), 0.0);
        assert_eq!(normalize_360(-1e-15), 0.0);
        assert!(normalize_tau(-1e-10) < TAU);
    }

    #[test]
    fn separation_reflects() {
        assert!((separation_deg(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((separation_deg(0.0, 180.0) - 180.0).abs() < 1e-12);
        assert!((separation_deg(130.0, 10.0) - 120.0).abs() < 1e-12);
    }
}
