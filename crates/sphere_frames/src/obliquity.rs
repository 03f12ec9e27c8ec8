//! Mean obliquity of the ecliptic used by every ecliptic-plane curve.

/// Obliquity of the ecliptic in degrees (J2000 value, 23°26'21.4").
pub const OBLIQUITY_DEG: f64 = 23.439281;

/// Obliquity of the ecliptic in radians.
pub const OBLIQUITY_RAD: f64 = OBLIQUITY_DEG * std::f64::consts::PI / 180.0;

/// sin(ε), precomputed.
pub const SIN_OBL: f64 = 0.397_776_994_021_848;

/// cos(ε), precomputed.
pub const COS_OBL: f64 = 0.917_482_132_265_769_4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precomputed_trig_matches() {
        assert!((OBLIQUITY_RAD.sin() - SIN_OBL).abs() < 1e-12);
        assert!((OBLIQUITY_RAD.cos() - COS_OBL).abs() < 1e-12);
    }

    #[test]
    fn pythagorean_identity() {
        assert!((SIN_OBL * SIN_OBL + COS_OBL * COS_OBL - 1.0).abs() < 1e-12);
    }
}
