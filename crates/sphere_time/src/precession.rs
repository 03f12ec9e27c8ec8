//! Precession matrix cache keyed by exact instant.

use sphere_frames::{Matrix3, precess_equatorial, precession_matrix};

use crate::instant::Instant;

/// Precession matrix for an instant (J2000.0 → mean equator of date).
pub fn precession_matrix_at(instant: Instant) -> Matrix3 {
    precession_matrix(instant.julian_centuries())
}

/// Holds the most recent precession matrix and the instant it was built for.
///
/// Any change of instant, however small, rebuilds the matrix.
#[derive(Debug, Clone, Default)]
pub struct PrecessionCache {
    cached: Option<(Instant, Matrix3)>,
    rebuilds: u64,
}

impl PrecessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matrix for `instant`, rebuilding only when the instant changed.
    pub fn matrix(&mut self, instant: Instant) -> Matrix3 {
        if let Some((at, m)) = self.cached {
            if at == instant {
                return m;
            }
        }
        let m = precession_matrix_at(instant);
        self.cached = Some((instant, m));
        self.rebuilds += 1;
        m
    }

    /// Precess a J2000 `(ra, dec)` pair (radians) to the mean equator of `instant`.
    pub fn precess(&mut self, instant: Instant, ra_rad: f64, dec_rad: f64) -> (f64, f64) {
        let m = self.matrix(instant);
        precess_equatorial(&m, ra_rad, dec_rad)
    }

    /// Number of times the matrix has been rebuilt.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_at_j2000() {
        let m = precession_matrix_at(Instant::J2000);
        assert_eq!(m[0][0], 1.0);
        assert_eq!(m[1][1], 1.0);
        assert_eq!(m[2][2], 1.0);
    }

    #[test]
    fn cache_reuses_same_instant() {
        let mut cache = PrecessionCache::new();
        let t = Instant::from_unix_ms(1_700_000_000_000);
        let a = cache.matrix(t);
        let b = cache.matrix(t);
        assert_eq!(a, b);
        assert_eq!(cache.rebuilds(), 1);
    }

    #[test]
    fn cache_invalidates_on_any_change() {
        let mut cache = PrecessionCache::new();
        let t = Instant::from_unix_ms(1_700_000_000_000);
        cache.matrix(t);
        cache.matrix(t.offset_ms(1));
        assert_eq!(cache.rebuilds(), 2);
    }

    #[test]
    fn precess_leaves_j2000_coordinates_alone() {
        let mut cache = PrecessionCache::new();
        let (ra, dec) = cache.precess(Instant::J2000, 1.2, 0.4);
        assert!((ra - 1.2).abs() < 1e-12);
        assert!((dec - 0.4).abs() < 1e-12);
    }
}
