//! Observer location on the Earth's surface.

use crate::error::ChartError;

/// Latitude is held just short of the poles so `tan(lat)` stays finite.
pub const MAX_LATITUDE_DEG: f64 = 89.9999;

/// Default observer: Yokohama.
pub const DEFAULT_LATITUDE_DEG: f64 = 35.4333;
pub const DEFAULT_LONGITUDE_DEG: f64 = 139.65;

/// Geographic location of the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    /// Geodetic latitude in degrees, north positive. Range: [-89.9999, 89.9999].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl Observer {
    /// Create an observer, clamping out-of-range input.
    ///
    /// Latitude is clamped to ±[`MAX_LATITUDE_DEG`] and longitude wrapped
    /// into [-180, 180]. A non-finite component falls back to the default
    /// observer's value.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        let latitude_deg = if latitude_deg.is_finite() {
            latitude_deg.clamp(-MAX_LATITUDE_DEG, MAX_LATITUDE_DEG)
        } else {
            DEFAULT_LATITUDE_DEG
        };
        let longitude_deg = if longitude_deg.is_finite() {
            wrap_longitude(longitude_deg)
        } else {
            DEFAULT_LONGITUDE_DEG
        };
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Create an observer, rejecting out-of-range input instead of clamping.
    pub fn try_new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, ChartError> {
        if !latitude_deg.is_finite() || !longitude_deg.is_finite() {
            return Err(ChartError::InvalidLocation("non-finite coordinate"));
        }
        if latitude_deg.abs() > 90.0 {
            return Err(ChartError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if longitude_deg.abs() > 360.0 {
            return Err(ChartError::InvalidLocation("longitude outside [-360, 360]"));
        }
        Ok(Self::new(latitude_deg, longitude_deg))
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

impl Default for Observer {
    fn default() -> Self {
        Self {
            latitude_deg: DEFAULT_LATITUDE_DEG,
            longitude_deg: DEFAULT_LONGITUDE_DEG,
        }
    }
}

fn wrap_longitude(deg: f64) -> f64 {
    let r = (deg + 180.0).rem_euclid(360.0) - 180.0;
    // keep +180 rather than flipping it to -180
    if r == -180.0 && deg > 0.0 { 180.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude_clamped_short_of_pole() {
        let o = Observer::new(90.0, 0.0);
        assert_eq!(o.latitude_deg, MAX_LATITUDE_DEG);
        assert!(o.latitude_rad().tan().is_finite());
        assert_eq!(Observer::new(-95.0, 0.0).latitude_deg, -MAX_LATITUDE_DEG);
    }

    #[test]
    fn longitude_wrapped() {
        assert!((Observer::new(0.0, 190.0).longitude_deg + 170.0).abs() < 1e-12);
        assert!((Observer::new(0.0, 180.0).longitude_deg - 180.0).abs() < 1e-12);
        assert!((Observer::new(0.0, -200.0).longitude_deg - 160.0).abs() < 1e-12);
    }

    #[test]
    fn nan_falls_back_to_default() {
        let o = Observer::new(f64::NAN, f64::INFINITY);
        assert_eq!(o, Observer::default());
    }

    #[test]
    fn try_new_rejects() {
        assert!(Observer::try_new(91.0, 0.0).is_err());
        assert!(Observer::try_new(f64::NAN, 0.0).is_err());
        assert!(Observer::try_new(35.0, 139.0).is_ok());
    }
}
