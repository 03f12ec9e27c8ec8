//! Ephemeris providers and the per-body position table.
//!
//! A provider answers one body at a time. [`BodyPositions`] applies a
//! batch of answers and keeps the previous value of any body whose lookup
//! failed, so one bad body never blanks the frame.

use std::collections::BTreeMap;

use sphere_chart::{Body, normalize_360};
use sphere_frames::{ecliptic_to_equatorial, equatorial_to_ecliptic};
use sphere_time::Instant;
use tracing::{debug, warn};

use crate::error::EphemerisError;

/// Right ascension in hours [0, 24) and declination in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    pub ra_hours: f64,
    pub dec_deg: f64,
}

/// Ecliptic longitude [0, 360) and latitude, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

/// A body's apparent place in both frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    pub equatorial: EquatorialPosition,
    pub ecliptic: EclipticPosition,
}

impl BodyPosition {
    pub fn from_equatorial(ra_hours: f64, dec_deg: f64) -> Self {
        let ra_hours = ra_hours.rem_euclid(24.0);
        let (lon, lat) = equatorial_to_ecliptic((ra_hours * 15.0).to_radians(), dec_deg.to_radians());
        Self {
            equatorial: EquatorialPosition { ra_hours, dec_deg },
            ecliptic: EclipticPosition {
                lon_deg: lon.to_degrees(),
                lat_deg: lat.to_degrees(),
            },
        }
    }

    pub fn from_ecliptic(lon_deg: f64, lat_deg: f64) -> Self {
        let lon_deg = normalize_360(lon_deg);
        let (ra, dec) = ecliptic_to_equatorial(lon_deg.to_radians(), lat_deg.to_radians());
        Self {
            equatorial: EquatorialPosition {
                ra_hours: ra.to_degrees() / 15.0,
                dec_deg: dec.to_degrees(),
            },
            ecliptic: EclipticPosition { lon_deg, lat_deg },
        }
    }

    pub fn ra_rad(&self) -> f64 {
        (self.equatorial.ra_hours * 15.0).to_radians()
    }

    pub fn dec_rad(&self) -> f64 {
        self.equatorial.dec_deg.to_radians()
    }

    pub fn is_finite(&self) -> bool {
        self.equatorial.ra_hours.is_finite()
            && self.equatorial.dec_deg.is_finite()
            && self.ecliptic.lon_deg.is_finite()
            && self.ecliptic.lat_deg.is_finite()
    }
}

/// Source of body positions.
pub trait EphemerisProvider {
    fn position(&self, body: Body, instant: Instant) -> Result<BodyPosition, EphemerisError>;

    fn name(&self) -> &str {
        "ephemeris"
    }
}

/// Query every body, turning non-finite answers into errors.
pub fn compute_positions<P: EphemerisProvider + ?Sized>(
    provider: &P,
    bodies: &[Body],
    instant: Instant,
) -> Vec<(Body, Result<BodyPosition, EphemerisError>)> {
    bodies
        .iter()
        .map(|&body| {
            let result = provider.position(body, instant).and_then(|p| {
                if p.is_finite() {
                    Ok(p)
                } else {
                    Err(EphemerisError::NonFinite(body))
                }
            });
            (body, result)
        })
        .collect()
}

/// Outcome of applying a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshReport {
    pub updated: usize,
    pub failed: usize,
}

/// Latest known position of each body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BodyPositions {
    positions: BTreeMap<Body, BodyPosition>,
}

impl BodyPositions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, body: Body) -> Option<&BodyPosition> {
        self.positions.get(&body)
    }

    pub fn insert(&mut self, body: Body, position: BodyPosition) {
        self.positions.insert(body, position);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions in body order.
    pub fn iter(&self) -> impl Iterator<Item = (Body, &BodyPosition)> {
        self.positions.iter().map(|(b, p)| (*b, p))
    }

    /// Apply provider answers. A failed body keeps its previous value.
    pub fn apply(
        &mut self,
        results: Vec<(Body, Result<BodyPosition, EphemerisError>)>,
    ) -> RefreshReport {
        let mut report = RefreshReport::default();
        for (body, result) in results {
            match result {
                Ok(position) => {
                    self.positions.insert(body, position);
                    report.updated += 1;
                }
                Err(e) => {
                    warn!(%body, error = %e, "ephemeris lookup failed, keeping previous position");
                    report.failed += 1;
                }
            }
        }
        report
    }

    /// Query `provider` for `bodies` at `instant` and apply the answers.
    pub fn refresh<P: EphemerisProvider + ?Sized>(
        &mut self,
        provider: &P,
        bodies: &[Body],
        instant: Instant,
    ) -> RefreshReport {
        let report = self.apply(compute_positions(provider, bodies, instant));
        debug!(
            provider = provider.name(),
            %instant,
            updated = report.updated,
            failed = report.failed,
            "ephemeris refreshed"
        );
        report
    }

    /// `(body, ecliptic longitude in degrees)` for the aspect and layout code.
    pub fn ecliptic_longitudes(&self) -> Vec<(Body, f64)> {
        self.iter().map(|(b, p)| (b, p.ecliptic.lon_deg)).collect()
    }
}

/// Mean-element Sun and principal-term Moon. Other bodies are unsupported.
///
/// Sun: mean longitude and anomaly with the equation of centre, good to
/// about 0.01°. Moon: mean longitude, anomaly and argument of latitude
/// with the largest periodic term in each coordinate, good to about 1°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LowPrecisionEphemeris;

impl LowPrecisionEphemeris {
    /// Sun's ecliptic longitude in degrees.
    pub fn sun_longitude_deg(days_since_j2000: f64) -> f64 {
        let t = days_since_j2000 / 36_525.0;
        let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
        let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t).to_radians();
        let c = 1.914_602 * m.sin() + 0.019_993 * (2.0 * m).sin() + 0.000_289 * (3.0 * m).sin();
        normalize_360(l0 + c)
    }

    /// Moon's ecliptic `(longitude, latitude)` in degrees.
    pub fn moon_ecliptic_deg(days_since_j2000: f64) -> (f64, f64) {
        let d = days_since_j2000;
        let mean_lon = 218.316 + 13.176_396 * d;
        let mean_anomaly = (134.963 + 13.064_993 * d).to_radians();
        let arg_lat = (93.272 + 13.229_350 * d).to_radians();
        let lon = mean_lon + 6.289 * mean_anomaly.sin();
        let lat = 5.128 * arg_lat.sin();
        (normalize_360(lon), lat)
    }
}

impl EphemerisProvider for LowPrecisionEphemeris {
    fn position(&self, body: Body, instant: Instant) -> Result<BodyPosition, EphemerisError> {
        let d = instant.days_since_j2000();
        match body {
            Body::Sun => Ok(BodyPosition::from_ecliptic(Self::sun_longitude_deg(d), 0.0)),
            Body::Moon => {
                let (lon, lat) = Self::moon_ecliptic_deg(d);
                Ok(BodyPosition::from_ecliptic(lon, lat))
            }
            other => Err(EphemerisError::Unsupported(other)),
        }
    }

    fn name(&self) -> &str {
        "low-precision"
    }
}

/// Table of fixed positions, independent of the instant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FixedEphemeris {
    table: BTreeMap<Body, BodyPosition>,
}

impl FixedEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, body: Body, position: BodyPosition) -> Self {
        self.table.insert(body, position);
        self
    }

    /// Table from ecliptic longitudes (degrees) on the ecliptic.
    pub fn from_longitudes(longitudes: &[(Body, f64)]) -> Self {
        let table = longitudes
            .iter()
            .map(|&(b, lon)| (b, BodyPosition::from_ecliptic(lon, 0.0)))
            .collect();
        Self { table }
    }
}

impl EphemerisProvider for FixedEphemeris {
    fn position(&self, body: Body, _instant: Instant) -> Result<BodyPosition, EphemerisError> {
        self.table
            .get(&body)
            .copied()
            .ok_or(EphemerisError::Unsupported(body))
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
