//! Renderer configuration and layer visibility.

use sphere_chart::{HouseSystem, Observer};
use sphere_frames::{MAX_ZOOM, MIN_ZOOM, Orientation, ProjectionOptions};
use sphere_time::Instant;

use crate::error::RenderError;
use crate::frame::{FrameState, RenderQuality};

/// Default magnitude ceiling for catalog stars.
pub const DEFAULT_MAGNITUDE_LIMIT: f64 = 5.5;
/// Minimum wall-clock gap between ephemeris refreshes.
pub const DEFAULT_EPHEMERIS_INTERVAL_MS: i64 = 250;
/// A view change this recent renders at interactive quality.
pub const DEFAULT_INTERACTION_WINDOW_MS: i64 = 150;

/// Which layers are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerVisibility {
    pub stars: bool,
    pub horizon: bool,
    pub alt_grid: bool,
    pub meridian: bool,
    pub prime_vertical: bool,
    pub equator: bool,
    pub ecliptic: bool,
    /// Also gates the zodiac divisions and symbols.
    pub ecliptic_band: bool,
    pub ra_lines: bool,
    pub dec_lines: bool,
    pub directions: bool,
    pub zenith_nadir: bool,
    pub sun: bool,
    pub moon: bool,
    pub planets: bool,
    pub planet_labels: bool,
    pub aspects: bool,
    pub lunar_orbit: bool,
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self {
            stars: true,
            horizon: true,
            alt_grid: true,
            meridian: true,
            prime_vertical: false,
            equator: true,
            ecliptic: true,
            ecliptic_band: true,
            ra_lines: true,
            dec_lines: true,
            directions: true,
            zenith_nadir: true,
            sun: true,
            moon: true,
            planets: true,
            planet_labels: false,
            aspects: true,
            lunar_orbit: false,
        }
    }
}

impl LayerVisibility {
    /// Every layer off.
    pub const NONE: Self = Self {
        stars: false,
        horizon: false,
        alt_grid: false,
        meridian: false,
        prime_vertical: false,
        equator: false,
        ecliptic: false,
        ecliptic_band: false,
        ra_lines: false,
        dec_lines: false,
        directions: false,
        zenith_nadir: false,
        sun: false,
        moon: false,
        planets: false,
        planet_labels: false,
        aspects: false,
        lunar_orbit: false,
    };
}

/// Renderer settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: f64,
    pub height: f64,
    pub zoom: f64,
    pub magnitude_limit: f64,
    pub ephemeris_interval_ms: i64,
    pub interaction_window_ms: i64,
    /// Precess catalog stars to the mean equator of date.
    pub precess_stars: bool,
    pub layers: LayerVisibility,
    pub show_back_side: bool,
    pub reverse_east_west: bool,
    pub direction_text_px: f64,
    pub direction_color: &'static str,
    pub house_system: Option<HouseSystem>,
    pub background: &'static str,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 800.0,
            zoom: 1.0,
            magnitude_limit: DEFAULT_MAGNITUDE_LIMIT,
            ephemeris_interval_ms: DEFAULT_EPHEMERIS_INTERVAL_MS,
            interaction_window_ms: DEFAULT_INTERACTION_WINDOW_MS,
            precess_stars: false,
            layers: LayerVisibility::default(),
            show_back_side: false,
            reverse_east_west: false,
            direction_text_px: 20.0,
            direction_color: "#ffffff",
            house_system: None,
            background: "#000000",
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), RenderError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(RenderError::InvalidConfig("width must be positive"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(RenderError::InvalidConfig("height must be positive"));
        }
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&self.zoom) {
            return Err(RenderError::InvalidConfig("zoom must be within [0.1, 10]"));
        }
        if !self.magnitude_limit.is_finite() {
            return Err(RenderError::InvalidConfig("magnitude limit must be finite"));
        }
        if self.ephemeris_interval_ms < 0 {
            return Err(RenderError::InvalidConfig("ephemeris interval must not be negative"));
        }
        if self.interaction_window_ms < 0 {
            return Err(RenderError::InvalidConfig("interaction window must not be negative"));
        }
        if !(self.direction_text_px.is_finite() && self.direction_text_px > 0.0) {
            return Err(RenderError::InvalidConfig("direction text size must be positive"));
        }
        Ok(())
    }

    pub fn projection_options(&self) -> ProjectionOptions {
        ProjectionOptions {
            show_back_side: self.show_back_side,
            reverse_east_west: self.reverse_east_west,
        }
    }

    /// Frame for `instant`, `observer` and `orientation` under these settings.
    pub fn frame(
        &self,
        instant: Instant,
        observer: Observer,
        orientation: Orientation,
        quality: RenderQuality,
    ) -> FrameState {
        FrameState {
            instant,
            observer,
            orientation,
            zoom: self.zoom,
            width: self.width,
            height: self.height,
            projection: self.projection_options(),
            layers: self.layers,
            house_system: self.house_system,
            quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(RenderConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let c = RenderConfig {
            zoom: 20.0,
            ..RenderConfig::default()
        };
        assert!(matches!(c.validate(), Err(RenderError::InvalidConfig(_))));
        let c = RenderConfig {
            width: f64::NAN,
            ..RenderConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn layer_defaults() {
        let l = LayerVisibility::default();
        assert!(l.horizon && l.stars && l.ecliptic_band);
        assert!(!l.prime_vertical && !l.planet_labels && !l.lunar_orbit);
    }

    #[test]
    fn frame_carries_settings() {
        let c = RenderConfig {
            show_back_side: true,
            house_system: Some(HouseSystem::Placidus),
            ..RenderConfig::default()
        };
        let f = c.frame(
            Instant::J2000,
            Observer::default(),
            Orientation::IDENTITY,
            RenderQuality::Full,
        );
        assert!(f.projection.show_back_side);
        assert_eq!(f.house_system, Some(HouseSystem::Placidus));
    }
}
