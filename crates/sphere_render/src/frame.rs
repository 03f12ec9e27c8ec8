//! Immutable per-frame state.

use sphere_chart::{HouseSystem, Observer};
use sphere_frames::{Orientation, ProjectionOptions, Viewport, clamp_zoom};
use sphere_time::{Instant, sidereal_angle_rad};

use crate::config::LayerVisibility;

/// Sample density for curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderQuality {
    /// Full sample counts, for static frames and file output.
    #[default]
    Full,
    /// Reduced sample counts while the view is being dragged or zoomed.
    Interactive,
}

impl RenderQuality {
    /// Choose between the full and interactive value of a parameter.
    pub const fn pick(self, full: usize, interactive: usize) -> usize {
        match self {
            Self::Full => full,
            Self::Interactive => interactive,
        }
    }

    /// Interactive when the view last changed within `window_ms` of `now_ms`.
    pub fn from_interaction(now_ms: i64, last_change_ms: Option<i64>, window_ms: i64) -> Self {
        match last_change_ms {
            Some(last) if now_ms.saturating_sub(last) < window_ms => Self::Interactive,
            _ => Self::Full,
        }
    }
}

/// Everything a frame is rendered from. Derived values are pure functions
/// of this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState {
    pub instant: Instant,
    pub observer: Observer,
    pub orientation: Orientation,
    /// Zoom factor, clamped to [0.1, 10] when the viewport is built.
    pub zoom: f64,
    pub width: f64,
    pub height: f64,
    pub projection: ProjectionOptions,
    pub layers: LayerVisibility,
    pub house_system: Option<HouseSystem>,
    pub quality: RenderQuality,
}

impl FrameState {
    /// Default view of the default observer at `instant` on a canvas.
    pub fn new(instant: Instant, width: f64, height: f64) -> Self {
        Self {
            instant,
            observer: Observer::default(),
            orientation: Orientation::IDENTITY,
            zoom: 1.0,
            width,
            height,
            projection: ProjectionOptions::default(),
            layers: LayerVisibility::default(),
            house_system: None,
            quality: RenderQuality::Full,
        }
    }

    /// Local sidereal angle in radians, [0, 2π).
    pub fn sidereal_angle_rad(&self) -> f64 {
        sidereal_angle_rad(self.instant, self.observer.longitude_deg)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::for_canvas(self.width, self.height, self.zoom)
    }

    pub fn effective_zoom(&self) -> f64 {
        clamp_zoom(self.zoom)
    }
}
