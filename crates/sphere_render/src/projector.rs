//! The projection contract shared by every layer.

use sphere_chart::SkyPoint;
use sphere_frames::{Orientation, ProjectionOptions, ScreenPoint, Viewport, project, to_horizontal};

use crate::frame::FrameState;

/// Maps sky directions to screen points for one frame.
///
/// House, aspect and body layers take a projector as an argument instead
/// of reaching for renderer state.
pub trait SkyProjector {
    /// Horizontal unit vector for an equatorial direction (radians).
    fn to_horizontal(&self, ra_rad: f64, dec_rad: f64) -> [f64; 3];

    /// Apply the user's view rotation to a horizontal vector.
    fn apply_rotations(&self, v: &[f64; 3]) -> [f64; 3];

    /// Project a rotated vector, or `None` if it is culled.
    fn project(&self, v: &[f64; 3]) -> Option<ScreenPoint>;

    /// Screen position of the sphere's center.
    fn center(&self) -> (f64, f64);

    fn project_horizontal(&self, v: &[f64; 3]) -> Option<ScreenPoint> {
        self.project(&self.apply_rotations(v))
    }

    fn project_equatorial(&self, ra_rad: f64, dec_rad: f64) -> Option<ScreenPoint> {
        self.project_horizontal(&self.to_horizontal(ra_rad, dec_rad))
    }

    fn project_sky(&self, point: SkyPoint) -> Option<ScreenPoint> {
        match point {
            SkyPoint::Horizontal(v) => self.project_horizontal(&v),
            SkyPoint::Equatorial { ra_rad, dec_rad } => self.project_equatorial(ra_rad, dec_rad),
        }
    }
}

/// Projector built from a [`FrameState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameProjector {
    pub lst_rad: f64,
    pub latitude_rad: f64,
    pub orientation: Orientation,
    pub viewport: Viewport,
    pub options: ProjectionOptions,
}

impl FrameProjector {
    pub fn new(frame: &FrameState) -> Self {
        Self {
            lst_rad: frame.sidereal_angle_rad(),
            latitude_rad: frame.observer.latitude_rad(),
            orientation: frame.orientation,
            viewport: frame.viewport(),
            options: frame.projection,
        }
    }
}

impl SkyProjector for FrameProjector {
    fn to_horizontal(&self, ra_rad: f64, dec_rad: f64) -> [f64; 3] {
        to_horizontal(ra_rad, dec_rad, self.lst_rad, self.latitude_rad)
    }

    fn apply_rotations(&self, v: &[f64; 3]) -> [f64; 3] {
        self.orientation.apply(v)
    }

    fn project(&self, v: &[f64; 3]) -> Option<ScreenPoint> {
        project(v, &self.viewport, &self.options)
    }

    fn center(&self) -> (f64, f64) {
        (self.viewport.center_x, self.viewport.center_y)
    }
}
