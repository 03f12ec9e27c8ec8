//! Spherical geometry kernel for the celestial sphere.
//!
//! Provides the equatorial → horizontal conversion, the three user
//! rotations, hemisphere-culled projection onto a screen plane,
//! ecliptic ↔ equatorial conversion, and the IAU 1976 precession matrix.

pub mod ecliptic;
pub mod horizontal;
pub mod obliquity;
pub mod precession;
pub mod projection;
pub mod rotation;
pub mod spherical;

pub use ecliptic::{ecliptic_to_equatorial, equatorial_to_ecliptic};
pub use horizontal::{AltAz, horizon_point, horizontal_coords, to_horizontal};
pub use obliquity::{COS_OBL, OBLIQUITY_DEG, OBLIQUITY_RAD, SIN_OBL};
pub use precession::{
    Matrix3, apply_matrix, precess_equatorial, precession_angles_arcsec, precession_matrix,
};
pub use projection::{
    MAX_ZOOM, MIN_ZOOM, ProjectionOptions, SCALE_PER_WIDTH, ScreenPoint, Viewport, clamp_zoom,
    project,
};
pub use rotation::{Orientation, rotate_x, rotate_y, rotate_z};
pub use spherical::{
    SphericalCoords, cartesian_to_equatorial, cartesian_to_spherical, equatorial_to_cartesian,
    spherical_to_cartesian,
};
