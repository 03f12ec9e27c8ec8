//! Instants, sidereal time and precession for the celestial sphere.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - An `Instant` type (UTC milliseconds) with calendar parsing and stepping
//! - GMST and the local sidereal angle for an observer longitude
//! - A cached IAU 1976 precession matrix per instant

pub mod error;
pub mod instant;
pub mod julian;
pub mod precession;
pub mod sidereal;
pub mod step;

pub use error::TimeError;
pub use instant::{Instant, UtcTime};
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, MS_PER_DAY, SECONDS_PER_DAY, UNIX_EPOCH_JD,
    calendar_to_jd, jd_to_calendar, jd_to_centuries, unix_ms_to_jd,
};
pub use precession::{PrecessionCache, precession_matrix_at};
pub use sidereal::{
    earth_rotation_angle_rad, gmst_hours, gmst_rad, local_sidereal_time_rad, sidereal_angle_rad,
};
pub use step::{FAST_STEP_MULTIPLIER, Playback, StepUnit, step, step_fast};
