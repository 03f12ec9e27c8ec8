//! Error types for rendering and ephemeris refresh.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sphere_chart::{Body, ChartError};
use sphere_time::TimeError;

/// Errors from an ephemeris provider, reported per body.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider has no model for this body.
    Unsupported(Body),
    /// The provider produced NaN or infinite coordinates.
    NonFinite(Body),
    /// Error from time conversion.
    Time(TimeError),
    /// Any other provider failure.
    Provider(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported(body) => write!(f, "no ephemeris model for {body}"),
            Self::NonFinite(body) => write!(f, "non-finite position for {body}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Provider(msg) => write!(f, "provider error: {msg}"),
        }
    }
}

impl Error for EphemerisError {}

impl From<TimeError> for EphemerisError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

/// Errors from rendering a frame or writing its output.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RenderError {
    /// A configuration value is out of range.
    InvalidConfig(&'static str),
    /// Error from chart computation.
    Chart(ChartError),
    /// Error from the ephemeris layer.
    Ephemeris(EphemerisError),
    /// Error from time conversion.
    Time(TimeError),
    /// Reading a catalog or writing output failed.
    Io(String),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Chart(e) => write!(f, "chart error: {e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl Error for RenderError {}

impl From<ChartError> for RenderError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

impl From<EphemerisError> for RenderError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<TimeError> for RenderError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
