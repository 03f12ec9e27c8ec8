//! Error types for chart calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sphere_time::TimeError;

/// Errors from chart calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from time conversion.
    Time(TimeError),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// House system name not recognised.
    UnknownHouseSystem(String),
    /// Body name not recognised.
    UnknownBody(String),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::UnknownHouseSystem(name) => write!(f, "unknown house system: {name}"),
            Self::UnknownBody(name) => write!(f, "unknown body: {name}"),
        }
    }
}

impl Error for ChartError {}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
