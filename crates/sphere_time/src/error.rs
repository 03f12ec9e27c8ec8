//! Error types for instants, calendar parsing and stepping.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from instant construction, parsing, or calendar arithmetic.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar fields do not name a real date/time.
    InvalidDate(String),
    /// A Julian date or timestamp was NaN or infinite.
    NonFinite,
    /// Result falls outside the representable calendar range.
    OutOfRange,
    /// Text could not be parsed as a UTC timestamp.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::NonFinite => write!(f, "time value is not finite"),
            Self::OutOfRange => write!(f, "instant outside the supported calendar range"),
            Self::Parse(msg) => write!(f, "cannot parse UTC time: {msg}"),
        }
    }
}

impl Error for TimeError {}
