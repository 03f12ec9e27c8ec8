//! Zodiac signs and degrees-minutes-seconds formatting.
//!
//! The ecliptic is divided into 12 signs of 30 degrees each, starting
//! from Aries at longitude 0.

use std::fmt::{Display, Formatter};

use crate::util::normalize_360;

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Zodiac glyph, forced to text presentation.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Aries => "\u{2648}\u{FE0E}",
            Self::Taurus => "\u{2649}\u{FE0E}",
            Self::Gemini => "\u{264A}\u{FE0E}",
            Self::Cancer => "\u{264B}\u{FE0E}",
            Self::Leo => "\u{264C}\u{FE0E}",
            Self::Virgo => "\u{264D}\u{FE0E}",
            Self::Libra => "\u{264E}\u{FE0E}",
            Self::Scorpio => "\u{264F}\u{FE0E}",
            Self::Sagittarius => "\u{2650}\u{FE0E}",
            Self::Capricorn => "\u{2651}\u{FE0E}",
            Self::Aquarius => "\u{2652}\u{FE0E}",
            Self::Pisces => "\u{2653}\u{FE0E}",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ecliptic longitude where the sign begins, degrees.
    pub const fn start_deg(self) -> f64 {
        self.index() as f64 * 30.0
    }

    pub const fn all() -> &'static [Sign; 12] {
        &ALL_SIGNS
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees.
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:04.1}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Position of a longitude within its sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignPosition {
    pub sign: Sign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Position within the sign as DMS.
    pub dms: Dms,
    /// Decimal degrees within the sign [0.0, 30.0).
    pub degrees_in_sign: f64,
}

impl Display for SignPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.dms, self.sign)
    }
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Negative input is taken by absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// 0-based sign index of an ecliptic longitude in degrees.
pub fn sign_index(lon_deg: f64) -> u8 {
    // floor of 359.999..., rounded up to 360.0 by normalization, lands on 12
    ((normalize_360(lon_deg) / 30.0).floor() as u8).min(11)
}

/// Sign and in-sign position of an ecliptic longitude in degrees.
pub fn sign_from_longitude(lon_deg: f64) -> SignPosition {
    let lon = normalize_360(lon_deg);
    let idx = sign_index(lon);
    let degrees_in_sign = lon - idx as f64 * 30.0;
    SignPosition {
        sign: ALL_SIGNS[idx as usize],
        sign_index: idx,
        dms: deg_to_dms(degrees_in_sign),
        degrees_in_sign,
    }
}
