//! Solar-system bodies drawn on the sphere and the chart wheel.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ChartError;

/// Sun, Moon and the eight planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All bodies in drawing order.
pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

/// The planets drawn as dots (everything except the Sun and Moon).
pub const PLANETS: [Body; 8] = [
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    pub const fn all() -> &'static [Body] {
        &ALL_BODIES
    }

    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// Astronomical symbol.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Sun => "\u{2609}",
            Self::Moon => "\u{263D}",
            Self::Mercury => "\u{263F}",
            Self::Venus => "\u{2640}",
            Self::Mars => "\u{2642}",
            Self::Jupiter => "\u{2643}",
            Self::Saturn => "\u{2644}",
            Self::Uranus => "\u{2645}",
            Self::Neptune => "\u{2646}",
            Self::Pluto => "\u{2647}",
        }
    }

    /// Half-orb ("moiety") in degrees. The outer planets have none and
    /// take no part in aspects.
    pub const fn moiety_deg(self) -> Option<f64> {
        match self {
            Self::Sun => Some(15.0),
            Self::Moon => Some(13.0),
            Self::Mercury => Some(7.0),
            Self::Venus => Some(8.0),
            Self::Mars => Some(7.5),
            Self::Jupiter => Some(12.0),
            Self::Saturn => Some(10.0),
            Self::Uranus | Self::Neptune | Self::Pluto => None,
        }
    }

    /// Fill colour on the sphere.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Sun => "#ffff00",
            Self::Moon => "#dddddd",
            Self::Mercury => "#cccccc",
            Self::Venus => "#cc99ff",
            Self::Mars => "#ff2222",
            Self::Jupiter => "#ffffcc",
            Self::Saturn => "#ff9966",
            Self::Uranus => "#66ccff",
            Self::Neptune => "#6699ff",
            Self::Pluto => "#aaaaaa",
        }
    }

    /// Disc radius in pixels on the sphere.
    pub const fn radius_px(self) -> f64 {
        match self {
            Self::Sun | Self::Moon => 10.0,
            _ => 5.0,
        }
    }

    pub const fn is_luminary(self) -> bool {
        matches!(self, Self::Sun | Self::Moon)
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChartError::UnknownBody(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_order() {
        for (i, b) in ALL_BODIES.iter().enumerate() {
            assert_eq!(b.index(), i);
        }
    }

    #[test]
    fn outer_planets_have_no_moiety() {
        assert_eq!(Body::Uranus.moiety_deg(), None);
        assert_eq!(Body::Pluto.moiety_deg(), None);
        assert_eq!(Body::Mars.moiety_deg(), Some(7.5));
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("jupiter".parse::<Body>(), Ok(Body::Jupiter));
        assert!("Vulcan".parse::<Body>().is_err());
    }

    #[test]
    fn planets_exclude_luminaries() {
        assert!(PLANETS.iter().all(|b| !b.is_luminary()));
    }
}
