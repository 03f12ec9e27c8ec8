//! Star catalog: parsing, magnitude filtering and styling.
//!
//! Catalog text is `;`-separated with a header line and the columns
//! `RA;Dec;Vmag`. RA is `hh mm ss` or decimal hours, Dec is `±dd mm ss` or
//! decimal degrees. Unit markers such as `h`, `m`, `°`, `′` are ignored.

use std::path::Path;

use sphere_time::{Instant, PrecessionCache};
use tracing::{debug, warn};

use crate::config::DEFAULT_MAGNITUDE_LIMIT;
use crate::error::RenderError;

/// One catalog star, J2000 coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStar {
    pub name: Option<String>,
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub magnitude: f64,
}

impl CatalogStar {
    pub fn ra_rad(&self) -> f64 {
        self.ra_deg.to_radians()
    }

    pub fn dec_rad(&self) -> f64 {
        self.dec_deg.to_radians()
    }

    /// Position at `instant`, precessed from J2000 when `precess` is set.
    /// The catalog itself is never modified.
    pub fn position_rad(
        &self,
        instant: Instant,
        precess: bool,
        cache: &mut PrecessionCache,
    ) -> (f64, f64) {
        if precess {
            cache.precess(instant, self.ra_rad(), self.dec_rad())
        } else {
            (self.ra_rad(), self.dec_rad())
        }
    }
}

/// Size and fill of a star dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarStyle {
    pub radius: f64,
    pub color: &'static str,
}

/// Dot style for a visual magnitude; brighter stars are larger and whiter.
pub fn star_style(magnitude: f64) -> StarStyle {
    let radius = if magnitude <= 1.0 {
        3.0
    } else if magnitude <= 2.0 {
        2.5
    } else if magnitude <= 3.0 {
        2.0
    } else if magnitude <= 4.0 {
        1.5
    } else {
        1.0
    };
    let color = if magnitude <= 1.0 {
        "#ffffff"
    } else if magnitude <= 2.0 {
        "#aaaaaa"
    } else if magnitude <= 3.0 {
        "#777777"
    } else {
        "#555555"
    };
    StarStyle { radius, color }
}

fn numeric_fields(text: &str) -> Vec<f64> {
    let cleaned: String = text
        .chars()
        .map(|c| if c.is_ascii_digit() || matches!(c, '.' | '+' | '-') { c } else { ' ' })
        .collect();
    cleaned
        .split_whitespace()
        .map(|t| t.parse::<f64>().unwrap_or(f64::NAN))
        .collect()
}

fn sexagesimal(fields: &[f64]) -> Option<f64> {
    match *fields {
        [v] => Some(v),
        [a, b, c] => Some(a.abs() + b / 60.0 + c / 3600.0),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

/// Right ascension in degrees from `hh mm ss` or decimal hours.
pub fn parse_ra_hms(text: &str) -> Option<f64> {
    let hours = sexagesimal(&numeric_fields(text))?;
    Some((hours * 15.0).rem_euclid(360.0))
}

/// Declination in degrees from `±dd mm ss` or decimal degrees.
///
/// The sign applies to the whole value, so `-00 30 00` is -0.5.
pub fn parse_dec_dms(text: &str) -> Option<f64> {
    let fields = numeric_fields(text);
    let magnitude = sexagesimal(&fields)?;
    let negative = text.trim_start().starts_with('-');
    let value = if fields.len() == 1 {
        magnitude
    } else if negative {
        -magnitude
    } else {
        magnitude
    };
    (-90.0..=90.0).contains(&value).then_some(value)
}

/// Stars in drawing order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StarCatalog {
    stars: Vec<CatalogStar>,
}

impl StarCatalog {
    pub fn new(stars: Vec<CatalogStar>) -> Self {
        Self { stars }
    }

    pub fn stars(&self) -> &[CatalogStar] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Parse catalog text, keeping stars at or below `magnitude_limit`.
    /// Malformed rows are skipped.
    pub fn parse_csv(text: &str, magnitude_limit: f64) -> Self {
        let mut stars = Vec::new();
        let mut skipped = 0usize;
        for line in text.lines().skip(1) {
            let cols: Vec<&str> = line.split(';').collect();
            if cols.len() < 3 {
                if !line.trim().is_empty() {
                    skipped += 1;
                }
                continue;
            }
            let Ok(magnitude) = cols[2].trim().parse::<f64>() else {
                skipped += 1;
                continue;
            };
            if magnitude.is_nan() || magnitude > magnitude_limit {
                continue;
            }
            match (parse_ra_hms(cols[0]), parse_dec_dms(cols[1])) {
                (Some(ra_deg), Some(dec_deg)) => stars.push(CatalogStar {
                    name: None,
                    ra_deg,
                    dec_deg,
                    magnitude,
                }),
                _ => skipped += 1,
            }
        }
        debug!(stars = stars.len(), skipped, "parsed star catalog");
        Self { stars }
    }

    /// Read and parse a catalog file.
    pub fn load_csv(path: impl AsRef<Path>, magnitude_limit: f64) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "failed to read star catalog");
            RenderError::from(e)
        })?;
        Ok(Self::parse_csv(&text, magnitude_limit))
    }

    /// Built-in table of thirty bright named stars.
    pub fn bright_stars() -> Self {
        let stars = BRIGHT_STARS
            .iter()
            .filter_map(|&(name, ra, dec, magnitude)| {
                Some(CatalogStar {
                    name: Some(name.to_string()),
                    ra_deg: parse_ra_hms(ra)?,
                    dec_deg: parse_dec_dms(dec)?,
                    magnitude,
                })
            })
            .filter(|s| s.magnitude <= DEFAULT_MAGNITUDE_LIMIT)
            .collect();
        Self { stars }
    }

    pub fn find(&self, name: &str) -> Option<&CatalogStar> {
        self.stars
            .iter()
            .find(|s| s.name.as_deref().is_some_and(|n| n.eq_ignore_ascii_case(name)))
    }
}

const BRIGHT_STARS: [(&str, &str, &str, f64); 30] = [
    ("Algol", "03h 08m 10s", "+40° 57′ 20″", 2.1),
    ("Alcyone", "03h 47m 29s", "+24° 06′ 18″", 2.87),
    ("Aldebaran", "04h 35m 55s", "+16° 30′ 33″", 0.87),
    ("Rigel", "05h 14m 32s", "-08° 12′ 06″", 0.12),
    ("Capella", "05h 16m 41s", "+46° 00′ 09″", 0.08),
    ("Polaris", "02h 31m 49s", "+89° 15′ 51″", 1.97),
    ("Betelgeuse", "05h 55m 10s", "+07° 24′ 25″", 0.42),
    ("Sirius", "06h 45m 09s", "-16° 42′ 58″", -1.46),
    ("Canopus", "06h 23m 57s", "-52° 41′ 44″", -0.72),
    ("Castor", "07h 34m 36s", "+31° 53′ 18″", 1.58),
    ("Pollux", "07h 45m 19s", "+28° 01′ 35″", 1.14),
    ("Procyon", "07h 39m 18s", "+05° 13′ 30″", 0.34),
    ("Regulus", "10h 08m 22s", "+11° 58′ 02″", 1.35),
    ("Alkaid", "13h 47m 32s", "+49° 18′ 15″", 1.85),
    ("Algorab", "12h 29m 51s", "-19° 27′ 57″", 3.0),
    ("Spica", "13h 25m 11s", "-11° 09′ 41″", 0.98),
    ("Arcturus", "14h 15m 39s", "+19° 10′ 57″", -0.04),
    ("Mimosa", "12h 47m 44s", "-59° 41′ 19″", 1.25),
    ("Acrux", "12h 26m 35s", "-63° 05′ 57″", 0.76),
    ("Alphecca", "15h 34m 41s", "+26° 42′ 16″", 2.23),
    ("Hadar", "14h 03m 49s", "-60° 22′ 23″", 0.61),
    ("Alpha Centauri", "14h 39m 36s", "-60° 50′ 02″", -0.27),
    ("Antares", "16h 29m 24s", "-26° 25′ 55″", 1.06),
    ("Vega", "18h 36m 56s", "+38° 47′ 01″", 0.03),
    ("Albireo", "19h 30m 43s", "+27° 57′ 35″", 3.1),
    ("Altair", "19h 50m 47s", "+08° 52′ 06″", 0.77),
    ("Deneb", "20h 41m 26s", "+45° 16′ 49″", 1.25),
    ("Deneb Algedi", "21h 47m 02s", "-16° 07′ 38″", 2.85),
    ("Fomalhaut", "22h 57m 39s", "-29° 37′ 20″", 1.16),
    ("Achernar", "01h 37m 43s", "-57° 14′ 12″", 0.45),
];
