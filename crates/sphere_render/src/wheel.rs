//! Flat horoscope wheel: two rings, twelve sign sectors and body glyphs.

use sphere_chart::{ALL_SIGNS, Body, SignLayoutConfig, arrange_in_signs, normalize_360, sign_index};

use crate::surface::{DrawSurface, Stroke, TextStyle};

const WHEEL_COLOR: &str = "#ffffff";

/// Longitudes of the demonstration chart.
pub const SAMPLE_LONGITUDES: [(Body, f64); 10] = [
    (Body::Sun, 14.0),
    (Body::Moon, 48.0),
    (Body::Mercury, 72.0),
    (Body::Venus, 111.0),
    (Body::Mars, 142.0),
    (Body::Jupiter, 173.0),
    (Body::Saturn, 206.0),
    (Body::Uranus, 252.0),
    (Body::Neptune, 292.0),
    (Body::Pluto, 326.0),
];

/// Wheel layout variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelVariant {
    /// 0° Aries on the left, bodies de-collided within their signs.
    Tropical,
    /// 0° Aries at the top, the ascendant's sign numbered as house 1.
    WholeSign { ascendant_deg: f64 },
}

/// Ring radii and styling for a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub center: (f64, f64),
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub body_radius: f64,
    pub sign_text_radius: f64,
    pub line_width: f64,
    pub sign_text_px: f64,
    pub body_text_px: f64,
}

impl WheelGeometry {
    pub fn new(variant: WheelVariant, width: f64, height: f64) -> Self {
        let half = width.min(height) / 2.0;
        let (outer, inner_ratio, line_width, sign_px, body_px) = match variant {
            WheelVariant::Tropical => (half - 24.0, 0.58, 2.0, 24.0, 26.0),
            WheelVariant::WholeSign { .. } => (half - 16.0, 0.82, 1.2, 16.0, 20.0),
        };
        let outer = outer.max(1.0);
        let inner = outer * inner_ratio;
        Self {
            center: (width / 2.0, height / 2.0),
            outer_radius: outer,
            inner_radius: inner,
            body_radius: (outer + inner) / 2.0,
            sign_text_radius: outer - 18.0,
            line_width,
            sign_text_px: sign_px,
            body_text_px: body_px,
        }
    }

    /// Screen point at radius `r` for an ecliptic longitude under `variant`.
    pub fn point(&self, variant: WheelVariant, lon_deg: f64, r: f64) -> (f64, f64) {
        let a = screen_angle_deg(variant, lon_deg).to_radians();
        (self.center.0 + r * a.cos(), self.center.1 + r * a.sin())
    }
}

/// Screen angle of a longitude, degrees clockwise from the +x axis.
pub fn screen_angle_deg(variant: WheelVariant, lon_deg: f64) -> f64 {
    match variant {
        WheelVariant::Tropical => lon_deg + 180.0,
        WheelVariant::WholeSign { .. } => lon_deg - 90.0,
    }
}

/// A glyph placed on the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGlyph {
    pub body: Body,
    pub longitude_deg: f64,
    /// Longitude the glyph is drawn at.
    pub display_deg: f64,
}

/// Body glyph positions for a variant. The tropical wheel spreads bodies
/// that share a sign; the whole-sign wheel uses raw longitudes.
pub fn place_bodies(variant: WheelVariant, longitudes: &[(Body, f64)]) -> Vec<WheelGlyph> {
    match variant {
        WheelVariant::Tropical => arrange_in_signs(longitudes, &SignLayoutConfig::default())
            .into_iter()
            .map(|p| WheelGlyph {
                body: p.body,
                longitude_deg: p.longitude_deg,
                display_deg: p.adjusted_longitude_deg,
            })
            .collect(),
        WheelVariant::WholeSign { .. } => longitudes
            .iter()
            .filter(|(_, lon)| lon.is_finite())
            .map(|&(body, lon)| WheelGlyph {
                body,
                longitude_deg: normalize_360(lon),
                display_deg: normalize_360(lon),
            })
            .collect(),
    }
}

/// Draw a complete wheel.
pub fn draw_wheel<S: DrawSurface + ?Sized>(
    surface: &mut S,
    variant: WheelVariant,
    width: f64,
    height: f64,
    longitudes: &[(Body, f64)],
) -> WheelGeometry {
    let g = WheelGeometry::new(variant, width, height);
    let stroke = Stroke::new(WHEEL_COLOR, g.line_width);
    let (cx, cy) = g.center;

    surface.stroke_circle(cx, cy, g.outer_radius, &stroke);
    surface.stroke_circle(cx, cy, g.inner_radius, &stroke);

    let sign_style = TextStyle::new(WHEEL_COLOR, g.sign_text_px);
    let first_sign = match variant {
        WheelVariant::Tropical => 0,
        WheelVariant::WholeSign { ascendant_deg } => sign_index(ascendant_deg) as usize,
    };
    for house in 0..12 {
        let sign = ALL_SIGNS[(first_sign + house) % 12];
        let start = sign.start_deg();
        let (x1, y1) = g.point(variant, start, g.inner_radius);
        let (x2, y2) = g.point(variant, start, g.outer_radius);
        surface.move_to(x1, y1);
        surface.line_to(x2, y2);
        surface.stroke(&stroke);

        let (sx, sy) = g.point(variant, start + 15.0, g.sign_text_radius);
        surface.fill_text(sign.glyph(), sx, sy, &sign_style);

        if let WheelVariant::WholeSign { .. } = variant {
            let (hx, hy) = g.point(variant, start + 15.0, g.inner_radius - 12.0);
            let number = (house + 1).to_string();
            surface.fill_text(&number, hx, hy, &TextStyle::new(WHEEL_COLOR, 11.0));
        }
    }

    let body_style = TextStyle::new(WHEEL_COLOR, g.body_text_px);
    for glyph in place_bodies(variant, longitudes) {
        let (x, y) = g.point(variant, glyph.display_deg, g.body_radius);
        surface.fill_text(glyph.body.glyph(), x, y, &body_style);
    }
    g
}
