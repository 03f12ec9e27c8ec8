//! Sun and Moon discs, planet dots and their labels.

use sphere_chart::Body;
use sphere_frames::ScreenPoint;

use crate::config::LayerVisibility;
use crate::ephemeris::BodyPositions;
use crate::projector::SkyProjector;
use crate::surface::{DrawSurface, TextStyle};
use crate::trace::RenderStats;

const LABEL_STYLE: TextStyle = TextStyle::new("#dddddd", 14.0);
const LUMINARY_LABEL_OFFSET: f64 = 30.0;
const PLANET_LABEL_OFFSET: f64 = 35.0;

/// A body's unrotated horizontal unit vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyVector {
    pub body: Body,
    pub horizontal: [f64; 3],
}

/// Horizontal vectors of every known body. Depends only on the sidereal
/// angle, the latitude and the positions, not on the view rotation.
pub fn horizontal_vectors<P: SkyProjector + ?Sized>(
    projector: &P,
    positions: &BodyPositions,
) -> Vec<BodyVector> {
    positions
        .iter()
        .map(|(body, pos)| BodyVector {
            body,
            horizontal: projector.to_horizontal(pos.ra_rad(), pos.dec_rad()),
        })
        .collect()
}

fn layer_enabled(body: Body, layers: &LayerVisibility) -> bool {
    match body {
        Body::Sun => layers.sun,
        Body::Moon => layers.moon,
        _ => layers.planets,
    }
}

/// Project a body for the current view.
pub fn project_body<P: SkyProjector + ?Sized>(projector: &P, v: &BodyVector) -> Option<ScreenPoint> {
    projector.project_horizontal(&v.horizontal)
}

/// Draw bodies in order: Sun, Moon, then the planets.
pub fn draw_bodies<P, S>(
    projector: &P,
    surface: &mut S,
    vectors: &[BodyVector],
    layers: &LayerVisibility,
    stats: &mut RenderStats,
) where
    P: SkyProjector + ?Sized,
    S: DrawSurface + ?Sized,
{
    for v in vectors.iter().filter(|v| layer_enabled(v.body, layers)) {
        let Some(p) = project_body(projector, v) else {
            continue;
        };
        surface.fill_circle(p.sx, p.sy, v.body.radius_px(), v.body.color());
        stats.bodies_visible += 1;
        if layers.planet_labels {
            let offset = if v.body.is_luminary() {
                LUMINARY_LABEL_OFFSET
            } else {
                PLANET_LABEL_OFFSET
            };
            surface.fill_text(v.body.name(), p.sx + offset, p.sy, &LABEL_STYLE);
            stats.labels += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::BodyPosition;
    use crate::frame::FrameState;
    use crate::projector::FrameProjector;
    use crate::surface::{DrawCommand, RecordingSurface};
    use sphere_time::Instant;

    /// Point on the celestial equator at hour angle -6h, due east.
    fn east_point(frame: &FrameState) -> BodyPosition {
        let lst_h = frame.sidereal_angle_rad().to_degrees() / 15.0;
        BodyPosition::from_equatorial(lst_h + 6.0, 0.0)
    }

    #[test]
    fn luminary_is_larger_than_planet() {
        let frame = FrameState::new(Instant::J2000, 800.0, 800.0);
        let p = FrameProjector::new(&frame);
        let mut positions = BodyPositions::new();
        positions.insert(Body::Sun, east_point(&frame));
        positions.insert(Body::Mars, east_point(&frame));
        let vectors = horizontal_vectors(&p, &positions);
        let mut s = RecordingSurface::new(800.0, 800.0);
        let mut stats = RenderStats::default();
        draw_bodies(&p, &mut s, &vectors, &LayerVisibility::default(), &mut stats);

        let radii: Vec<f64> = s
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillCircle { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(radii, vec![10.0, 5.0]);
        assert_eq!(stats.bodies_visible, 2);
        assert!(s.texts().is_empty());
    }

    #[test]
    fn labels_follow_flag_and_layers() {
        let frame = FrameState::new(Instant::J2000, 800.0, 800.0);
        let p = FrameProjector::new(&frame);
        let mut positions = BodyPositions::new();
        positions.insert(Body::Moon, east_point(&frame));
        positions.insert(Body::Venus, east_point(&frame));
        let vectors = horizontal_vectors(&p, &positions);
        let layers = LayerVisibility {
            planets: false,
            planet_labels: true,
            ..LayerVisibility::default()
        };
        let mut s = RecordingSurface::new(800.0, 800.0);
        let mut stats = RenderStats::default();
        draw_bodies(&p, &mut s, &vectors, &layers, &mut stats);
        assert_eq!(s.texts(), vec!["Moon"]);
    }
}
