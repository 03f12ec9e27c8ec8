//! Orthographic projection of the rotated sphere onto the screen plane.
//!
//! The viewer looks down the +x axis: screen x follows +y (or -y when the
//! east-west mirror is on) and screen y follows -z. Points with x < 0 lie
//! on the far hemisphere.

/// Smallest accepted zoom factor.
pub const MIN_ZOOM: f64 = 0.1;
/// Largest accepted zoom factor.
pub const MAX_ZOOM: f64 = 10.0;
/// Sphere radius as a fraction of the canvas width at zoom 1.
pub const SCALE_PER_WIDTH: f64 = 0.4;

/// Screen placement of the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center_x: f64,
    pub center_y: f64,
    /// Pixels per unit radius.
    pub scale: f64,
}

impl Viewport {
    pub fn new(center_x: f64, center_y: f64, scale: f64) -> Self {
        Self {
            center_x,
            center_y,
            scale,
        }
    }

    /// Viewport centered on a `width` × `height` canvas.
    ///
    /// `zoom` is clamped to [`MIN_ZOOM`, `MAX_ZOOM`]; a non-finite zoom
    /// falls back to 1.
    pub fn for_canvas(width: f64, height: f64, zoom: f64) -> Self {
        let zoom = clamp_zoom(zoom);
        Self {
            center_x: width / 2.0,
            center_y: height / 2.0,
            scale: width * SCALE_PER_WIDTH * zoom,
        }
    }
}

/// Clamp a zoom factor into the accepted range.
pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() {
        zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    } else {
        1.0
    }
}

/// Independent projection toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectionOptions {
    /// Draw the far hemisphere instead of culling it.
    pub show_back_side: bool,
    /// Mirror the screen horizontally (east-west reversal).
    pub reverse_east_west: bool,
}

/// A projected point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub sx: f64,
    pub sy: f64,
    /// True when the source vector lies on the far hemisphere (x < 0).
    pub back_side: bool,
}

/// Project a rotated horizontal-frame vector.
///
/// Returns `None` when the far hemisphere is hidden and `v.x < 0`, or when
/// the vector carries a non-finite component.
pub fn project(v: &[f64; 3], viewport: &Viewport, options: &ProjectionOptions) -> Option<ScreenPoint> {
    if !v.iter().all(|c| c.is_finite()) {
        return None;
    }
    let back_side = v[0] < 0.0;
    if back_side && !options.show_back_side {
        return None;
    }
    let y = if options.reverse_east_west { -v[1] } else { v[1] };
    Some(ScreenPoint {
        sx: viewport.center_x + viewport.scale * y,
        sy: viewport.center_y - viewport.scale * v[2],
        back_side,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp() -> Viewport {
        Viewport::new(400.0, 300.0, 100.0)
    }

    #[test]
    fn culls_far_side_by_default() {
        let opts = ProjectionOptions::default();
        assert!(project(&[-0.1, 0.2, 0.3], &vp(), &opts).is_none());
        assert!(project(&[0.1, 0.2, 0.3], &vp(), &opts).is_some());
    }

    #[test]
    fn back_side_flag_reveals_far_hemisphere() {
        let opts = ProjectionOptions {
            show_back_side: true,
            reverse_east_west: false,
        };
        let p = project(&[-0.5, 0.5, 0.0], &vp(), &opts).unwrap();
        assert!(p.back_side);
        assert!((p.sx - 450.0).abs() < 1e-12);
    }

    #[test]
    fn mirror_flips_screen_x_only() {
        let plain = ProjectionOptions::default();
        let mirrored = ProjectionOptions {
            show_back_side: false,
            reverse_east_west: true,
        };
        let a = project(&[0.5, 0.5, 0.5], &vp(), &plain).unwrap();
        let b = project(&[0.5, 0.5, 0.5], &vp(), &mirrored).unwrap();
        assert!((a.sx - 450.0).abs() < 1e-12);
        assert!((b.sx - 350.0).abs() < 1e-12);
        assert_eq!(a.sy, b.sy);
        assert!((a.sy - 250.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_vector_is_culled() {
        let opts = ProjectionOptions {
            show_back_side: true,
            reverse_east_west: false,
        };
        assert!(project(&[f64::NAN, 0.0, 0.0], &vp(), &opts).is_none());
    }

    #[test]
    fn canvas_viewport_scale_and_zoom_clamp() {
        let v = Viewport::for_canvas(1000.0, 800.0, 1.0);
        assert_eq!(v.center_x, 500.0);
        assert_eq!(v.center_y, 400.0);
        assert!((v.scale - 400.0).abs() < 1e-12);
        let far = Viewport::for_canvas(1000.0, 800.0, 50.0);
        assert!((far.scale - 4000.0).abs() < 1e-9);
        assert_eq!(clamp_zoom(f64::NAN), 1.0);
        assert_eq!(clamp_zoom(0.0), MIN_ZOOM);
    }
}
