//! Right-handed axis rotations and the user-driven view orientation.

/// Rotate `v` about the +x axis by `angle` radians.
pub fn rotate_x(v: &[f64; 3], angle: f64) -> [f64; 3] {
    let (s, c) = angle.sin_cos();
    [v[0], v[1] * c - v[2] * s, v[1] * s + v[2] * c]
}

/// Rotate `v` about the +y axis by `angle` radians.
pub fn rotate_y(v: &[f64; 3], angle: f64) -> [f64; 3] {
    let (s, c) = angle.sin_cos();
    [v[2] * s + v[0] * c, v[1], v[2] * c - v[0] * s]
}

/// Rotate `v` about the +z axis by `angle` radians.
pub fn rotate_z(v: &[f64; 3], angle: f64) -> [f64; 3] {
    let (s, c) = angle.sin_cos();
    [v[0] * c - v[1] * s, v[0] * s + v[1] * c, v[2]]
}

/// Viewpoint spin applied to every horizontal-frame vector before projection.
///
/// The three angles are applied in a fixed order: azimuthal spin about z
/// first, then tilt about y, then the east-west roll about x. Each slider
/// keeps its visual meaning only under this order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Azimuthal spin about the zenith axis, radians.
    pub rotation_z: f64,
    /// Tilt about the y axis, radians.
    pub rotation_y: f64,
    /// East-west roll about the x axis, radians.
    pub rotation_ew: f64,
}

impl Orientation {
    pub const IDENTITY: Self = Self {
        rotation_z: 0.0,
        rotation_y: 0.0,
        rotation_ew: 0.0,
    };

    pub fn new(rotation_z: f64, rotation_y: f64, rotation_ew: f64) -> Self {
        Self {
            rotation_z,
            rotation_y,
            rotation_ew,
        }
    }

    /// Apply Z, then Y, then EW.
    pub fn apply(&self, v: &[f64; 3]) -> [f64; 3] {
        let v = rotate_z(v, self.rotation_z);
        let v = rotate_y(&v, self.rotation_y);
        rotate_x(&v, self.rotation_ew)
    }

    /// True when any angle differs from `other` by more than `tolerance`.
    ///
    /// Used to detect user interaction between two frames.
    pub fn differs_from(&self, other: &Self, tolerance: f64) -> bool {
        (self.rotation_z - other.rotation_z).abs() > tolerance
            || (self.rotation_y - other.rotation_y).abs() > tolerance
            || (self.rotation_ew - other.rotation_ew).abs() > tolerance
    }
}
