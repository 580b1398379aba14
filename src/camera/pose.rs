use glam::Vec3;

/// A complete camera configuration, captured as an immutable snapshot.
///
/// Vector math (add/sub/scale/length/normalize/lerp) comes from
/// [`glam::Vec3`]; note that `Vec3::lerp` does not clamp `t`, and
/// `normalize_or_zero` hands back the zero vector unchanged, which is
/// exactly the degenerate behavior the zoom math relies on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Camera position in world space.
    pub position: Vec3,
    /// Look-at focal point.
    pub focal_point: Vec3,
    /// Up direction vector.
    pub view_up: Vec3,
    /// Vertical view angle in degrees.
    pub view_angle: f32,
}

impl Pose {
    /// Create a pose from its four components.
    #[must_use]
    pub const fn new(
        position: Vec3,
        focal_point: Vec3,
        view_up: Vec3,
        view_angle: f32,
    ) -> Self {
        Self {
            position,
            focal_point,
            view_up,
            view_angle,
        }
    }

    /// Interpolate toward `end` at parameter `t`.
    ///
    /// Position and focal point lerp as vectors. View up and view angle
    /// are not animated: they are carried from the *end* pose, so they
    /// snap to their target values at the transition boundary and stay
    /// constant for every interpolated frame.
    ///
    /// `t` is not clamped; animation callers guarantee `t` in `[0, 1]`.
    #[must_use]
    pub fn lerp(&self, end: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(end.position, t),
            focal_point: self.focal_point.lerp(end.focal_point, t),
            view_up: end.view_up,
            view_angle: end.view_angle,
        }
    }

    /// Component-wise approximate equality within `epsilon`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.position.abs_diff_eq(other.position, epsilon)
            && self.focal_point.abs_diff_eq(other.focal_point, epsilon)
            && self.view_up.abs_diff_eq(other.view_up, epsilon)
            && (self.view_angle - other.view_angle).abs() <= epsilon
    }
}

impl Default for Pose {
    /// The conventional overview pose: unit distance down +Z, Y up,
    /// 30 degree view angle.
    fn default() -> Self {
        Self {
            position: Vec3::Z,
            focal_point: Vec3::ZERO,
            view_up: Vec3::Y,
            view_angle: 30.0,
        }
    }
}
