use glam::Vec3;

/// Axis-aligned bounding box of a pickable object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (per-axis minima).
    pub min: Vec3,
    /// Maximum corner (per-axis maxima).
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from its two corners.
    #[must_use]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Whether the box is well-formed: finite corners with `min <= max`
    /// on every axis.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min.cmple(self.max).all()
    }

    /// Per-axis midpoint. Degenerate or invalid boxes collapse to the
    /// origin so downstream zoom math stays finite.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        if self.is_valid() {
            (self.min + self.max) * 0.5
        } else {
            log::warn!("degenerate bounds {self:?}, centering on origin");
            Vec3::ZERO
        }
    }
}
