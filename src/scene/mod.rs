//! Named pickable bones and their bounding geometry.
//!
//! The viewer core never parses meshes; it consumes a set of named
//! objects with axis-aligned bounds, delivered through the
//! [`GeometryProvider`] trait. [`BoneRegistry`] is the in-crate
//! implementation fed by whatever loader the host application uses.

/// Axis-aligned bounding boxes.
pub mod aabb;
/// Bone handle/name/bounds bookkeeping.
pub mod registry;

use glam::Vec3;

pub use aabb::Aabb;
pub use registry::{BoneId, BoneRegistry};

/// Supplies bounds and display names for pickable bones.
///
/// The core treats [`BoneId`] as fully opaque; this trait is its only
/// window into what an id actually refers to.
pub trait GeometryProvider {
    /// Bounding box of `bone`, or `None` for an unknown id.
    fn bounds(&self, bone: BoneId) -> Option<Aabb>;

    /// Display name of `bone`, or `None` for an unknown id.
    fn name(&self, bone: BoneId) -> Option<&str>;

    /// Bounds center of `bone`. Unknown ids and degenerate bounds both
    /// collapse to the origin rather than erroring.
    fn center_of(&self, bone: BoneId) -> Vec3 {
        let Some(bounds) = self.bounds(bone) else {
            log::warn!("center requested for unknown bone {bone:?}");
            return Vec3::ZERO;
        };
        bounds.center()
    }
}
