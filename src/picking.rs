//! Picking collaborator trait.

use crate::scene::BoneId;

/// Resolves a 2D screen coordinate to the bone under the cursor.
///
/// Implemented by the host's hit-testing machinery (hardware picking,
/// BVH raycast, cell picker - the core does not care). Returns `None`
/// over empty space.
pub trait PickingService {
    /// The bone under screen position `(x, y)`, if any.
    fn pick(&self, x: f32, y: f32) -> Option<BoneId>;
}
