use rustc_hash::FxHashMap;

use super::aabb::Aabb;
use super::GeometryProvider;

/// Opaque handle identifying a pickable bone.
///
/// Handles are issued by the [`BoneRegistry`] (or whatever geometry
/// provider the host wires in) and are only ever used as keys; the core
/// never interprets their value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoneId(u32);

impl BoneId {
    /// Construct a handle from a raw value. Intended for geometry
    /// providers and test fixtures; the core never fabricates ids.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }
}

#[derive(Debug, Clone)]
struct Bone {
    name: String,
    bounds: Aabb,
}

/// Registry of named bones with bounds, keyed by [`BoneId`].
///
/// Fed by the host's mesh loader (one entry per named group in the
/// source model) and handed to the engine as its
/// [`GeometryProvider`].
#[derive(Debug, Clone, Default)]
pub struct BoneRegistry {
    bones: FxHashMap<BoneId, Bone>,
    order: Vec<BoneId>,
    next_id: u32,
}

impl BoneRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bone and return its freshly issued handle.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        bounds: Aabb,
    ) -> BoneId {
        let id = BoneId(self.next_id);
        self.next_id += 1;
        let _ = self.bones.insert(
            id,
            Bone {
                name: name.into(),
                bounds,
            },
        );
        self.order.push(id);
        id
    }

    /// Number of registered bones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    /// Whether the registry holds no bones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Bone handles in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = BoneId> + '_ {
        self.order.iter().copied()
    }
}

impl GeometryProvider for BoneRegistry {
    fn bounds(&self, bone: BoneId) -> Option<Aabb> {
        self.bones.get(&bone).map(|b| b.bounds)
    }

    fn name(&self, bone: BoneId) -> Option<&str> {
        self.bones.get(&bone).map(|b| b.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::{BoneId, BoneRegistry};
    use crate::scene::{Aabb, GeometryProvider};

    #[test]
    fn insert_issues_distinct_ids_in_order() {
        let mut reg = BoneRegistry::new();
        let femur = reg.insert("femur", Aabb::new(Vec3::ZERO, Vec3::ONE));
        let tibia = reg.insert("tibia", Aabb::new(Vec3::ONE, Vec3::splat(2.0)));
        assert_ne!(femur, tibia);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.ids().collect::<Vec<_>>(), vec![femur, tibia]);
    }

    #[test]
    fn lookups_round_trip() {
        let mut reg = BoneRegistry::new();
        let bounds = Aabb::new(Vec3::new(4.0, -1.0, -1.0), Vec3::new(6.0, 1.0, 1.0));
        let id = reg.insert("femur", bounds);
        assert_eq!(reg.name(id), Some("femur"));
        assert_eq!(reg.bounds(id), Some(bounds));
        assert_eq!(reg.center_of(id), Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn unknown_bone_centers_on_origin() {
        let reg = BoneRegistry::new();
        let ghost = BoneId::from_raw(99);
        assert_eq!(reg.name(ghost), None);
        assert_eq!(reg.bounds(ghost), None);
        assert_eq!(reg.center_of(ghost), Vec3::ZERO);
    }
}
