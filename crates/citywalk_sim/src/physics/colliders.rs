//! Building Rapier colliders from mesh data

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// Cuboid collider matching an axis-aligned bounding box.
///
/// The cuboid is wrapped in a one-element compound so it sits at the AABB
/// center rather than the entity origin. Good enough for props; static
/// level geometry should prefer [`trimesh_from_mesh_data`].
pub fn cuboid_from_bounds(min: Vec3, max: Vec3) -> Collider {
    let center = (min + max) * 0.5;
    let half_extents = ((max - min) * 0.5).max(Vec3::splat(f32::EPSILON));

    Collider::compound(vec![(
        center,
        Quat::IDENTITY,
        Collider::cuboid(half_extents.x, half_extents.y, half_extents.z),
    )])
}

/// Triangle-mesh collider with the exact shape of the source mesh.
///
/// Only for static bodies; trimesh collision against moving trimeshes is
/// expensive and unsupported by the kinematic controller. Returns `None`
/// when Rapier rejects the topology (degenerate or empty triangle data);
/// callers fall back to [`cuboid_from_bounds`].
pub fn trimesh_from_mesh_data(vertices: Vec<Vec3>, indices: Vec<[u32; 3]>) -> Option<Collider> {
    if vertices.is_empty() || indices.is_empty() {
        return None;
    }

    match Collider::trimesh(vertices, indices) {
        Ok(collider) => Some(collider),
        Err(_) => None,
    }
}
