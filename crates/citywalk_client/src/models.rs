//! Model loading by file extension + static scene colliders
//!
//! glTF (`.glb`/`.gltf`) is the only supported format; anything else logs a
//! warning and yields an inert placeholder entity so callers always get a
//! spawnable result. Scene roots marked `StaticSceneCollider` get fixed
//! trimesh colliders attached to their meshes once the glTF instance has
//! spawned them.

use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, VertexAttributeValues};
use bevy::render::render_resource::PrimitiveTopology;
use bevy_rapier3d::prelude::*;
use citywalk_sim::{cuboid_from_bounds, trimesh_from_mesh_data};

pub struct ScenePhysicsPlugin;

impl Plugin for ScenePhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, attach_scene_colliders);
    }
}

/// Marker: every mesh spawned under this scene root becomes a fixed
/// trimesh collider.
#[derive(Component)]
pub struct StaticSceneCollider;

/// Model formats the client can load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Gltf,
}

impl ModelFormat {
    /// Dispatch on the file extension (case-insensitive).
    pub fn from_path(path: &str) -> Option<Self> {
        let ext = std::path::Path::new(path)
            .extension()?
            .to_str()?
            .to_ascii_lowercase();

        match ext.as_str() {
            "glb" | "gltf" => Some(Self::Gltf),
            _ => None,
        }
    }
}

/// Spawn a model by path.
///
/// Unsupported extensions (fbx, obj, ...) log a warning and return an inert
/// placeholder entity: a bare transform, no mesh, no physics body.
pub fn spawn_model(
    commands: &mut Commands,
    asset_server: &AssetServer,
    path: &str,
    transform: Transform,
) -> Entity {
    match ModelFormat::from_path(path) {
        Some(ModelFormat::Gltf) => commands
            .spawn((
                SceneRoot(asset_server.load(GltfAssetLabel::Scene(0).from_asset(path.to_owned()))),
                transform,
                StaticSceneCollider,
            ))
            .id(),
        None => {
            warn!("unsupported model format: {path}");
            commands.spawn((transform, Visibility::default())).id()
        }
    }
}

/// Attach fixed colliders to meshes spawned under a `StaticSceneCollider`
/// root.
///
/// glTF scenes spawn their mesh entities asynchronously, so this watches
/// for `Added<Mesh3d>` and walks the hierarchy up to find the marker.
fn attach_scene_colliders(
    mut commands: Commands,
    meshes: Res<Assets<Mesh>>,
    new_meshes: Query<(Entity, &Mesh3d), Added<Mesh3d>>,
    parents: Query<&ChildOf>,
    roots: Query<(), With<StaticSceneCollider>>,
) {
    for (entity, mesh3d) in new_meshes.iter() {
        if !has_marked_ancestor(entity, &parents, &roots) {
            continue;
        }
        let Some(mesh) = meshes.get(&mesh3d.0) else {
            continue;
        };

        match mesh_collider(mesh) {
            Some(collider) => {
                commands.entity(entity).insert((RigidBody::Fixed, collider));
            }
            None => warn!("no collider for scene mesh on {entity}: unsupported mesh layout"),
        }
    }
}

fn has_marked_ancestor(
    entity: Entity,
    parents: &Query<&ChildOf>,
    roots: &Query<(), With<StaticSceneCollider>>,
) -> bool {
    let mut current = entity;
    while let Ok(child_of) = parents.get(current) {
        let parent = child_of.parent();
        if roots.get(parent).is_ok() {
            return true;
        }
        current = parent;
    }
    false
}

/// Exact trimesh collider from a render mesh, bounding-box cuboid as the
/// fallback for geometry Rapier rejects.
fn mesh_collider(mesh: &Mesh) -> Option<Collider> {
    if mesh.primitive_topology() != PrimitiveTopology::TriangleList {
        return None;
    }

    let positions: Vec<Vec3> = match mesh.attribute(Mesh::ATTRIBUTE_POSITION)? {
        VertexAttributeValues::Float32x3(values) => {
            values.iter().copied().map(Vec3::from).collect()
        }
        _ => return None,
    };

    let indices: Vec<[u32; 3]> = match mesh.indices() {
        Some(Indices::U32(raw)) => triangles(raw.iter().copied()),
        Some(Indices::U16(raw)) => triangles(raw.iter().map(|&i| u32::from(i))),
        // Non-indexed geometry: synthesize the identity index buffer
        None => triangles(0..positions.len() as u32),
    };

    match trimesh_from_mesh_data(positions.clone(), indices) {
        Some(collider) => Some(collider),
        None => {
            warn!("trimesh rejected, falling back to bounding-box collider");
            let (min, max) = bounds(&positions)?;
            Some(cuboid_from_bounds(min, max))
        }
    }
}

fn triangles(iter: impl Iterator<Item = u32>) -> Vec<[u32; 3]> {
    let flat: Vec<u32> = iter.collect();
    flat.chunks_exact(3).map(|t| [t[0], t[1], t[2]]).collect()
}

fn bounds(points: &[Vec3]) -> Option<(Vec3, Vec3)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
    )
}
