//! Visual sync: mirrors simulation rigid-body poses onto display meshes
//!
//! Simulation entities own the physics body and the authoritative
//! Transform; this layer spawns a mesh entity per marked simulation entity
//! and copies translation + rotation across every frame.

use bevy::prelude::*;
use citywalk_sim::{CrateProp, Pawn};

pub struct VisualSyncPlugin;

impl Plugin for VisualSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (spawn_visuals, sync_poses, despawn_orphaned_visuals).chain(),
        );
    }
}

/// Marker: simulation entity wants a visual representation
#[derive(Component)]
pub struct NeedsVisual;

/// Link: visual entity → simulation entity
#[derive(Component)]
pub struct VisualOf(pub Entity);

/// Link: simulation entity → visual entity
#[derive(Component)]
pub struct HasVisual(pub Entity);

/// Spawn meshes for newly marked simulation entities.
///
/// Pawns get a capsule matching their physics capsule; crates get a cuboid
/// sized from `CrateProp::half_extent`.
fn spawn_visuals(
    mut commands: Commands,
    pawns: Query<(Entity, &Transform), (With<NeedsVisual>, With<Pawn>)>,
    crates: Query<(Entity, &Transform, &CrateProp), With<NeedsVisual>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (sim_entity, sim_transform) in pawns.iter() {
        let visual = commands
            .spawn((
                Mesh3d(meshes.add(Capsule3d::new(0.4, 1.0))),
                MeshMaterial3d(materials.add(Color::srgb(0.85, 0.55, 0.2))),
                *sim_transform,
                VisualOf(sim_entity),
            ))
            .id();

        commands
            .entity(sim_entity)
            .remove::<NeedsVisual>()
            .insert(HasVisual(visual));
    }

    for (sim_entity, sim_transform, prop) in crates.iter() {
        let size = prop.half_extent * 2.0;
        let visual = commands
            .spawn((
                Mesh3d(meshes.add(Cuboid::new(size, size, size))),
                MeshMaterial3d(materials.add(crate_color(sim_entity.index()))),
                *sim_transform,
                VisualOf(sim_entity),
            ))
            .id();

        commands
            .entity(sim_entity)
            .remove::<NeedsVisual>()
            .insert(HasVisual(visual));
    }
}

/// Copy rigid-body poses (translation + rotation) onto the linked meshes.
///
/// Visual scale is left alone so mesh sizing stays a display concern.
fn sync_poses(
    sim_query: Query<(&Transform, &HasVisual), Changed<Transform>>,
    mut visual_query: Query<&mut Transform, (With<VisualOf>, Without<HasVisual>)>,
) {
    for (sim_transform, has_visual) in sim_query.iter() {
        if let Ok(mut visual_transform) = visual_query.get_mut(has_visual.0) {
            visual_transform.translation = sim_transform.translation;
            visual_transform.rotation = sim_transform.rotation;
        }
    }
}

/// Tear down meshes whose simulation entity is gone.
fn despawn_orphaned_visuals(
    mut commands: Commands,
    visuals: Query<(Entity, &VisualOf)>,
    sim_query: Query<(), With<HasVisual>>,
) {
    for (visual_entity, visual_of) in visuals.iter() {
        if sim_query.get(visual_of.0).is_err() {
            commands.entity(visual_entity).despawn();
        }
    }
}

/// Simple rotating palette so crates are tellable apart
fn crate_color(index: u32) -> Color {
    match index % 4 {
        0 => Color::srgb(0.7, 0.45, 0.25),
        1 => Color::srgb(0.55, 0.35, 0.2),
        2 => Color::srgb(0.6, 0.5, 0.3),
        _ => Color::srgb(0.5, 0.4, 0.35),
    }
}
