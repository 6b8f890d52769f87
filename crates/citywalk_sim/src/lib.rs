//! citywalk simulation core
//!
//! Headless-capable ECS layer on Bevy 0.16: pawn components, kinematic
//! movement, collider helpers and prop scattering. Rendering lives in
//! `citywalk_client`; everything here runs under `MinimalPlugins`.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod components;
pub mod math;
pub mod movement;
pub mod physics;
pub mod props;

pub use components::*;
pub use math::safe_normalize;
pub use movement::{spawn_kinematic_pawn, KinematicMovementPlugin};
pub use physics::{cuboid_from_bounds, trimesh_from_mesh_data};
pub use props::{scatter_crates, spawn_dynamic_crate, CrateProp};

/// Main simulation plugin (fixed timestep + pawn movement)
pub struct SimPlugin;

impl Plugin for SimPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz for the simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Seeded RNG (clients override the seed by re-inserting)
            .insert_resource(ScatterRng::new(42))
            .add_plugins(KinematicMovementPlugin);
    }
}

/// Deterministic RNG resource used for prop scattering
#[derive(Resource)]
pub struct ScatterRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl ScatterRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Minimal Bevy App for headless simulation (tests, CI, the headless bin)
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(SimPlugin)
        .insert_resource(ScatterRng::new(seed));

    app
}

/// Snapshot of all crate-prop poses, sorted by entity index.
///
/// Used by the determinism tests to compare runs with the same seed.
pub fn crate_pose_snapshot(world: &mut World) -> Vec<(u32, Vec3)> {
    let mut query = world.query_filtered::<(Entity, &Transform), With<CrateProp>>();
    let mut rows: Vec<_> = query
        .iter(world)
        .map(|(entity, transform)| (entity.index(), transform.translation))
        .collect();

    rows.sort_by_key(|(index, _)| *index);
    rows
}
