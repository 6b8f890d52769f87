//! Headless integration tests for kinematic pawn movement
//!
//! Fixed time is advanced manually and the FixedUpdate schedule is run
//! directly, so tick counts are exact regardless of wall-clock speed.

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use citywalk_sim::{
    crate_pose_snapshot, create_headless_app, scatter_crates, KinematicPawn, MovementInput, Pawn,
    ScatterRng,
};

/// Advance the simulation by `ticks` fixed steps.
fn run_fixed_ticks(app: &mut App, ticks: u32) {
    let timestep = app.world().resource::<Time<Fixed>>().timestep();

    for _ in 0..ticks {
        app.world_mut()
            .resource_mut::<Time<Fixed>>()
            .advance_by(timestep);
        app.world_mut().run_schedule(FixedUpdate);
    }
}

fn spawn_test_pawn(app: &mut App, speed: f32, lock_vertical: bool, direction: Vec3) -> Entity {
    app.world_mut()
        .spawn((
            Transform::from_translation(Vec3::new(0.0, 0.9, 0.0)),
            Pawn {
                name: "tester".into(),
            },
            KinematicPawn {
                speed,
                lock_vertical,
            },
            MovementInput { direction },
        ))
        .id()
}

#[test]
fn position_update_is_additive() {
    let mut app = create_headless_app(1);
    let pawn = spawn_test_pawn(&mut app, 4.0, false, Vec3::Z);

    // 120 ticks at 60Hz = 2 seconds at 4 m/s = 8m along +Z
    run_fixed_ticks(&mut app, 120);

    let translation = app.world().entity(pawn).get::<Transform>().unwrap().translation;
    assert!((translation.z - 8.0).abs() < 1e-3, "z = {}", translation.z);
    assert!((translation.x).abs() < 1e-6);
}

#[test]
fn vertical_lock_keeps_height() {
    let mut app = create_headless_app(1);
    // Up-forward input; the planar pawn must only gain the forward part
    let pawn = spawn_test_pawn(&mut app, 4.0, true, Vec3::new(0.0, 1.0, -1.0));

    run_fixed_ticks(&mut app, 120);

    let translation = app.world().entity(pawn).get::<Transform>().unwrap().translation;
    assert!((translation.y - 0.9).abs() < 1e-6, "y = {}", translation.y);

    // normalize((0,1,-1)).z = -1/sqrt(2); over 2s at 4 m/s: ~-5.657m
    let expected_z = -4.0 * 2.0 / 2.0_f32.sqrt();
    assert!((translation.z - expected_z).abs() < 1e-3, "z = {}", translation.z);
}

#[test]
fn zero_input_holds_position() {
    let mut app = create_headless_app(1);
    let pawn = spawn_test_pawn(&mut app, 4.0, true, Vec3::ZERO);

    run_fixed_ticks(&mut app, 60);

    let translation = app.world().entity(pawn).get::<Transform>().unwrap().translation;
    assert_eq!(translation, Vec3::new(0.0, 0.9, 0.0));
}

#[test]
fn scatter_is_deterministic_per_seed() {
    let layout = |seed: u64| {
        let mut app = create_headless_app(seed);
        app.world_mut()
            .run_system_once(|mut commands: Commands, mut rng: ResMut<ScatterRng>| {
                scatter_crates(&mut commands, &mut rng, 24, 20.0, 6.0);
            })
            .expect("scatter system runs");
        crate_pose_snapshot(app.world_mut())
    };

    assert_eq!(layout(42), layout(42));
    assert_ne!(layout(42), layout(43));
}
