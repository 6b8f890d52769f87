//! Headless citywalk simulation
//!
//! Runs the Bevy App without a renderer; useful for smoke-testing the
//! simulation loop and the deterministic scatter.

use bevy::prelude::*;
use citywalk_sim::{create_headless_app, scatter_crates, spawn_kinematic_pawn, ScatterRng};

fn main() {
    let seed = 42;
    println!("Starting citywalk headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_systems(Startup, setup);

    // 600 simulation ticks
    for tick in 0..600 {
        app.update();

        if tick % 100 == 0 {
            let entity_count = app.world().entities().len();
            println!("Tick {}: {} entities", tick, entity_count);
        }
    }

    println!("Simulation complete!");
}

fn setup(mut commands: Commands, mut rng: ResMut<ScatterRng>) {
    spawn_kinematic_pawn(&mut commands, "headless-walker", 5.0, Vec3::new(0.0, 0.9, 0.0));
    scatter_crates(&mut commands, &mut rng, 16, 20.0, 6.0);
}
