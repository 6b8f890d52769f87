//! Dynamic props: loose crates scattered around the city
//!
//! Fully simulated rigid bodies; the client attaches visuals through its
//! sync layer (`NeedsVisual` marker stays client-side, mirroring how the
//! simulation never owns render state).

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;

use crate::ScatterRng;

/// A loose physics crate
///
/// `half_extent` doubles as collider size and visual mesh size.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct CrateProp {
    pub half_extent: f32,
}

impl Default for CrateProp {
    fn default() -> Self {
        Self { half_extent: 0.4 }
    }
}

/// Spawns one dynamic crate at `position`.
pub fn spawn_dynamic_crate(commands: &mut Commands, half_extent: f32, position: Vec3) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            CrateProp { half_extent },
            RigidBody::Dynamic,
            Collider::cuboid(half_extent, half_extent, half_extent),
        ))
        .id()
}

/// Scatters `count` crates over a square area, dropped from `height`.
///
/// Positions come from the seeded [`ScatterRng`], so the same seed produces
/// the same layout on every run.
pub fn scatter_crates(
    commands: &mut Commands,
    rng: &mut ScatterRng,
    count: usize,
    half_area: f32,
    height: f32,
) -> Vec<Entity> {
    (0..count)
        .map(|_| {
            let x = rng.rng.gen_range(-half_area..=half_area);
            let z = rng.rng.gen_range(-half_area..=half_area);
            let half_extent = rng.rng.gen_range(0.25..=0.5);

            spawn_dynamic_crate(commands, half_extent, Vec3::new(x, height, z))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn same_seed_same_positions() {
        let positions = |seed: u64| -> Vec<(f32, f32)> {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..32)
                .map(|_| {
                    (
                        rng.gen_range(-20.0f32..=20.0),
                        rng.gen_range(-20.0f32..=20.0),
                    )
                })
                .collect()
        };

        assert_eq!(positions(7), positions(7));
        assert_ne!(positions(7), positions(8));
    }
}
