//! Kinematic movement for pawns
//!
//! Architecture:
//! - Rapier owns collisions (RigidBody::KinematicPositionBased)
//! - We integrate displacement ourselves and write the Transform
//! - Rapier's sync step picks the new Transform up as the next kinematic
//!   translation, so no forces are involved
//!
//! Determinism: fixed timestep (60Hz), systems ordered before the Rapier
//! sync set.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{KinematicPawn, MovementInput, Pawn};
use crate::math::{safe_normalize, MIN_DIRECTION_LENGTH_SQUARED};

/// Per-tick displacement for a pawn, before it is applied to the Transform.
///
/// `Vec3::ZERO` when the input is below the dead-zone threshold. With
/// `lock_vertical` the Y component is dropped after normalization, so a
/// diagonal up-forward input still moves forward at less than full speed.
pub fn pawn_displacement(pawn: &KinematicPawn, input: &MovementInput, delta: f32) -> Vec3 {
    if input.direction.length_squared() < MIN_DIRECTION_LENGTH_SQUARED {
        return Vec3::ZERO;
    }

    let mut displacement = safe_normalize(input.direction) * pawn.speed * delta;
    if pawn.lock_vertical {
        displacement.y = 0.0;
    }
    displacement
}

/// Applies movement intent to pawn transforms.
///
/// Runs in FixedUpdate; the position update is purely additive:
/// `translation += normalize(direction) * speed * dt`.
pub fn apply_kinematic_movement(
    mut query: Query<(&KinematicPawn, &MovementInput, &mut Transform)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (pawn, input, mut transform) in query.iter_mut() {
        let displacement = pawn_displacement(pawn, input, delta);
        if displacement != Vec3::ZERO {
            transform.translation += displacement;
        }
    }
}

/// Plugin wiring the movement system into FixedUpdate
///
/// Our transform writes must land before the Rapier sync so the physics
/// step sees the new kinematic target in the same tick.
pub struct KinematicMovementPlugin;

impl Plugin for KinematicMovementPlugin {
    fn build(&self, app: &mut App) {
        use bevy_rapier3d::plugin::PhysicsSet;

        app.add_systems(
            FixedUpdate,
            apply_kinematic_movement.before(PhysicsSet::SyncBackend),
        );
    }
}

/// Spawns a steerable pawn with its physics body.
///
/// Components: Transform, Pawn (+ required KinematicPawn/MovementInput),
/// kinematic rigid body and a capsule collider sized for a person.
pub fn spawn_kinematic_pawn(
    commands: &mut Commands,
    name: impl Into<String>,
    speed: f32,
    position: Vec3,
) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            Pawn { name: name.into() },
            KinematicPawn {
                speed,
                lock_vertical: true,
            },
            MovementInput::default(),
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(0.5, 0.4), // 1.8m tall, 0.4m radius
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELTA: f32 = 1.0 / 60.0; // one fixed tick

    #[test]
    fn displacement_is_speed_times_delta() {
        let pawn = KinematicPawn {
            speed: 5.0,
            lock_vertical: false,
        };
        let input = MovementInput { direction: Vec3::Z };

        let displacement = pawn_displacement(&pawn, &input, DELTA);

        assert!((displacement.z - 5.0 * DELTA).abs() < 1e-6);
        assert_eq!(displacement.x, 0.0);
        assert_eq!(displacement.y, 0.0);
    }

    #[test]
    fn raw_key_sums_are_normalized() {
        // W+D pressed: direction (1, 0, -1), length sqrt(2)
        let pawn = KinematicPawn {
            speed: 5.0,
            lock_vertical: true,
        };
        let input = MovementInput {
            direction: Vec3::new(1.0, 0.0, -1.0),
        };

        let displacement = pawn_displacement(&pawn, &input, DELTA);

        // Diagonal movement must not be faster than straight movement
        assert!((displacement.length() - 5.0 * DELTA).abs() < 1e-6);
    }

    #[test]
    fn vertical_lock_drops_y() {
        let pawn = KinematicPawn {
            speed: 5.0,
            lock_vertical: true,
        };
        let input = MovementInput {
            direction: Vec3::new(0.0, 1.0, -1.0),
        };

        let displacement = pawn_displacement(&pawn, &input, DELTA);

        assert_eq!(displacement.y, 0.0);
        assert!(displacement.z < 0.0);
    }

    #[test]
    fn dead_zone_produces_no_motion() {
        let pawn = KinematicPawn::default();
        let input = MovementInput {
            direction: Vec3::splat(1e-4),
        };

        assert_eq!(pawn_displacement(&pawn, &input, DELTA), Vec3::ZERO);
    }
}
