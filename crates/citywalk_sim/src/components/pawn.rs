//! Pawn components: Pawn, KinematicPawn

use bevy::prelude::*;

/// A named, movable actor backed by a kinematic rigid body.
///
/// Automatically adds `KinematicPawn` and `MovementInput` through required
/// components, so spawning a `Pawn` is enough to make it steerable.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(KinematicPawn, crate::components::MovementInput)]
pub struct Pawn {
    /// Display name (also used in log output)
    pub name: String,
}

/// Movement parameters for a kinematic pawn
///
/// The body is `RigidBody::KinematicPositionBased`; the movement system
/// advances its `Transform` and Rapier consumes that as the next kinematic
/// translation during its sync step.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct KinematicPawn {
    /// Movement speed (m/s)
    pub speed: f32,
    /// Keep Y fixed while moving (character-controller behavior)
    pub lock_vertical: bool,
}

impl Default for KinematicPawn {
    fn default() -> Self {
        Self {
            speed: 5.0, // 5 m/s, brisk walking pace
            lock_vertical: false,
        }
    }
}
