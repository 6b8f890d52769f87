//! Movement intent component

use bevy::prelude::*;

/// Movement intent for a pawn, consumed every fixed tick.
///
/// For the game — written from `ButtonInput<KeyCode>` by the client input
/// system. For headless tests — written directly on the entity.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct MovementInput {
    /// Desired direction; the movement system normalizes it, so callers may
    /// hand over raw key-axis sums.
    pub direction: Vec3,
}
