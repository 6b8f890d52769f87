//! Player control marker component

use bevy::prelude::Component;

/// Marker for the pawn driven by keyboard input.
///
/// Input systems use a `With<Player>` filter; pawns without this component
/// keep whatever `MovementInput` was last written on them.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
