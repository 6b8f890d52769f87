//! Keyboard input → movement intent

use bevy::prelude::*;
use citywalk_sim::{safe_normalize, MovementInput, Player};

pub struct KeyboardInputPlugin;

impl Plugin for KeyboardInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_movement);
    }
}

/// W/S move along -Z/+Z, A/D along -X/+X (world axes, like the original
/// demo — no camera-relative steering). With nothing pressed the direction
/// goes to zero and the pawn holds its position.
fn keyboard_movement(
    keys: Res<ButtonInput<KeyCode>>,
    mut pawns: Query<&mut MovementInput, With<Player>>,
) {
    let mut direction = Vec3::ZERO;
    if keys.pressed(KeyCode::KeyW) {
        direction.z -= 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        direction.z += 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        direction.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        direction.x += 1.0;
    }

    let direction = safe_normalize(direction);
    for mut input in pawns.iter_mut() {
        input.direction = direction;
    }
}
