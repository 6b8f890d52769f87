//! Orbit camera (dev builds only)
//!
//! Right-drag orbits around the target, wheel zooms. Release builds spawn
//! the camera without this component and keep the fixed framing.

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, orbit_camera);
    }
}

#[derive(Component)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub drag_sensitivity: f32,
    pub zoom_step: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 8.0,
            min_distance: 1.0,
            max_distance: 100.0,
            yaw: FRAC_PI_4,
            pitch: FRAC_PI_6,
            drag_sensitivity: 0.005,
            zoom_step: 0.8,
        }
    }
}

/// Mouse input + transform update in one pass.
fn orbit_camera(
    mut query: Query<(&mut OrbitCamera, &mut Transform)>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
) {
    let Ok((mut camera, mut transform)) = query.single_mut() else {
        motion.clear();
        wheel.clear();
        return;
    };

    if buttons.pressed(MouseButton::Right) {
        for event in motion.read() {
            camera.yaw -= event.delta.x * camera.drag_sensitivity;
            // Clamp pitch away from the poles to avoid gimbal flip
            camera.pitch = (camera.pitch - event.delta.y * camera.drag_sensitivity)
                .clamp(-FRAC_PI_2 + 0.05, FRAC_PI_2 - 0.05);
        }
    } else {
        motion.clear();
    }

    for event in wheel.read() {
        camera.distance = (camera.distance - event.y * camera.zoom_step)
            .clamp(camera.min_distance, camera.max_distance);
    }

    let offset = Vec3::new(
        camera.distance * camera.pitch.cos() * camera.yaw.sin(),
        camera.distance * camera.pitch.sin(),
        camera.distance * camera.pitch.cos() * camera.yaw.cos(),
    );

    *transform =
        Transform::from_translation(camera.target + offset).looking_at(camera.target, Vec3::Y);
}
