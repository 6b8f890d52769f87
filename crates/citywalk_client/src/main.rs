use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use citywalk_sim::{scatter_crates, spawn_kinematic_pawn, Player, ScatterRng, SimPlugin};

mod camera;
mod config;
mod input;
mod models;
mod rendering;

use camera::CameraPlugin;
use config::AppConfig;
use input::KeyboardInputPlugin;
use models::ScenePhysicsPlugin;
use rendering::VisualSyncPlugin;

fn main() {
    let config = AppConfig::load_or_default("citywalk.ron");

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.window_title.clone(),
                resolution: (config.resolution.0, config.resolution.1).into(),
                ..default()
            }),
            ..default()
        }))
        // Rapier steps inside FixedUpdate, right after our movement systems
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
        // Simulation (headless ECS logic)
        .add_plugins(SimPlugin)
        .insert_resource(ScatterRng::new(config.props.seed))
        .insert_resource(config)
        // Visual sync (simulation → meshes), camera, input, scene colliders
        .add_plugins((
            VisualSyncPlugin,
            CameraPlugin,
            KeyboardInputPlugin,
            ScenePhysicsPlugin,
        ))
        .add_systems(Startup, setup_scene)
        .run();
}

/// Spawn ground, lights, the city model, the player pawn and loose crates
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    config: Res<AppConfig>,
    mut rng: ResMut<ScatterRng>,
) {
    // Ground plane (shadow catcher) with a flat box collider underneath
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(100.0)))),
        MeshMaterial3d(materials.add(Color::srgb(0.25, 0.25, 0.27))),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
    commands.spawn((
        RigidBody::Fixed,
        Collider::cuboid(100.0, 0.1, 100.0),
        Transform::from_xyz(0.0, -0.1, 0.0),
    ));

    // Directional light (sun) with shadows
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Ambient fill (sky/ground bounce stand-in)
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.53, 0.81, 0.92),
        brightness: 250.0,
        affects_lightmapped_meshes: false,
    });

    // City model; gets static trimesh colliders once its meshes spawn
    models::spawn_model(
        &mut commands,
        &asset_server,
        &config.city.model,
        Transform::from_scale(Vec3::splat(config.city.scale)),
    );

    // Player pawn (WASD-driven, planar)
    let player = spawn_kinematic_pawn(
        &mut commands,
        config.player.name.clone(),
        config.player.speed,
        Vec3::from(config.player.spawn),
    );
    commands
        .entity(player)
        .insert((Player, rendering::NeedsVisual));
    info!("spawned player pawn '{}'", config.player.name);

    // Loose crates, deterministic layout per config seed
    for entity in scatter_crates(
        &mut commands,
        &mut rng,
        config.props.count,
        config.props.half_area,
        config.props.drop_height,
    ) {
        commands.entity(entity).insert(rendering::NeedsVisual);
    }

    // Camera; orbit controls only in dev builds, like the rest of the tooling
    let mut camera = commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 1.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    if cfg!(debug_assertions) {
        camera.insert(camera::OrbitCamera::default());
    }
}
