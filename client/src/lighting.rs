//! Fixed scene lighting: an ambient fill, one shadow-casting spot light and
//! one point light from the opposite corner.

use bevy::light::PointLightShadowMap;
use bevy::prelude::*;

/// Shadow-map resolution for the spot light. Deliberately low; the soft
/// blocky shadows are part of the scene's look.
const SHADOW_MAP_SIZE: usize = 256;

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
        ..default()
    });
    app.insert_resource(PointLightShadowMap {
        size: SHADOW_MAP_SIZE,
    });
    app.add_systems(Startup, add_lights);
}

fn add_lights(mut commands: Commands) {
    // Key light: a wide spot aimed across the box, the only shadow caster.
    commands.spawn((
        SpotLight {
            intensity: 8_000_000.0,
            range: 120.0,
            outer_angle: 0.3,
            // Zero inner angle = fully soft penumbra across the cone.
            inner_angle: 0.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(30.0, 0.0, 30.0).looking_at(Vec3::ZERO, Vec3::Z),
    ));

    // Fill light from below the opposite corner, no shadows.
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 150.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-30.0, 0.0, -30.0),
    ));
}
