use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, add_camera);
}

/// Fixed viewpoint: below and above the box on the -Y side, looking at the
/// floor's centre. The world is Z-up.
const CAMERA_POSITION: Vec3 = Vec3::new(0.0, -12.0, 16.0);

fn add_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Z),
    ));
}
