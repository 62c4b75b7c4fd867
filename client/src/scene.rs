//! Scene root: mounts the dice box.
//!
//! Startup walks the [`SceneLayout`] registry once, registering each plane
//! and die with the simulation world and spawning its visual from the same
//! shape descriptor. After that, the physics plugin owns every frame; this
//! module never runs again.

use bevy::picking::prelude::*;
use bevy::prelude::*;
use nalgebra as na;
use sim::{BodySpec, DIE_MASS, GRAVITY, SimulationWorld, describe_shape};

use crate::layout::{DieSpec, PlaneSpec, SceneLayout};
use crate::mesh::{mesh_from_descriptor, plane_mesh};
use crate::physics::{DieBody, PendingImpulses, Simulation, transform_from_pose};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, mount_scene);
}

fn mount_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut world = SimulationWorld::new(GRAVITY);
    let layout = SceneLayout::bounded_box();

    for plane in &layout.planes {
        spawn_plane(&mut commands, &mut world, &mut meshes, &mut materials, plane);
    }
    for die in &layout.dice {
        spawn_die(&mut commands, &mut world, &mut meshes, &mut materials, die);
    }

    info!(
        "mounted dice box: {} planes, {} dice",
        layout.planes.len(),
        layout.dice.len()
    );
    commands.insert_resource(Simulation(world));
}

fn spawn_plane(
    commands: &mut Commands,
    world: &mut SimulationWorld,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    plane: &PlaneSpec,
) {
    let handle = world.create_plane(to_na(plane.translation), to_na(plane.rotation));
    // The visual takes its pose straight from the registered body so the
    // quad and the half-space can never disagree.
    let pose = world
        .body_pose(handle)
        .expect("plane body exists; it was just created");

    commands.spawn((
        Mesh3d(meshes.add(plane_mesh())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: plane.color,
            perceptual_roughness: 1.0,
            metallic: 0.0,
            ..default()
        })),
        transform_from_pose(&pose),
    ));
}

fn spawn_die(
    commands: &mut Commands,
    world: &mut SimulationWorld,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    die: &DieSpec,
) {
    let descriptor = describe_shape(die.kind, die.kind.radius());
    let spec = BodySpec {
        shape: descriptor.clone(),
        mass: DIE_MASS,
        translation: to_na(die.translation),
        rotation: to_na(die.rotation),
    };

    // Degenerate geometry here means a broken shape table, not a runtime
    // condition. Fail the mount loudly.
    let handle = match world.create_body(&spec) {
        Ok(handle) => handle,
        Err(err) => {
            error!("failed to register {:?}: {err}", die.kind);
            panic!("scene mount failed for {:?}", die.kind);
        }
    };
    let pose = world
        .body_pose(handle)
        .expect("die body exists; it was just created");

    let impulse = die.impulse;
    commands
        .spawn((
            DieBody { handle, impulse },
            Pickable::default(),
            Mesh3d(meshes.add(mesh_from_descriptor(&descriptor))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: die.color,
                perceptual_roughness: 0.6,
                ..default()
            })),
            transform_from_pose(&pose),
        ))
        // Clicks only enqueue; the impulse lands at the start of the next
        // tick, never mid-frame.
        .observe(
            move |_click: On<Pointer<Click>>, mut pending: ResMut<PendingImpulses>| {
                pending.0.push((handle, impulse));
            },
        );
}

fn to_na(v: Vec3) -> na::Vector3<f32> {
    na::Vector3::new(v.x, v.y, v.z)
}
