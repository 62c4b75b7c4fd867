//! Drives the simulation and pulls poses back into the render world.
//!
//! Ordering per frame, enforced by chaining:
//! 1. [`apply_pending_impulses`]: clicks queued since the last frame become
//!    impulses, each applied exactly once.
//! 2. [`step_simulation`]: one fixed integration step.
//! 3. [`sync_transforms`]: every die's `Transform` is overwritten from its
//!    body pose. One-way data flow: physics writes visuals, never the
//!    reverse.
//!
//! The [`Simulation`] resource is the scene's only physics context; Bevy's
//! exclusive resource borrows give us the single-writer discipline for free.

use bevy::prelude::*;
use nalgebra as na;
use sim::{BodyHandle, SimulationWorld};

/// The scene's simulation world, inserted at mount time by the scene root.
#[derive(Resource)]
pub struct Simulation(pub SimulationWorld);

/// Ties a rendered die entity to its simulated body.
#[derive(Component, Debug)]
pub struct DieBody {
    pub handle: BodyHandle,
    /// Click impulse magnitude, applied along +Y through the centre of mass.
    pub impulse: f32,
}

/// Clicks waiting to be applied at the start of the next tick.
///
/// Click observers only enqueue; nothing touches the simulation mid-frame.
/// One queue entry becomes exactly one impulse.
#[derive(Resource, Default, Debug)]
pub struct PendingImpulses(pub Vec<(BodyHandle, f32)>);

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<PendingImpulses>();
    app.add_systems(
        Update,
        (apply_pending_impulses, step_simulation, sync_transforms).chain(),
    );
}

/// Drains the click queue into the world, one impulse per queued click.
///
/// The zero point targets the die's centre of mass: a click is a pure
/// linear kick along +Y, no spin.
fn apply_pending_impulses(
    mut pending: ResMut<PendingImpulses>,
    mut simulation: ResMut<Simulation>,
) {
    for (handle, magnitude) in pending.0.drain(..) {
        simulation.0.apply_impulse(
            handle,
            na::Vector3::new(0.0, magnitude, 0.0),
            na::Point3::origin(),
        );
    }
}

fn step_simulation(mut simulation: ResMut<Simulation>) {
    simulation.0.step();
}

fn sync_transforms(simulation: Res<Simulation>, mut dice: Query<(&DieBody, &mut Transform)>) {
    for (die, mut transform) in &mut dice {
        let Some(pose) = simulation.0.body_pose(die.handle) else {
            continue;
        };
        *transform = transform_from_pose(&pose);
    }
}

/// Converts a rapier pose into a Bevy transform.
pub fn transform_from_pose(pose: &na::Isometry3<f32>) -> Transform {
    let t = pose.translation;
    let q = pose.rotation;
    Transform {
        translation: Vec3::new(t.x, t.y, t.z),
        rotation: Quat::from_xyzw(q.i, q.j, q.k, q.w),
        ..default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim::{BodySpec, DieKind, GRAVITY, describe_shape};

    fn mounted_die(world: &mut SimulationWorld, kind: DieKind) -> BodyHandle {
        world
            .create_body(&BodySpec {
                shape: describe_shape(kind, kind.radius()),
                mass: sim::DIE_MASS,
                translation: na::Vector3::zeros(),
                rotation: na::Vector3::zeros(),
            })
            .expect("die geometry is convex")
    }

    #[test]
    fn one_click_applies_exactly_one_impulse() {
        // Run the real drain system in a minimal app: a single queued click
        // changes velocity by impulse/mass once and empties the queue, and
        // the next frame applies nothing further.
        let mut world = SimulationWorld::new(GRAVITY);
        let handle = mounted_die(&mut world, DieKind::D6);

        let mut app = App::new();
        app.insert_resource(Simulation(world));
        app.init_resource::<PendingImpulses>();
        app.add_systems(Update, apply_pending_impulses);

        app.world_mut()
            .resource_mut::<PendingImpulses>()
            .0
            .push((handle, 10.0));
        app.update();

        assert!(app.world().resource::<PendingImpulses>().0.is_empty());
        let sim = app.world().resource::<Simulation>();
        let after_one = sim.0.body_linvel(handle).unwrap();
        assert!((after_one.y - 10.0).abs() < 1e-5, "linvel.y = {}", after_one.y);

        app.update();
        let sim = app.world().resource::<Simulation>();
        let after_two = sim.0.body_linvel(handle).unwrap();
        assert_eq!(after_one.y, after_two.y, "empty queue re-applied a click");
    }

    #[test]
    fn transform_from_pose_preserves_translation_and_rotation() {
        let pose = na::Isometry3::from_parts(
            na::Translation3::new(1.0, -2.0, 3.0),
            na::UnitQuaternion::from_euler_angles(0.3, 0.0, 0.0),
        );
        let transform = transform_from_pose(&pose);
        assert_eq!(transform.translation, Vec3::new(1.0, -2.0, 3.0));

        let expected = Quat::from_rotation_x(0.3);
        assert!(transform.rotation.angle_between(expected) < 1e-5);
    }
}
