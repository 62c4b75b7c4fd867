//! Rapier-based simulation world for the dice box.
//!
//! One [`SimulationWorld`] owns the whole rapier state for a scene: every
//! rigid body, every collider, and the stepping pipeline. It is an explicit
//! context object, created by the caller and passed where needed, never a
//! global, so independent scenes (and tests) cannot contaminate each other.
//!
//! Design
//! - Single writer: only the factory methods (at mount time) and [`step`]
//!   (once per frame) mutate the world. Everything else reads poses.
//! - Bodies stay valid until the world itself is dropped; handles are weak
//!   references the entity layer holds onto.
//! - Geometry is trusted to be convex; a hull that fails to build is a
//!   programmer error surfaced as [`GeometryError`], not recovered from.
//!
//! [`step`]: SimulationWorld::step

// The client and the integration tests speak rapier's math types; re-export
// the crate so they get them from here instead of pinning their own copy.
pub use rapier3d;

use rapier3d::prelude::*;

// Pose construction needs two nalgebra names the rapier prelude leaves out.
use rapier3d::na::{Translation3, UnitQuaternion};

use thiserror::Error;

use crate::shapes::{ShapeDescriptor, Solid};

/// Everything needed to register one simulated body.
///
/// Built once when an entity mounts and handed to
/// [`SimulationWorld::create_body`]; never mutated afterwards. All later
/// state lives inside the world and flows back out through poses.
#[derive(Clone, Debug)]
pub struct BodySpec {
    /// Convex shape, shared verbatim with the visual mesh.
    pub shape: ShapeDescriptor,
    /// Mass in arbitrary units. Zero means fixed/immovable.
    pub mass: f32,
    /// World-space spawn translation.
    pub translation: Vector<f32>,
    /// World-space spawn rotation as XYZ Euler angles, radians.
    pub rotation: Vector<f32>,
}

/// Opaque reference to a live body inside a [`SimulationWorld`].
///
/// The world owns the body; holders of a handle may read its pose or request
/// an impulse but never control its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(RigidBodyHandle);

/// Geometry that the physics backend refused to turn into a convex shape.
///
/// This is a development-time failure: the geometry library only emits convex
/// data, so hitting this means a shape table is wrong. Propagated, never
/// caught.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate convex geometry for {0}: hull construction failed")]
    DegenerateHull(&'static str),
}

/// The scene's physics context: rapier sets plus the stepping pipeline.
pub struct SimulationWorld {
    gravity: Vector<f32>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl SimulationWorld {
    /// Creates an empty world with the given gravity vector.
    ///
    /// Integration runs at rapier's default fixed timestep (1/60 s); the
    /// host render loop calls [`Self::step`] once per frame.
    pub fn new(gravity: Vector<f32>) -> Self {
        Self {
            gravity,
            integration_parameters: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    /// Registers a simulated body and returns its handle.
    ///
    /// Shape selection is transparent to the caller: the cube gets rapier's
    /// native cuboid, everything else becomes a convex hull of the
    /// descriptor's corner points (a rounded hull when the descriptor carries
    /// a bevel). Both paths give the same convex collision response.
    ///
    /// The body participates in integration from the next [`Self::step`].
    pub fn create_body(&mut self, spec: &BodySpec) -> Result<BodyHandle, GeometryError> {
        let iso = pose_from_spec(spec.translation, spec.rotation);
        let builder = if spec.mass == 0.0 {
            RigidBodyBuilder::fixed()
        } else {
            RigidBodyBuilder::dynamic()
        };
        let rb = builder.pose(iso).build();
        let rb_handle = self.bodies.insert(rb);

        let shape = collision_shape(&spec.shape)?;
        let collider = ColliderBuilder::new(shape).mass(spec.mass).build();
        self.colliders
            .insert_with_parent(collider, rb_handle, &mut self.bodies);

        Ok(BodyHandle(rb_handle))
    }

    /// Registers an immovable plane and returns its handle.
    ///
    /// The collider is a half-space whose normal is the pose's local +Z axis
    /// (the scene is Z-up; an unrotated plane is a floor). `rotation` is XYZ
    /// Euler angles in radians. Planes are created once at scene mount and
    /// never removed.
    pub fn create_plane(&mut self, translation: Vector<f32>, rotation: Vector<f32>) -> BodyHandle {
        let iso = pose_from_spec(translation, rotation);
        let rb = RigidBodyBuilder::fixed().pose(iso).build();
        let rb_handle = self.bodies.insert(rb);

        // The body pose carries the full transform, so the half-space is
        // attached with an identity local frame and its local +Z normal.
        let halfspace = HalfSpace::new(Vector::z_axis());
        let collider = ColliderBuilder::new(SharedShape::new(halfspace)).build();
        self.colliders
            .insert_with_parent(collider, rb_handle, &mut self.bodies);

        BodyHandle(rb_handle)
    }

    /// Applies a world-space impulse at a point, waking the body.
    ///
    /// `at` is an offset from the body's centre of mass in world axes, so
    /// the zero point means a pure linear impulse with no torque. That is
    /// what a click delivers: the die lifts without picking up spin.
    ///
    /// Unknown handles are ignored; a click racing a teardown is harmless.
    pub fn apply_impulse(&mut self, handle: BodyHandle, impulse: Vector<f32>, at: Point<f32>) {
        if let Some(body) = self.bodies.get_mut(handle.0) {
            let at_world = *body.center_of_mass() + at.coords;
            body.apply_impulse_at_point(impulse, at_world, true);
        }
    }

    /// Advances every body by one fixed timestep.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
    }

    /// Current pose of a body, for the per-tick visual pull.
    pub fn body_pose(&self, handle: BodyHandle) -> Option<Isometry<f32>> {
        self.bodies.get(handle.0).map(|body| *body.position())
    }

    /// Current linear velocity of a body.
    pub fn body_linvel(&self, handle: BodyHandle) -> Option<Vector<f32>> {
        self.bodies.get(handle.0).map(|body| *body.linvel())
    }

    /// Whether the body is fixed (mass zero at creation).
    pub fn is_fixed(&self, handle: BodyHandle) -> bool {
        self.bodies
            .get(handle.0)
            .is_some_and(|body| body.is_fixed())
    }

    /// Number of registered bodies, planes included.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// The gravity vector this world was created with.
    pub fn gravity(&self) -> Vector<f32> {
        self.gravity
    }
}

/// Builds a rapier pose from a translation and XYZ Euler angles.
fn pose_from_spec(translation: Vector<f32>, rotation: Vector<f32>) -> Isometry<f32> {
    let rot = UnitQuaternion::from_euler_angles(rotation.x, rotation.y, rotation.z);
    Isometry::from_parts(Translation3::from(translation), rot)
}

/// Builds the collision shape for a descriptor.
///
/// Cube fast path aside, everything funnels through rapier's convex-hull
/// constructor, which returns `None` for degenerate input.
fn collision_shape(descriptor: &ShapeDescriptor) -> Result<SharedShape, GeometryError> {
    if let ShapeDescriptor::Parametric {
        solid: Solid::Cube,
        radius,
    } = descriptor
    {
        let half_extent = radius * 0.5;
        return Ok(SharedShape::cuboid(half_extent, half_extent, half_extent));
    }

    let points = descriptor.points();
    let bevel = descriptor.bevel();
    let shape = if bevel > 0.0 {
        SharedShape::round_convex_hull(&points, bevel)
    } else {
        SharedShape::convex_hull(&points)
    };
    shape.ok_or(GeometryError::DegenerateHull("die shape"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GRAVITY;
    use crate::shapes::{DieKind, describe_shape};

    fn die_spec(kind: DieKind, translation: Vector<f32>) -> BodySpec {
        BodySpec {
            shape: describe_shape(kind, kind.radius()),
            mass: 1.0,
            translation,
            rotation: Vector::zeros(),
        }
    }

    #[test]
    fn every_die_shape_builds_a_collision_shape() {
        // All six kinds must pass the convex-hull boundary; the D10's
        // explicit placeholder included.
        let mut world = SimulationWorld::new(GRAVITY);
        for kind in DieKind::ALL {
            let spec = die_spec(kind, Vector::zeros());
            assert!(world.create_body(&spec).is_ok(), "{kind:?} failed");
        }
    }

    #[test]
    fn degenerate_explicit_mesh_is_rejected() {
        // Collinear points have no convex hull; the factory must surface
        // that as a GeometryError instead of registering a broken body.
        use rapier3d::na::Point3;
        let mut world = SimulationWorld::new(GRAVITY);
        let spec = BodySpec {
            shape: ShapeDescriptor::ExplicitMesh {
                vertices: vec![
                    Point3::new(0.0, 0.0, 0.0),
                    Point3::new(1.0, 0.0, 0.0),
                    Point3::new(2.0, 0.0, 0.0),
                ],
                faces: vec![[0, 1, 2]],
                scale: 1.0,
                bevel: 0.0,
            },
            mass: 1.0,
            translation: Vector::zeros(),
            rotation: Vector::zeros(),
        };
        assert!(matches!(
            world.create_body(&spec),
            Err(GeometryError::DegenerateHull(_))
        ));
    }

    #[test]
    fn zero_mass_spec_builds_a_fixed_body() {
        let mut world = SimulationWorld::new(GRAVITY);
        let mut spec = die_spec(DieKind::D6, Vector::zeros());
        spec.mass = 0.0;
        let handle = world.create_body(&spec).unwrap();
        assert!(world.is_fixed(handle));
    }
}
