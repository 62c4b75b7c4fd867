//! Physics and geometry for the dice box, independent of any renderer.
//!
//! The crate splits into three layers:
//! - [`shapes`]: pure-data descriptors for each die shape.
//! - [`world`]: the rapier-backed [`SimulationWorld`] plus the body and
//!   plane factories.
//! - [`constants`]: the tuning values shared with the client.

pub mod constants;
pub mod shapes;
pub mod world;

pub use constants::{DIE_MASS, GRAVITY, IMPULSE_LIGHT, IMPULSE_STRONG, WALL_OFFSET, WALL_TILT};
pub use shapes::{DieKind, ShapeDescriptor, Solid, describe_shape};
pub use world::{BodyHandle, BodySpec, GeometryError, SimulationWorld, rapier3d};
