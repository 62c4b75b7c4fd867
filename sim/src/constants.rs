use nalgebra::Vector3;

/// Global gravity for the dice box, in world units per second squared.
///
/// The scene is Z-up: the floor plane faces +Z and everything falls along -Z.
/// The magnitude is deliberately much stronger than Earth gravity so thrown
/// dice settle quickly.
pub const GRAVITY: Vector3<f32> = Vector3::new(0.0, 0.0, -30.0);

/// Mass of every die, in arbitrary mass units.
///
/// All dice share the same mass; the differing throw feel comes from the
/// impulse magnitudes below, not from inertia.
pub const DIE_MASS: f32 = 1.0;

/// Stronger click impulse, applied to the D4, D8, D10 and D12.
///
/// The split between [`IMPULSE_STRONG`] and [`IMPULSE_LIGHT`] is inherited
/// tuning with no recorded rationale. Keep both values as-is unless the whole
/// feel of the scene is being re-tuned.
pub const IMPULSE_STRONG: f32 = 20.0;

/// Lighter click impulse, applied to the D6 and D20.
pub const IMPULSE_LIGHT: f32 = 10.0;

/// Circumradius of the D4 (tetrahedron).
pub const D4_RADIUS: f32 = 2.0;

/// Edge length of the D6 cube.
///
/// Unlike every other die this is the full edge, not a circumradius. The box
/// has always been sized by its extent rather than its corner distance, and
/// the convention stuck.
pub const D6_RADIUS: f32 = 2.5;

/// Circumradius of the D8 (octahedron).
pub const D8_RADIUS: f32 = 2.0;

/// Scale applied to the D10's explicit vertex list.
pub const D10_RADIUS: f32 = 1.8;

/// Circumradius of the D12 (dodecahedron).
pub const D12_RADIUS: f32 = 1.8;

/// Circumradius of the D20 (icosahedron).
pub const D20_RADIUS: f32 = 2.0;

/// Distance from the origin to each of the four bounding walls, in world units.
pub const WALL_OFFSET: f32 = 10.0;

/// Inward tilt of each bounding wall, in radians.
///
/// The walls are not vertical; each one leans one radian toward the centre of
/// the box, forming an open funnel that keeps dice from escaping. The exact
/// value is inherited tuning; change it and the box changes character.
pub const WALL_TILT: f32 = 1.0;
