//! Explicit scene registry: everything the dice box contains, as plain data.
//!
//! The scene is described once, up front, instead of through an implicit
//! component tree. Startup iterates this registry to register bodies and
//! spawn visuals, and the per-tick sync walks the spawned entities in the
//! same order. Keeping the registry pure data makes the mount counts and
//! poses trivially testable without a render loop.

use bevy::prelude::*;
use sim::{DieKind, WALL_OFFSET, WALL_TILT};

/// One immovable bounding plane.
#[derive(Clone, Debug)]
pub struct PlaneSpec {
    pub color: Color,
    /// World translation.
    pub translation: Vec3,
    /// XYZ Euler angles, radians.
    pub rotation: Vec3,
}

/// One die to mount.
#[derive(Clone, Debug)]
pub struct DieSpec {
    pub kind: DieKind,
    pub color: Color,
    /// World translation.
    pub translation: Vec3,
    /// XYZ Euler angles, radians.
    pub rotation: Vec3,
    /// Click impulse magnitude, applied along +Y.
    pub impulse: f32,
}

/// The whole scene: five planes forming an open box, one die per kind.
#[derive(Clone, Debug)]
pub struct SceneLayout {
    pub planes: Vec<PlaneSpec>,
    pub dice: Vec<DieSpec>,
}

/// Plane palette, floor first then the four walls.
///
/// One sRGB swatch row: cream floor, dark/teal/cyan/red walls.
fn plane_colors() -> [Color; 5] {
    [
        Color::srgb_u8(0xfc, 0xf7, 0xc5),
        Color::srgb_u8(0x29, 0x22, 0x1f),
        Color::srgb_u8(0x13, 0x74, 0x7d),
        Color::srgb_u8(0x0a, 0xbf, 0xbc),
        Color::srgb_u8(0xfc, 0x35, 0x4c),
    ]
}

impl SceneLayout {
    /// The canonical dice-box scene.
    ///
    /// The floor sits at the origin facing +Z; the four walls are offset by
    /// [`WALL_OFFSET`] and tilted [`WALL_TILT`] radians inward. The six dice
    /// start on two rows above the floor, far enough apart that no two
    /// overlap at mount time.
    pub fn bounded_box() -> Self {
        let [floor, west, east, north, south] = plane_colors();
        let planes = vec![
            PlaneSpec {
                color: floor,
                translation: Vec3::ZERO,
                rotation: Vec3::ZERO,
            },
            PlaneSpec {
                color: west,
                translation: Vec3::new(-WALL_OFFSET, 0.0, 0.0),
                rotation: Vec3::new(0.0, WALL_TILT, 0.0),
            },
            PlaneSpec {
                color: east,
                translation: Vec3::new(WALL_OFFSET, 0.0, 0.0),
                rotation: Vec3::new(0.0, -WALL_TILT, 0.0),
            },
            PlaneSpec {
                color: north,
                translation: Vec3::new(0.0, WALL_OFFSET, 0.0),
                rotation: Vec3::new(WALL_TILT, 0.0, 0.0),
            },
            PlaneSpec {
                color: south,
                translation: Vec3::new(0.0, -WALL_OFFSET, 0.0),
                rotation: Vec3::new(-WALL_TILT, 0.0, 0.0),
            },
        ];

        let dice = vec![
            die(DieKind::D4, Vec3::new(-5.0, 0.0, 2.0), Vec3::new(1.0, 0.0, 0.0)),
            die(DieKind::D6, Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO),
            die(DieKind::D20, Vec3::new(5.0, 0.0, 2.0), Vec3::new(2.0, 0.0, 0.0)),
            die(DieKind::D8, Vec3::new(-5.0, 5.0, 2.0), Vec3::new(0.0, 1.0, 0.0)),
            die(DieKind::D10, Vec3::new(0.0, 5.0, 2.0), Vec3::new(0.0, 0.0, 1.0)),
            die(DieKind::D12, Vec3::new(5.0, 5.0, 2.0), Vec3::new(1.0, 1.0, 0.0)),
        ];

        Self { planes, dice }
    }
}

fn die(kind: DieKind, translation: Vec3, rotation: Vec3) -> DieSpec {
    DieSpec {
        kind,
        color: die_color(kind),
        translation,
        rotation,
        impulse: kind.impulse(),
    }
}

/// Flat per-kind colors so each die reads distinctly at a glance.
fn die_color(kind: DieKind) -> Color {
    match kind {
        DieKind::D4 => Color::srgb_u8(0xe8, 0x5a, 0x4f),
        DieKind::D6 => Color::srgb_u8(0x4f, 0x86, 0xe8),
        DieKind::D8 => Color::srgb_u8(0x57, 0xc7, 0x85),
        DieKind::D10 => Color::srgb_u8(0xe8, 0xb3, 0x4f),
        DieKind::D12 => Color::srgb_u8(0x9a, 0x6a, 0xe0),
        DieKind::D20 => Color::srgb_u8(0xe8, 0x6a, 0xc3),
    }
}
