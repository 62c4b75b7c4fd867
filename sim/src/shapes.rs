//! Geometry library for the die shapes.
//!
//! Pure data construction: every function here is total and deterministic,
//! and the same [`ShapeDescriptor`] value feeds both the collision volume and
//! the visual mesh so the two can never diverge.
//!
//! # Conventions
//! - Parametric solids are sized by circumradius (distance from the centre to
//!   every corner), except the cube whose `radius` is the full edge length.
//! - Face windings are counter-clockwise when viewed from outside the solid.
//! - All shapes are convex; the rigid-body factory relies on this.

use nalgebra::{Point3, Vector3};

use crate::constants::{
    D4_RADIUS, D6_RADIUS, D8_RADIUS, D10_RADIUS, D12_RADIUS, D20_RADIUS, IMPULSE_LIGHT,
    IMPULSE_STRONG,
};

/// The five platonic solids the parametric descriptor understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Solid {
    Tetrahedron,
    Cube,
    Octahedron,
    Dodecahedron,
    Icosahedron,
}

/// A die shape in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DieKind {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
}

impl DieKind {
    /// Every die kind, in display order.
    pub const ALL: [DieKind; 6] = [
        DieKind::D4,
        DieKind::D6,
        DieKind::D8,
        DieKind::D10,
        DieKind::D12,
        DieKind::D20,
    ];

    /// Canonical size parameter for this die (see [`crate::constants`]).
    pub fn radius(self) -> f32 {
        match self {
            DieKind::D4 => D4_RADIUS,
            DieKind::D6 => D6_RADIUS,
            DieKind::D8 => D8_RADIUS,
            DieKind::D10 => D10_RADIUS,
            DieKind::D12 => D12_RADIUS,
            DieKind::D20 => D20_RADIUS,
        }
    }

    /// Click impulse magnitude for this die.
    ///
    /// The D6 and D20 get the lighter throw; the rest get the stronger one.
    /// Inherited tuning, preserved as-is.
    pub fn impulse(self) -> f32 {
        match self {
            DieKind::D6 | DieKind::D20 => IMPULSE_LIGHT,
            _ => IMPULSE_STRONG,
        }
    }
}

/// Immutable description of a convex shape, consumed by both the collision
/// and the rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeDescriptor {
    /// A platonic solid sized by `radius` (circumradius, or edge length for
    /// the cube).
    Parametric { solid: Solid, radius: f32 },

    /// Raw convex vertex/face data.
    ///
    /// `scale` multiplies every vertex. `bevel`, when positive, rounds the
    /// collision shape's edges (the visual mesh stays sharp).
    ExplicitMesh {
        vertices: Vec<Point3<f32>>,
        faces: Vec<[u32; 3]>,
        scale: f32,
        bevel: f32,
    },
}

/// Builds the descriptor for a die kind at the given size.
///
/// The D10 has no parametric form: no pentagonal-trapezohedron primitive
/// exists in either backend, so it carries an explicit vertex list borrowing
/// an octahedron's topology with stretched apexes. A known approximation of
/// the true solid, kept deliberately rather than fixed.
pub fn describe_shape(kind: DieKind, radius: f32) -> ShapeDescriptor {
    match kind {
        DieKind::D4 => ShapeDescriptor::Parametric {
            solid: Solid::Tetrahedron,
            radius,
        },
        DieKind::D6 => ShapeDescriptor::Parametric {
            solid: Solid::Cube,
            radius,
        },
        DieKind::D8 => ShapeDescriptor::Parametric {
            solid: Solid::Octahedron,
            radius,
        },
        DieKind::D10 => ShapeDescriptor::ExplicitMesh {
            vertices: D10_VERTICES.iter().map(|&v| Point3::from(v)).collect(),
            faces: D10_FACES.to_vec(),
            scale: radius,
            bevel: 0.0,
        },
        DieKind::D12 => ShapeDescriptor::Parametric {
            solid: Solid::Dodecahedron,
            radius,
        },
        DieKind::D20 => ShapeDescriptor::Parametric {
            solid: Solid::Icosahedron,
            radius,
        },
    }
}

impl ShapeDescriptor {
    /// World-unit corner positions.
    ///
    /// Used as the convex-hull input by the rigid-body factory and as the
    /// vertex buffer by the mesh builder.
    pub fn points(&self) -> Vec<Point3<f32>> {
        match self {
            ShapeDescriptor::Parametric { solid, radius } => {
                // The cube table stores corners at +/-1, so a half-edge scale
                // turns `radius` into the full edge length. Every other table
                // is normalized to unit circumradius below.
                let scale = match solid {
                    Solid::Cube => radius * 0.5,
                    _ => *radius,
                };
                unit_vertices(*solid).into_iter().map(|p| p * scale).collect()
            }
            ShapeDescriptor::ExplicitMesh {
                vertices, scale, ..
            } => vertices.iter().map(|p| *p * *scale).collect(),
        }
    }

    /// Triangulated faces as indices into [`Self::points`], CCW from outside.
    pub fn triangles(&self) -> Vec<[u32; 3]> {
        match self {
            ShapeDescriptor::Parametric { solid, .. } => face_indices(*solid).to_vec(),
            ShapeDescriptor::ExplicitMesh { faces, .. } => faces.clone(),
        }
    }

    /// Collision-edge rounding radius; zero for parametric solids.
    pub fn bevel(&self) -> f32 {
        match self {
            ShapeDescriptor::Parametric { .. } => 0.0,
            ShapeDescriptor::ExplicitMesh { bevel, .. } => *bevel,
        }
    }
}

/// Golden ratio, used by the dodecahedron and icosahedron corner tables.
const PHI: f32 = 1.618_034;

/// Reciprocal golden ratio.
const INV_PHI: f32 = 0.618_034;

const TETRAHEDRON_VERTICES: [[f32; 3]; 4] =
    [[1.0, 1.0, 1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, -1.0], [1.0, -1.0, -1.0]];

const TETRAHEDRON_FACES: [[u32; 3]; 4] = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];

const CUBE_VERTICES: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

const CUBE_FACES: [[u32; 3]; 12] = [
    [0, 2, 1],
    [0, 3, 2],
    [4, 5, 6],
    [4, 6, 7],
    [0, 1, 5],
    [0, 5, 4],
    [2, 3, 7],
    [2, 7, 6],
    [1, 2, 6],
    [1, 6, 5],
    [0, 4, 7],
    [0, 7, 3],
];

const OCTAHEDRON_VERTICES: [[f32; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

const OCTAHEDRON_FACES: [[u32; 3]; 8] = [
    [0, 2, 4],
    [0, 4, 3],
    [0, 3, 5],
    [0, 5, 2],
    [1, 2, 5],
    [1, 5, 3],
    [1, 3, 4],
    [1, 4, 2],
];

const DODECAHEDRON_VERTICES: [[f32; 3]; 20] = [
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [0.0, -INV_PHI, -PHI],
    [0.0, -INV_PHI, PHI],
    [0.0, INV_PHI, -PHI],
    [0.0, INV_PHI, PHI],
    [-INV_PHI, -PHI, 0.0],
    [-INV_PHI, PHI, 0.0],
    [INV_PHI, -PHI, 0.0],
    [INV_PHI, PHI, 0.0],
    [-PHI, 0.0, -INV_PHI],
    [PHI, 0.0, -INV_PHI],
    [-PHI, 0.0, INV_PHI],
    [PHI, 0.0, INV_PHI],
];

const DODECAHEDRON_FACES: [[u32; 3]; 36] = [
    [3, 11, 7],
    [3, 7, 15],
    [3, 15, 13],
    [7, 19, 17],
    [7, 17, 6],
    [7, 6, 15],
    [17, 4, 8],
    [17, 8, 10],
    [17, 10, 6],
    [8, 0, 16],
    [8, 16, 2],
    [8, 2, 10],
    [0, 12, 1],
    [0, 1, 18],
    [0, 18, 16],
    [6, 10, 2],
    [6, 2, 13],
    [6, 13, 15],
    [2, 16, 18],
    [2, 18, 3],
    [2, 3, 13],
    [18, 1, 9],
    [18, 9, 11],
    [18, 11, 3],
    [4, 14, 12],
    [4, 12, 0],
    [4, 0, 8],
    [11, 9, 5],
    [11, 5, 19],
    [11, 19, 7],
    [19, 5, 14],
    [19, 14, 4],
    [19, 4, 17],
    [1, 12, 14],
    [1, 14, 5],
    [1, 5, 9],
];

const ICOSAHEDRON_VERTICES: [[f32; 3]; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];

const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// D10 placeholder: an octahedron with its apexes stretched along Z.
///
/// Same topology as [`OCTAHEDRON_VERTICES`], but the +/-Z corners sit further
/// out to suggest the elongated silhouette of the real die.
const D10_VERTICES: [[f32; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.2],
    [0.0, 0.0, -1.2],
];

const D10_FACES: [[u32; 3]; 8] = OCTAHEDRON_FACES;

/// Corner table for a solid, scaled to unit circumradius (cube excepted: its
/// corners stay at +/-1 so [`ShapeDescriptor::points`] can apply its
/// edge-length convention).
fn unit_vertices(solid: Solid) -> Vec<Point3<f32>> {
    let raw: &[[f32; 3]] = match solid {
        Solid::Tetrahedron => &TETRAHEDRON_VERTICES,
        Solid::Cube => &CUBE_VERTICES,
        Solid::Octahedron => &OCTAHEDRON_VERTICES,
        Solid::Dodecahedron => &DODECAHEDRON_VERTICES,
        Solid::Icosahedron => &ICOSAHEDRON_VERTICES,
    };
    if matches!(solid, Solid::Cube) {
        return raw.iter().map(|&v| Point3::from(v)).collect();
    }
    // Every corner of a platonic solid lies on the circumsphere, so
    // normalizing each one independently yields unit circumradius.
    raw.iter()
        .map(|&v| {
            let v = Vector3::from(v);
            Point3::from(v / v.norm())
        })
        .collect()
}

fn face_indices(solid: Solid) -> &'static [[u32; 3]] {
    match solid {
        Solid::Tetrahedron => &TETRAHEDRON_FACES,
        Solid::Cube => &CUBE_FACES,
        Solid::Octahedron => &OCTAHEDRON_FACES,
        Solid::Dodecahedron => &DODECAHEDRON_FACES,
        Solid::Icosahedron => &ICOSAHEDRON_FACES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_shape_is_deterministic() {
        // Two calls with identical arguments must yield identical descriptors,
        // vertex for vertex. The scene relies on this to feed physics and
        // rendering the same geometry.
        for kind in DieKind::ALL {
            let a = describe_shape(kind, kind.radius());
            let b = describe_shape(kind, kind.radius());
            assert_eq!(a, b, "{kind:?} descriptor not deterministic");
            assert_eq!(a.points(), b.points());
            assert_eq!(a.triangles(), b.triangles());
        }
    }

    #[test]
    fn parametric_solids_sit_on_the_circumsphere() {
        // Every corner of a circumradius-parameterized solid is exactly
        // `radius` from the centre.
        for kind in [DieKind::D4, DieKind::D8, DieKind::D12, DieKind::D20] {
            let radius = kind.radius();
            for p in describe_shape(kind, radius).points() {
                let r = p.coords.norm();
                assert!(
                    (r - radius).abs() < 1e-4,
                    "{kind:?} corner at distance {r}, expected {radius}"
                );
            }
        }
    }

    #[test]
    fn cube_radius_is_the_edge_length() {
        // The D6 convention: radius 2.5 means a cube 2.5 units on a side,
        // i.e. corners at +/-1.25 per axis.
        let points = describe_shape(DieKind::D6, 2.5).points();
        for p in &points {
            for c in [p.x, p.y, p.z] {
                assert!((c.abs() - 1.25).abs() < 1e-6);
            }
        }
        assert_eq!(points.len(), 8);
    }

    #[test]
    fn vertex_and_face_counts_match_the_solids() {
        let cases = [
            (DieKind::D4, 4, 4),
            (DieKind::D6, 8, 12),
            (DieKind::D8, 6, 8),
            (DieKind::D10, 6, 8),
            (DieKind::D12, 20, 36),
            (DieKind::D20, 12, 20),
        ];
        for (kind, vertices, triangles) in cases {
            let descriptor = describe_shape(kind, kind.radius());
            assert_eq!(descriptor.points().len(), vertices, "{kind:?} vertices");
            assert_eq!(descriptor.triangles().len(), triangles, "{kind:?} triangles");
        }
    }

    #[test]
    fn face_indices_stay_in_bounds() {
        for kind in DieKind::ALL {
            let descriptor = describe_shape(kind, kind.radius());
            let n = descriptor.points().len() as u32;
            for face in descriptor.triangles() {
                for i in face {
                    assert!(i < n, "{kind:?} face index {i} out of range {n}");
                }
            }
        }
    }

    #[test]
    fn d10_is_the_explicit_placeholder() {
        // The D10 must go through the explicit-mesh path; the backends have
        // no native pentagonal trapezohedron.
        let descriptor = describe_shape(DieKind::D10, D10_RADIUS);
        assert!(matches!(descriptor, ShapeDescriptor::ExplicitMesh { .. }));
    }

    #[test]
    fn impulse_split_matches_the_inherited_tuning() {
        // D6/D20 throw light, everything else strong. Preserved verbatim.
        assert_eq!(DieKind::D6.impulse(), IMPULSE_LIGHT);
        assert_eq!(DieKind::D20.impulse(), IMPULSE_LIGHT);
        for kind in [DieKind::D4, DieKind::D8, DieKind::D10, DieKind::D12] {
            assert_eq!(kind.impulse(), IMPULSE_STRONG);
        }
    }
}
