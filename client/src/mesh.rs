//! Builds render meshes from the same shape descriptors physics uses.
//!
//! One descriptor feeds both worlds: the positions handed to Bevy here are
//! the exact points the convex hull in `sim` is built from.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, Mesh, PrimitiveTopology};
use bevy::prelude::*;
use sim::ShapeDescriptor;

/// Triangle-list mesh for a die, with flat (faceted) shading.
pub fn mesh_from_descriptor(descriptor: &ShapeDescriptor) -> Mesh {
    let positions: Vec<[f32; 3]> = descriptor
        .points()
        .iter()
        .map(|p| [p.x, p.y, p.z])
        .collect();
    let indices: Vec<u32> = descriptor.triangles().into_iter().flatten().collect();

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_indices(Indices::U32(indices));
    // Flat normals need one vertex per face corner, so un-share them first.
    mesh.duplicate_vertices();
    mesh.compute_flat_normals();
    mesh
}

/// Visual for a bounding plane: a large quad facing local +Z, matching the
/// half-space collider's normal convention.
pub fn plane_mesh() -> Mesh {
    Plane3d::new(Vec3::Z, Vec2::splat(500.0)).mesh().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim::{DieKind, describe_shape};

    #[test]
    fn die_mesh_has_one_vertex_per_face_corner() {
        // After duplication for flat shading, the vertex count is exactly
        // three per triangle.
        for kind in DieKind::ALL {
            let descriptor = describe_shape(kind, kind.radius());
            let triangles = descriptor.triangles().len();
            let mesh = mesh_from_descriptor(&descriptor);
            assert_eq!(
                mesh.count_vertices(),
                triangles * 3,
                "{kind:?} vertex count"
            );
            assert!(mesh.attribute(Mesh::ATTRIBUTE_NORMAL).is_some());
        }
    }

    #[test]
    fn mesh_positions_come_from_the_descriptor() {
        // The render mesh may only contain points the collision hull also
        // sees; that is the visual/physics consistency invariant.
        let descriptor = describe_shape(DieKind::D4, 2.0);
        let source = descriptor.points();
        let mesh = mesh_from_descriptor(&descriptor);

        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|a| a.as_float3())
            .expect("position attribute");
        for p in positions {
            assert!(
                source
                    .iter()
                    .any(|s| (s.x - p[0]).abs() < 1e-6
                        && (s.y - p[1]).abs() < 1e-6
                        && (s.z - p[2]).abs() < 1e-6),
                "mesh vertex {p:?} not in descriptor"
            );
        }
    }
}
