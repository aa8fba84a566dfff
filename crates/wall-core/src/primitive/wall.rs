//! Solid wall mesh generation
//!
//! The wall cross-section is a two-step profile: the prism runs along X
//! from -(l+w) to l+w, is w thick along Y and spans -h to h in Z, with the
//! x coordinates stepping through -(l+w), -l, l, l+w. The stepped ends let
//! adjacent wall segments interlock without manual trimming.

use super::QuadMeshData;
use crate::constants::WALL_OBJECT_NAME;
use crate::mesh::QuadMesh;

/// Generate the wall mesh for the given dimensions
///
/// # Arguments
/// * `length` - Half-span of the straight run along X
/// * `width` - Wall thickness along Y
/// * `height` - Half-height along Z
///
/// # Returns
/// (vertices, faces) - always 16 vertices and 14 quads, in a fixed order
/// with a fixed winding. Calling twice with the same inputs yields
/// bit-identical output. Non-positive inputs produce degenerate geometry
/// rather than an error; validation belongs to the operator layer.
pub fn generate_wall_mesh(length: f32, width: f32, height: f32) -> QuadMeshData {
    let l = length;
    let w = width;
    let h = height;

    // Front half at y = -w/2 (indices 0-7), back half at y = w/2
    // (indices 8-15); each half mirrors the other in z across h.
    let vertices = vec![
        [-l - w, -w / 2.0, -h],
        [-l, -w / 2.0, -h],
        [l, -w / 2.0, -h],
        [l + w, -w / 2.0, -h],
        [l + w, -w / 2.0, h],
        [l, -w / 2.0, h],
        [-l, -w / 2.0, h],
        [-l - w, -w / 2.0, h],
        [-l - w, w / 2.0, -h],
        [-l, w / 2.0, -h],
        [l, w / 2.0, -h],
        [l + w, w / 2.0, -h],
        [l + w, w / 2.0, h],
        [l, w / 2.0, h],
        [-l, w / 2.0, h],
        [-l - w, w / 2.0, h],
    ];

    // The face order and winding are load-bearing: winding fixes the
    // outward normals and downstream consumers rely on a stable order.
    let faces = vec![
        [0, 1, 6, 7],
        [0, 8, 15, 7],
        [0, 1, 9, 8],
        [14, 15, 8, 9],
        [14, 15, 7, 6],
        [14, 13, 10, 9],
        [14, 13, 5, 6],
        [2, 5, 6, 1],
        [2, 10, 9, 1],
        [2, 3, 4, 5],
        [2, 3, 11, 10],
        [12, 13, 10, 11],
        [12, 13, 5, 4],
        [12, 4, 3, 11],
    ];

    (vertices, faces)
}

/// Generate a wall as a ready-to-insert [`QuadMesh`] datablock
pub fn wall_mesh(length: f32, width: f32, height: f32) -> QuadMesh {
    let (vertices, faces) = generate_wall_mesh(length, width, height);
    QuadMesh::from_data(WALL_OBJECT_NAME, vertices, faces)
}
