//! Quad mesh datablock
//!
//! Meshes are plain data: vertices plus quad faces with a fixed winding.
//! No edge list is stored; consumers that need edges derive them from
//! face adjacency via [`QuadMesh::edges`].

use std::collections::HashSet;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A mesh made of quad faces, as produced by the primitive generators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadMesh {
    pub name: String,
    /// Vertex positions
    pub vertices: Vec<[f32; 3]>,
    /// Quad faces (4 vertex indices each, winding fixes the outward normal)
    pub faces: Vec<[u32; 4]>,
}

impl QuadMesh {
    /// Create a new empty mesh
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh from generator output
    pub fn from_data(name: impl Into<String>, vertices: Vec<[f32; 3]>, faces: Vec<[u32; 4]>) -> Self {
        Self {
            name: name.into(),
            vertices,
            faces,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check structural invariants: every face index in range, every
    /// vertex referenced by at least one face
    pub fn validate(&self) -> Result<(), MeshError> {
        let mut used = vec![false; self.vertices.len()];
        for (face_index, face) in self.faces.iter().enumerate() {
            for &i in face {
                let Some(slot) = used.get_mut(i as usize) else {
                    return Err(MeshError::IndexOutOfRange {
                        face: face_index,
                        index: i,
                        vertex_count: self.vertices.len(),
                    });
                };
                *slot = true;
            }
        }
        if let Some(orphan) = used.iter().position(|&u| !u) {
            return Err(MeshError::OrphanVertex(orphan));
        }
        Ok(())
    }

    /// Axis-aligned bounding box, or None for an empty mesh
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        if self.vertices.is_empty() {
            return None;
        }

        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        for v in &self.vertices {
            for i in 0..3 {
                min[i] = min[i].min(v[i]);
                max[i] = max[i].max(v[i]);
            }
        }
        Some((Vec3::from_array(min), Vec3::from_array(max)))
    }

    /// Derive the unique undirected edge list from face adjacency
    ///
    /// Edges are returned sorted, with the smaller index first in each
    /// pair, so the result is stable across calls.
    pub fn edges(&self) -> Vec<[u32; 2]> {
        let mut seen = HashSet::new();
        for face in &self.faces {
            for i in 0..4 {
                let a = face[i];
                let b = face[(i + 1) % 4];
                seen.insert(if a < b { [a, b] } else { [b, a] });
            }
        }
        let mut edges: Vec<[u32; 2]> = seen.into_iter().collect();
        edges.sort_unstable();
        edges
    }

    /// Split each quad into two triangles, preserving winding
    ///
    /// Returns flat triangle indices (3 per triangle, 2 triangles per
    /// quad) for renderers that only consume triangle lists.
    pub fn triangulate(&self) -> Vec<u32> {
        let mut indices = Vec::with_capacity(self.faces.len() * 6);
        for face in &self.faces {
            indices.extend_from_slice(&[face[0], face[1], face[2], face[0], face[2], face[3]]);
        }
        indices
    }

    /// Calculate one normal per quad face from its winding
    pub fn face_normals(&self) -> Vec<[f32; 3]> {
        self.faces
            .iter()
            .map(|face| {
                face_normal(
                    self.vertices[face[0] as usize],
                    self.vertices[face[1] as usize],
                    self.vertices[face[2] as usize],
                )
            })
            .collect()
    }

    /// Translate all vertices by the given offset
    pub fn translate(&mut self, offset: Vec3) {
        for v in &mut self.vertices {
            v[0] += offset.x;
            v[1] += offset.y;
            v[2] += offset.z;
        }
    }

    /// Append another mesh's geometry, re-basing its face indices
    pub fn merge(&mut self, other: &QuadMesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.faces.extend(
            other
                .faces
                .iter()
                .map(|f| [f[0] + base, f[1] + base, f[2] + base, f[3] + base]),
        );
    }
}

/// Calculate the normal of a planar face from its first three vertices
pub fn face_normal(v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> [f32; 3] {
    let e1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
    let e2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];

    let cross = [
        e1[1] * e2[2] - e1[2] * e2[1],
        e1[2] * e2[0] - e1[0] * e2[2],
        e1[0] * e2[1] - e1[1] * e2[0],
    ];

    let len = (cross[0] * cross[0] + cross[1] * cross[1] + cross[2] * cross[2]).sqrt();
    if len > 0.0 {
        [cross[0] / len, cross[1] / len, cross[2] / len]
    } else {
        [0.0, 0.0, 1.0]
    }
}

/// Mesh-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum MeshError {
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
    #[error("vertex {0} is not referenced by any face")]
    OrphanVertex(usize),
}
