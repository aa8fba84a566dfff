//! Primitive mesh generation for the wall editor
//!
//! Generates vertices and quad faces for parametric shapes. The only
//! primitive at the moment is the solid wall (a notched prism whose ends
//! interlock with adjacent segments).

mod wall;

pub use wall::{generate_wall_mesh, wall_mesh};

/// Quad mesh data: vertices and quad faces (4 indices each, fixed winding)
pub type QuadMeshData = (Vec<[f32; 3]>, Vec<[u32; 4]>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_mesh_counts() {
        let (vertices, faces) = generate_wall_mesh(1.0, 0.25, 0.5);
        assert_eq!(vertices.len(), 16);
        assert_eq!(faces.len(), 14);
    }

    #[test]
    fn test_wall_mesh_indices_in_range() {
        let (vertices, faces) = generate_wall_mesh(2.0, 0.5, 1.0);
        for face in &faces {
            for &i in face {
                assert!((i as usize) < vertices.len());
            }
        }
    }

    #[test]
    fn test_wall_mesh_no_orphan_vertices() {
        let (vertices, faces) = generate_wall_mesh(1.0, 0.25, 0.5);
        let mut used = vec![false; vertices.len()];
        for face in &faces {
            for &i in face {
                used[i as usize] = true;
            }
        }
        assert!(used.iter().all(|&u| u));
    }
}
