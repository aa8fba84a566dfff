//! Solid Wall Core Data Structures
//!
//! This crate contains the core data structures for the wall editor:
//! - QuadMesh: quad-face mesh datablock with derived normals and edges
//! - primitive: parametric wall mesh generation
//! - constants: operator defaults and recommended parameter ranges

pub mod constants;
pub mod mesh;
pub mod primitive;

pub use constants::*;
pub use mesh::*;
pub use primitive::*;
