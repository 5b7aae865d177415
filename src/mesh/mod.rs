//! Sphere mesh module.
//!
//! Builds the subdivided spherified-cube mesh and answers per-face
//! nearest-vertex and tangent-frame queries against it.

mod nearest;
mod sphere;

pub use nearest::nearest_face_vertex;
pub use sphere::{SphereMesh, Triangle, Vertex};
