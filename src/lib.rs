//! Cubemap velocity field to flow map converter.
//!
//! This crate converts a precomputed per-face cubemap velocity field into
//! per-face flow map images: each texel is mapped onto a subdivided
//! spherified-cube sphere mesh, its velocity is projected into the nearest
//! vertex's tangent frame, and the resulting 2D flow direction is packed
//! into the red and green channels of an 8-bit PNG.

pub mod export;
pub mod field;
pub mod geometry;
pub mod mesh;
pub mod project;

pub use export::{export_flow_maps, PngExportOptions};
pub use field::{FieldError, FlowMap, VelocityField};
pub use geometry::{texel_to_dir, CubeFaceId};
pub use mesh::{nearest_face_vertex, SphereMesh};
pub use project::{project_field, project_to_tangent};
