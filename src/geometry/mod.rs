//! Cubemap geometry module.
//!
//! Provides the face enumeration and the coordinate transforms that map
//! discrete cubemap texels onto the unit sphere and back.

mod cube_sphere;
mod face;

pub use cube_sphere::{dir_to_face_coords, face_cube_point, texel_to_dir};
pub use face::CubeFaceId;
