//! Spherified-cube sphere mesh construction.
//!
//! The mesh subdivides each cube face into an S×S grid, normalizes every
//! grid vertex onto the unit sphere, and stores vertices in one flat arena
//! with triangles referencing them by stable index. Vertices stay grouped by
//! their home face, which is what lets the nearest-vertex query stay inside
//! one face near cube edges.

use glam::Vec3;

use crate::geometry::{face_cube_point, CubeFaceId};

/// A mesh vertex with its local tangent frame.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    /// Position on the unit sphere.
    pub position: Vec3,
    /// Surface normal. Equal to the position for a unit sphere.
    pub normal: Vec3,
    /// Tangent axis, following the face's row direction.
    pub tangent: Vec3,
    /// Bitangent axis, following the face's column direction.
    pub bitangent: Vec3,
}

/// A triangle referencing three vertices by arena index.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    /// Indices into the mesh vertex arena.
    pub vertices: [u32; 3],
    /// Outward-facing triangle normal.
    pub normal: Vec3,
}

/// A triangulated unit sphere built from a subdivided cube.
#[derive(Debug, Clone)]
pub struct SphereMesh {
    subdivision: u32,
    vertices: Vec<Vertex>,
    triangles: Vec<Triangle>,
}

impl SphereMesh {
    /// Builds a spherified cube with `subdivision` segments per face edge.
    ///
    /// Each face contributes an (S+1)×(S+1) vertex grid in row-major order
    /// and 2·S² triangles. Vertices on shared cube edges are duplicated per
    /// face on purpose: every vertex has exactly one home face.
    pub fn spherified_cube(subdivision: u32) -> SphereMesh {
        let s = subdivision.max(1);
        let side = s + 1;
        let per_face = (side * side) as usize;

        let mut vertices = Vec::with_capacity(per_face * 6);
        let mut triangles = Vec::with_capacity((s * s * 2) as usize * 6);

        for face in CubeFaceId::all() {
            for gi in 0..side {
                for gj in 0..side {
                    let a = grid_coord(gi, s);
                    let b = grid_coord(gj, s);
                    vertices.push(make_vertex(face, a, b));
                }
            }
        }

        for face in CubeFaceId::all() {
            let base = (face.index() * per_face) as u32;
            for gi in 0..s {
                for gj in 0..s {
                    let v00 = base + gi * side + gj;
                    let v01 = v00 + 1;
                    let v10 = v00 + side;
                    let v11 = v10 + 1;
                    triangles.push(make_triangle(&vertices, [v00, v10, v11]));
                    triangles.push(make_triangle(&vertices, [v00, v11, v01]));
                }
            }
        }

        SphereMesh {
            subdivision: s,
            vertices,
            triangles,
        }
    }

    /// Returns the per-face subdivision level.
    pub fn subdivision(&self) -> u32 {
        self.subdivision
    }

    /// Returns the number of vertices owned by each face.
    pub fn vertices_per_face(&self) -> usize {
        let side = (self.subdivision + 1) as usize;
        side * side
    }

    /// Returns the vertex arena.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the triangle list.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Returns the arena index of the vertex at grid position (gi, gj) on
    /// the given face.
    pub fn vertex_index(&self, face: CubeFaceId, gi: u32, gj: u32) -> u32 {
        let side = self.subdivision + 1;
        (face.index() as u32) * side * side + gi * side + gj
    }

    /// Returns the (tangent, bitangent, normal) frame of a vertex, or `None`
    /// for an out-of-range index.
    pub fn tangent_frame(&self, index: u32) -> Option<(Vec3, Vec3, Vec3)> {
        self.vertices
            .get(index as usize)
            .map(|v| (v.tangent, v.bitangent, v.normal))
    }
}

fn grid_coord(g: u32, s: u32) -> f32 {
    (g as f32 - (s / 2) as f32) / s as f32
}

fn make_vertex(face: CubeFaceId, a: f32, b: f32) -> Vertex {
    let position = face_cube_point(face, a, b).normalize();
    let normal = position;

    // Partial derivatives of the cube placement are constant per face; the
    // tangent frame is their Gram-Schmidt projection into the plane
    // perpendicular to the normal.
    let dcda = face_cube_point(face, 1.0, 0.0) - face_cube_point(face, 0.0, 0.0);
    let dcdb = face_cube_point(face, 0.0, 1.0) - face_cube_point(face, 0.0, 0.0);

    let tangent = (dcda - normal * normal.dot(dcda)).normalize();
    let bitangent =
        (dcdb - normal * normal.dot(dcdb) - tangent * tangent.dot(dcdb)).normalize();

    Vertex {
        position,
        normal,
        tangent,
        bitangent,
    }
}

fn make_triangle(vertices: &[Vertex], indices: [u32; 3]) -> Triangle {
    let p0 = vertices[indices[0] as usize].position;
    let p1 = vertices[indices[1] as usize].position;
    let p2 = vertices[indices[2] as usize].position;

    let mut normal = (p1 - p0).cross(p2 - p0).normalize_or_zero();
    // Face winding differs between cube faces; orient away from the origin.
    if normal.dot(p0 + p1 + p2) < 0.0 {
        normal = -normal;
    }

    Triangle {
        vertices: indices,
        normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_and_triangle_counts() {
        let mesh = SphereMesh::spherified_cube(4);
        assert_eq!(mesh.vertices().len(), 6 * 5 * 5);
        assert_eq!(mesh.triangles().len(), 6 * 4 * 4 * 2);
        assert_eq!(mesh.vertices_per_face(), 25);
    }

    #[test]
    fn test_vertices_lie_on_unit_sphere() {
        let mesh = SphereMesh::spherified_cube(8);
        for v in mesh.vertices() {
            assert!((v.position.length() - 1.0).abs() < 1e-5);
            assert_eq!(v.position, v.normal);
        }
    }

    #[test]
    fn test_tangent_frames_are_orthonormal() {
        let mesh = SphereMesh::spherified_cube(8);
        for v in mesh.vertices() {
            assert!((v.tangent.length() - 1.0).abs() < 1e-5);
            assert!((v.bitangent.length() - 1.0).abs() < 1e-5);
            assert!(v.tangent.dot(v.normal).abs() < 1e-5);
            assert!(v.bitangent.dot(v.normal).abs() < 1e-5);
            assert!(v.tangent.dot(v.bitangent).abs() < 1e-5);
        }
    }

    #[test]
    fn test_face_center_frame_matches_face_axes() {
        let mesh = SphereMesh::spherified_cube(4);
        // Grid (2, 2) of a 4-subdivision face is the face center.
        let idx = mesh.vertex_index(CubeFaceId::Front, 2, 2);
        let (t, b, n) = mesh.tangent_frame(idx).unwrap();
        assert!((n - Vec3::Z).length() < 1e-6);
        assert!((t - Vec3::X).length() < 1e-6);
        assert!((b + Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_triangle_normals_point_outward() {
        let mesh = SphereMesh::spherified_cube(4);
        for tri in mesh.triangles() {
            let centroid = tri
                .vertices
                .iter()
                .map(|&i| mesh.vertices()[i as usize].position)
                .sum::<Vec3>()
                / 3.0;
            assert!(tri.normal.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn test_tangent_frame_out_of_range() {
        let mesh = SphereMesh::spherified_cube(2);
        assert!(mesh.tangent_frame(mesh.vertices().len() as u32).is_none());
    }
}
