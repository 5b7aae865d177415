//! Tangent-space projection of the velocity field.
//!
//! The traversal walks every cubemap texel once, resolves its nearest sphere
//! mesh vertex, and re-expresses the world-space velocity sample in that
//! vertex's tangent frame. The normal component of the velocity is dropped
//! without being checked; magnitude along the tangent axes is preserved.

use glam::{Vec2, Vec3};

use crate::field::{FlowMap, VelocityField};
use crate::geometry::{texel_to_dir, CubeFaceId};
use crate::mesh::{nearest_face_vertex, SphereMesh};

/// Projects a world-space vector into a local (tangent, bitangent, normal)
/// frame, discarding the normal component.
pub fn project_to_tangent(w: Vec3, frame: (Vec3, Vec3, Vec3)) -> Vec2 {
    let (tangent, bitangent, _normal) = frame;
    Vec2::new(w.dot(tangent), w.dot(bitangent))
}

/// Projects every velocity sample into tangent space.
///
/// Texels are visited in face-major, row-major order. Progress is reported
/// as an integer percentage, printed only when the value changes. A texel
/// whose nearest-vertex lookup fails is reported and left at zero flow; the
/// traversal never aborts on such failures.
pub fn project_field(field: &VelocityField, mesh: &SphereMesh) -> FlowMap {
    let d = field.resolution();
    let mut flow = FlowMap::new(d);

    let total = (6 * d as u64) * d as u64;
    let mut processed = 0u64;
    let mut last_percent = u64::MAX;

    for face in CubeFaceId::all() {
        for i in 0..d {
            for j in 0..d {
                let dir = texel_to_dir(face, i, j, d);
                match nearest_face_vertex(mesh, face, dir) {
                    Some(index) => {
                        // The index came from the mesh itself, so the frame
                        // lookup cannot miss.
                        if let Some(frame) = mesh.tangent_frame(index) {
                            let velocity = field.sample(face, i, j);
                            flow.set(face, i, j, project_to_tangent(velocity, frame));
                        }
                    }
                    None => {
                        eprintln!(
                            "warning: no mesh vertex for texel ({}, {}, {}); leaving zero flow",
                            face.index(),
                            i,
                            j
                        );
                    }
                }

                processed += 1;
                let percent = 100 * processed / total;
                if percent != last_percent {
                    println!("  Projecting: {}%", percent);
                    last_percent = percent;
                }
            }
        }
    }

    flow
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> (Vec3, Vec3, Vec3) {
        (Vec3::X, Vec3::Y, Vec3::Z)
    }

    #[test]
    fn test_projection_of_frame_axes() {
        let (t, b, n) = frame();
        assert_eq!(project_to_tangent(t, frame()), Vec2::new(1.0, 0.0));
        assert_eq!(project_to_tangent(b, frame()), Vec2::new(0.0, 1.0));
        assert_eq!(project_to_tangent(n, frame()), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_projection_is_linear() {
        let w1 = Vec3::new(0.3, -0.7, 0.2);
        let w2 = Vec3::new(-0.1, 0.5, 0.9);
        let (a, b) = (2.5f32, -1.25f32);

        let combined = project_to_tangent(w1 * a + w2 * b, frame());
        let separate = project_to_tangent(w1, frame()) * a + project_to_tangent(w2, frame()) * b;
        assert!((combined - separate).length() < 1e-5);
    }

    #[test]
    fn test_projection_preserves_magnitude() {
        let tilted = (Vec3::X + Vec3::Y).normalize();
        let bitangent = Vec3::Z.cross(tilted);
        let flow = project_to_tangent(tilted * 3.0, (tilted, bitangent, Vec3::Z));
        assert!((flow.x - 3.0).abs() < 1e-5);
        assert!(flow.y.abs() < 1e-5);
    }

    #[test]
    fn test_project_field_constant_input() {
        let d = 8;
        let field = VelocityField::from_samples(
            d,
            vec![Vec3::Z; VelocityField::sample_count(d)],
        );
        let mesh = SphereMesh::spherified_cube(4);
        let flow = project_field(&field, &mesh);

        // At the front face center the frame is (X, -Y, Z): a +Z velocity
        // lies entirely along the normal and projects to zero.
        let center = flow.get(CubeFaceId::Front, d / 2, d / 2);
        assert!(center.length() < 1e-5);

        // At the top face center the frame is (X, Z, Y): the same velocity
        // lies along the bitangent.
        let top = flow.get(CubeFaceId::Top, d / 2, d / 2);
        assert!((top - Vec2::new(0.0, 1.0)).length() < 1e-5);

        // Local frames vary across a face, so the output is not constant.
        let corner = flow.get(CubeFaceId::Top, 0, 0);
        assert!((corner - top).length() > 1e-3);
    }
}
