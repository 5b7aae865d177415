//! Coordinate conversion between cubemap texels and sphere directions.
//!
//! Face coordinates (a, b) live in [-0.5, 0.5]² on the face plane; the third
//! axis is fixed at ±0.5 (the face normal offset). Normalizing the resulting
//! cube-surface point yields the unit-sphere direction for that texel. The
//! same placement is used for velocity-field indexing and for the sphere
//! mesh, so a texel and its nearest mesh vertex share one convention.

use glam::Vec3;

use super::face::CubeFaceId;

/// Places face-plane coordinates (a, b) on the unit cube surface.
///
/// `a` and `b` are expected in [-0.5, 0.5]. The orientation of (a, b) within
/// each face follows the cubemap layout of the velocity field: `a` advances
/// along the face's row axis, `b` along its column axis.
pub fn face_cube_point(face: CubeFaceId, a: f32, b: f32) -> Vec3 {
    match face {
        CubeFaceId::Front => Vec3::new(a, -b, 0.5),
        CubeFaceId::Right => Vec3::new(0.5, -b, -a),
        CubeFaceId::Back => Vec3::new(-a, -b, -0.5),
        CubeFaceId::Left => Vec3::new(-0.5, -b, a),
        CubeFaceId::Top => Vec3::new(a, 0.5, b),
        CubeFaceId::Bottom => Vec3::new(a, -0.5, -b),
    }
}

/// Converts a discrete cubemap texel (face, i, j) into a unit direction.
///
/// `i` and `j` are row/column indices in [0, d). The texel is placed on the
/// cube surface at ((i - d/2)/d, (j - d/2)/d) and normalized onto the unit
/// sphere. Inputs are in-range by construction of the traversal loop, so
/// there is no error condition.
pub fn texel_to_dir(face: CubeFaceId, i: u32, j: u32, d: u32) -> Vec3 {
    let half = (d / 2) as f32;
    let a = (i as f32 - half) / d as f32;
    let b = (j as f32 - half) / d as f32;
    face_cube_point(face, a, b).normalize()
}

/// Projects a direction back onto a specific face's coordinate plane.
///
/// Returns `None` when the direction has no positive component along the
/// face normal, i.e. the direction does not point through this face at all.
/// The returned (a, b) are unclamped and may fall slightly outside
/// [-0.5, 0.5] for directions belonging to a neighboring face.
pub fn dir_to_face_coords(face: CubeFaceId, dir: Vec3) -> Option<(f32, f32)> {
    let w = dir.dot(face.normal());
    if w <= 0.0 {
        return None;
    }

    // Scale so the face's fixed axis lands on ±0.5, then invert the placement.
    let c = dir * (0.5 / w);
    let (a, b) = match face {
        CubeFaceId::Front => (c.x, -c.y),
        CubeFaceId::Right => (-c.z, -c.y),
        CubeFaceId::Back => (-c.x, -c.y),
        CubeFaceId::Left => (c.z, -c.y),
        CubeFaceId::Top => (c.x, c.z),
        CubeFaceId::Bottom => (c.x, -c.z),
    };
    Some((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texel_dirs_are_unit_length() {
        let d = 64;
        for face in CubeFaceId::all() {
            for i in (0..d).step_by(7) {
                for j in (0..d).step_by(7) {
                    let dir = texel_to_dir(face, i, j, d);
                    assert!(
                        (dir.length() - 1.0).abs() < 1e-5,
                        "({:?}, {}, {}) has length {}",
                        face,
                        i,
                        j,
                        dir.length()
                    );
                }
            }
        }
    }

    #[test]
    fn test_face_centers_are_face_normals() {
        let d = 2048;
        for face in CubeFaceId::all() {
            let dir = texel_to_dir(face, d / 2, d / 2, d);
            assert_eq!(dir, face.normal(), "center of {:?}", face);
        }
    }

    #[test]
    fn test_face_centers_form_orthogonal_frame() {
        let d = 256;
        let centers: Vec<Vec3> = CubeFaceId::all()
            .iter()
            .map(|&f| texel_to_dir(f, d / 2, d / 2, d))
            .collect();

        // Each axis direction appears exactly once.
        for axis in [Vec3::X, Vec3::Y, Vec3::Z, -Vec3::X, -Vec3::Y, -Vec3::Z] {
            let count = centers.iter().filter(|&&c| c == axis).count();
            assert_eq!(count, 1, "axis {:?} appears {} times", axis, count);
        }

        // Distinct centers are either orthogonal or opposite.
        for a in 0..6 {
            for b in (a + 1)..6 {
                let dot = centers[a].dot(centers[b]);
                assert!(dot.abs() < 1e-6 || (dot + 1.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_dir_to_face_coords_roundtrip() {
        for face in CubeFaceId::all() {
            for &a in &[-0.4, -0.2, 0.0, 0.2, 0.4] {
                for &b in &[-0.4, -0.2, 0.0, 0.2, 0.4] {
                    let dir = face_cube_point(face, a, b).normalize();
                    let (ra, rb) = dir_to_face_coords(face, dir).unwrap();
                    assert!(
                        (ra - a).abs() < 1e-5 && (rb - b).abs() < 1e-5,
                        "{:?}: ({}, {}) roundtripped to ({}, {})",
                        face,
                        a,
                        b,
                        ra,
                        rb
                    );
                }
            }
        }
    }

    #[test]
    fn test_dir_to_face_coords_rejects_back_hemisphere() {
        for face in CubeFaceId::all() {
            assert!(dir_to_face_coords(face, -face.normal()).is_none());
        }
    }
}
