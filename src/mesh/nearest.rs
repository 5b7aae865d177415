//! Per-face nearest-vertex lookup.

use glam::Vec3;

use super::sphere::SphereMesh;
use crate::geometry::{dir_to_face_coords, CubeFaceId};

/// Finds the mesh vertex nearest to `dir` among the vertices of one face.
///
/// `dir` must be a unit direction. The search is restricted to the given
/// face's own vertex grid, so directions near a cube edge never resolve to a
/// neighboring face's vertices. The direction is projected back onto the
/// face plane, snapped to the closest grid position, and refined over the
/// surrounding 3×3 grid neighborhood by squared chord distance. Equidistant
/// candidates resolve to the lowest vertex index, making the lookup fully
/// deterministic.
///
/// Returns `None` when the direction cannot be projected onto the face
/// (no positive component along the face normal). For a fully built mesh
/// this does not happen for directions generated from that face's texels.
pub fn nearest_face_vertex(mesh: &SphereMesh, face: CubeFaceId, dir: Vec3) -> Option<u32> {
    let (a, b) = dir_to_face_coords(face, dir)?;

    let s = mesh.subdivision();
    let gi = snap_to_grid(a, s);
    let gj = snap_to_grid(b, s);

    let mut best: Option<(f32, u32)> = None;
    for ni in neighborhood(gi, s) {
        for nj in neighborhood(gj, s) {
            let index = mesh.vertex_index(face, ni, nj);
            let position = mesh.vertices()[index as usize].position;
            let dist = (position - dir).length_squared();
            let closer = match best {
                None => true,
                // Strict comparison keeps the lowest index on ties because
                // the grid is scanned in index order.
                Some((best_dist, _)) => dist < best_dist,
            };
            if closer {
                best = Some((dist, index));
            }
        }
    }

    best.map(|(_, index)| index)
}

/// Maps a face-plane coordinate in [-0.5, 0.5] to the nearest grid row or
/// column, clamped to the face.
fn snap_to_grid(coord: f32, s: u32) -> u32 {
    let g = coord * s as f32 + (s / 2) as f32;
    (g.round().max(0.0) as u32).min(s)
}

fn neighborhood(g: u32, s: u32) -> std::ops::RangeInclusive<u32> {
    g.saturating_sub(1)..=(g + 1).min(s)
}
