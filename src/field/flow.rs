//! Flow map storage.

use glam::Vec2;

use crate::geometry::CubeFaceId;

/// A cubemap of tangent-space flow vectors, one per texel.
///
/// Six faces of `resolution`×`resolution` 2-float samples in face-major,
/// row-major order. Created zeroed, populated by the projection pass, then
/// handed to the PNG exporter.
#[derive(Debug, Clone)]
pub struct FlowMap {
    resolution: u32,
    data: Vec<Vec2>,
}

impl FlowMap {
    /// Creates a zero-filled flow map.
    pub fn new(resolution: u32) -> FlowMap {
        let d = resolution as usize;
        FlowMap {
            resolution,
            data: vec![Vec2::ZERO; 6 * d * d],
        }
    }

    /// Returns the per-face resolution.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Returns the flow sample at (face, row, col).
    pub fn get(&self, face: CubeFaceId, i: u32, j: u32) -> Vec2 {
        self.data[self.offset(face, i, j)]
    }

    /// Sets the flow sample at (face, row, col).
    pub fn set(&mut self, face: CubeFaceId, i: u32, j: u32, value: Vec2) {
        let offset = self.offset(face, i, j);
        self.data[offset] = value;
    }

    /// Returns one face's samples in row-major order.
    pub fn face_samples(&self, face: CubeFaceId) -> &[Vec2] {
        let d = self.resolution as usize;
        let start = face.index() * d * d;
        &self.data[start..start + d * d]
    }

    fn offset(&self, face: CubeFaceId, i: u32, j: u32) -> usize {
        let d = self.resolution as usize;
        face.index() * d * d + i as usize * d + j as usize
    }
}
