//! Velocity field loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use glam::Vec3;
use thiserror::Error;

use crate::geometry::CubeFaceId;

/// Errors that can occur while loading a velocity field.
#[derive(Error, Debug)]
pub enum FieldError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("velocity field size mismatch: expected {expected} bytes, found {actual}")]
    SizeMismatch { expected: u64, actual: u64 },
}

/// A cubemap of world-space velocity vectors, one per texel.
///
/// Six faces of `resolution`×`resolution` 3-float samples in face-major,
/// row-major order. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct VelocityField {
    resolution: u32,
    data: Vec<Vec3>,
}

impl VelocityField {
    /// Loads a velocity field from a raw binary dump.
    ///
    /// The file must be exactly `6 * resolution² * 3 * 4` bytes: no header,
    /// f32 samples in host-native byte order (the format is explicitly not
    /// endianness-portable). A file of any other size is rejected before
    /// reading. Interrupted reads are retried inside `read_exact`; any other
    /// I/O failure is fatal to the load.
    pub fn load(path: &Path, resolution: u32) -> Result<VelocityField, FieldError> {
        let expected = Self::file_size(resolution);
        let mut file = File::open(path)?;

        let actual = file.metadata()?.len();
        if actual != expected {
            return Err(FieldError::SizeMismatch { expected, actual });
        }

        let mut bytes = vec![0u8; expected as usize];
        file.read_exact(&mut bytes)?;

        // The byte buffer has no f32 alignment guarantee, so copy-cast.
        let floats: Vec<f32> = bytemuck::pod_collect_to_vec(&bytes);
        let data = floats
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect();

        Ok(VelocityField { resolution, data })
    }

    /// Builds a field from samples already in memory. Panics if the sample
    /// count does not match the resolution; intended for tests and synthetic
    /// inputs.
    pub fn from_samples(resolution: u32, data: Vec<Vec3>) -> VelocityField {
        assert_eq!(data.len(), Self::sample_count(resolution));
        VelocityField { resolution, data }
    }

    /// Expected file size in bytes for a given per-face resolution.
    pub fn file_size(resolution: u32) -> u64 {
        Self::sample_count(resolution) as u64 * 3 * 4
    }

    /// Total number of samples across all six faces.
    pub fn sample_count(resolution: u32) -> usize {
        6 * (resolution as usize) * (resolution as usize)
    }

    /// Returns the per-face resolution.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Returns the velocity sample at (face, row, col).
    pub fn sample(&self, face: CubeFaceId, i: u32, j: u32) -> Vec3 {
        let d = self.resolution as usize;
        self.data[face.index() * d * d + i as usize * d + j as usize]
    }
}
