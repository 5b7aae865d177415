//! PNG export for flow maps.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageBuffer, ImageEncoder, Rgba};
use thiserror::Error;

use crate::field::FlowMap;
use crate::geometry::CubeFaceId;

/// Errors that can occur during PNG export.
#[derive(Error, Debug)]
pub enum PngExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Options for PNG export.
#[derive(Debug, Clone)]
pub struct PngExportOptions {
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngExportOptions {
    fn default() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

/// Packs one flow component from the canonical [-1, 1] range into a byte.
///
/// The mapping is `round(255 * (0.5 * component + 0.5))`, so 0.0 encodes to
/// 128, 1.0 to 255 and -1.0 to 0. Out-of-range components clamp.
pub fn encode_flow_component(component: f32) -> u8 {
    ((0.5 * component + 0.5) * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Exports a single face of a flow map as an 8-bit RGBA PNG.
///
/// The x component lands in the red channel and the y component in green;
/// blue is zero and alpha fully opaque.
pub fn export_face_flow_png(
    flow: &FlowMap,
    face: CubeFaceId,
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), PngExportError> {
    let resolution = flow.resolution();
    let samples = flow.face_samples(face);

    let mut img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::new(resolution, resolution);
    for y in 0..resolution {
        for x in 0..resolution {
            let v = samples[(y * resolution + x) as usize];
            let r = encode_flow_component(v.x);
            let g = encode_flow_component(v.y);
            img.put_pixel(x, y, Rgba([r, g, 0, 255]));
        }
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
    encoder.write_image(
        img.as_raw(),
        resolution,
        resolution,
        image::ExtendedColorType::Rgba8,
    )?;

    Ok(())
}

/// Exports all six faces of a flow map as individual PNG files.
///
/// Files are named using the pattern: `{base_name}_{face_name}.png`
/// For example: `flow_front.png`, `flow_bottom.png`, etc.
///
/// A face that fails to write is reported on stderr and the remaining faces
/// are still attempted. Returns the number of faces that failed; creating
/// the output directory is the only fatal error.
pub fn export_flow_maps(
    flow: &FlowMap,
    output_dir: &Path,
    base_name: &str,
    options: &PngExportOptions,
) -> Result<usize, PngExportError> {
    std::fs::create_dir_all(output_dir)?;

    let mut failures = 0;
    for face in CubeFaceId::all() {
        let filename = format!("{}_{}.png", base_name, face.short_name());
        let path = output_dir.join(filename);
        if let Err(e) = export_face_flow_png(flow, face, &path, options) {
            eprintln!("error writing {}: {}", path.display(), e);
            failures += 1;
        }
    }

    Ok(failures)
}
