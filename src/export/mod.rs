//! Export module for writing flow maps to disk.

mod png;

pub use png::{
    encode_flow_component, export_face_flow_png, export_flow_maps, PngExportError,
    PngExportOptions,
};
