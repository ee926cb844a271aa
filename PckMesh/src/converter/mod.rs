//! Format conversion utilities
//!
//! Conversions from parsed PCK meshes to interchange formats:
//! - PCK → OBJ (Wavefront) - vertices, UVs, and per-submesh face groups

pub mod pck_to_obj;

pub use pck_to_obj::{
    ObjExportOptions, convert_pck_to_obj, export_obj, to_obj, write_obj,
};
