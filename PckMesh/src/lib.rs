//! # PckMesh
//!
//! A pure-Rust library for extracting meshes from PCK asset containers.
//!
//! PCK files carry no table of contents. Vertex, UV, and face sections are
//! located by scanning for marker bytes, decoded into typed records, and
//! reconciled into submeshes whose faces use file-wide (global) indices.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pckmesh::formats::pck::read_pck;
//! use pckmesh::converter::to_obj;
//!
//! let meshes = read_pck("car.pck")?;
//! println!("Found {} vertex groups", meshes.len());
//!
//! // Active faces only
//! let obj = to_obj(&meshes, false);
//! std::fs::write("car.obj", obj)?;
//! # Ok::<(), pckmesh::Error>(())
//! ```
//!
//! ### Using the Prelude
//!
//! ```
//! use pckmesh::prelude::*;
//!
//! let data = PckWriter::new()
//!     .vertices(MarkerVariant::A, &[VertexRecord::new(0, 0, 0); 3])
//!     .faces(MarkerVariant::A, &[0])
//!     .finish();
//! let meshes = parse_pck_bytes(&data)?;
//! assert_eq!(meshes.totals().active_face_count, 1);
//! # Ok::<(), pckmesh::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `pckmesh` command-line binary

pub mod config;
pub mod converter;
pub mod error;
pub mod formats;
pub mod mesh;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::Settings;
    pub use crate::converter::{ObjExportOptions, export_obj, to_obj};
    pub use crate::error::{Error, Result};
    pub use crate::formats::pck::{
        MarkerVariant, PckWriter, Section, SectionKind, UvRecord, VertexRecord, parse_pck_bytes,
        read_pck, scan,
    };
    pub use crate::mesh::{
        Face, FaceState, MeshCollection, MeshReport, MeshStats, Submesh, classify,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
