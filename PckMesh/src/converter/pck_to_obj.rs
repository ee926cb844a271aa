//! PCK to Wavefront OBJ conversion

use crate::error::Result;
use crate::formats::pck::{self, VERTEX_SCALE};
use crate::mesh::{Face, MeshCollection};
use serde::Deserialize;
use std::fmt::Write;
use std::path::Path;

/// Options controlling OBJ output.
///
/// Also the `[export]` table of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ObjExportOptions {
    /// Also emit faces flagged inactive.
    pub include_inactive: bool,
    /// Divide vertex coordinates by 256.
    pub scale_vertices: bool,
    /// Prefix for the per-submesh `g` group names.
    pub group_prefix: String,
}

impl Default for ObjExportOptions {
    fn default() -> Self {
        Self {
            include_inactive: false,
            scale_vertices: false,
            group_prefix: "submesh".to_string(),
        }
    }
}

/// Convert a .pck file to an OBJ file
///
/// # Errors
/// Returns an error if the source cannot be read or parsed, or if the
/// destination cannot be written.
pub fn convert_pck_to_obj<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    dest: Q,
    options: &ObjExportOptions,
) -> Result<()> {
    tracing::info!("Converting PCK→OBJ: {:?} → {:?}", source.as_ref(), dest.as_ref());

    let collection = pck::read_pck(&source)?;
    write_obj(dest, &collection, options)?;

    tracing::info!("Conversion complete");
    Ok(())
}

/// Write a collection to disk as OBJ text.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_obj<P: AsRef<Path>>(
    dest: P,
    collection: &MeshCollection,
    options: &ObjExportOptions,
) -> Result<()> {
    std::fs::write(dest, export_obj(collection, options))?;
    Ok(())
}

/// OBJ text with default options apart from `include_inactive`.
#[must_use]
pub fn to_obj(collection: &MeshCollection, include_inactive: bool) -> String {
    let options = ObjExportOptions {
        include_inactive,
        ..ObjExportOptions::default()
    };
    export_obj(collection, &options)
}

/// Serialize a collection as OBJ text.
///
/// Vertices and UVs are written in global index order, then one `g` group
/// per submesh with its faces (active first, then inactive if requested).
/// Face indices are 1-based. The output depends only on the collection and
/// the options.
#[must_use]
pub fn export_obj(collection: &MeshCollection, options: &ObjExportOptions) -> String {
    let totals = collection.totals();
    let mut out = String::new();

    let _ = writeln!(out, "# pckmesh OBJ export");
    let _ = writeln!(
        out,
        "# {} vertices, {} uvs, {} faces",
        totals.vertex_count,
        totals.uv_count,
        totals.exported_face_count(options.include_inactive)
    );

    for v in collection.vertices() {
        if options.scale_vertices {
            let [x, y, z] = v.scaled(VERTEX_SCALE);
            let _ = writeln!(out, "v {x} {y} {z}");
        } else {
            let _ = writeln!(out, "v {} {} {}", v.x, v.y, v.z);
        }
    }

    for uv in collection.uvs() {
        let _ = writeln!(out, "vt {} {}", uv.u, uv.v);
    }

    for submesh in collection.submeshes() {
        let _ = writeln!(out, "g {}_{:03}", options.group_prefix, submesh.index());
        for face in submesh.faces(options.include_inactive) {
            write_face(&mut out, face);
        }
    }

    tracing::debug!("OBJ export: {} bytes", out.len());
    out
}

fn write_face(out: &mut String, face: &Face) {
    let [a, b, c] = face.vertices.map(|i| i + 1);
    match face.uvs.map(|uvs| uvs.map(|i| i + 1)) {
        Some([ta, tb, tc]) => {
            let _ = writeln!(out, "f {a}/{ta} {b}/{tb} {c}/{tc}");
        }
        None => {
            let _ = writeln!(out, "f {a} {b} {c}");
        }
    }
}
