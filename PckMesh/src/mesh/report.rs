//! Serializable summaries of a parsed collection.

use super::{Face, MeshCollection, MeshStats, Submesh};
use crate::error::Result;
use crate::formats::pck::{MarkerVariant, Section};
use serde::Serialize;

/// Summary of one submesh.
#[derive(Debug, Clone, Serialize)]
pub struct SubmeshReport {
    pub index: usize,
    pub variant: MarkerVariant,
    pub sections: Vec<Section>,
    /// Global vertex index range, end exclusive.
    pub vertex_range: [u32; 2],
    /// Global UV index range, end exclusive.
    pub uv_range: [u32; 2],
    pub stats: MeshStats,
    pub active_faces: Vec<[u32; 3]>,
    pub inactive_faces: Vec<[u32; 3]>,
}

impl SubmeshReport {
    #[must_use]
    pub fn from_submesh(submesh: &Submesh) -> Self {
        let corners = |faces: &[Face]| -> Vec<[u32; 3]> { faces.iter().map(|f| f.vertices).collect() };
        let vertices = submesh.vertex_range();
        let uvs = submesh.uv_range();

        Self {
            index: submesh.index(),
            variant: submesh.variant(),
            sections: submesh.sections().to_vec(),
            vertex_range: [vertices.start, vertices.end],
            uv_range: [uvs.start, uvs.end],
            stats: submesh.stats(),
            active_faces: corners(submesh.active_faces()),
            inactive_faces: corners(submesh.inactive_faces()),
        }
    }
}

/// Summary of a whole collection, suitable for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct MeshReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    pub submesh_count: usize,
    pub totals: MeshStats,
    pub submeshes: Vec<SubmeshReport>,
}

impl MeshReport {
    #[must_use]
    pub fn from_collection(collection: &MeshCollection) -> Self {
        Self {
            file_path: None,
            submesh_count: collection.len(),
            totals: collection.totals(),
            submeshes: collection
                .submeshes()
                .iter()
                .map(SubmeshReport::from_submesh)
                .collect(),
        }
    }

    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Raw bytes of `section` within the buffer it was parsed from.
#[must_use]
pub fn section_bytes<'a>(data: &'a [u8], section: &Section) -> &'a [u8] {
    data.get(section.offset..section.end()).unwrap_or_default()
}

/// Uppercase hex without separators.
#[must_use]
pub fn hex_string(bytes: &[u8]) -> String {
    use std::fmt::Write;

    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
        let _ = write!(out, "{b:02X}");
        out
    })
}
