//! Reconciled mesh model.
//!
//! A [`MeshCollection`] is the read-only result of parsing one PCK buffer.
//! It is built once by [`MeshBuilder`] and never mutated afterwards; view
//! state such as visibility toggles or colors lives with the consumer.

mod builder;
mod classify;
mod reconcile;
pub mod report;

pub use builder::{MeshBuilder, build_from_sections};
pub use classify::{FaceState, INACTIVE_FLAG, classify};
pub use reconcile::Reconciler;
pub use report::{MeshReport, SubmeshReport};

use crate::formats::pck::{MarkerVariant, Section, UvRecord, VertexRecord};
use serde::Serialize;
use std::ops::Range;

/// A face with indices resolved to global vertex/UV slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// Global face index, in file order.
    pub index: u32,
    /// Global vertex indices of the three corners.
    pub vertices: [u32; 3],
    /// Global UV indices of the three corners, if the submesh has UVs.
    pub uvs: Option<[u32; 3]>,
    /// Raw flag byte from the face record.
    pub flags: u8,
    pub state: FaceState,
}

/// Vertex/UV/face counts of a submesh or a whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MeshStats {
    pub vertex_count: usize,
    pub uv_count: usize,
    pub active_face_count: usize,
    pub inactive_face_count: usize,
}

impl MeshStats {
    /// Active plus inactive faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.active_face_count + self.inactive_face_count
    }

    /// Faces an export includes for the given visibility setting.
    #[must_use]
    pub fn exported_face_count(&self, include_inactive: bool) -> usize {
        if include_inactive {
            self.face_count()
        } else {
            self.active_face_count
        }
    }
}

impl std::ops::AddAssign for MeshStats {
    fn add_assign(&mut self, rhs: Self) {
        self.vertex_count += rhs.vertex_count;
        self.uv_count += rhs.uv_count;
        self.active_face_count += rhs.active_face_count;
        self.inactive_face_count += rhs.inactive_face_count;
    }
}

/// One vertex group: a vertex section plus the UV and face sections that
/// follow it up to the next vertex section.
#[derive(Debug, Clone, PartialEq)]
pub struct Submesh {
    pub(crate) index: usize,
    pub(crate) sections: Vec<Section>,
    pub(crate) vertex_base: u32,
    pub(crate) vertices: Vec<VertexRecord>,
    pub(crate) uv_base: u32,
    pub(crate) uvs: Vec<UvRecord>,
    pub(crate) face_base: u32,
    pub(crate) active_faces: Vec<Face>,
    pub(crate) inactive_faces: Vec<Face>,
}

impl Submesh {
    /// Position of this submesh in the collection.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The anchoring vertex section.
    #[must_use]
    pub fn vertex_section(&self) -> &Section {
        &self.sections[0]
    }

    /// Marker variant of the anchoring vertex section.
    #[must_use]
    pub fn variant(&self) -> MarkerVariant {
        self.vertex_section().variant
    }

    /// Every section folded into this submesh, in file order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn vertices(&self) -> &[VertexRecord] {
        &self.vertices
    }

    #[must_use]
    pub fn uvs(&self) -> &[UvRecord] {
        &self.uvs
    }

    /// Global indices owned by this submesh's vertices.
    #[must_use]
    pub fn vertex_range(&self) -> Range<u32> {
        self.vertex_base..self.vertex_base + self.vertices.len() as u32
    }

    /// Global indices owned by this submesh's UVs.
    #[must_use]
    pub fn uv_range(&self) -> Range<u32> {
        self.uv_base..self.uv_base + self.uvs.len() as u32
    }

    /// Global index of this submesh's first face.
    #[must_use]
    pub fn face_base(&self) -> u32 {
        self.face_base
    }

    #[must_use]
    pub fn active_faces(&self) -> &[Face] {
        &self.active_faces
    }

    #[must_use]
    pub fn inactive_faces(&self) -> &[Face] {
        &self.inactive_faces
    }

    /// Active faces, followed by inactive faces when `include_inactive`.
    pub fn faces(&self, include_inactive: bool) -> impl Iterator<Item = &Face> {
        let inactive: &[Face] = if include_inactive {
            &self.inactive_faces
        } else {
            &[]
        };
        self.active_faces.iter().chain(inactive)
    }

    #[must_use]
    pub fn stats(&self) -> MeshStats {
        MeshStats {
            vertex_count: self.vertices.len(),
            uv_count: self.uvs.len(),
            active_face_count: self.active_faces.len(),
            inactive_face_count: self.inactive_faces.len(),
        }
    }
}

/// All submeshes parsed from one buffer, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshCollection {
    pub(crate) submeshes: Vec<Submesh>,
    pub(crate) totals: MeshStats,
}

impl MeshCollection {
    #[must_use]
    pub fn submeshes(&self) -> &[Submesh] {
        &self.submeshes
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Submesh> {
        self.submeshes.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.submeshes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.submeshes.is_empty()
    }

    /// Aggregate counts over every submesh.
    #[must_use]
    pub fn totals(&self) -> MeshStats {
        self.totals
    }

    /// Every vertex in global index order.
    pub fn vertices(&self) -> impl Iterator<Item = &VertexRecord> {
        self.submeshes.iter().flat_map(|s| s.vertices.iter())
    }

    /// Every UV in global index order.
    pub fn uvs(&self) -> impl Iterator<Item = &UvRecord> {
        self.submeshes.iter().flat_map(|s| s.uvs.iter())
    }
}
