//! Local-to-global index reconciliation.
//!
//! Sections arrive in file order. Each vertex section opens a new submesh;
//! UV and face sections are folded into the submesh that is open when they
//! appear. Face indices are local to the nearest preceding vertex section
//! and the nearest preceding UV section of the same submesh.

use super::classify::{FaceState, classify};
use super::{Face, Submesh};
use crate::error::{Error, Result};
use crate::formats::pck::{DecodedSection, FaceRecord, Section, SectionData, SectionKind};

/// The UV section faces currently resolve against.
#[derive(Debug, Clone, Copy)]
struct UvAnchor {
    base: u32,
    count: usize,
}

/// Running reconciliation state.
#[derive(Debug, Default)]
pub struct Reconciler {
    vertex_total: u32,
    uv_total: u32,
    face_total: u32,
    open: Option<Submesh>,
    uv_anchor: Option<UvAnchor>,
    emitted: usize,
}

impl Reconciler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one section in.
    ///
    /// Returns the previous submesh once a vertex section closes it.
    ///
    /// # Errors
    /// Returns [`Error::DanglingFaceSection`] if no vertex section has been
    /// seen yet, and [`Error::IndexOutOfRange`] if a face points outside its
    /// anchoring sections. A UV section with no vertex section before it is
    /// skipped.
    pub fn push(&mut self, decoded: DecodedSection) -> Result<Option<Submesh>> {
        let DecodedSection { section, data } = decoded;

        match data {
            SectionData::Vertices(vertices) => {
                let closed = self.close();
                let count = vertices.len() as u32;
                self.open = Some(Submesh {
                    index: self.emitted,
                    sections: vec![section],
                    vertex_base: self.vertex_total,
                    vertices,
                    uv_base: self.uv_total,
                    uvs: Vec::new(),
                    face_base: self.face_total,
                    active_faces: Vec::new(),
                    inactive_faces: Vec::new(),
                });
                self.vertex_total += count;
                Ok(closed)
            }
            SectionData::Uvs(uvs) => {
                let Some(submesh) = self.open.as_mut() else {
                    tracing::warn!(
                        "Skipping UV section at 0x{:X}: no vertex section precedes it",
                        section.offset
                    );
                    return Ok(None);
                };
                self.uv_anchor = Some(UvAnchor {
                    base: self.uv_total,
                    count: uvs.len(),
                });
                self.uv_total += uvs.len() as u32;
                submesh.sections.push(section);
                submesh.uvs.extend(uvs);
                Ok(None)
            }
            SectionData::Faces(faces) => {
                self.fold_faces(section, &faces)?;
                Ok(None)
            }
        }
    }

    /// Close the open submesh, if any, at the end of the stream.
    pub fn finish(mut self) -> Option<Submesh> {
        self.close()
    }

    fn close(&mut self) -> Option<Submesh> {
        self.uv_anchor = None;
        let submesh = self.open.take()?;
        tracing::debug!(
            "Submesh {}: {} vertices, {} UVs, {} active / {} inactive faces",
            submesh.index,
            submesh.vertices.len(),
            submesh.uvs.len(),
            submesh.active_faces.len(),
            submesh.inactive_faces.len()
        );
        self.emitted += 1;
        Some(submesh)
    }

    fn fold_faces(&mut self, section: Section, faces: &[FaceRecord]) -> Result<()> {
        let submesh = self.open.as_mut().ok_or(Error::DanglingFaceSection {
            offset: section.offset,
        })?;

        let vertex_base = submesh.vertex_base;
        let vertex_count = submesh.vertices.len();

        for record in faces {
            let vertices = resolve(
                record.vertices.map(u32::from),
                vertex_base,
                vertex_count,
                SectionKind::Vertex,
                section.offset,
            )?;
            let uvs = match self.uv_anchor {
                Some(anchor) => Some(resolve(
                    record.uv_corners(),
                    anchor.base,
                    anchor.count,
                    SectionKind::Uv,
                    section.offset,
                )?),
                None => None,
            };

            let face = Face {
                index: self.face_total,
                vertices,
                uvs,
                flags: record.flags,
                state: classify(record),
            };
            self.face_total += 1;

            match face.state {
                FaceState::Active => submesh.active_faces.push(face),
                FaceState::Inactive => submesh.inactive_faces.push(face),
            }
        }

        submesh.sections.push(section);
        Ok(())
    }
}

/// Map three local rows to global indices, checking them against `count`.
fn resolve(
    local: [u32; 3],
    base: u32,
    count: usize,
    kind: SectionKind,
    offset: usize,
) -> Result<[u32; 3]> {
    let mut global = [0u32; 3];
    for (slot, &index) in global.iter_mut().zip(&local) {
        let index = index as usize;
        if index >= count {
            return Err(Error::IndexOutOfRange {
                kind,
                offset,
                index,
                count,
            });
        }
        *slot = base + index as u32;
    }
    Ok(global)
}
