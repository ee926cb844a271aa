//! PCK section writing
//!
//! Produces buffers in the on-disk section layout, e.g. for building test
//! fixtures or trimmed sample files.

use super::decode::FACE_PREAMBLE_SIZE;
use super::markers::{MAX_SECTION_COUNT, marker_for};
use super::types::{MarkerVariant, SectionKind, UvRecord, VertexRecord};
use byteorder::{LittleEndian, WriteBytesExt};

/// Appends sections to an in-memory PCK buffer.
#[derive(Debug, Clone, Default)]
pub struct PckWriter {
    buffer: Vec<u8>,
}

impl PckWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append arbitrary bytes between sections.
    #[must_use]
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buffer.extend_from_slice(bytes);
        self
    }

    /// Append a vertex section.
    ///
    /// # Panics
    /// Panics if more than [`MAX_SECTION_COUNT`] vertices are given.
    #[must_use]
    pub fn vertices(mut self, variant: MarkerVariant, vertices: &[VertexRecord]) -> Self {
        self.marker(SectionKind::Vertex, variant, vertices.len());
        for v in vertices {
            self.put_i16(v.x);
            self.put_i16(v.y);
            self.put_i16(v.z);
        }
        self
    }

    /// Append a UV section.
    ///
    /// # Panics
    /// Panics if more than [`MAX_SECTION_COUNT`] UVs are given.
    #[must_use]
    pub fn uvs(mut self, variant: MarkerVariant, uvs: &[UvRecord]) -> Self {
        self.marker(SectionKind::Uv, variant, uvs.len());
        for uv in uvs {
            self.put_i16(uv.u);
            self.put_i16(uv.v);
        }
        self
    }

    /// Append a face strip over `flags.len() + 2` vertices, one flag byte per face.
    ///
    /// # Panics
    /// Panics if the strip is longer than [`MAX_SECTION_COUNT`].
    #[must_use]
    pub fn faces(mut self, variant: MarkerVariant, flags: &[u8]) -> Self {
        self.marker(SectionKind::Face, variant, flags.len() + 2);
        self.buffer.extend_from_slice(&[0u8; FACE_PREAMBLE_SIZE]);
        for &flag in flags {
            self.buffer.extend_from_slice(&[flag, 0, 0]);
        }
        self
    }

    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }

    fn marker(&mut self, kind: SectionKind, variant: MarkerVariant, count: usize) {
        assert!(
            count <= usize::from(MAX_SECTION_COUNT),
            "{kind} section of {count} records exceeds the marker limit"
        );
        let marker = marker_for(kind, variant);
        self.buffer.extend_from_slice(&marker.with_count(count as u8));
    }

    fn put_i16(&mut self, value: i16) {
        // Writing into a Vec cannot fail.
        let _ = self.buffer.write_i16::<LittleEndian>(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_section_layout() {
        let bytes = PckWriter::new()
            .vertices(MarkerVariant::B, &[VertexRecord::new(1, -2, 3)])
            .finish();
        assert_eq!(
            bytes,
            vec![0x1B, 0x02, 0x01, 0x69, 0x01, 0x00, 0xFE, 0xFF, 0x03, 0x00]
        );
    }

    #[test]
    fn test_face_section_layout() {
        let bytes = PckWriter::new().faces(MarkerVariant::A, &[0, 1]).finish();
        assert_eq!(&bytes[..4], &[0x9A, 0x00, 0x04, 0x6A]);
        assert_eq!(bytes.len(), 4 + FACE_PREAMBLE_SIZE + 6);
        assert_eq!(bytes[4 + FACE_PREAMBLE_SIZE + 3], 1);
    }
}
