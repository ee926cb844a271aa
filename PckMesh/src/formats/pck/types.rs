//! Record and section types shared by the scanner and decoders.

use serde::Serialize;
use std::fmt;

/// Semantic kind of a PCK section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Vertex,
    Uv,
    Face,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionKind::Vertex => "vertex",
            SectionKind::Uv => "UV",
            SectionKind::Face => "face",
        };
        f.write_str(name)
    }
}

/// Which of the two observed header byte sequences introduced a section.
///
/// Both variants decode identically; the variant is kept for reporting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MarkerVariant {
    A,
    B,
}

impl fmt::Display for MarkerVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerVariant::A => f.write_str("A"),
            MarkerVariant::B => f.write_str("B"),
        }
    }
}

/// Raw vertex position as stored in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VertexRecord {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl VertexRecord {
    #[must_use]
    pub fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Position divided by `scale`, as presentation layers display it.
    #[must_use]
    pub fn scaled(&self, scale: f32) -> [f32; 3] {
        [
            f32::from(self.x) / scale,
            f32::from(self.y) / scale,
            f32::from(self.z) / scale,
        ]
    }
}

/// Raw texture coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UvRecord {
    pub u: i16,
    pub v: i16,
}

impl UvRecord {
    #[must_use]
    pub fn new(u: i16, v: i16) -> Self {
        Self { u, v }
    }
}

/// One decoded face, still in section-local numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRecord {
    /// Local rows in the anchoring vertex section.
    pub vertices: [u16; 3],
    /// Local UV row of the first corner; the other corners follow it.
    pub uv: u16,
    /// First record byte, carrying the active/inactive flag bit.
    pub flags: u8,
    /// The two trailing record bytes, not interpreted.
    pub extra: [u8; 2],
}

impl FaceRecord {
    /// UV rows for the three corners, parallel to [`FaceRecord::vertices`].
    ///
    /// Widened so the corners after `uv` cannot wrap.
    #[must_use]
    pub fn uv_corners(&self) -> [u32; 3] {
        let first = u32::from(self.uv);
        [first, first + 1, first + 2]
    }
}

/// Location of a section within the parsed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub variant: MarkerVariant,
    /// Offset of the 4-byte marker.
    pub offset: usize,
    /// Number of records decoded.
    pub record_count: usize,
    /// Total bytes covered, marker included.
    pub byte_len: usize,
}

impl Section {
    /// Offset one past the last byte of the section.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.byte_len
    }
}

/// Records decoded from one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionData {
    Vertices(Vec<VertexRecord>),
    Uvs(Vec<UvRecord>),
    Faces(Vec<FaceRecord>),
}

impl SectionData {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            SectionData::Vertices(v) => v.len(),
            SectionData::Uvs(v) => v.len(),
            SectionData::Faces(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A section span together with its decoded records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSection {
    pub section: Section,
    pub data: SectionData,
}
