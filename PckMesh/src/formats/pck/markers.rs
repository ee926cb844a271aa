//! Section marker table.
//!
//! Markers are 4 bytes where the third byte is a wildcard carrying the
//! section's record count. New variants are added here as data.

use super::types::{MarkerVariant, SectionKind};

/// Largest wildcard value accepted as a record count.
pub const MAX_SECTION_COUNT: u8 = 0x2A;

/// Length of every section marker.
pub const MARKER_LEN: usize = 4;

/// Index of the wildcard byte inside a marker.
pub const WILDCARD_INDEX: usize = 2;

/// A marker pattern; `bytes[WILDCARD_INDEX]` is ignored when matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMarker {
    pub bytes: [u8; MARKER_LEN],
    pub kind: SectionKind,
    pub variant: MarkerVariant,
}

impl SectionMarker {
    const fn new(b0: u8, b1: u8, b3: u8, kind: SectionKind, variant: MarkerVariant) -> Self {
        Self {
            bytes: [b0, b1, 0x00, b3],
            kind,
            variant,
        }
    }

    /// Match against a 4-byte window, returning the wildcard count on success.
    #[must_use]
    pub fn matches(&self, window: &[u8]) -> Option<u8> {
        if window.len() < MARKER_LEN {
            return None;
        }
        let fixed_equal = self
            .bytes
            .iter()
            .zip(window)
            .enumerate()
            .all(|(i, (m, w))| i == WILDCARD_INDEX || m == w);
        let count = window[WILDCARD_INDEX];
        (fixed_equal && count <= MAX_SECTION_COUNT).then_some(count)
    }

    /// Marker bytes with the wildcard filled in, as written to a file.
    #[must_use]
    pub fn with_count(&self, count: u8) -> [u8; MARKER_LEN] {
        let mut bytes = self.bytes;
        bytes[WILDCARD_INDEX] = count;
        bytes
    }
}

/// Every known marker.
pub static MARKERS: [SectionMarker; 6] = [
    SectionMarker::new(0xEE, 0x00, 0x69, SectionKind::Vertex, MarkerVariant::A),
    SectionMarker::new(0x1B, 0x02, 0x69, SectionKind::Vertex, MarkerVariant::B),
    SectionMarker::new(0xC4, 0x00, 0x65, SectionKind::Uv, MarkerVariant::A),
    SectionMarker::new(0xF1, 0x01, 0x65, SectionKind::Uv, MarkerVariant::B),
    SectionMarker::new(0x9A, 0x00, 0x6A, SectionKind::Face, MarkerVariant::A),
    SectionMarker::new(0xC7, 0x01, 0x6A, SectionKind::Face, MarkerVariant::B),
];

/// Look up the marker for a kind and variant.
#[must_use]
pub fn marker_for(kind: SectionKind, variant: MarkerVariant) -> &'static SectionMarker {
    MARKERS
        .iter()
        .find(|m| m.kind == kind && m.variant == variant)
        .unwrap_or_else(|| unreachable!("marker table covers every kind and variant"))
}
