//! Linear marker scanner over a PCK buffer.

use super::decode::{decode_faces, decode_uvs, decode_vertices};
use super::markers::{MARKER_LEN, MARKERS, SectionMarker};
use super::types::{DecodedSection, Section, SectionData, SectionKind};
use crate::error::{Error, Result};
use std::iter::FusedIterator;

/// Lazily scan `data` for sections, in ascending offset order.
#[must_use]
pub fn scan(data: &[u8]) -> Scanner<'_> {
    Scanner::new(data)
}

/// Iterator over the sections of a PCK buffer.
///
/// Record data of a matched section is never searched for markers: scanning
/// resumes at the end offset reported by the section's decoder. The iterator
/// stops after the first error.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    data: &'a [u8],
    markers: &'a [SectionMarker],
    pos: usize,
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Scan with the built-in [`MARKERS`] table.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_markers(data, &MARKERS)
    }

    /// Scan with a custom marker table.
    ///
    /// A window matched by markers of two different kinds fails with
    /// [`Error::MarkerAmbiguous`].
    #[must_use]
    pub fn with_markers(data: &'a [u8], markers: &'a [SectionMarker]) -> Self {
        Self {
            data,
            markers,
            pos: 0,
            finished: false,
        }
    }

    /// Current scan position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    fn decode_at(&self, marker: &SectionMarker, count: u8) -> Result<DecodedSection> {
        let offset = self.pos;
        let body = &self.data[offset + MARKER_LEN..];
        let count = usize::from(count);

        let (data, consumed) = match marker.kind {
            SectionKind::Vertex => {
                let (records, consumed) = decode_vertices(body, count, offset)?;
                (SectionData::Vertices(records), consumed)
            }
            SectionKind::Uv => {
                let (records, consumed) = decode_uvs(body, count, offset)?;
                (SectionData::Uvs(records), consumed)
            }
            SectionKind::Face => {
                let (records, consumed) = decode_faces(body, count, offset)?;
                (SectionData::Faces(records), consumed)
            }
        };

        let section = Section {
            kind: marker.kind,
            variant: marker.variant,
            offset,
            record_count: data.len(),
            byte_len: MARKER_LEN + consumed,
        };
        tracing::debug!(
            "{} section ({}) at 0x{:X}: {} records, {} bytes",
            section.kind,
            section.variant,
            section.offset,
            section.record_count,
            section.byte_len
        );

        Ok(DecodedSection { section, data })
    }
}

/// Find the marker in `table` matching `window`, rejecting windows claimed
/// by two kinds.
fn match_marker<'t>(
    table: &'t [SectionMarker],
    window: &[u8],
    offset: usize,
) -> Result<Option<(&'t SectionMarker, u8)>> {
    let mut found: Option<(&'t SectionMarker, u8)> = None;

    for marker in table {
        let Some(count) = marker.matches(window) else {
            continue;
        };
        match found {
            None => found = Some((marker, count)),
            Some((first, _)) if first.kind != marker.kind => {
                return Err(Error::MarkerAmbiguous {
                    offset,
                    first: first.kind,
                    second: marker.kind,
                });
            }
            Some(_) => {}
        }
    }

    Ok(found)
}

impl Iterator for Scanner<'_> {
    type Item = Result<DecodedSection>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while self.pos + MARKER_LEN <= self.data.len() {
            let window = &self.data[self.pos..self.pos + MARKER_LEN];
            let matched = match match_marker(self.markers, window, self.pos) {
                Ok(matched) => matched,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            };

            let Some((marker, count)) = matched else {
                self.pos += 1;
                continue;
            };

            return match self.decode_at(marker, count) {
                Ok(decoded) => {
                    self.pos = decoded.section.end();
                    Some(Ok(decoded))
                }
                Err(e) => {
                    self.finished = true;
                    Some(Err(e))
                }
            };
        }

        self.finished = true;
        None
    }
}

impl FusedIterator for Scanner<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::pck::decode::FACE_PREAMBLE_SIZE;
    use crate::formats::pck::types::MarkerVariant;

    #[test]
    fn test_finds_sections_between_noise() {
        let mut data = vec![0x00, 0x12, 0x34];
        data.extend_from_slice(&[0xEE, 0x00, 0x01, 0x69, 1, 0, 2, 0, 3, 0]);
        data.extend_from_slice(&[0x55, 0x66]);
        data.extend_from_slice(&[0xF1, 0x01, 0x01, 0x65, 9, 0, 8, 0]);

        let sections: Vec<_> = scan(&data).collect::<Result<_>>().unwrap();
        assert_eq!(sections.len(), 2);

        assert_eq!(sections[0].section.kind, SectionKind::Vertex);
        assert_eq!(sections[0].section.variant, MarkerVariant::A);
        assert_eq!(sections[0].section.offset, 3);
        assert_eq!(sections[0].section.byte_len, 10);

        assert_eq!(sections[1].section.kind, SectionKind::Uv);
        assert_eq!(sections[1].section.variant, MarkerVariant::B);
        assert_eq!(sections[1].section.offset, 15);
    }

    #[test]
    fn test_record_bytes_are_not_rescanned() {
        // The vertex payload contains a UV marker that must be skipped.
        let mut data = vec![0xEE, 0x00, 0x01, 0x69];
        data.extend_from_slice(&[0xC4, 0x00, 0x01, 0x65, 0x00, 0x00]);
        let sections: Vec<_> = scan(&data).collect::<Result<_>>().unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section.kind, SectionKind::Vertex);
    }

    #[test]
    fn test_face_section_consumes_preamble() {
        let mut data = vec![0x9A, 0x00, 0x03, 0x6A];
        data.extend_from_slice(&[0u8; FACE_PREAMBLE_SIZE]);
        data.extend_from_slice(&[0x01, 0x00, 0x00]);
        let sections: Vec<_> = scan(&data).collect::<Result<_>>().unwrap();
        assert_eq!(sections[0].section.byte_len, 4 + FACE_PREAMBLE_SIZE + 3);
        assert_eq!(sections[0].section.record_count, 1);
    }

    #[test]
    fn test_scanner_stops_after_error() {
        let data = [0xEE, 0x00, 0x05, 0x69, 0, 0, 0, 0, 0, 0];
        let mut scanner = scan(&data);
        assert!(matches!(scanner.next(), Some(Err(Error::CountMismatch { .. }))));
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_position_follows_section_end() {
        let mut data = vec![0x00, 0x00];
        data.extend_from_slice(&[0xC4, 0x00, 0x02, 0x65, 1, 0, 2, 0, 3, 0, 4, 0]);
        data.push(0xFF);

        let mut scanner = scan(&data);
        assert_eq!(scanner.position(), 0);
        scanner.next().unwrap().unwrap();
        assert_eq!(scanner.position(), 14);
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_window_claimed_by_two_kinds_is_ambiguous() {
        let table = [
            SectionMarker {
                bytes: [0xAA, 0xBB, 0x00, 0xCC],
                kind: SectionKind::Vertex,
                variant: MarkerVariant::A,
            },
            SectionMarker {
                bytes: [0xAA, 0xBB, 0x00, 0xCC],
                kind: SectionKind::Uv,
                variant: MarkerVariant::B,
            },
        ];
        let data = [0x01, 0x02, 0xAA, 0xBB, 0x01, 0xCC, 0, 0, 0, 0, 0, 0];

        let mut scanner = Scanner::with_markers(&data, &table);
        assert!(matches!(
            scanner.next(),
            Some(Err(Error::MarkerAmbiguous {
                offset: 2,
                first: SectionKind::Vertex,
                second: SectionKind::Uv,
            }))
        ));
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_same_kind_variants_are_not_ambiguous() {
        let table = [
            SectionMarker {
                bytes: [0xAA, 0xBB, 0x00, 0xCC],
                kind: SectionKind::Uv,
                variant: MarkerVariant::A,
            },
            SectionMarker {
                bytes: [0xAA, 0xBB, 0x00, 0xCC],
                kind: SectionKind::Uv,
                variant: MarkerVariant::B,
            },
        ];
        let data = [0xAA, 0xBB, 0x01, 0xCC, 5, 0, 6, 0];

        let sections: Vec<_> = Scanner::with_markers(&data, &table)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section.variant, MarkerVariant::A);
    }

    #[test]
    fn test_empty_buffer_has_no_sections() {
        assert_eq!(scan(&[]).count(), 0);
        assert_eq!(scan(&[0xEE, 0x00, 0x01]).count(), 0);
    }
}
