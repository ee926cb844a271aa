//! Section record decoders.
//!
//! Each decoder receives the wildcard count from the marker and the bytes
//! that follow the marker, and returns the decoded records together with the
//! number of bytes it consumed (marker excluded).

use super::markers::MARKER_LEN;
use super::types::{FaceRecord, SectionKind, UvRecord, VertexRecord};
use crate::error::{Error, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

/// Bytes per vertex record (3 x i16).
pub const VERTEX_RECORD_SIZE: usize = 6;

/// Bytes per UV record (2 x i16).
pub const UV_RECORD_SIZE: usize = 4;

/// Bytes per face record (flags + 2 opaque bytes).
pub const FACE_RECORD_SIZE: usize = 3;

/// Bytes between a face marker and its first record.
pub const FACE_PREAMBLE_SIZE: usize = 6;

/// Decode `count` vertices from `body`.
///
/// `offset` is the marker's position in the file and is only used for errors.
///
/// # Errors
/// Returns [`Error::RecordMisaligned`] or [`Error::CountMismatch`] if `body`
/// is too short for `count` records.
pub fn decode_vertices(body: &[u8], count: usize, offset: usize) -> Result<(Vec<VertexRecord>, usize)> {
    let bytes = record_bytes(SectionKind::Vertex, offset, body, 0, count, VERTEX_RECORD_SIZE)?;
    let mut cursor = Cursor::new(bytes);
    let mut vertices = Vec::with_capacity(count);

    for _ in 0..count {
        let x = cursor.read_i16::<LittleEndian>()?;
        let y = cursor.read_i16::<LittleEndian>()?;
        let z = cursor.read_i16::<LittleEndian>()?;
        vertices.push(VertexRecord { x, y, z });
    }

    Ok((vertices, bytes.len()))
}

/// Decode `count` UV pairs from `body`.
///
/// # Errors
/// Returns [`Error::RecordMisaligned`] or [`Error::CountMismatch`] if `body`
/// is too short for `count` records.
pub fn decode_uvs(body: &[u8], count: usize, offset: usize) -> Result<(Vec<UvRecord>, usize)> {
    let bytes = record_bytes(SectionKind::Uv, offset, body, 0, count, UV_RECORD_SIZE)?;
    let mut cursor = Cursor::new(bytes);
    let mut uvs = Vec::with_capacity(count);

    for _ in 0..count {
        let u = cursor.read_i16::<LittleEndian>()?;
        let v = cursor.read_i16::<LittleEndian>()?;
        uvs.push(UvRecord { u, v });
    }

    Ok((uvs, bytes.len()))
}

/// Decode the face strip of a face section whose header count is `strip_len`.
///
/// A strip over `strip_len` vertices yields `strip_len - 2` triangles; face
/// `j` spans local vertices `j, j + 1, j + 2`.
///
/// # Errors
/// Returns [`Error::TruncatedSection`] if the 6-byte preamble does not fit,
/// or [`Error::RecordMisaligned`] / [`Error::CountMismatch`] if the records
/// do not.
pub fn decode_faces(body: &[u8], strip_len: usize, offset: usize) -> Result<(Vec<FaceRecord>, usize)> {
    let count = strip_len.saturating_sub(2);
    if count == 0 {
        tracing::warn!(
            "Face section at 0x{:X} declares a {}-vertex strip, no triangles",
            offset,
            strip_len
        );
    }

    let bytes = record_bytes(
        SectionKind::Face,
        offset,
        body,
        FACE_PREAMBLE_SIZE,
        count,
        FACE_RECORD_SIZE,
    )?;
    let mut cursor = Cursor::new(bytes);
    let mut faces = Vec::with_capacity(count);

    for j in 0..count {
        let flags = cursor.read_u8()?;
        let mut extra = [0u8; 2];
        cursor.read_exact(&mut extra)?;

        let first = j as u16;
        faces.push(FaceRecord {
            vertices: [first, first + 1, first + 2],
            uv: first,
            flags,
            extra,
        });
    }

    Ok((faces, FACE_PREAMBLE_SIZE + bytes.len()))
}

/// Slice out exactly `count` records of `width` bytes after a preamble.
fn record_bytes(
    kind: SectionKind,
    offset: usize,
    body: &[u8],
    preamble: usize,
    count: usize,
    width: usize,
) -> Result<&[u8]> {
    if body.len() < preamble {
        return Err(Error::TruncatedSection {
            kind,
            offset,
            needed: MARKER_LEN + preamble,
            available: MARKER_LEN + body.len(),
        });
    }

    let records = &body[preamble..];
    let needed = count * width;
    if records.len() < needed {
        if records.len() % width != 0 {
            return Err(Error::RecordMisaligned {
                kind,
                offset,
                width,
                available: records.len(),
            });
        }
        return Err(Error::CountMismatch {
            kind,
            offset,
            declared: count,
            available: records.len() / width,
        });
    }

    Ok(&records[..needed])
}
