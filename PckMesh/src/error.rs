//! Error types for `PckMesh`

use crate::formats::pck::SectionKind;
use thiserror::Error;

/// The error type for `PckMesh` operations.
///
/// Every parse error is terminal for the current parse: no partial
/// [`MeshCollection`](crate::mesh::MeshCollection) is produced.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== PCK Scanner Errors ====================
    /// Two markers of different section kinds matched the same offset.
    #[error("ambiguous marker at 0x{offset:X}: matches both {first} and {second}")]
    MarkerAmbiguous {
        /// Byte offset of the marker.
        offset: usize,
        /// First kind that matched.
        first: SectionKind,
        /// Second, conflicting kind.
        second: SectionKind,
    },

    /// The buffer ends before a section's fixed preamble is complete.
    #[error("truncated {kind} section at 0x{offset:X}: needs {needed} bytes, {available} available")]
    TruncatedSection {
        /// Kind of the truncated section.
        kind: SectionKind,
        /// Byte offset of the section marker.
        offset: usize,
        /// Bytes required by the preamble.
        needed: usize,
        /// Bytes left in the buffer.
        available: usize,
    },

    // ==================== PCK Decoder Errors ====================
    /// The bytes left for a short section do not form whole records.
    #[error("misaligned {kind} records at 0x{offset:X}: {available} bytes is not a multiple of {width}")]
    RecordMisaligned {
        /// Kind of the section being decoded.
        kind: SectionKind,
        /// Byte offset of the section marker.
        offset: usize,
        /// Record width in bytes.
        width: usize,
        /// Bytes left in the buffer.
        available: usize,
    },

    /// Fewer full records are present than the section header declares.
    #[error("{kind} section at 0x{offset:X} declares {declared} records but only {available} are present")]
    CountMismatch {
        /// Kind of the section being decoded.
        kind: SectionKind,
        /// Byte offset of the section marker.
        offset: usize,
        /// Records declared by the header.
        declared: usize,
        /// Full records actually present.
        available: usize,
    },

    // ==================== Reconciliation Errors ====================
    /// A face section appeared before any vertex section.
    #[error("face section at 0x{offset:X} precedes any vertex section")]
    DanglingFaceSection {
        /// Byte offset of the face section marker.
        offset: usize,
    },

    /// A face references a vertex or UV row outside its anchoring section.
    #[error("face in section at 0x{offset:X} references {kind} index {index}, but only {count} exist")]
    IndexOutOfRange {
        /// Kind of record being referenced ([`SectionKind::Vertex`] or [`SectionKind::Uv`]).
        kind: SectionKind,
        /// Byte offset of the face section marker.
        offset: usize,
        /// Offending local index.
        index: usize,
        /// Number of records in the anchoring section.
        count: usize,
    },

    // ==================== Configuration Errors ====================
    /// TOML configuration could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Error {
    /// Byte offset in the parsed buffer where the error occurred, if any.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::MarkerAmbiguous { offset, .. }
            | Error::TruncatedSection { offset, .. }
            | Error::RecordMisaligned { offset, .. }
            | Error::CountMismatch { offset, .. }
            | Error::DanglingFaceSection { offset }
            | Error::IndexOutOfRange { offset, .. } => Some(*offset),
            Error::Io(_) | Error::ConfigParse(_) | Error::JsonError(_) => None,
        }
    }

    /// Section kind that failed, if the error came from the parse pipeline.
    #[must_use]
    pub fn section_kind(&self) -> Option<SectionKind> {
        match self {
            Error::MarkerAmbiguous { first, .. } => Some(*first),
            Error::TruncatedSection { kind, .. }
            | Error::RecordMisaligned { kind, .. }
            | Error::CountMismatch { kind, .. } => Some(*kind),
            Error::DanglingFaceSection { .. } | Error::IndexOutOfRange { .. } => {
                Some(SectionKind::Face)
            }
            Error::Io(_) | Error::ConfigParse(_) | Error::JsonError(_) => None,
        }
    }
}

/// A specialized Result type for `PckMesh` operations.
pub type Result<T> = std::result::Result<T, Error>;
