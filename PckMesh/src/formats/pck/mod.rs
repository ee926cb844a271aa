//! PCK asset container format
//!
//! The container has no table of contents: vertex, UV, and face sections are
//! found by scanning for 4-byte markers whose third byte carries the section's
//! record count.
//!
//! | Section | Variant A     | Variant B     |
//! |---------|---------------|---------------|
//! | Vertex  | `EE 00 ?? 69` | `1B 02 ?? 69` |
//! | UV      | `C4 00 ?? 65` | `F1 01 ?? 65` |
//! | Face    | `9A 00 ?? 6A` | `C7 01 ?? 6A` |

pub mod decode;
pub mod markers;
mod reader;
pub mod scanner;
mod types;
mod writer;

pub use markers::{MARKERS, MAX_SECTION_COUNT, SectionMarker, marker_for};
pub use reader::{parse_pck_bytes, read_pck};
pub use scanner::{Scanner, scan};
pub use types::{
    DecodedSection, FaceRecord, MarkerVariant, Section, SectionData, SectionKind, UvRecord,
    VertexRecord,
};
pub use writer::PckWriter;

/// Divisor presentation layers apply to raw vertex coordinates.
pub const VERTEX_SCALE: f32 = 256.0;
