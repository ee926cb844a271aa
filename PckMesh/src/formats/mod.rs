//! File format handlers
//!
//! Currently the PCK asset container; see [`pck`].

pub mod pck;

// Re-export the main entry points for convenience
pub use pck::{parse_pck_bytes, read_pck};
