//! PCK file reading and parsing

use super::scanner::scan;
use crate::error::Result;
use crate::mesh::{MeshCollection, build_from_sections};
use std::path::Path;

/// Read a PCK file from disk and parse its meshes.
///
/// The file is read fully into memory and released once parsing finishes.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, or any parse error from
/// [`parse_pck_bytes`].
///
/// [`Error::Io`]: crate::Error::Io
pub fn read_pck<P: AsRef<Path>>(path: P) -> Result<MeshCollection> {
    let path = path.as_ref();
    tracing::info!("Reading PCK: {}", path.display());
    let data = std::fs::read(path)?;
    parse_pck_bytes(&data)
}

/// Parse PCK data from bytes.
///
/// # Errors
///
/// Returns the first scanner, decoder, or reconciliation error. No partial
/// collection is returned on failure.
pub fn parse_pck_bytes(data: &[u8]) -> Result<MeshCollection> {
    tracing::debug!("Scanning {} bytes", data.len());
    build_from_sections(scan(data))
}
