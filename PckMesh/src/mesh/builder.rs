//! Assembles reconciled submeshes into a [`MeshCollection`].

use super::reconcile::Reconciler;
use super::{MeshCollection, MeshStats, Submesh};
use crate::error::Result;
use crate::formats::pck::DecodedSection;

/// Collects submeshes from a [`Reconciler`] and computes totals.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    reconciler: Reconciler,
    submeshes: Vec<Submesh>,
}

impl MeshBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next section in file order.
    ///
    /// # Errors
    /// Propagates reconciliation errors.
    pub fn push_section(&mut self, section: DecodedSection) -> Result<()> {
        if let Some(submesh) = self.reconciler.push(section)? {
            self.submeshes.push(submesh);
        }
        Ok(())
    }

    /// Finish the stream and freeze the collection.
    #[must_use]
    pub fn build(self) -> MeshCollection {
        let MeshBuilder {
            reconciler,
            mut submeshes,
        } = self;
        submeshes.extend(reconciler.finish());

        let mut totals = MeshStats::default();
        for submesh in &submeshes {
            totals += submesh.stats();
        }

        tracing::info!(
            "Built {} submeshes: {} vertices, {} UVs, {} active / {} inactive faces",
            submeshes.len(),
            totals.vertex_count,
            totals.uv_count,
            totals.active_face_count,
            totals.inactive_face_count
        );

        MeshCollection { submeshes, totals }
    }
}

/// Build a collection from a stream of decoded sections.
///
/// The first error aborts the build; no partial collection is returned.
///
/// # Errors
/// Returns the first scanner, decoder, or reconciliation error.
pub fn build_from_sections<I>(sections: I) -> Result<MeshCollection>
where
    I: IntoIterator<Item = Result<DecodedSection>>,
{
    let mut builder = MeshBuilder::new();
    for section in sections {
        builder.push_section(section?)?;
    }
    Ok(builder.build())
}
