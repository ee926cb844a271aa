//! Active/inactive face classification.

use crate::formats::pck::FaceRecord;
use serde::Serialize;

/// Bit of [`FaceRecord::flags`] that marks a face as inactive.
pub const INACTIVE_FLAG: u8 = 0x01;

/// Render state of a face.
///
/// Active faces are the default render/export set; inactive faces are
/// normally hidden and only shown or exported on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceState {
    Active,
    Inactive,
}

impl FaceState {
    #[must_use]
    pub fn is_active(self) -> bool {
        self == FaceState::Active
    }
}

/// Classify a face from its flag byte: set bit means inactive.
#[must_use]
pub fn classify(face: &FaceRecord) -> FaceState {
    if face.flags & INACTIVE_FLAG == 0 {
        FaceState::Active
    } else {
        FaceState::Inactive
    }
}
