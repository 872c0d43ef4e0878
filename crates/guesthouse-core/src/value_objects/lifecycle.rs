//! Lifecycle tag - explicit two-state soft-delete marker
//!
//! Every entity carries this tag instead of a bare boolean. Records are
//! deactivated, never removed from storage.

use serde::{Deserialize, Serialize};

/// Soft-delete lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Lifecycle {
    /// Record is live and visible to queries
    #[default]
    Active = 0,
    /// Record is soft-deleted; excluded from all standard reads
    Deactivated = 1,
}

impl Lifecycle {
    /// Get the numeric value used for storage
    #[inline]
    #[must_use]
    pub fn as_i16(self) -> i16 {
        self as i16
    }

    #[inline]
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl From<i16> for Lifecycle {
    fn from(value: i16) -> Self {
        match value {
            1 => Self::Deactivated,
            _ => Self::Active, // Default for 0 and unknown values
        }
    }
}

impl From<Lifecycle> for i16 {
    fn from(lifecycle: Lifecycle) -> Self {
        lifecycle as i16
    }
}
