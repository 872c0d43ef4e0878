//! Room entity - a lettable room within a location

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Lifecycle, RoomNumber, Snowflake};

/// Denormalized availability flag stored on a room
///
/// This flag mirrors the stay ledger but is only brought in sync by explicit
/// recomputation; there is no trigger and no transaction linking the two
/// writes. Consumers that need the truth should go through the occupancy
/// resolver instead of trusting this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Availability {
    /// No current stay references this room
    #[default]
    Available = 0,
    /// A guest is currently checked in
    Booked = 1,
}

impl Availability {
    /// Get the numeric value used for storage
    #[inline]
    #[must_use]
    pub fn as_i16(self) -> i16 {
        self as i16
    }

    #[inline]
    #[must_use]
    pub fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl From<i16> for Availability {
    fn from(value: i16) -> Self {
        match value {
            1 => Self::Booked,
            _ => Self::Available, // Default for 0 and unknown values
        }
    }
}

impl From<Availability> for i16 {
    fn from(availability: Availability) -> Self {
        availability as i16
    }
}

/// Room entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: Snowflake,
    /// Unique within the location; also the soft-reference target of stays
    pub number: RoomNumber,
    pub location_id: Snowflake,
    pub remark: Option<String>,
    pub availability: Availability,
    pub lifecycle: Lifecycle,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Create a new active Room, available by default
    pub fn new(id: Snowflake, number: RoomNumber, location_id: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            id,
            number,
            location_id,
            remark: None,
            availability: Availability::Available,
            lifecycle: Lifecycle::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the free-text remark
    pub fn set_remark(&mut self, remark: Option<String>) {
        self.remark = remark;
        self.updated_at = Utc::now();
    }

    /// Overwrite the denormalized availability flag
    pub fn set_availability(&mut self, availability: Availability) {
        self.availability = availability;
        self.updated_at = Utc::now();
    }

    /// Mark the room deactivated
    pub fn deactivate(&mut self) {
        self.lifecycle = Lifecycle::Deactivated;
        self.updated_at = Utc::now();
    }
}
