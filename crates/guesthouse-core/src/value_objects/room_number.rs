//! Room number - the natural key linking stays to rooms
//!
//! A `Stay` references its `Room` by room number rather than by the room's
//! surrogate key. This is a soft reference: nothing stops a stay from
//! carrying a number no room has (see the orphan rules in
//! [`crate::occupancy`]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric room number, unique within a location
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct RoomNumber(i32);

impl RoomNumber {
    /// Create a new RoomNumber from a raw i32 value
    #[inline]
    pub const fn new(number: i32) -> Self {
        Self(number)
    }

    /// Get the inner i32 value
    #[inline]
    pub const fn into_inner(self) -> i32 {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, RoomNumberParseError> {
        s.parse::<i32>()
            .map(RoomNumber)
            .map_err(|_| RoomNumberParseError::InvalidFormat)
    }
}

/// Error when parsing a RoomNumber from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RoomNumberParseError {
    #[error("invalid room number format")]
    InvalidFormat,
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for RoomNumber {
    fn from(number: i32) -> Self {
        Self(number)
    }
}

impl From<RoomNumber> for i32 {
    fn from(number: RoomNumber) -> Self {
        number.0
    }
}

impl std::str::FromStr for RoomNumber {
    type Err = RoomNumberParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomNumber::parse(s)
    }
}
