//! Location entity - a named site grouping rooms

use chrono::{DateTime, Utc};

use crate::value_objects::{Lifecycle, Snowflake};

/// Location (site) entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: Snowflake,
    pub name: String,
    /// Short unique code (e.g. "HQ", "NORTH-2")
    pub code: String,
    pub lifecycle: Lifecycle,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Location {
    /// Create a new active Location
    pub fn new(id: Snowflake, name: String, code: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            code,
            lifecycle: Lifecycle::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the location name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Mark the location deactivated
    pub fn deactivate(&mut self) {
        self.lifecycle = Lifecycle::Deactivated;
        self.updated_at = Utc::now();
    }
}
