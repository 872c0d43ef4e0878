//! User entity - a staff account operating the guest house

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Lifecycle, Snowflake};

/// Staff role determining what an account may see and manage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum UserRole {
    /// Manages users, locations, and rooms
    Admin = 0,
    /// Performs check-ins/check-outs and reads
    #[default]
    Staff = 1,
}

impl UserRole {
    /// Get the numeric value used for storage
    #[inline]
    #[must_use]
    pub fn as_i16(self) -> i16 {
        self as i16
    }

    #[inline]
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl From<i16> for UserRole {
    fn from(value: i16) -> Self {
        match value {
            0 => Self::Admin,
            _ => Self::Staff, // Default for 1 and unknown values
        }
    }
}

impl From<UserRole> for i16 {
    fn from(role: UserRole) -> Self {
        role as i16
    }
}

/// User entity representing a staff account
///
/// The password hash is not part of the entity; it lives only in the
/// persistence layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub display_name: String,
    pub role: UserRole,
    pub lifecycle: Lifecycle,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active User with required fields
    pub fn new(id: Snowflake, username: String, display_name: String, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            display_name,
            role,
            lifecycle: Lifecycle::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this account may manage users, locations, and rooms
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Update the display name
    pub fn set_display_name(&mut self, display_name: String) {
        self.display_name = display_name;
        self.updated_at = Utc::now();
    }

    /// Change the role
    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
        self.updated_at = Utc::now();
    }

    /// Mark the account deactivated
    pub fn deactivate(&mut self) {
        self.lifecycle = Lifecycle::Deactivated;
        self.updated_at = Utc::now();
    }
}
