//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs and the infrastructure layer
//! provides the implementation. All standard reads return active records
//! only; `delete` means soft delete (lifecycle flip), never row removal.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use crate::entities::{Availability, Location, Room, Stay, User};
use crate::error::DomainError;
use crate::value_objects::{RoomNumber, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if a username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// List all active users
    async fn find_all(&self) -> RepoResult<Vec<User>>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Soft delete a user
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: Snowflake, password_hash: &str) -> RepoResult<()>;
}

// ============================================================================
// Location Repository
// ============================================================================

#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Find location by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Location>>;

    /// Find location by its unique code
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Location>>;

    /// List all active locations
    async fn find_all(&self) -> RepoResult<Vec<Location>>;

    /// Create a new location
    async fn create(&self, location: &Location) -> RepoResult<()>;

    /// Update an existing location
    async fn update(&self, location: &Location) -> RepoResult<()>;

    /// Soft delete a location
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Room Repository
// ============================================================================

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find room by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Room>>;

    /// Find an active room by its number
    ///
    /// Room numbers are unique per location but the stay ledger references
    /// them globally; when the same number exists in several locations this
    /// returns the first match.
    async fn find_by_number(&self, number: RoomNumber) -> RepoResult<Option<Room>>;

    /// List all active rooms
    async fn find_all(&self) -> RepoResult<Vec<Room>>;

    /// List all active rooms in a location
    async fn find_by_location(&self, location_id: Snowflake) -> RepoResult<Vec<Room>>;

    /// Create a new room
    async fn create(&self, room: &Room) -> RepoResult<()>;

    /// Update an existing room
    async fn update(&self, room: &Room) -> RepoResult<()>;

    /// Overwrite the denormalized availability flag
    async fn set_availability(&self, id: Snowflake, availability: Availability) -> RepoResult<()>;

    /// Soft delete a room
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Stay Repository
// ============================================================================

/// Filter options for stay listings
#[derive(Debug, Clone, Default)]
pub struct StayFilter {
    /// Only stays with no check-out pair (guest still resident)
    pub current_only: bool,
    /// Only stays referencing this room number
    pub room_number: Option<RoomNumber>,
}

#[async_trait]
pub trait StayRepository: Send + Sync {
    /// Find stay by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Stay>>;

    /// List active stays matching the filter, newest check-in first
    async fn find_all(&self, filter: StayFilter) -> RepoResult<Vec<Stay>>;

    /// Create a new stay (check-in)
    async fn create(&self, stay: &Stay) -> RepoResult<()>;

    /// Update an existing stay (corrections)
    async fn update(&self, stay: &Stay) -> RepoResult<()>;

    /// Set both check-out fields in a single update
    async fn check_out(
        &self,
        id: Snowflake,
        date: NaiveDate,
        time: NaiveTime,
    ) -> RepoResult<()>;

    /// Soft delete a stay
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}
