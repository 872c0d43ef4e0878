//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{RoomNumber, Snowflake};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Location not found: {0}")]
    LocationNotFound(Snowflake),

    #[error("Room not found: {0}")]
    RoomNotFound(Snowflake),

    #[error("No room with number {0}")]
    RoomNumberNotFound(RoomNumber),

    #[error("Stay not found: {0}")]
    StayNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Administrator role required")]
    AdminRequired,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already in use")]
    UsernameAlreadyExists,

    #[error("Location code already in use")]
    LocationCodeExists,

    #[error("Room number already exists in this location")]
    RoomNumberExists,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Room {0} is currently occupied")]
    RoomOccupied(RoomNumber),

    #[error("Stay is already checked out")]
    AlreadyCheckedOut,

    #[error("Room is deactivated")]
    RoomDeactivated,

    #[error("Location is deactivated")]
    LocationDeactivated,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::LocationNotFound(_) => "UNKNOWN_LOCATION",
            Self::RoomNotFound(_) => "UNKNOWN_ROOM",
            Self::RoomNumberNotFound(_) => "UNKNOWN_ROOM_NUMBER",
            Self::StayNotFound(_) => "UNKNOWN_STAY",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::WeakPassword(_) => "WEAK_PASSWORD",

            // Authorization
            Self::AdminRequired => "ADMIN_REQUIRED",

            // Conflict
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::LocationCodeExists => "LOCATION_CODE_EXISTS",
            Self::RoomNumberExists => "ROOM_NUMBER_EXISTS",

            // Business Rules
            Self::RoomOccupied(_) => "ROOM_OCCUPIED",
            Self::AlreadyCheckedOut => "ALREADY_CHECKED_OUT",
            Self::RoomDeactivated => "ROOM_DEACTIVATED",
            Self::LocationDeactivated => "LOCATION_DEACTIVATED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::LocationNotFound(_)
                | Self::RoomNotFound(_)
                | Self::RoomNumberNotFound(_)
                | Self::StayNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidUsername(_) | Self::WeakPassword(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::AdminRequired)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameAlreadyExists
                | Self::LocationCodeExists
                | Self::RoomNumberExists
                | Self::RoomOccupied(_)
                | Self::AlreadyCheckedOut
        )
    }
}
