//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters. IDs travel
//! as strings in JSON and URLs to avoid precision loss in clients, so each
//! path struct parses its string form on demand.

use guesthouse_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as Snowflake
    pub fn user_id(&self) -> Result<Snowflake, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}

/// Path parameters with location_id
#[derive(Debug, serde::Deserialize)]
pub struct LocationIdPath {
    pub location_id: String,
}

impl LocationIdPath {
    /// Parse location_id as Snowflake
    pub fn location_id(&self) -> Result<Snowflake, ApiError> {
        self.location_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid location_id format"))
    }
}

/// Path parameters with room_id
#[derive(Debug, serde::Deserialize)]
pub struct RoomIdPath {
    pub room_id: String,
}

impl RoomIdPath {
    /// Parse room_id as Snowflake
    pub fn room_id(&self) -> Result<Snowflake, ApiError> {
        self.room_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid room_id format"))
    }
}

/// Path parameters with stay_id
#[derive(Debug, serde::Deserialize)]
pub struct StayIdPath {
    pub stay_id: String,
}

impl StayIdPath {
    /// Parse stay_id as Snowflake
    pub fn stay_id(&self) -> Result<Snowflake, ApiError> {
        self.stay_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid stay_id format"))
    }
}
