//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// User response as seen in admin listings
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Current authenticated user response
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Location Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LocationResponse {
    pub id: String,
    pub name: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Room Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RoomResponse {
    pub id: String,
    pub room_number: i32,
    pub location_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub availability: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Resolver verdict for a single room number
#[derive(Debug, Clone, Serialize)]
pub struct RoomStatusResponse {
    pub room_number: i32,
    pub status: String,
}

/// Available rooms listing computed by the resolver
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub rooms: Vec<RoomResponse>,
    pub total: usize,
}

impl AvailabilityResponse {
    pub fn new(rooms: Vec<RoomResponse>) -> Self {
        let total = rooms.len();
        Self { rooms, total }
    }
}

/// Result of reconciling denormalized availability flags with the ledger
#[derive(Debug, Clone, Serialize)]
pub struct ReconcileResponse {
    pub corrected: usize,
}

// ============================================================================
// Stay Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct StayResponse {
    pub id: String,
    pub guest_name: String,
    pub guest_id_number: String,
    pub guest_id_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_address: Option<String>,
    pub room_number: i32,
    pub check_in_date: NaiveDate,
    pub check_in_time: NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    pub mail_received: bool,
    /// "Checked In" or "Checked Out", derived from the check-out pair
    pub status: String,
    /// Whole hours of the completed stay, absent while checked in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
        }
    }
}
