//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 64, message = "Display name must be 1-64 characters"))]
    pub display_name: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update current user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 64, message = "Display name must be 1-64 characters"))]
    pub display_name: Option<String>,
}

/// Change password request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    pub current_password: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub new_password: String,
}

/// Admin-issued account creation request
///
/// Unlike self-registration, this path may assign a role. It is only
/// reachable through an admin-authenticated endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 64, message = "Display name must be 1-64 characters"))]
    pub display_name: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    /// Role tag: "admin" or "staff" (defaults to staff)
    pub role: Option<String>,
}

// ============================================================================
// Location Requests
// ============================================================================

/// Create location request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLocationRequest {
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 32, message = "Code must be 1-32 characters"))]
    pub code: String,
}

/// Update location request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateLocationRequest {
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub name: Option<String>,
}

// ============================================================================
// Room Requests
// ============================================================================

/// Create room request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoomRequest {
    #[validate(range(min = 1, message = "Room number must be positive"))]
    pub room_number: i32,

    #[validate(length(max = 1024, message = "Remark must be at most 1024 characters"))]
    pub remark: Option<String>,
}

/// Update room request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRoomRequest {
    #[validate(length(max = 1024, message = "Remark must be at most 1024 characters"))]
    pub remark: Option<String>,
}

// ============================================================================
// Stay Requests
// ============================================================================

/// Check-in request - opens a new stay record
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckInRequest {
    #[validate(length(min = 1, max = 128, message = "Guest name must be 1-128 characters"))]
    pub guest_name: String,

    #[validate(length(min = 1, max = 64, message = "ID number must be 1-64 characters"))]
    pub guest_id_number: String,

    #[validate(length(min = 1, max = 32, message = "ID type must be 1-32 characters"))]
    pub guest_id_type: String,

    pub guest_nationality: Option<String>,
    pub guest_contact: Option<String>,
    pub guest_company: Option<String>,
    pub guest_address: Option<String>,

    #[validate(range(min = 1, message = "Room number must be positive"))]
    pub room_number: i32,

    pub check_in_date: NaiveDate,
    pub check_in_time: NaiveTime,

    pub department: Option<String>,
    pub purpose: Option<String>,
}

/// Check-out request - closes a stay by setting both fields at once
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckOutRequest {
    pub check_out_date: NaiveDate,
    pub check_out_time: NaiveTime,
}

/// Stay correction request - all fields optional, applied over the record
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStayRequest {
    /// Move the stay to a different room
    #[validate(range(min = 1, message = "Room number must be positive"))]
    pub room_number: Option<i32>,

    pub check_in_date: Option<NaiveDate>,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_date: Option<NaiveDate>,
    pub check_out_time: Option<NaiveTime>,

    #[validate(length(min = 1, max = 128, message = "Guest name must be 1-128 characters"))]
    pub guest_name: Option<String>,

    pub guest_nationality: Option<String>,
    pub guest_contact: Option<String>,
    pub guest_company: Option<String>,
    pub guest_address: Option<String>,
    pub department: Option<String>,
    pub purpose: Option<String>,
    pub mail_received: Option<bool>,
}

/// Query parameters for stay listings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StayListQuery {
    /// Only stays without a complete check-out pair
    #[serde(default)]
    pub current: bool,
    /// Only stays for this room number
    pub room: Option<i32>,
}
