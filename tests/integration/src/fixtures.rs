//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
///
/// Self-registration always yields a staff account; admin accounts come
/// from `CreateUserRequest` through an admin token.
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub display_name: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("teststaff{suffix}"),
            display_name: format!("Test Staff {suffix}"),
            password: "frontdesk1".to_string(),
        }
    }
}

/// Admin-issued account creation request
#[derive(Debug, Serialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub display_name: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl CreateUserRequest {
    pub fn unique_with_role(role: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testaccount{suffix}"),
            display_name: format!("Test Account {suffix}"),
            password: "frontdesk1".to_string(),
            role: Some(role.to_string()),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub role: String,
    pub created_at: String,
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Create location request
#[derive(Debug, Serialize)]
pub struct CreateLocationRequest {
    pub name: String,
    pub code: String,
}

impl CreateLocationRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test House {suffix}"),
            code: format!("TH{suffix}"),
        }
    }
}

/// Location response
#[derive(Debug, Deserialize)]
pub struct LocationResponse {
    pub id: String,
    pub name: String,
    pub code: String,
}

/// Create room request
#[derive(Debug, Serialize)]
pub struct CreateRoomRequest {
    pub room_number: i32,
    pub remark: Option<String>,
}

impl CreateRoomRequest {
    /// Room numbers stay below i32::MAX; the suffix counter keeps them unique
    /// across tests sharing a database.
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            room_number: 10_000 + suffix as i32,
            remark: None,
        }
    }
}

/// Room response
#[derive(Debug, Deserialize)]
pub struct RoomResponse {
    pub id: String,
    pub room_number: i32,
    pub location_id: String,
    pub availability: String,
}

/// Room status response
#[derive(Debug, Deserialize)]
pub struct RoomStatusResponse {
    pub room_number: i32,
    pub status: String,
}

/// Available rooms listing
#[derive(Debug, Deserialize)]
pub struct AvailabilityResponse {
    pub rooms: Vec<RoomResponse>,
    pub total: usize,
}

/// Reconcile response
#[derive(Debug, Deserialize)]
pub struct ReconcileResponse {
    pub corrected: usize,
}

/// Check-in request
#[derive(Debug, Serialize)]
pub struct CheckInRequest {
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
    pub check_in_date: String,
    pub check_in_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl CheckInRequest {
    pub fn for_room(room_number: i32) -> Self {
        let suffix = unique_suffix();
        Self {
            guest_name: format!("Guest {suffix}"),
            guest_id_number: format!("ID{suffix:08}"),
            guest_id_type: "passport".to_string(),
            guest_nationality: Some("KR".to_string()),
            guest_contact: None,
            guest_company: None,
            guest_address: None,
            room_number,
            check_in_date: "2026-08-01".to_string(),
            check_in_time: "14:00:00".to_string(),
            department: Some("Engineering".to_string()),
            purpose: Some("Business trip".to_string()),
        }
    }
}

/// Check-out request
#[derive(Debug, Serialize)]
pub struct CheckOutRequest {
    pub check_out_date: String,
    pub check_out_time: String,
}

impl CheckOutRequest {
    pub fn next_morning() -> Self {
        Self {
            check_out_date: "2026-08-02".to_string(),
            check_out_time: "10:00:00".to_string(),
        }
    }
}

/// Stay response
#[derive(Debug, Deserialize)]
pub struct StayResponse {
    pub id: String,
    pub guest_name: String,
    pub room_number: i32,
    pub check_in_date: String,
    pub check_in_time: String,
    pub check_out_date: Option<String>,
    pub check_out_time: Option<String>,
    pub mail_received: bool,
    pub status: String,
    pub duration_hours: Option<i64>,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
