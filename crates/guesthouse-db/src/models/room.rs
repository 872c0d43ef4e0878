//! Room database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for rooms table
#[derive(Debug, Clone, FromRow)]
pub struct RoomModel {
    pub id: i64,
    pub room_number: i32,
    pub location_id: i64,
    pub remark: Option<String>,
    pub availability: i16,
    pub lifecycle: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
