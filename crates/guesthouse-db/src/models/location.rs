//! Location database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for locations table
#[derive(Debug, Clone, FromRow)]
pub struct LocationModel {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub lifecycle: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
