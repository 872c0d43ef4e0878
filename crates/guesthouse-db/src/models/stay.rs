//! Stay database model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

/// Database model for stays table
///
/// The room link is the bare `room_number` column, not a foreign key to
/// `rooms.id`; the ledger outlives room reconfiguration.
#[derive(Debug, Clone, FromRow)]
pub struct StayModel {
    pub id: i64,
    pub guest_name: String,
    pub guest_id_number: String,
    pub guest_id_type: String,
    pub guest_nationality: Option<String>,
    pub guest_contact: Option<String>,
    pub guest_company: Option<String>,
    pub guest_address: Option<String>,
    pub room_number: i32,
    pub check_in_date: NaiveDate,
    pub check_in_time: NaiveTime,
    pub check_out_date: Option<NaiveDate>,
    pub check_out_time: Option<NaiveTime>,
    pub department: Option<String>,
    pub purpose: Option<String>,
    pub mail_received: bool,
    pub lifecycle: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StayModel {
    /// Check if both halves of the check-out pair are recorded
    #[inline]
    pub fn is_checked_out(&self) -> bool {
        self.check_out_date.is_some() && self.check_out_time.is_some()
    }
}
