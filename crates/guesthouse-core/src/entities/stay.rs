//! Stay entity - one guest's lodging record from check-in to check-out

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Lifecycle, RoomNumber, Snowflake};

/// Derived occupancy state of a stay
///
/// `CheckedIn` is the initial state; `CheckedOut` is terminal. A record is
/// never reused for a subsequent stay - a new record is created instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StayStatus {
    CheckedIn,
    CheckedOut,
}

impl StayStatus {
    /// Human-readable label used in listings
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CheckedIn => "Checked In",
            Self::CheckedOut => "Checked Out",
        }
    }
}

/// Guest identity fields captured at check-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestDetails {
    pub name: String,
    pub id_number: String,
    pub id_type: String,
    pub nationality: Option<String>,
    pub contact: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
}

/// Stay entity - a check-in/check-out ledger record
///
/// The room link is a soft reference by [`RoomNumber`], not a foreign key to
/// the room's surrogate id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stay {
    pub id: Snowflake,
    pub guest: GuestDetails,
    pub room_number: RoomNumber,
    pub check_in_date: NaiveDate,
    pub check_in_time: NaiveTime,
    pub check_out_date: Option<NaiveDate>,
    pub check_out_time: Option<NaiveTime>,
    pub department: Option<String>,
    pub purpose: Option<String>,
    pub mail_received: bool,
    pub lifecycle: Lifecycle,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Stay {
    /// Create a new checked-in stay
    #[allow(clippy::too_many_arguments)]
    pub fn check_in(
        id: Snowflake,
        guest: GuestDetails,
        room_number: RoomNumber,
        check_in_date: NaiveDate,
        check_in_time: NaiveTime,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            guest,
            room_number,
            check_in_date,
            check_in_time,
            check_out_date: None,
            check_out_time: None,
            department: None,
            purpose: None,
            mail_received: false,
            lifecycle: Lifecycle::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the guest has fully checked out
    ///
    /// Both halves of the check-out pair must be present. A partial checkout
    /// (date set without time, or vice versa) counts as still checked in;
    /// this mirrors the recorded source behavior and is deliberate.
    #[inline]
    #[must_use]
    pub fn is_checked_out(&self) -> bool {
        self.check_out_date.is_some() && self.check_out_time.is_some()
    }

    /// Derived status; total, never fails
    #[inline]
    #[must_use]
    pub fn status(&self) -> StayStatus {
        if self.is_checked_out() {
            StayStatus::CheckedOut
        } else {
            StayStatus::CheckedIn
        }
    }

    /// Length of the stay, defined only once checked out
    ///
    /// Computed as `(check_out_date + check_out_time) - (check_in_date +
    /// check_in_time)`. A check-out preceding the check-in yields a negative
    /// duration rather than an error; callers may observe and report it.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        let (out_date, out_time) = (self.check_out_date?, self.check_out_time?);
        let check_out = out_date.and_time(out_time);
        let check_in = self.check_in_date.and_time(self.check_in_time);
        Some(check_out - check_in)
    }

    /// Transition `CheckedIn` -> `CheckedOut` by setting both fields at once
    pub fn check_out(&mut self, date: NaiveDate, time: NaiveTime) {
        self.check_out_date = Some(date);
        self.check_out_time = Some(time);
        self.updated_at = Utc::now();
    }

    /// Mark the record deactivated
    pub fn deactivate(&mut self) {
        self.lifecycle = Lifecycle::Deactivated;
        self.updated_at = Utc::now();
    }
}
