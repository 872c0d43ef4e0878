//! Stay entity <-> model mapper

use chrono::{NaiveDate, NaiveTime};
use guesthouse_core::entities::{GuestDetails, Stay};
use guesthouse_core::value_objects::{Lifecycle, RoomNumber, Snowflake};

use crate::models::StayModel;

/// Convert StayModel to Stay entity
impl From<StayModel> for Stay {
    fn from(model: StayModel) -> Self {
        Stay {
            id: Snowflake::new(model.id),
            guest: GuestDetails {
                name: model.guest_name,
                id_number: model.guest_id_number,
                id_type: model.guest_id_type,
                nationality: model.guest_nationality,
                contact: model.guest_contact,
                company: model.guest_company,
                address: model.guest_address,
            },
            room_number: RoomNumber::new(model.room_number),
            check_in_date: model.check_in_date,
            check_in_time: model.check_in_time,
            check_out_date: model.check_out_date,
            check_out_time: model.check_out_time,
            department: model.department,
            purpose: model.purpose,
            mail_received: model.mail_received,
            lifecycle: Lifecycle::from(model.lifecycle),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert Stay entity reference to values for database insertion
pub struct StayInsert<'a> {
    pub id: i64,
    pub guest_name: &'a str,
    pub guest_id_number: &'a str,
    pub guest_id_type: &'a str,
    pub guest_nationality: Option<&'a str>,
    pub guest_contact: Option<&'a str>,
    pub guest_company: Option<&'a str>,
    pub guest_address: Option<&'a str>,
    pub room_number: i32,
    pub check_in_date: NaiveDate,
    pub check_in_time: NaiveTime,
    pub department: Option<&'a str>,
    pub purpose: Option<&'a str>,
    pub mail_received: bool,
}

impl<'a> StayInsert<'a> {
    pub fn new(stay: &'a Stay) -> Self {
        Self {
            id: stay.id.into_inner(),
            guest_name: &stay.guest.name,
            guest_id_number: &stay.guest.id_number,
            guest_id_type: &stay.guest.id_type,
            guest_nationality: stay.guest.nationality.as_deref(),
            guest_contact: stay.guest.contact.as_deref(),
            guest_company: stay.guest.company.as_deref(),
            guest_address: stay.guest.address.as_deref(),
            room_number: stay.room_number.into_inner(),
            check_in_date: stay.check_in_date,
            check_in_time: stay.check_in_time,
            department: stay.department.as_deref(),
            purpose: stay.purpose.as_deref(),
            mail_received: stay.mail_received,
        }
    }
}

/// Convert Stay entity reference to values for database update
///
/// Corrections may touch every recorded field, including the check-out pair.
pub struct StayUpdate<'a> {
    pub id: i64,
    pub guest_name: &'a str,
    pub guest_id_number: &'a str,
    pub guest_id_type: &'a str,
    pub guest_nationality: Option<&'a str>,
    pub guest_contact: Option<&'a str>,
    pub guest_company: Option<&'a str>,
    pub guest_address: Option<&'a str>,
    pub room_number: i32,
    pub check_in_date: NaiveDate,
    pub check_in_time: NaiveTime,
    pub check_out_date: Option<NaiveDate>,
    pub check_out_time: Option<NaiveTime>,
    pub department: Option<&'a str>,
    pub purpose: Option<&'a str>,
    pub mail_received: bool,
}

impl<'a> StayUpdate<'a> {
    pub fn new(stay: &'a Stay) -> Self {
        Self {
            id: stay.id.into_inner(),
            guest_name: &stay.guest.name,
            guest_id_number: &stay.guest.id_number,
            guest_id_type: &stay.guest.id_type,
            guest_nationality: stay.guest.nationality.as_deref(),
            guest_contact: stay.guest.contact.as_deref(),
            guest_company: stay.guest.company.as_deref(),
            guest_address: stay.guest.address.as_deref(),
            room_number: stay.room_number.into_inner(),
            check_in_date: stay.check_in_date,
            check_in_time: stay.check_in_time,
            check_out_date: stay.check_out_date,
            check_out_time: stay.check_out_time,
            department: stay.department.as_deref(),
            purpose: stay.purpose.as_deref(),
            mail_received: stay.mail_received,
        }
    }
}
