//! Room entity <-> model mapper

use guesthouse_core::entities::{Availability, Room};
use guesthouse_core::value_objects::{Lifecycle, RoomNumber, Snowflake};

use crate::models::RoomModel;

/// Convert RoomModel to Room entity
impl From<RoomModel> for Room {
    fn from(model: RoomModel) -> Self {
        Room {
            id: Snowflake::new(model.id),
            number: RoomNumber::new(model.room_number),
            location_id: Snowflake::new(model.location_id),
            remark: model.remark,
            availability: Availability::from(model.availability),
            lifecycle: Lifecycle::from(model.lifecycle),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert Room entity reference to values for database insertion
pub struct RoomInsert<'a> {
    pub id: i64,
    pub room_number: i32,
    pub location_id: i64,
    pub remark: Option<&'a str>,
    pub availability: i16,
}

impl<'a> RoomInsert<'a> {
    pub fn new(room: &'a Room) -> Self {
        Self {
            id: room.id.into_inner(),
            room_number: room.number.into_inner(),
            location_id: room.location_id.into_inner(),
            remark: room.remark.as_deref(),
            availability: room.availability.as_i16(),
        }
    }
}

/// Convert Room entity reference to values for database update
pub struct RoomUpdate<'a> {
    pub id: i64,
    pub remark: Option<&'a str>,
    pub availability: i16,
}

impl<'a> RoomUpdate<'a> {
    pub fn new(room: &'a Room) -> Self {
        Self {
            id: room.id.into_inner(),
            remark: room.remark.as_deref(),
            availability: room.availability.as_i16(),
        }
    }
}
