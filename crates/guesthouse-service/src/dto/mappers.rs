//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use guesthouse_core::entities::{Availability, Location, Room, Stay, User, UserRole};

use super::responses::{
    CurrentUserResponse, LocationResponse, RoomResponse, StayResponse, UserResponse,
};

fn role_label(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "admin",
        UserRole::Staff => "staff",
    }
}

fn availability_label(availability: Availability) -> &'static str {
    match availability {
        Availability::Available => "available",
        Availability::Booked => "booked",
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            display_name: user.display_name.clone(),
            role: role_label(user.role).to_string(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            display_name: user.display_name.clone(),
            role: role_label(user.role).to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Location Mappers
// ============================================================================

impl From<&Location> for LocationResponse {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id.to_string(),
            name: location.name.clone(),
            code: location.code.clone(),
            created_at: location.created_at,
            updated_at: location.updated_at,
        }
    }
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self::from(&location)
    }
}

// ============================================================================
// Room Mappers
// ============================================================================

impl From<&Room> for RoomResponse {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.to_string(),
            room_number: room.number.into_inner(),
            location_id: room.location_id.to_string(),
            remark: room.remark.clone(),
            availability: availability_label(room.availability).to_string(),
            created_at: room.created_at,
            updated_at: room.updated_at,
        }
    }
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self::from(&room)
    }
}

// ============================================================================
// Stay Mappers
// ============================================================================

impl From<&Stay> for StayResponse {
    fn from(stay: &Stay) -> Self {
        Self {
            id: stay.id.to_string(),
            guest_name: stay.guest.name.clone(),
            guest_id_number: stay.guest.id_number.clone(),
            guest_id_type: stay.guest.id_type.clone(),
            guest_nationality: stay.guest.nationality.clone(),
            guest_contact: stay.guest.contact.clone(),
            guest_company: stay.guest.company.clone(),
            guest_address: stay.guest.address.clone(),
            room_number: stay.room_number.into_inner(),
            check_in_date: stay.check_in_date,
            check_in_time: stay.check_in_time,
            check_out_date: stay.check_out_date,
            check_out_time: stay.check_out_time,
            department: stay.department.clone(),
            purpose: stay.purpose.clone(),
            mail_received: stay.mail_received,
            status: stay.status().label().to_string(),
            duration_hours: stay.duration().map(|d| d.num_hours()),
            created_at: stay.created_at,
            updated_at: stay.updated_at,
        }
    }
}

impl From<Stay> for StayResponse {
    fn from(stay: Stay) -> Self {
        Self::from(&stay)
    }
}
