//! Occupancy resolver - derives room availability from the stay ledger
//!
//! Answers "is room R available right now?" and "which rooms are available
//! right now?" without trusting the denormalized [`Availability`] flag stored
//! on each room. Callers fetch the full room and stay collections first and
//! feed them in; everything here is a pure, synchronous function of its
//! input - no I/O, no side effects, recomputed per request rather than
//! cached.
//!
//! Empty collections are valid snapshots (a room with no stay history is
//! available by default). The stay-to-room link is a soft reference by room
//! number; a stay whose number matches no room is silently ignored - it
//! neither blocks nor frees any real room.

use std::collections::HashSet;

use crate::entities::{Availability, Room, Stay};
use crate::value_objects::RoomNumber;

/// Compute the distinct set of currently-occupied room numbers
///
/// A stay occupies its room while both halves of the check-out pair are
/// absent. Idempotent: the same snapshot always yields the same set.
pub fn occupied_room_numbers<'a, I>(stays: I) -> HashSet<RoomNumber>
where
    I: IntoIterator<Item = &'a Stay>,
{
    stays
        .into_iter()
        .filter(|stay| !stay.is_checked_out())
        .map(|stay| stay.room_number)
        .collect()
}

/// Filter rooms down to those not referenced by any current stay
///
/// Rooms keep their relative order. Occupied numbers that match no room in
/// the input drop out naturally; they cannot block a real room.
pub fn available_rooms(rooms: Vec<Room>, occupied: &HashSet<RoomNumber>) -> Vec<Room> {
    rooms
        .into_iter()
        .filter(|room| !occupied.contains(&room.number))
        .collect()
}

/// Derive the availability flag for a single room number
pub fn room_status(number: RoomNumber, occupied: &HashSet<RoomNumber>) -> Availability {
    if occupied.contains(&number) {
        Availability::Booked
    } else {
        Availability::Available
    }
}
