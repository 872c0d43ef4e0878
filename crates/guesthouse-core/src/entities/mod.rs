//! Domain entities - core business objects

mod location;
mod room;
mod stay;
mod user;

pub use location::Location;
pub use room::{Availability, Room};
pub use stay::{GuestDetails, Stay, StayStatus};
pub use user::{User, UserRole};
