//! Database models - SQLx-compatible structs for PostgreSQL tables

mod location;
mod room;
mod stay;
mod user;

pub use location::LocationModel;
pub use room::RoomModel;
pub use stay::StayModel;
pub use user::UserModel;
