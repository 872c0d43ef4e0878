//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! guesthouse-core. Each repository handles database operations for a
//! specific domain entity.

mod error;
mod location;
mod room;
mod stay;
mod user;

pub use location::PgLocationRepository;
pub use room::PgRoomRepository;
pub use stay::PgStayRepository;
pub use user::PgUserRepository;
