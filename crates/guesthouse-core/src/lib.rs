//! # guesthouse-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! occupancy resolver. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod occupancy;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Availability, GuestDetails, Location, Room, Stay, StayStatus, User, UserRole};
pub use error::DomainError;
pub use occupancy::{available_rooms, occupied_room_numbers, room_status};
pub use traits::{
    LocationRepository, RepoResult, RoomRepository, StayFilter, StayRepository, UserRepository,
};
pub use value_objects::{
    Lifecycle, RoomNumber, RoomNumberParseError, Snowflake, SnowflakeGenerator,
    SnowflakeParseError,
};
