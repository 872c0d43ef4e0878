//! Entity to model mappers
//!
//! This module provides conversions between domain entities (guesthouse-core)
//! and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert`/`*Update` structs: Prepare entity data for database operations

mod location;
mod room;
mod stay;
mod user;

pub use location::{LocationInsert, LocationUpdate};
pub use room::{RoomInsert, RoomUpdate};
pub use stay::{StayInsert, StayUpdate};
pub use user::{UserInsert, UserUpdate};
