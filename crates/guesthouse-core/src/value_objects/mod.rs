//! Value objects - identifiers and domain tags

mod lifecycle;
mod room_number;
mod snowflake;

pub use lifecycle::Lifecycle;
pub use room_number::{RoomNumber, RoomNumberParseError};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
