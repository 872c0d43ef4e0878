//! Repository traits (ports) for the persistence layer

mod repositories;

pub use repositories::{
    LocationRepository, RepoResult, RoomRepository, StayFilter, StayRepository, UserRepository,
};
