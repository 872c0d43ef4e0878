//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod availability;
pub mod context;
pub mod error;
pub mod location;
pub mod room;
pub mod stay;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use availability::AvailabilityService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use location::LocationService;
pub use room::RoomService;
pub use stay::StayService;
pub use user::UserService;
