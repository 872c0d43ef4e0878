//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod health;
pub mod locations;
pub mod rooms;
pub mod stays;
pub mod users;
