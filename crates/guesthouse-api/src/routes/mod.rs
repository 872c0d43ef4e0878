//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{auth, health, locations, rooms, stays, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health probes,
/// which are mounted separately so they bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(location_routes())
        .merge(room_routes())
        .merge(stay_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me", patch(users::update_current_user))
        .route("/users/@me/password", put(users::change_password))
        .route("/users", get(users::list_users))
        .route("/users", post(users::create_user))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id", delete(users::deactivate_user))
}

/// Location routes
fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/locations", get(locations::list_locations))
        .route("/locations", post(locations::create_location))
        .route("/locations/:location_id", get(locations::get_location))
        .route("/locations/:location_id", patch(locations::update_location))
        .route("/locations/:location_id", delete(locations::delete_location))
        .route("/locations/:location_id/rooms", get(rooms::list_rooms_in_location))
        .route("/locations/:location_id/rooms", post(rooms::create_room))
}

/// Room routes
fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(rooms::list_rooms))
        .route("/rooms/available", get(rooms::available_rooms))
        .route("/rooms/reconcile", post(rooms::reconcile))
        .route("/rooms/:room_id", get(rooms::get_room))
        .route("/rooms/:room_id", patch(rooms::update_room))
        .route("/rooms/:room_id", delete(rooms::delete_room))
        .route("/rooms/:room_id/status", get(rooms::room_status))
}

/// Stay routes
fn stay_routes() -> Router<AppState> {
    Router::new()
        .route("/stays", post(stays::check_in))
        .route("/stays", get(stays::list_stays))
        .route("/stays/:stay_id", get(stays::get_stay))
        .route("/stays/:stay_id", patch(stays::update_stay))
        .route("/stays/:stay_id", delete(stays::delete_stay))
        .route("/stays/:stay_id/checkout", post(stays::check_out))
}
