//! Room handlers
//!
//! Endpoints for room management and occupancy lookups.

use axum::{
    extract::{Path, State},
    Json,
};
use guesthouse_core::RoomNumber;
use guesthouse_service::{
    AvailabilityResponse, AvailabilityService, CreateRoomRequest, ReconcileResponse, RoomResponse,
    RoomService, RoomStatusResponse, UpdateRoomRequest, UserService,
};

use crate::extractors::{AuthUser, LocationIdPath, RoomIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all active rooms
///
/// GET /rooms
pub async fn list_rooms(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<RoomResponse>>> {
    let service = RoomService::new(state.service_context());
    let response = service.list_rooms().await?;
    Ok(Json(response))
}

/// List rooms in a location
///
/// GET /locations/{location_id}/rooms
pub async fn list_rooms_in_location(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<LocationIdPath>,
) -> ApiResult<Json<Vec<RoomResponse>>> {
    let location_id = path.location_id()?;

    let service = RoomService::new(state.service_context());
    let response = service.list_rooms_in_location(location_id).await?;
    Ok(Json(response))
}

/// Get room by ID
///
/// GET /rooms/{room_id}
pub async fn get_room(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<RoomIdPath>,
) -> ApiResult<Json<RoomResponse>> {
    let room_id = path.room_id()?;

    let service = RoomService::new(state.service_context());
    let response = service.get_room(room_id).await?;
    Ok(Json(response))
}

/// Create a room in a location (admin only)
///
/// POST /locations/{location_id}/rooms
pub async fn create_room(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<LocationIdPath>,
    ValidatedJson(request): ValidatedJson<CreateRoomRequest>,
) -> ApiResult<Created<Json<RoomResponse>>> {
    let location_id = path.location_id()?;

    let acting_user = UserService::new(state.service_context())
        .get_user_entity(auth.user_id)
        .await?;

    let service = RoomService::new(state.service_context());
    let response = service
        .create_room(&acting_user, location_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Update a room (admin only)
///
/// PATCH /rooms/{room_id}
pub async fn update_room(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<RoomIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateRoomRequest>,
) -> ApiResult<Json<RoomResponse>> {
    let room_id = path.room_id()?;

    let acting_user = UserService::new(state.service_context())
        .get_user_entity(auth.user_id)
        .await?;

    let service = RoomService::new(state.service_context());
    let response = service.update_room(&acting_user, room_id, request).await?;
    Ok(Json(response))
}

/// Soft-delete a room (admin only)
///
/// DELETE /rooms/{room_id}
pub async fn delete_room(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<RoomIdPath>,
) -> ApiResult<NoContent> {
    let room_id = path.room_id()?;

    let acting_user = UserService::new(state.service_context())
        .get_user_entity(auth.user_id)
        .await?;

    let service = RoomService::new(state.service_context());
    service.delete_room(&acting_user, room_id).await?;
    Ok(NoContent)
}

/// List rooms the resolver considers free right now
///
/// GET /rooms/available
pub async fn available_rooms(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<AvailabilityResponse>> {
    let service = AvailabilityService::new(state.service_context());
    let response = service.available_rooms().await?;
    Ok(Json(response))
}

/// Resolve the live status of a single room
///
/// GET /rooms/{room_id}/status
pub async fn room_status(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<RoomIdPath>,
) -> ApiResult<Json<RoomStatusResponse>> {
    let room_id = path.room_id()?;

    // Resolve the room first so an unknown ID is a 404, then ask the
    // resolver about its number.
    let room = RoomService::new(state.service_context())
        .get_room(room_id)
        .await?;

    let service = AvailabilityService::new(state.service_context());
    let response = service
        .room_status(RoomNumber::new(room.room_number))
        .await?;
    Ok(Json(response))
}

/// Repair drifted availability flags (admin only)
///
/// POST /rooms/reconcile
pub async fn reconcile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ReconcileResponse>> {
    let acting_user = UserService::new(state.service_context())
        .get_user_entity(auth.user_id)
        .await?;

    let service = AvailabilityService::new(state.service_context());
    let response = service.reconcile(&acting_user).await?;
    Ok(Json(response))
}
