//! Location handlers
//!
//! Endpoints for managing guest house locations.

use axum::{
    extract::{Path, State},
    Json,
};
use guesthouse_service::{
    CreateLocationRequest, LocationResponse, LocationService, UpdateLocationRequest, UserService,
};

use crate::extractors::{AuthUser, LocationIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all active locations
///
/// GET /locations
pub async fn list_locations(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<LocationResponse>>> {
    let service = LocationService::new(state.service_context());
    let response = service.list_locations().await?;
    Ok(Json(response))
}

/// Get location by ID
///
/// GET /locations/{location_id}
pub async fn get_location(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<LocationIdPath>,
) -> ApiResult<Json<LocationResponse>> {
    let location_id = path.location_id()?;

    let service = LocationService::new(state.service_context());
    let response = service.get_location(location_id).await?;
    Ok(Json(response))
}

/// Create a new location (admin only)
///
/// POST /locations
pub async fn create_location(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateLocationRequest>,
) -> ApiResult<Created<Json<LocationResponse>>> {
    let acting_user = UserService::new(state.service_context())
        .get_user_entity(auth.user_id)
        .await?;

    let service = LocationService::new(state.service_context());
    let response = service.create_location(&acting_user, request).await?;
    Ok(Created(Json(response)))
}

/// Update a location (admin only)
///
/// PATCH /locations/{location_id}
pub async fn update_location(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<LocationIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateLocationRequest>,
) -> ApiResult<Json<LocationResponse>> {
    let location_id = path.location_id()?;

    let acting_user = UserService::new(state.service_context())
        .get_user_entity(auth.user_id)
        .await?;

    let service = LocationService::new(state.service_context());
    let response = service
        .update_location(&acting_user, location_id, request)
        .await?;
    Ok(Json(response))
}

/// Soft-delete a location (admin only)
///
/// DELETE /locations/{location_id}
pub async fn delete_location(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<LocationIdPath>,
) -> ApiResult<NoContent> {
    let location_id = path.location_id()?;

    let acting_user = UserService::new(state.service_context())
        .get_user_entity(auth.user_id)
        .await?;

    let service = LocationService::new(state.service_context());
    service.delete_location(&acting_user, location_id).await?;
    Ok(NoContent)
}
