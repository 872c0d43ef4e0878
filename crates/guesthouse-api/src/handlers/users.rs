//! User handlers
//!
//! Endpoints for profile management and staff administration.

use axum::{
    extract::{Path, State},
    Json,
};
use guesthouse_service::{
    ChangePasswordRequest, CreateUserRequest, CurrentUserResponse, UpdateUserRequest, UserResponse,
    UserService,
};

use crate::extractors::{AuthUser, UserIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Get current user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_current_user(auth.user_id).await?;
    Ok(Json(response))
}

/// Update current user
///
/// PATCH /users/@me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_user(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Change current user's password
///
/// PUT /users/@me/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.change_password(auth.user_id, request).await?;
    Ok(NoContent)
}

/// List all staff accounts (admin only)
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let acting_user = service.get_user_entity(auth.user_id).await?;
    let response = service.list_users(&acting_user).await?;
    Ok(Json(response))
}

/// Create an account with an explicit role (admin only)
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let acting_user = service.get_user_entity(auth.user_id).await?;
    let response = service.create_user(&acting_user, request).await?;
    Ok(Created(Json(response)))
}

/// Get a staff account by ID (admin only)
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = path.user_id()?;

    let service = UserService::new(state.service_context());
    let acting_user = service.get_user_entity(auth.user_id).await?;
    let response = service.get_user(&acting_user, user_id).await?;
    Ok(Json(response))
}

/// Deactivate a staff account (admin only)
///
/// DELETE /users/{user_id}
pub async fn deactivate_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<NoContent> {
    let user_id = path.user_id()?;

    let service = UserService::new(state.service_context());
    let acting_user = service.get_user_entity(auth.user_id).await?;
    service.deactivate_user(&acting_user, user_id).await?;
    Ok(NoContent)
}
