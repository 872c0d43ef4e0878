//! Stay handlers
//!
//! Endpoints for the check-in/check-out ledger.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use guesthouse_service::{
    CheckInRequest, CheckOutRequest, StayListQuery, StayResponse, StayService, UpdateStayRequest,
};

use crate::extractors::{AuthUser, StayIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Check a guest in
///
/// POST /stays
pub async fn check_in(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CheckInRequest>,
) -> ApiResult<Created<Json<StayResponse>>> {
    let service = StayService::new(state.service_context());
    let response = service.check_in(request).await?;
    Ok(Created(Json(response)))
}

/// List stays, optionally filtered to current ones or a single room
///
/// GET /stays?current=true&room=101
pub async fn list_stays(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<StayListQuery>,
) -> ApiResult<Json<Vec<StayResponse>>> {
    let service = StayService::new(state.service_context());
    let response = service.list_stays(query).await?;
    Ok(Json(response))
}

/// Get stay by ID
///
/// GET /stays/{stay_id}
pub async fn get_stay(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<StayIdPath>,
) -> ApiResult<Json<StayResponse>> {
    let stay_id = path.stay_id()?;

    let service = StayService::new(state.service_context());
    let response = service.get_stay(stay_id).await?;
    Ok(Json(response))
}

/// Check a guest out
///
/// POST /stays/{stay_id}/checkout
pub async fn check_out(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<StayIdPath>,
    ValidatedJson(request): ValidatedJson<CheckOutRequest>,
) -> ApiResult<Json<StayResponse>> {
    let stay_id = path.stay_id()?;

    let service = StayService::new(state.service_context());
    let response = service.check_out(stay_id, request).await?;
    Ok(Json(response))
}

/// Correct the recorded details of a stay
///
/// PATCH /stays/{stay_id}
pub async fn update_stay(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<StayIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateStayRequest>,
) -> ApiResult<Json<StayResponse>> {
    let stay_id = path.stay_id()?;

    let service = StayService::new(state.service_context());
    let response = service.update_stay(stay_id, request).await?;
    Ok(Json(response))
}

/// Soft-delete a stay record
///
/// DELETE /stays/{stay_id}
pub async fn delete_stay(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<StayIdPath>,
) -> ApiResult<NoContent> {
    let stay_id = path.stay_id()?;

    let service = StayService::new(state.service_context());
    service.delete_stay(stay_id).await?;
    Ok(NoContent)
}
