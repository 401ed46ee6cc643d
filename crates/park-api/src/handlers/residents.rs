//! Resident handlers
//!
//! CRUD endpoints for building residents. Deletion is guarded: a
//! resident still holding a slot cannot be removed.

use axum::{extract::State, Json};
use park_service::{
    CreateResidentRequest, ResidentResponse, ResidentService, ResidentWithSlotsResponse,
    UpdateResidentRequest,
};

use crate::extractors::{AuthStaff, RecordIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all residents with the slots they hold
///
/// GET /residents
pub async fn list_residents(
    State(state): State<AppState>,
    _auth: AuthStaff,
) -> ApiResult<Json<Vec<ResidentWithSlotsResponse>>> {
    let service = ResidentService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// Get a resident by id
///
/// GET /residents/:id
pub async fn get_resident(
    State(state): State<AppState>,
    _auth: AuthStaff,
    RecordIdPath(id): RecordIdPath,
) -> ApiResult<Json<ResidentWithSlotsResponse>> {
    let service = ResidentService::new(state.service_context());
    let response = service.get(id).await?;
    Ok(Json(response))
}

/// Register a new resident
///
/// POST /residents
pub async fn create_resident(
    State(state): State<AppState>,
    _auth: AuthStaff,
    ValidatedJson(request): ValidatedJson<CreateResidentRequest>,
) -> ApiResult<Created<Json<ResidentResponse>>> {
    let service = ResidentService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Update a resident (partial)
///
/// PATCH /residents/:id
pub async fn update_resident(
    State(state): State<AppState>,
    _auth: AuthStaff,
    RecordIdPath(id): RecordIdPath,
    ValidatedJson(request): ValidatedJson<UpdateResidentRequest>,
) -> ApiResult<Json<ResidentResponse>> {
    let service = ResidentService::new(state.service_context());
    let response = service.update(id, request).await?;
    Ok(Json(response))
}

/// Delete a resident
///
/// DELETE /residents/:id
///
/// Returns 409 RESIDENT_HOLDS_SLOTS while the resident still holds a
/// slot.
pub async fn delete_resident(
    State(state): State<AppState>,
    _auth: AuthStaff,
    RecordIdPath(id): RecordIdPath,
) -> ApiResult<NoContent> {
    let service = ResidentService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}
