//! Bicycle slot handlers
//!
//! Slot CRUD plus the assignment and release workflows. Occupancy only
//! changes through assign/release; the status PATCH toggles
//! available/maintenance.

use axum::{extract::State, Json};
use park_service::{
    AssignSlotRequest, AssignmentResponse, AssignmentService, CreateSlotRequest, SlotResponse,
    SlotService, SlotWithResidentResponse, StickerResponse, UpdateSlotRequest,
};

use crate::extractors::{AuthStaff, RecordIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all slots with their assigned residents
///
/// GET /slots
pub async fn list_slots(
    State(state): State<AppState>,
    _auth: AuthStaff,
) -> ApiResult<Json<Vec<SlotWithResidentResponse>>> {
    let service = SlotService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// List slots currently open for assignment
///
/// GET /slots/available
pub async fn list_available_slots(
    State(state): State<AppState>,
    _auth: AuthStaff,
) -> ApiResult<Json<Vec<SlotResponse>>> {
    let service = SlotService::new(state.service_context());
    let response = service.list_available().await?;
    Ok(Json(response))
}

/// Get a slot by id
///
/// GET /slots/:id
pub async fn get_slot(
    State(state): State<AppState>,
    _auth: AuthStaff,
    RecordIdPath(id): RecordIdPath,
) -> ApiResult<Json<SlotResponse>> {
    let service = SlotService::new(state.service_context());
    let response = service.get(id).await?;
    Ok(Json(response))
}

/// Register a new slot
///
/// POST /slots
pub async fn create_slot(
    State(state): State<AppState>,
    _auth: AuthStaff,
    ValidatedJson(request): ValidatedJson<CreateSlotRequest>,
) -> ApiResult<Created<Json<SlotResponse>>> {
    let service = SlotService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Update a slot (partial, including the maintenance toggle)
///
/// PATCH /slots/:id
pub async fn update_slot(
    State(state): State<AppState>,
    _auth: AuthStaff,
    RecordIdPath(id): RecordIdPath,
    ValidatedJson(request): ValidatedJson<UpdateSlotRequest>,
) -> ApiResult<Json<SlotResponse>> {
    let service = SlotService::new(state.service_context());
    let response = service.update(id, request).await?;
    Ok(Json(response))
}

/// Delete a slot
///
/// DELETE /slots/:id
pub async fn delete_slot(
    State(state): State<AppState>,
    _auth: AuthStaff,
    RecordIdPath(id): RecordIdPath,
) -> ApiResult<NoContent> {
    let service = SlotService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}

/// Assign a slot to a resident and issue a sticker
///
/// POST /slots/:id/assign
///
/// Takes either an existing `resident_id` or a `new_resident` payload;
/// the resident, slot occupation, and sticker issuance commit in one
/// transaction.
pub async fn assign_slot(
    State(state): State<AppState>,
    _auth: AuthStaff,
    RecordIdPath(id): RecordIdPath,
    ValidatedJson(request): ValidatedJson<AssignSlotRequest>,
) -> ApiResult<Created<Json<AssignmentResponse>>> {
    let service = AssignmentService::new(state.service_context());
    let response = service.assign(id, request).await?;
    Ok(Created(Json(response)))
}

/// Release a slot back to available
///
/// POST /slots/:id/release
pub async fn release_slot(
    State(state): State<AppState>,
    _auth: AuthStaff,
    RecordIdPath(id): RecordIdPath,
) -> ApiResult<Json<SlotResponse>> {
    let service = AssignmentService::new(state.service_context());
    let response = service.release(id).await?;
    Ok(Json(response))
}

/// Sticker history for a slot
///
/// GET /slots/:id/stickers
pub async fn get_slot_stickers(
    State(state): State<AppState>,
    _auth: AuthStaff,
    RecordIdPath(id): RecordIdPath,
) -> ApiResult<Json<Vec<StickerResponse>>> {
    let service = SlotService::new(state.service_context());
    let response = service.stickers(id).await?;
    Ok(Json(response))
}
