//! Violation log handlers
//!
//! Unauthorized parking records with optional photo evidence. Photos
//! are uploaded first, then referenced by URL on create or update.

use axum::{
    extract::{Multipart, State},
    Json,
};
use park_service::{
    CreateViolationRequest, PhotoUploadResponse, UpdateViolationRequest, ViolationResponse,
    ViolationService,
};

use crate::extractors::{AuthStaff, RecordIdPath, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List violation logs, newest first
///
/// GET /violations
pub async fn list_violations(
    State(state): State<AppState>,
    _auth: AuthStaff,
) -> ApiResult<Json<Vec<ViolationResponse>>> {
    let service = ViolationService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// Get a violation log by id
///
/// GET /violations/:id
pub async fn get_violation(
    State(state): State<AppState>,
    _auth: AuthStaff,
    RecordIdPath(id): RecordIdPath,
) -> ApiResult<Json<ViolationResponse>> {
    let service = ViolationService::new(state.service_context());
    let response = service.get(id).await?;
    Ok(Json(response))
}

/// Record a new violation
///
/// POST /violations
pub async fn create_violation(
    State(state): State<AppState>,
    _auth: AuthStaff,
    ValidatedJson(request): ValidatedJson<CreateViolationRequest>,
) -> ApiResult<Created<Json<ViolationResponse>>> {
    let service = ViolationService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Update a violation log (partial)
///
/// PATCH /violations/:id
pub async fn update_violation(
    State(state): State<AppState>,
    _auth: AuthStaff,
    RecordIdPath(id): RecordIdPath,
    ValidatedJson(request): ValidatedJson<UpdateViolationRequest>,
) -> ApiResult<Json<ViolationResponse>> {
    let service = ViolationService::new(state.service_context());
    let response = service.update(id, request).await?;
    Ok(Json(response))
}

/// Delete a violation log
///
/// DELETE /violations/:id
pub async fn delete_violation(
    State(state): State<AppState>,
    _auth: AuthStaff,
    RecordIdPath(id): RecordIdPath,
) -> ApiResult<NoContent> {
    let service = ViolationService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}

/// Upload a violation photo
///
/// POST /violations/photo
///
/// Multipart form with a single `photo` (or `file`) field. The stored
/// file gets a fresh UUID name and the response carries its public URL.
pub async fn upload_photo(
    State(state): State<AppState>,
    _auth: AuthStaff,
    mut multipart: Multipart,
) -> ApiResult<Created<Json<PhotoUploadResponse>>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_query(e.to_string()))?
    {
        if !matches!(field.name(), Some("photo") | Some("file")) {
            continue;
        }

        let filename = field.file_name().unwrap_or("photo").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        let service = ViolationService::new(state.service_context());
        let response = service.upload_photo(&filename, &bytes).await?;
        return Ok(Created(Json(response)));
    }

    Err(ApiError::invalid_query("multipart field 'photo' is required"))
}
