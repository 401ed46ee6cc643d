//! Payment handlers
//!
//! Monthly fee endpoints: listing with filters, manual creation, batch
//! generation, the paid/unpaid toggle, and the CSV download.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use park_service::{
    CreatePaymentRequest, ExportService, GeneratePaymentsRequest, GeneratePaymentsResponse,
    PaymentListQuery, PaymentResponse, PaymentService, PaymentWithResidentResponse,
};

use crate::extractors::{AuthStaff, RecordIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List payments joined with residents
///
/// GET /payments?status=unpaid&month=2026-04
pub async fn list_payments(
    State(state): State<AppState>,
    _auth: AuthStaff,
    Query(query): Query<PaymentListQuery>,
) -> ApiResult<Json<Vec<PaymentWithResidentResponse>>> {
    let service = PaymentService::new(state.service_context());
    let response = service.list(query).await?;
    Ok(Json(response))
}

/// Record a single payment manually
///
/// POST /payments
pub async fn create_payment(
    State(state): State<AppState>,
    _auth: AuthStaff,
    ValidatedJson(request): ValidatedJson<CreatePaymentRequest>,
) -> ApiResult<Created<Json<PaymentResponse>>> {
    let service = PaymentService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Batch-generate unpaid payments for a month
///
/// POST /payments/generate
pub async fn generate_payments(
    State(state): State<AppState>,
    _auth: AuthStaff,
    ValidatedJson(request): ValidatedJson<GeneratePaymentsRequest>,
) -> ApiResult<Json<GeneratePaymentsResponse>> {
    let service = PaymentService::new(state.service_context());
    let response = service.generate(request).await?;
    Ok(Json(response))
}

/// Mark a payment as paid
///
/// POST /payments/:id/paid
pub async fn mark_paid(
    State(state): State<AppState>,
    _auth: AuthStaff,
    RecordIdPath(id): RecordIdPath,
) -> ApiResult<Json<PaymentResponse>> {
    let service = PaymentService::new(state.service_context());
    let response = service.mark_paid(id).await?;
    Ok(Json(response))
}

/// Revert a payment to unpaid
///
/// POST /payments/:id/unpaid
pub async fn mark_unpaid(
    State(state): State<AppState>,
    _auth: AuthStaff,
    RecordIdPath(id): RecordIdPath,
) -> ApiResult<Json<PaymentResponse>> {
    let service = PaymentService::new(state.service_context());
    let response = service.mark_unpaid(id).await?;
    Ok(Json(response))
}

/// Download the payment list as CSV
///
/// GET /payments/export?status=unpaid&month=2026-04
pub async fn export_payments(
    State(state): State<AppState>,
    _auth: AuthStaff,
    Query(query): Query<PaymentListQuery>,
) -> ApiResult<Response> {
    let service = ExportService::new(state.service_context());
    let export = service.payments_csv(query).await?;

    let headers = [
        (
            header::CONTENT_TYPE,
            "text/csv; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            content_disposition(&export.filename),
        ),
    ];

    Ok((headers, export.content).into_response())
}

/// Build a Content-Disposition value carrying a non-ASCII filename
///
/// The RFC 5987 `filename*` form carries the real name; the plain
/// `filename` is an ASCII fallback for old clients.
fn content_disposition(filename: &str) -> String {
    let mut encoded = String::with_capacity(filename.len() * 3);
    for b in filename.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'.' | b'-' | b'_' | b'~' => {
                encoded.push(*b as char);
            }
            _ => encoded.push_str(&format!("%{b:02X}")),
        }
    }
    format!("attachment; filename=\"payments.csv\"; filename*=UTF-8''{encoded}")
}
