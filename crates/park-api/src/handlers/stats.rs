//! Dashboard statistics handler

use axum::{extract::State, Json};
use park_service::{DashboardResponse, StatsService};

use crate::extractors::AuthStaff;
use crate::response::ApiResult;
use crate::state::AppState;

/// Dashboard figures: slot occupancy, residents, violations, payments
///
/// GET /stats/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    _auth: AuthStaff,
) -> ApiResult<Json<DashboardResponse>> {
    let service = StatsService::new(state.service_context());
    let response = service.dashboard().await?;
    Ok(Json(response))
}
