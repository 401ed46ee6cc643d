//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use park_core::entities::{PaymentStatus, ResidentStatus, SlotStatus};
use park_core::value_objects::{RecordId, YearMonth};

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

// ============================================================================
// Resident Responses
// ============================================================================

/// Resident response
#[derive(Debug, Serialize)]
pub struct ResidentResponse {
    pub id: RecordId,
    pub name: String,
    pub room_number: String,
    pub contact_info: String,
    pub status: ResidentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Resident with the slots they hold
#[derive(Debug, Serialize)]
pub struct ResidentWithSlotsResponse {
    pub id: RecordId,
    pub name: String,
    pub room_number: String,
    pub contact_info: String,
    pub status: ResidentStatus,
    pub slots: Vec<SlotResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Slot Responses
// ============================================================================

/// Bicycle slot response
#[derive(Debug, Serialize)]
pub struct SlotResponse {
    pub id: RecordId,
    pub slot_code: String,
    pub location: String,
    pub status: SlotStatus,
    pub resident_id: Option<RecordId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Slot with its assigned resident, for list views
#[derive(Debug, Serialize)]
pub struct SlotWithResidentResponse {
    pub id: RecordId,
    pub slot_code: String,
    pub location: String,
    pub status: SlotStatus,
    pub resident: Option<ResidentResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sticker response
#[derive(Debug, Serialize)]
pub struct StickerResponse {
    pub id: RecordId,
    pub slot_id: RecordId,
    pub sticker_number: String,
    pub issued_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Result of the assignment workflow
#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub resident: ResidentResponse,
    pub slot: SlotResponse,
    pub sticker: StickerResponse,
}

// ============================================================================
// Payment Responses
// ============================================================================

/// Payment response
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub id: RecordId,
    pub resident_id: RecordId,
    pub month: YearMonth,
    pub amount: i64,
    pub status: PaymentStatus,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payment joined with its resident, for list views
#[derive(Debug, Serialize)]
pub struct PaymentWithResidentResponse {
    pub id: RecordId,
    pub resident_id: RecordId,
    pub resident_name: String,
    pub room_number: String,
    pub month: YearMonth,
    pub amount: i64,
    pub status: PaymentStatus,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of batch payment generation
#[derive(Debug, Serialize)]
pub struct GeneratePaymentsResponse {
    pub month: YearMonth,
    pub amount: i64,
    pub created_count: i64,
}

// ============================================================================
// Violation Responses
// ============================================================================

/// Violation log response
#[derive(Debug, Serialize)]
pub struct ViolationResponse {
    pub id: RecordId,
    pub location: String,
    pub memo: Option<String>,
    pub photo_url: Option<String>,
    pub reported_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of a photo upload
#[derive(Debug, Serialize)]
pub struct PhotoUploadResponse {
    pub photo_url: String,
}

// ============================================================================
// Statistics Responses
// ============================================================================

/// Dashboard statistics
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub slots: SlotStats,
    pub residents: ResidentStats,
    pub violations: ViolationStats,
    pub payments: PaymentStats,
}

/// Slot occupancy counts; maintenance is the residual
#[derive(Debug, Serialize)]
pub struct SlotStats {
    pub total: i64,
    pub available: i64,
    pub occupied: i64,
    pub maintenance: i64,
}

/// Resident counts; inactive is the residual
#[derive(Debug, Serialize)]
pub struct ResidentStats {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
}

/// Violation counts
#[derive(Debug, Serialize)]
pub struct ViolationStats {
    pub total: i64,
    pub last_30_days: i64,
}

/// Payment counts
#[derive(Debug, Serialize)]
pub struct PaymentStats {
    pub total: i64,
    pub unpaid: i64,
    pub current_month: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "not_ready" },
            database,
        }
    }
}

// ============================================================================
// Export Responses
// ============================================================================

/// A rendered CSV document ready to be served as a file download
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}
